use thiserror::Error;

/// Failures surfaced by [`Client::search`](crate::Client::search).
#[derive(Debug, Error)]
pub enum ApiError {
	/// The server answered with a non-success status code.
	#[error("search request to {url} returned status {status}")]
	Status { status: u16, url: String },

	/// The request never completed at the transport layer.
	#[error("network error: {0}")]
	Transport(#[from] ureq::Error),

	/// The response arrived but its body did not match the expected shape.
	#[error("malformed search response: {0}")]
	Decode(#[from] serde_json::Error),
}

impl ApiError {
	/// Whether the failure happened in the HTTP/transport layer, as opposed
	/// to a payload that could not be decoded.
	#[must_use]
	pub fn is_network(&self) -> bool {
		matches!(self, Self::Status { .. } | Self::Transport(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_errors_count_as_network_failures() {
		let err = ApiError::Status {
			status: 503,
			url: "https://hn.algolia.com/api/v1/search".to_string(),
		};
		assert!(err.is_network());
		assert!(err.to_string().contains("503"));
	}

	#[test]
	fn decode_errors_are_not_network_failures() {
		let cause = serde_json::from_str::<u32>("not json").unwrap_err();
		let err = ApiError::from(cause);
		assert!(!err.is_network());
	}
}
