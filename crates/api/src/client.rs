use std::time::Duration;

use crate::error::ApiError;
use crate::types::{Endpoint, SearchRequest, SearchResult};

/// Production base address of the search API.
pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com/api/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking client for the search API.
///
/// A thin wrapper over a [`ureq::Agent`]: one network request per
/// [`search`](Client::search) call, no retries, no caching. The base address
/// is configurable so tests and mirrors can point elsewhere.
#[derive(Debug, Clone)]
pub struct Client {
	agent: ureq::Agent,
	base_url: String,
}

impl Client {
	/// Build a client against `base_url` with a global request timeout.
	#[must_use]
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
		let agent: ureq::Agent = ureq::Agent::config_builder()
			.timeout_global(Some(timeout))
			.build()
			.into();
		let base_url = base_url.into().trim_end_matches('/').to_string();
		Self { agent, base_url }
	}

	/// Address requests for `endpoint` resolve to, without the query string.
	#[must_use]
	pub fn url_for(&self, endpoint: Endpoint) -> String {
		format!("{}{}", self.base_url, endpoint.as_path())
	}

	/// Issue a single GET for `params` against `endpoint`.
	///
	/// Either the complete decoded [`SearchResult`] is returned or an error
	/// is raised; there is no partial or streaming state. `params.query` is
	/// not validated here — keeping empty queries out is the caller's job.
	pub fn search(
		&self,
		endpoint: Endpoint,
		params: &SearchRequest,
	) -> Result<SearchResult, ApiError> {
		let url = self.url_for(endpoint);
		let mut request = self.agent.get(&url);
		for (key, value) in params.query_pairs() {
			request = request.query(key, value.as_str());
		}

		match request.call() {
			Ok(response) => {
				let reader = response.into_body().into_reader();
				Ok(serde_json::from_reader(reader)?)
			}
			Err(ureq::Error::StatusCode(status)) => Err(ApiError::Status { status, url }),
			Err(err) => Err(ApiError::Transport(err)),
		}
	}
}

impl Default for Client {
	fn default() -> Self {
		Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
	}
}
