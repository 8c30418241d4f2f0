//! Session state and its shareable-link encoding.
//!
//! The original web client kept `{query, tags, page, numericFilters}` in the
//! address bar. The terminal rendition mirrors the same four parameters into
//! a share link shown in the footer and accepted back via `--link`, so a
//! session can be restored exactly where it was left.

use hnq_api::{STORY_TAGS, SearchRequest, SortFilter};

/// Mutable session state owned by the controller.
///
/// Initialized once at startup from CLI arguments or a restored link,
/// mutated only by the submit, sort, and pagination handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
	pub query: String,
	pub page: u32,
	pub sort: SortFilter,
}

impl Session {
	/// Build the parameter set for the next fetch from current state.
	#[must_use]
	pub fn to_request(&self) -> SearchRequest {
		SearchRequest::new(self.query.clone(), self.page, self.sort)
	}

	/// Encode state as the query string carried by a share link.
	#[must_use]
	pub fn query_string(&self) -> String {
		format!(
			"query={}&tags={}&page={}&numericFilters={}",
			encode_component(&self.query),
			STORY_TAGS,
			self.page,
			encode_component(self.sort.numeric_filter()),
		)
	}

	/// Full share link: base address, endpoint path, query string.
	///
	/// The endpoint path is derived from the sort filter, so the link can
	/// never disagree with the state it was built from.
	#[must_use]
	pub fn share_link(&self, base_url: &str) -> String {
		format!(
			"{}{}?{}",
			base_url.trim_end_matches('/'),
			self.sort.endpoint().as_path(),
			self.query_string(),
		)
	}

	/// Restore state from a share link or a bare query string.
	///
	/// Unknown keys and unparsable values fall back to defaults; `tags` is
	/// fixed and therefore ignored on the way in.
	#[must_use]
	pub fn from_link(link: &str) -> Self {
		let raw = link.rsplit_once('?').map_or(link, |(_, tail)| tail);

		let mut session = Self::default();
		for pair in raw.split('&') {
			let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
			let value = decode_component(value);
			match key {
				"query" => session.query = value,
				"page" => session.page = value.parse().unwrap_or(0),
				"numericFilters" => session.sort = SortFilter::from_wire(&value),
				_ => {}
			}
		}
		session
	}
}

/// Percent-encode a query-string component.
///
/// Unreserved characters pass through untouched; everything else, including
/// the `>` inside the numeric filter expressions, becomes `%XX`.
fn encode_component(value: &str) -> String {
	let mut encoded = String::with_capacity(value.len());
	for byte in value.bytes() {
		match byte {
			b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
				encoded.push(byte as char);
			}
			_ => {
				encoded.push_str(&format!("%{byte:02X}"));
			}
		}
	}
	encoded
}

/// Decode a percent-encoded component; `+` is accepted as a space.
fn decode_component(value: &str) -> String {
	let bytes = value.as_bytes();
	let mut decoded = Vec::with_capacity(bytes.len());
	let mut index = 0;
	while index < bytes.len() {
		match bytes[index] {
			b'%' if index + 2 < bytes.len()
				&& bytes[index + 1].is_ascii_hexdigit()
				&& bytes[index + 2].is_ascii_hexdigit() =>
			{
				let hex = &value[index + 1..index + 3];
				let byte = u8::from_str_radix(hex, 16).unwrap_or(b'%');
				decoded.push(byte);
				index += 3;
			}
			b'+' => {
				decoded.push(b' ');
				index += 1;
			}
			byte => {
				decoded.push(byte);
				index += 1;
			}
		}
	}
	String::from_utf8_lossy(&decoded).into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;
	use hnq_api::Endpoint;

	#[test]
	fn link_round_trip_restores_page_and_sort() {
		let restored =
			Session::from_link("query=rust&tags=story&page=2&numericFilters=created_at_i%3E0");

		assert_eq!(restored.query, "rust");
		assert_eq!(restored.page, 2);
		assert_eq!(restored.sort, SortFilter::CreatedAt);
		assert_eq!(restored.sort.endpoint(), Endpoint::SearchByDate);
	}

	#[test]
	fn full_links_are_accepted() {
		let restored = Session::from_link(
			"https://hn.algolia.com/api/v1/search?query=zig%20lang&tags=story&page=0&numericFilters=points%3E0",
		);

		assert_eq!(restored.query, "zig lang");
		assert_eq!(restored.page, 0);
		assert_eq!(restored.sort, SortFilter::Points);
	}

	#[test]
	fn share_link_derives_endpoint_from_sort() {
		let session = Session {
			query: "widgets".to_string(),
			page: 0,
			sort: SortFilter::Points,
		};
		assert_eq!(
			session.share_link("https://hn.algolia.com/api/v1"),
			"https://hn.algolia.com/api/v1/search?query=widgets&tags=story&page=0&numericFilters=points%3E0"
		);

		let dated = Session {
			sort: SortFilter::CreatedAt,
			..session
		};
		assert!(dated.share_link("https://hn.algolia.com/api/v1").contains("/search_by_date?"));
	}

	#[test]
	fn serialization_round_trips_through_parsing() {
		let session = Session {
			query: "c++ & rust".to_string(),
			page: 7,
			sort: SortFilter::CreatedAt,
		};
		assert_eq!(Session::from_link(&session.query_string()), session);
	}

	#[test]
	fn malformed_values_fall_back_to_defaults() {
		let restored = Session::from_link("query=ok&page=many&numericFilters=bogus");
		assert_eq!(restored.page, 0);
		assert_eq!(restored.sort, SortFilter::Points);
	}

	#[test]
	fn plus_decodes_as_space() {
		assert_eq!(Session::from_link("query=hello+world").query, "hello world");
	}
}
