use crate::types::{Endpoint, SortFilter};

/// Tag filter applied to every search; only story items are requested.
pub const STORY_TAGS: &str = "story";

/// Parameter set for a single search call.
///
/// Built fresh from controller state before every fetch. The wire encoding
/// is the four query parameters `query`, `tags`, `page`, `numericFilters`,
/// in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
	pub query: String,
	pub page: u32,
	pub sort: SortFilter,
}

impl SearchRequest {
	#[must_use]
	pub fn new(query: impl Into<String>, page: u32, sort: SortFilter) -> Self {
		Self {
			query: query.into(),
			page,
			sort,
		}
	}

	/// Endpoint this request must be sent to.
	#[must_use]
	pub const fn endpoint(&self) -> Endpoint {
		self.sort.endpoint()
	}

	/// Key/value pairs in wire order.
	#[must_use]
	pub fn query_pairs(&self) -> [(&'static str, String); 4] {
		[
			("query", self.query.clone()),
			("tags", STORY_TAGS.to_string()),
			("page", self.page.to_string()),
			("numericFilters", self.sort.numeric_filter().to_string()),
		]
	}
}
