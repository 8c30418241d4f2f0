use serde::Deserialize;

/// One search hit.
///
/// Only the fields the UI renders are modeled; any other field in the
/// payload is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Hit {
	pub author: String,
	/// Creation time in unix seconds.
	pub created_at_i: i64,
	pub points: i64,
	pub title: String,
	/// Empty for self posts, which link nowhere.
	#[serde(default)]
	pub url: String,
}

/// Envelope returned by both search endpoints.
///
/// Replaced wholesale after every successful fetch and never mutated in
/// place. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
	pub query: String,
	pub page: u32,
	#[serde(rename = "nbPages")]
	pub nb_pages: u32,
	pub hits: Vec<Hit>,
}
