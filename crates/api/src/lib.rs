//! Typed access to the Hacker News Algolia search API.
//!
//! The crate models the two story-search endpoints and their shared
//! parameter set, and exposes a blocking [`Client`] that issues exactly one
//! request per call. There is no retry, caching, or deduplication here;
//! callers own that policy.

mod client;
mod error;
mod types;

pub use client::{Client, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::{Endpoint, Hit, STORY_TAGS, SearchRequest, SearchResult, SortFilter};
