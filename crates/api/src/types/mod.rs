mod request;
mod result;
mod sort;

pub use request::{STORY_TAGS, SearchRequest};
pub use result::{Hit, SearchResult};
pub use sort::{Endpoint, SortFilter};
