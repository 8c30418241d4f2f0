use serde::{Deserialize, Serialize};

/// Endpoint paths exposed by the search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
	/// Relevance-ordered search.
	Search,
	/// Recency-ordered search.
	SearchByDate,
}

impl Endpoint {
	/// Path component appended to the base address.
	#[must_use]
	pub const fn as_path(self) -> &'static str {
		match self {
			Self::Search => "/search",
			Self::SearchByDate => "/search_by_date",
		}
	}
}

/// Sort order for search results.
///
/// The remote API models sorting as a coupled pair: a numeric filter
/// expression and the endpoint path it must be sent to. Both sides are
/// derived from this enum, so the pair can never drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortFilter {
	/// Order by points, served by [`Endpoint::Search`].
	#[default]
	Points,
	/// Order by creation time, served by [`Endpoint::SearchByDate`].
	CreatedAt,
}

impl SortFilter {
	/// Numeric filter expression sent with every request.
	#[must_use]
	pub const fn numeric_filter(self) -> &'static str {
		match self {
			Self::Points => "points>0",
			Self::CreatedAt => "created_at_i>0",
		}
	}

	/// Endpoint the filter must be queried through.
	#[must_use]
	pub const fn endpoint(self) -> Endpoint {
		match self {
			Self::Points => Endpoint::Search,
			Self::CreatedAt => Endpoint::SearchByDate,
		}
	}

	/// The other variant, for a two-option selector.
	#[must_use]
	pub const fn toggled(self) -> Self {
		match self {
			Self::Points => Self::CreatedAt,
			Self::CreatedAt => Self::Points,
		}
	}

	/// Human-readable label for the selector.
	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::Points => "Points",
			Self::CreatedAt => "Created at",
		}
	}

	/// Parse a wire value, defaulting to [`SortFilter::Points`] for anything
	/// unknown.
	#[must_use]
	pub fn from_wire(value: &str) -> Self {
		match value {
			"created_at_i>0" => Self::CreatedAt,
			_ => Self::Points,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn filter_and_endpoint_stay_in_lockstep() {
		for sort in [SortFilter::Points, SortFilter::CreatedAt] {
			match sort.numeric_filter() {
				"points>0" => assert_eq!(sort.endpoint(), Endpoint::Search),
				"created_at_i>0" => assert_eq!(sort.endpoint(), Endpoint::SearchByDate),
				other => panic!("unexpected filter expression {other}"),
			}
		}
	}

	#[test]
	fn wire_round_trip() {
		for sort in [SortFilter::Points, SortFilter::CreatedAt] {
			assert_eq!(SortFilter::from_wire(sort.numeric_filter()), sort);
		}
	}

	#[test]
	fn unknown_wire_values_fall_back_to_points() {
		assert_eq!(SortFilter::from_wire("comments>10"), SortFilter::Points);
		assert_eq!(SortFilter::from_wire(""), SortFilter::Points);
	}

	#[test]
	fn toggling_alternates_between_both_variants() {
		assert_eq!(SortFilter::Points.toggled(), SortFilter::CreatedAt);
		assert_eq!(SortFilter::CreatedAt.toggled(), SortFilter::Points);
	}
}
