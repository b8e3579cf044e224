use serde::{Deserialize, Serialize};

/// Sortable field selection for a rank request.
///
/// `pricePerBookValue` is a second wire name for the same
/// price-to-book ratio; both are accepted so older callers keep
/// working.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "pricePerEarnings")]
    PricePerEarnings,
    #[serde(rename = "pricePerBook")]
    PricePerBook,
    #[serde(rename = "pricePerBookValue")]
    PricePerBookValue,
    #[serde(rename = "pe_then_pb")]
    PeThenPb,
}

/// Direction applied to the whole comparison key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Per-request sort specification, echoed back in the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub by: SortKey,
    pub direction: SortDirection,
}
