use serde::{Deserialize, Serialize};

/// The three employer-segment slugs kununu recognises as company sizes.
pub const COMPANY_SIZES: [&str; 3] = ["konzerne", "grossunternehmen", "kmu"];

/// One filter token: `name` is shown to the user, `key` is sent to the
/// search endpoint as a `filterKeywords[]` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterKeyword {
    pub name: String,
    pub key: String,
}

/// The three disjoint keyword categories one search response yields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterKeywords {
    pub industry: Vec<FilterKeyword>,
    pub company_size: Vec<FilterKeyword>,
    pub country: Vec<FilterKeyword>,
}
