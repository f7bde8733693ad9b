use serde::{Deserialize, Serialize};

/// Aggregate view of the full, unfiltered catalog.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterMetadata {
    pub min_price: f64,
    pub max_price: f64,
    pub sizes: Vec<String>,
    /// Most frequent first, at most ten entries.
    pub common_words: Vec<String>,
}
