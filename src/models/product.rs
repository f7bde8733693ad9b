use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub sizes: Option<Vec<String>>,
}

impl Product {
    pub fn sizes(&self) -> &[String] {
        self.sizes.as_deref().unwrap_or_default()
    }
}

/// Envelope returned by the catalog source. A missing or `null` `products`
/// field stays `None`, distinct from an explicitly empty list.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ProductResponse {
    #[serde(default)]
    pub products: Option<Vec<Product>>,
}
