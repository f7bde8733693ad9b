use serde::{Deserialize, Serialize};

use crate::models::filter_metadata::FilterMetadata;
use crate::models::product::Product;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductFilterResponse {
    pub products: Vec<Product>,
    pub filter: FilterMetadata,
}
