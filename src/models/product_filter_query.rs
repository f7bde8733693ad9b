use std::collections::HashMap;

use crate::error::AppError;
use crate::utils::{parse_csv, parse_optional_decimal};

pub const MIN_PRICE_PARAM: &str = "minPrice";
pub const MAX_PRICE_PARAM: &str = "maxPrice";
pub const SIZE_PARAM: &str = "size";
pub const HIGHLIGHT_PARAM: &str = "highlight";

/// Parsed `/api/product/filter` query. Every field is optional; empty
/// lists mean "no constraint" / "no highlighting".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductFilterQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sizes: Vec<String>,
    pub highlight: Vec<String>,
}

impl ProductFilterQuery {
    pub fn from_params(q: &HashMap<String, String>) -> Result<Self, AppError> {
        Ok(Self {
            min_price: parse_optional_decimal(MIN_PRICE_PARAM, q.get(MIN_PRICE_PARAM))?,
            max_price: parse_optional_decimal(MAX_PRICE_PARAM, q.get(MAX_PRICE_PARAM))?,
            sizes: parse_csv(q.get(SIZE_PARAM)),
            highlight: parse_csv(q.get(HIGHLIGHT_PARAM)),
        })
    }
}
