pub mod client;
pub mod catalog;

pub use client::{get_text, set_silent};
pub use catalog::{parse_catalog, CatalogClient};
