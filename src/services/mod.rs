pub mod filter_service;
pub mod highlight_service;
pub mod metadata_service;
pub mod product_service;

// Re-export commonly used functions
pub use filter_service::filter_products;
pub use highlight_service::highlight;
pub use metadata_service::{common_words, summarize};
pub use product_service::{build_filter_response, filter_catalog};
