pub mod app_state;
pub mod filter_metadata;
pub mod product;
pub mod product_filter_query;
pub mod product_filter_response;

pub use app_state::AppState;
pub use filter_metadata::FilterMetadata;
pub use product::{Product, ProductResponse};
pub use product_filter_query::ProductFilterQuery;
pub use product_filter_response::ProductFilterResponse;
