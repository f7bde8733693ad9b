pub mod product;
pub mod system;

pub use product::product_filter_get;
pub use system::health_get;
