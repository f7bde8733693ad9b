// Query parsing utilities
pub mod parse_csv;
pub mod parse_decimal;

pub use parse_csv::parse_csv;
pub use parse_decimal::parse_optional_decimal;
