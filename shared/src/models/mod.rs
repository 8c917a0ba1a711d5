//! Data models
//!
//! Catalog records as served by `products.json`. Field names follow the
//! JSON document (camelCase), IDs are `i64`.

pub mod category;
pub mod product;

// Re-exports
pub use category::*;
pub use product::*;
