//! Catalog: session product list and its category sections

pub mod categorizer;
pub mod store;

pub use categorizer::{CategoryBuckets, CategorySection, INITIAL_VISIBLE, bucket};
pub use store::{CatalogOrigin, CatalogStore, default_catalog};
