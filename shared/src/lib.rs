//! Shared types for the Ortho storefront
//!
//! Domain models, the unified error system and small pure utilities used by
//! both the client crate and the storefront core.

pub mod error;
pub mod models;
pub mod slug;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Category, Product, ProductId, Size};
pub use serde::{Deserialize, Serialize};
