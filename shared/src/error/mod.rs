//! Unified error system for the storefront
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by handling policy
//! - [`AppError`]: Error type with code, message and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Catalog load errors
//! - 2xxx: Lookup errors
//! - 3xxx: Validation errors
//! - 4xxx: Dispatch errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::CustomerPhoneRequired)
//!     .with_detail("field", "phone");
//! assert!(err.user_message().is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{
    AppError, AppResult, DISPATCH_USER_MESSAGE, SELECTION_USER_MESSAGE, VALIDATION_USER_MESSAGE,
};
