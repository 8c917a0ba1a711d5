//! Application error type

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Blocking message shown when required contact fields are missing
pub const VALIDATION_USER_MESSAGE: &str = "Пожалуйста, заполните имя и телефон.";

/// Blocking message shown when an order is submitted without a selection
pub const SELECTION_USER_MESSAGE: &str = "Пожалуйста, выберите матрас и размер.";

/// Generic message shown when a message could not be sent
pub const DISPATCH_USER_MESSAGE: &str =
    "Не удалось отправить заявку. Пожалуйста, попробуйте позже.";

/// Application error with structured error code and details
///
/// - Standardized error codes via [`ErrorCode`]
/// - Developer-facing message
/// - Optional structured details for logging
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Developer-facing error message
    pub message: String,
    /// Optional additional details (field names, ids, context)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Category of the underlying code
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Text to show the customer, `None` for errors that are never surfaced
    pub fn user_message(&self) -> Option<&'static str> {
        let category = self.category();
        if !category.is_user_facing() {
            return None;
        }
        Some(match (self.code, category) {
            (ErrorCode::NothingSelected, _) => SELECTION_USER_MESSAGE,
            (_, ErrorCategory::Validation) => VALIDATION_USER_MESSAGE,
            _ => DISPATCH_USER_MESSAGE,
        })
    }

    // ==================== Convenience constructors ====================

    /// Create a dispatch error
    pub fn dispatch(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DispatchFailed, msg)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

impl From<ErrorCode> for AppError {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::ProductNotFound);
        assert_eq!(err.message, "Product not found");
        assert_eq!(err.to_string(), "Product not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_with_detail() {
        let err = AppError::new(ErrorCode::SizeNotFound)
            .with_detail("product_id", 1)
            .with_detail("index", 5);
        let details = err.details.unwrap();
        assert_eq!(details["product_id"], 1);
        assert_eq!(details["index"], 5);
    }

    #[test]
    fn test_user_message_by_category() {
        assert_eq!(
            AppError::new(ErrorCode::CustomerNameRequired).user_message(),
            Some(VALIDATION_USER_MESSAGE)
        );
        assert_eq!(
            AppError::dispatch("timeout").user_message(),
            Some(DISPATCH_USER_MESSAGE)
        );
        assert_eq!(
            AppError::new(ErrorCode::NothingSelected).user_message(),
            Some(SELECTION_USER_MESSAGE)
        );
        assert_eq!(AppError::new(ErrorCode::CatalogMalformed).user_message(), None);
        assert_eq!(AppError::new(ErrorCode::ProductNotFound).user_message(), None);
        assert_eq!(AppError::internal("boom").user_message(), None);
    }

    #[test]
    fn test_serialize() {
        let err = AppError::new(ErrorCode::DispatchInFlight);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], 4002);
        assert!(json.get("details").is_none());
    }
}
