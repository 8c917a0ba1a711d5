//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Catalog load errors (recovered by the default catalog)
/// - 2xxx: Lookup errors (silent no-ops)
/// - 3xxx: Validation errors (blocking message to the customer)
/// - 4xxx: Dispatch errors (generic retry-later message)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Catalog,
    Lookup,
    Validation,
    Dispatch,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..2000 => Self::Catalog,
            2000..3000 => Self::Lookup,
            3000..4000 => Self::Validation,
            4000..5000 => Self::Dispatch,
            _ => Self::General,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Catalog => "catalog",
            Self::Lookup => "lookup",
            Self::Validation => "validation",
            Self::Dispatch => "dispatch",
        }
    }

    /// Whether errors of this category are shown to the customer
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation | Self::Dispatch)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(3), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Catalog);
        assert_eq!(ErrorCategory::from_code(2999), ErrorCategory::Lookup);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_code(4003), ErrorCategory::Dispatch);
        assert_eq!(ErrorCategory::from_code(9000), ErrorCategory::General);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::CatalogMalformed.category(), ErrorCategory::Catalog);
        assert_eq!(ErrorCode::SizeNotFound.category(), ErrorCategory::Lookup);
        assert_eq!(ErrorCode::NothingSelected.category(), ErrorCategory::Validation);
        assert_eq!(
            ErrorCode::CustomerNameRequired.category(),
            ErrorCategory::Validation
        );
        assert_eq!(ErrorCode::DispatchFailed.category(), ErrorCategory::Dispatch);
    }

    #[test]
    fn test_user_facing() {
        assert!(ErrorCategory::Validation.is_user_facing());
        assert!(ErrorCategory::Dispatch.is_user_facing());
        assert!(!ErrorCategory::Catalog.is_user_facing());
        assert!(!ErrorCategory::Lookup.is_user_facing());
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Dispatch).unwrap();
        assert_eq!(json, "\"dispatch\"");
    }
}
