//! Unified error codes for the storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Catalog load errors
//! - 2xxx: Lookup errors
//! - 3xxx: Validation errors
//! - 4xxx: Dispatch errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Internal error
    InternalError = 2,

    // ==================== 1xxx: Catalog ====================
    /// Catalog resource could not be fetched
    CatalogUnavailable = 1001,
    /// Catalog payload is not a product array
    CatalogMalformed = 1002,
    /// Catalog payload violates an invariant
    CatalogInvalid = 1003,

    // ==================== 2xxx: Lookup ====================
    /// Product id not present in the catalog
    ProductNotFound = 2001,
    /// Size index out of range
    SizeNotFound = 2002,

    // ==================== 3xxx: Validation ====================
    /// Customer name is blank
    CustomerNameRequired = 3002,
    /// Customer phone is blank
    CustomerPhoneRequired = 3003,
    /// Order submitted with no product selected
    NothingSelected = 3004,

    // ==================== 4xxx: Dispatch ====================
    /// Outbound message could not be delivered
    DispatchFailed = 4001,
    /// A previous submission is still pending
    DispatchInFlight = 4002,
    /// Channel is missing required configuration
    ChannelNotConfigured = 4003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::InternalError => "Internal error",

            ErrorCode::CatalogUnavailable => "Catalog could not be fetched",
            ErrorCode::CatalogMalformed => "Catalog payload is malformed",
            ErrorCode::CatalogInvalid => "Catalog payload is invalid",

            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::SizeNotFound => "Size not found",

            ErrorCode::CustomerNameRequired => "Customer name is required",
            ErrorCode::CustomerPhoneRequired => "Customer phone is required",
            ErrorCode::NothingSelected => "No product selected",

            ErrorCode::DispatchFailed => "Message dispatch failed",
            ErrorCode::DispatchInFlight => "A submission is already in progress",
            ErrorCode::ChannelNotConfigured => "Messaging channel is not configured",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::InternalError),

            1001 => Ok(ErrorCode::CatalogUnavailable),
            1002 => Ok(ErrorCode::CatalogMalformed),
            1003 => Ok(ErrorCode::CatalogInvalid),

            2001 => Ok(ErrorCode::ProductNotFound),
            2002 => Ok(ErrorCode::SizeNotFound),

            3002 => Ok(ErrorCode::CustomerNameRequired),
            3003 => Ok(ErrorCode::CustomerPhoneRequired),
            3004 => Ok(ErrorCode::NothingSelected),

            4001 => Ok(ErrorCode::DispatchFailed),
            4002 => Ok(ErrorCode::DispatchInFlight),
            4003 => Ok(ErrorCode::ChannelNotConfigured),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
