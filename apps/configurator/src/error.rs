//! # API Error Type
//!
//! Unified error type for configurator commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Configurator                       │
//! │                                                                         │
//! │  {"command":"getQuote"}                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function → Result<T, ApiError>                          │  │
//! │  │         │                                                        │  │
//! │  │  Catalogue unreadable? ── io::Error ─────────┐                  │  │
//! │  │  Catalogue invalid?   ── ValidationError ────┤                  │  │
//! │  │  Nothing to price?    ── CoreError ──────────┴─► ApiError ─────►│  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"ok":false,"error":{"code":"EMPTY_CATALOGUE","message":"..."}}       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use boxcraft_core::{CoreError, ValidationError};

use crate::state::ConfigError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "EMPTY_CATALOGUE",
///   "message": "No size options are available"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input or catalogue data failed validation
    ValidationError,

    /// A required option category has no entries
    EmptyCatalogue,

    /// Request line could not be decoded
    MalformedRequest,

    /// Environment configuration is invalid
    ConfigError,

    /// Reading or writing failed
    IoError,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::MalformedRequest, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::EmptyCategory(_) => {
                ApiError::new(ErrorCode::EmptyCatalogue, err.to_string())
            }
            CoreError::UnknownCategory(_) | CoreError::Snapshot(_) => {
                ApiError::validation(err.to_string())
            }
            CoreError::Validation(inner) => inner.into(),
        }
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failed: {}", err);
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}

/// Only raised while encoding responses; decoding is mapped explicitly.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Response encoding failed: {}", err);
        ApiError::internal("Failed to encode response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxcraft_core::OptionCategory;

    #[test]
    fn test_core_error_codes() {
        let err: ApiError = CoreError::EmptyCategory(OptionCategory::Size).into();
        assert_eq!(err.code, ErrorCode::EmptyCatalogue);
        assert_eq!(err.message, "No size options are available");

        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "label".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "label is required");
    }

    #[test]
    fn test_serialization() {
        let err = ApiError::malformed("unknown command");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "MALFORMED_REQUEST");
        assert_eq!(json["message"], "unknown command");
    }
}
