//! # Error Types
//!
//! Domain-specific error types for boxcraft-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boxcraft-core errors (this file)                                      │
//! │  ├── CoreError        - Catalogue / session level failures             │
//! │  └── ValidationError  - Data-entry validation failures                 │
//! │                                                                         │
//! │  configurator errors (in app)                                          │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing operations themselves are total and never return these.
//! Errors only appear at the edges: parsing admin input or decoding and
//! validating a catalogue snapshot.

use thiserror::Error;

use crate::types::OptionCategory;

// =============================================================================
// Core Error
// =============================================================================

/// Catalogue and session level errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required option category has no entries, so nothing can be priced.
    ///
    /// ## When This Occurs
    /// - A product was published before the admin added any sizes
    /// - The last material was deleted from the catalogue
    #[error("No {0} options are available")]
    EmptyCategory(OptionCategory),

    /// Category name could not be parsed.
    #[error("Unknown option category: {0}")]
    UnknownCategory(String),

    /// Catalogue snapshot could not be decoded.
    #[error("Invalid catalogue snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the messages shown on the admin forms when a catalogue entry
/// is rejected at data-entry time.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a number, bad hex color).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two materials sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::EmptyCategory(OptionCategory::Material);
        assert_eq!(err.to_string(), "No material options are available");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "price modifier".to_string(),
        };
        assert_eq!(err.to_string(), "price modifier must be positive");

        let err = ValidationError::Duplicate {
            field: "material id".to_string(),
            value: "3".to_string(),
        };
        assert_eq!(err.to_string(), "material id '3' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "label".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
