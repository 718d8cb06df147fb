//! # Error Types
//!
//! Domain-specific error types for fretshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fretshop-core errors (this file)                                      │
//! │  ├── CoreError        - Submission-level failures                      │
//! │  └── ValidationError  - Individual field failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → toast message in the UI           │
//! │                                                                         │
//! │  NOTE: parsing is deliberately NOT here. Money::parse, parse_percent   │
//! │  and RepairSheet::decode are total functions - malformed input         │
//! │  degrades to zero/empty instead of erroring, so a half-typed form      │
//! │  or a hand-edited notes column can always render.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Submission-level failures surfaced to the user before anything is sent
/// to the ledger service.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No customer selected on an invoice or work order form.
    #[error("Please select a customer")]
    MissingCustomer,

    /// An invoice was submitted without any line items.
    #[error("Please add at least one line item")]
    EmptyInvoice,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Individual field validation failures.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before form data is converted and persisted.
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

    /// Invalid format (e.g., non-numeric quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
