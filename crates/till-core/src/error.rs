//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError        - Price book loading failures                        │
//! │  ValidationError  - Opt-in input checks (quantity, price, offer)       │
//! │  ConfigError      - Engine configuration (see config.rs)               │
//! │                                                                         │
//! │  Checkout itself never fails: cart + offers + catalog → Receipt        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, field, value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while building a catalog and offer registry from a price book.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An offer references a product the price book never declared.
    ///
    /// ## When This Occurs
    /// - Typo in the offer's `product` field
    /// - Product removed from the price book but its offer left behind
    #[error("Offer references unknown product: {0}")]
    UnknownProduct(String),

    /// The price book document could not be parsed.
    #[error("Invalid price book: {0}")]
    InvalidPriceBook(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The pricing path is permissive; these only surface through the `try_*`
/// entry points and price book loading.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Fractional quantity for a product sold by the piece.
    #[error("{field} must be a whole number, got {value}")]
    NotWholeNumber { field: String, value: f64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Duplicate value (e.g., product declared twice).
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
