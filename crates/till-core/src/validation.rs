//! # Validation Module
//!
//! Opt-in input validation for Till.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Permissive path (reference behaviour)                                 │
//! │  ├── ShoppingCart::add_item_quantity  - accepts any quantity           │
//! │  ├── OfferRegistry::add_special_offer - accepts any parameter          │
//! │  └── checkout                         - never fails                    │
//! │                                                                         │
//! │  Checked path (THIS MODULE)                                            │
//! │  ├── ShoppingCart::try_add_item_quantity                               │
//! │  └── PriceBook::from_json             - every product and offer        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::validation::{validate_quantity, validate_unit_price};
//! use till_core::ProductUnit;
//!
//! assert!(validate_quantity(ProductUnit::Kilo, 2.5).is_ok());
//! assert!(validate_quantity(ProductUnit::Each, 2.5).is_err());
//! assert!(validate_unit_price(0.99).is_ok());
//! ```

use crate::error::ValidationError;
use crate::offers::Offer;
use crate::types::ProductUnit;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Tolerance when deciding whether a quantity is a whole number.
pub(crate) const WHOLE_NUMBER_EPSILON: f64 = 1e-9;

/// Whether `value` is within [`WHOLE_NUMBER_EPSILON`] of an integer.
#[inline]
pub(crate) fn is_whole_number(value: f64) -> bool {
    (value - value.round()).abs() <= WHOLE_NUMBER_EPSILON
}

fn finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most `MAX_PRODUCT_NAME_LEN` characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity for a product sold in `unit`.
///
/// ## Rules
/// - Finite and positive (> 0)
/// - Whole number when the unit is `Each`
pub fn validate_quantity(unit: ProductUnit, quantity: f64) -> ValidationResult<()> {
    finite("quantity", quantity)?;

    if quantity <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if unit.is_countable() && !is_whole_number(quantity) {
        return Err(ValidationError::NotWholeNumber {
            field: "quantity".to_string(),
            value: quantity,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Finite and non-negative (zero is allowed: free items)
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    finite("price", price)?;

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0.0,
            max: f64::MAX,
        });
    }

    Ok(())
}

/// Validates the parameters carried by an offer.
///
/// ## Rules
/// - Percentage: 0 to 100 inclusive
/// - Bundle price: finite and non-negative
pub fn validate_offer(offer: &Offer) -> ValidationResult<()> {
    match *offer {
        Offer::TenPercentDiscount { percent } => {
            finite("percent", percent)?;
            if !(0.0..=100.0).contains(&percent) {
                return Err(ValidationError::OutOfRange {
                    field: "percent".to_string(),
                    min: 0.0,
                    max: 100.0,
                });
            }
            Ok(())
        }
        Offer::ThreeForTwo => Ok(()),
        Offer::TwoForAmount { bundle_price } | Offer::FiveForAmount { bundle_price } => {
            finite("bundle price", bundle_price.amount())?;
            if bundle_price.is_negative() {
                return Err(ValidationError::OutOfRange {
                    field: "bundle price".to_string(),
                    min: 0.0,
                    max: f64::MAX,
                });
            }
            Ok(())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
