//! # Money Module
//!
//! Provides the `Money` type for monetary values on receipts.
//!
//! ## Floating Point, On Purpose
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICING ARITHMETIC                                                     │
//! │                                                                         │
//! │  Weighed goods are priced per kilo with fractional quantities:         │
//! │    2.5 kg × 1.99 = 4.975                                               │
//! │                                                                         │
//! │  Till keeps the full f64 value end to end. No rounding is applied to   │
//! │  line totals, discounts or receipt totals. Rounding to cents is a       │
//! │  presentation concern and happens only in `Display`.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let price = Money::new(1.99);
//! let line_total = price.multiply_quantity(2.5);
//! assert_eq!(line_total, Money::new(2.5 * 1.99));
//! assert_eq!(Money::new(1.5).to_string(), "1.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in major currency units.
///
/// ## Design Decisions
/// - **f64**: quantities of weighed goods are fractional, so every price
///   calculation is real-valued anyway
/// - **Signed**: discounts are stored as negative amounts
/// - **Transparent serde**: serializes as a bare number
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Catalog.unit_price ──► ReceiptItem.price ──► ReceiptItem.total_price   │
/// │         │                                                               │
/// │         └──► Offer engine ──► Discount.discount_amount (≤ 0)           │
/// │                                                                         │
/// │  Receipt.total_price = Σ line totals + Σ discount amounts              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from an amount in major units.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let price = Money::new(10.99);
    /// assert_eq!(price.amount(), 10.99);
    /// ```
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Multiplies money by a (possibly fractional) quantity.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let unit_price = Money::new(10.0);
    /// assert_eq!(unit_price.multiply_quantity(3.0), Money::new(30.0));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, quantity: f64) -> Self {
        Money(self.0 * quantity)
    }

    /// Returns `percent` % of this amount, computed as `amount * percent / 100`.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// let subtotal = Money::new(20.0);
    /// assert_eq!(subtotal.percentage(10.0), Money::new(2.0));
    /// ```
    #[inline]
    pub fn percentage(&self, percent: f64) -> Self {
        Money(self.0 * percent / 100.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal rendering for logs and descriptions.
///
/// ## Note
/// This rounds for display only; the stored amount is untouched.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a count (bundle counts, remainders).
impl Mul<f64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Money(self.0 * factor)
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Left-to-right running total starting from zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
