//! # Domain Types
//!
//! Core domain types shared by the cart, the offer engine and the receipt.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ProductQuantity │   │    Discount     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  product        │   │  product        │       │
//! │  │  unit           │   │  quantity (f64) │   │  description    │       │
//! │  └─────────────────┘   └─────────────────┘   │  discount_amount│       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐                                                   │
//! │  │  ProductUnit    │                                                   │
//! │  │  ─────────────  │                                                   │
//! │  │  Each           │                                                   │
//! │  │  Kilo           │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product's name is its identity: two `Product` values with the same name
//! are the same product regardless of unit. Carts, registries and catalogs
//! all key on the name.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::money::Money;

// =============================================================================
// Product Unit
// =============================================================================

/// How a product is measured at the till.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductUnit {
    /// Sold by the piece; quantities are whole numbers.
    #[default]
    Each,
    /// Sold by weight; quantities are fractional kilograms.
    Kilo,
}

impl ProductUnit {
    /// Whether quantities in this unit are expected to be whole numbers.
    #[inline]
    pub const fn is_countable(&self) -> bool {
        matches!(self, ProductUnit::Each)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be put in a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    name: String,
    unit: ProductUnit,
}

impl Product {
    /// Creates a product.
    pub fn new(name: impl Into<String>, unit: ProductUnit) -> Self {
        Product {
            name: name.into(),
            unit,
        }
    }

    /// Product name (identity).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit of measure.
    #[inline]
    pub fn unit(&self) -> ProductUnit {
        self.unit
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

// =============================================================================
// Product Quantity
// =============================================================================

/// A product paired with a quantity: one cart addition, or one aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuantity {
    pub product: Product,
    pub quantity: f64,
}

impl ProductQuantity {
    pub fn new(product: Product, quantity: f64) -> Self {
        ProductQuantity { product, quantity }
    }
}

// =============================================================================
// Discount
// =============================================================================

/// A reduction produced by a special offer for one product.
///
/// `discount_amount` is signed and, for non-negative inputs, never positive:
/// it is added to the receipt total as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub product: Product,
    pub description: String,
    pub discount_amount: Money,
}

impl Discount {
    pub fn new(product: Product, description: impl Into<String>, discount_amount: Money) -> Self {
        Discount {
            product,
            description: description.into(),
            discount_amount,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
