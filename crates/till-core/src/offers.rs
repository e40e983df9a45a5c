//! # Special Offers
//!
//! Offer definitions and the registry that binds offers to products.
//!
//! ## Registration vs. Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_special_offer(SpecialOfferType, product, cost_after_discount)     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Offer::from_parts  ─► TenPercentDiscount { percent }                   │
//! │                        ThreeForTwo                                      │
//! │                        TwoForAmount  { bundle_price }                   │
//! │                        FiveForAmount { bundle_price }                   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  OfferRegistry: product → SpecialOffer   (one per product, last wins)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Offer Type (registration tag)
// =============================================================================

/// The kind of offer, as named when registering one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialOfferType {
    TenPercentDiscount,
    ThreeForTwo,
    TwoForAmount,
    FiveForAmount,
}

// =============================================================================
// Offer
// =============================================================================

/// An offer with its parameter attached.
///
/// `cost_after_discount` means different things per type, so each variant
/// carries only the field it needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Offer {
    /// `percent` % off the naive price. Despite the name, any percentage.
    TenPercentDiscount { percent: f64 },
    /// Every third unit free.
    ThreeForTwo,
    /// Each complete pair costs `bundle_price`.
    TwoForAmount { bundle_price: Money },
    /// Each complete group of five costs `bundle_price`.
    FiveForAmount { bundle_price: Money },
}

impl Offer {
    /// Builds an offer from a type tag and its numeric parameter.
    ///
    /// `ThreeForTwo` ignores `cost_after_discount`.
    pub fn from_parts(offer_type: SpecialOfferType, cost_after_discount: f64) -> Self {
        match offer_type {
            SpecialOfferType::TenPercentDiscount => Offer::TenPercentDiscount {
                percent: cost_after_discount,
            },
            SpecialOfferType::ThreeForTwo => Offer::ThreeForTwo,
            SpecialOfferType::TwoForAmount => Offer::TwoForAmount {
                bundle_price: Money::new(cost_after_discount),
            },
            SpecialOfferType::FiveForAmount => Offer::FiveForAmount {
                bundle_price: Money::new(cost_after_discount),
            },
        }
    }

    /// The registration tag for this offer.
    pub fn offer_type(&self) -> SpecialOfferType {
        match self {
            Offer::TenPercentDiscount { .. } => SpecialOfferType::TenPercentDiscount,
            Offer::ThreeForTwo => SpecialOfferType::ThreeForTwo,
            Offer::TwoForAmount { .. } => SpecialOfferType::TwoForAmount,
            Offer::FiveForAmount { .. } => SpecialOfferType::FiveForAmount,
        }
    }

    /// Whether the offer prices complete groups of units.
    pub fn is_bundle(&self) -> bool {
        !matches!(self, Offer::TenPercentDiscount { .. })
    }
}

// =============================================================================
// Special Offer
// =============================================================================

/// An offer bound to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub product: Product,
    pub offer: Offer,
}

impl SpecialOffer {
    pub fn new(product: Product, offer: Offer) -> Self {
        SpecialOffer { product, offer }
    }
}

// =============================================================================
// Offer Registry
// =============================================================================

/// The offers active at checkout, at most one per product.
///
/// ## Replacement
/// Registering an offer for a product that already has one replaces it. The
/// replaced offer is returned so callers can notice the overwrite; offers are
/// never combined.
#[derive(Debug, Clone, Default)]
pub struct OfferRegistry {
    offers: HashMap<Product, SpecialOffer>,
}

impl OfferRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an offer for `product`, returning the offer it replaced.
    pub fn add_special_offer(
        &mut self,
        offer_type: SpecialOfferType,
        product: Product,
        cost_after_discount: f64,
    ) -> Option<SpecialOffer> {
        self.insert(SpecialOffer::new(
            product,
            Offer::from_parts(offer_type, cost_after_discount),
        ))
    }

    /// Registers an already-built offer, returning the offer it replaced.
    pub fn insert(&mut self, special_offer: SpecialOffer) -> Option<SpecialOffer> {
        debug!(
            product = %special_offer.product.name(),
            offer_type = ?special_offer.offer.offer_type(),
            "Registering special offer"
        );
        let replaced = self
            .offers
            .insert(special_offer.product.clone(), special_offer);
        if let Some(previous) = &replaced {
            debug!(
                product = %previous.product.name(),
                offer_type = ?previous.offer.offer_type(),
                "Replaced existing offer"
            );
        }
        replaced
    }

    /// The active offer for `product`, if any.
    pub fn offer_for(&self, product: &Product) -> Option<&SpecialOffer> {
        self.offers.get(product)
    }

    /// Number of products with an active offer.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// All active offers, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SpecialOffer> {
        self.offers.values()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
