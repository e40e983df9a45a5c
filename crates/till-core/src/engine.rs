//! # Offer Application Engine
//!
//! Turns (aggregated quantity, unit price, offer) into an optional discount.
//!
//! ## Offer Arithmetic
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  q = aggregated quantity   p = unit price   n = whole units in q        │
//! │                                                                         │
//! │  TenPercentDiscount(pct)   always        -(q·p·pct/100)                 │
//! │                                                                         │
//! │  Bundle(size, price)       n >= size     -(q·p - (⌊n/size⌋·price         │
//! │                                                 + (n mod size)·p))      │
//! │    ThreeForTwo          size 3, price 2·p                               │
//! │    TwoForAmount(c)      size 2, price c                                 │
//! │    FiveForAmount(c)     size 5, price c                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `n` comes from q according to the configured [`BundleQuantityPolicy`].

use tracing::debug;

use crate::cart::ShoppingCart;
use crate::catalog::SupermarketCatalog;
use crate::config::{BundleQuantityPolicy, EngineConfig};
use crate::money::Money;
use crate::offers::{Offer, OfferRegistry};
use crate::types::{Discount, Product};
use crate::validation::is_whole_number;

// =============================================================================
// Bundles
// =============================================================================

/// A group of `size` units sold together for `price`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bundle {
    pub size: i64,
    pub price: Money,
}

impl Bundle {
    /// Discount for buying `quantity` units (of which `units` count towards
    /// bundles) at `unit_price` each.
    ///
    /// Complete bundles cost `price`, leftover units cost `unit_price`.
    /// Returns `None` when `units` does not fill a single bundle.
    pub fn discount(&self, quantity: f64, units: i64, unit_price: Money) -> Option<Money> {
        if self.size <= 0 || units < self.size {
            return None;
        }

        let bundles = units / self.size;
        let remainder = units % self.size;
        let naive = unit_price.multiply_quantity(quantity);
        let offered = self.price * bundles as f64 + unit_price * remainder as f64;

        Some(-(naive - offered))
    }
}

/// Whole units in `quantity` for bundle counting, or `None` if the policy
/// refuses a fractional quantity.
pub fn bundle_units(quantity: f64, policy: BundleQuantityPolicy) -> Option<i64> {
    match policy {
        BundleQuantityPolicy::RoundToNearest => Some(quantity.round() as i64),
        BundleQuantityPolicy::WholeUnitsOnly if is_whole_number(quantity) => {
            Some(quantity.round() as i64)
        }
        BundleQuantityPolicy::WholeUnitsOnly => None,
    }
}

// =============================================================================
// Per-offer discount
// =============================================================================

impl Offer {
    /// The bundle this offer sells at `unit_price`, if it is a bundle offer.
    pub fn bundle(&self, unit_price: Money) -> Option<Bundle> {
        match *self {
            Offer::TenPercentDiscount { .. } => None,
            Offer::ThreeForTwo => Some(Bundle {
                size: 3,
                price: unit_price * 2.0,
            }),
            Offer::TwoForAmount { bundle_price } => Some(Bundle {
                size: 2,
                price: bundle_price,
            }),
            Offer::FiveForAmount { bundle_price } => Some(Bundle {
                size: 5,
                price: bundle_price,
            }),
        }
    }

    /// Receipt text for this offer.
    pub fn description(&self) -> String {
        match self {
            Offer::TenPercentDiscount { percent } => format!("{percent:.0} % off"),
            Offer::ThreeForTwo => "3 for 2".to_string(),
            Offer::TwoForAmount { bundle_price } => format!("2 for {bundle_price}"),
            Offer::FiveForAmount { bundle_price } => format!("5 for {bundle_price}"),
        }
    }

    /// Discount this offer grants on `quantity` of `product` at `unit_price`.
    ///
    /// ## Returns
    /// - `Some(discount)` with a signed amount (≤ 0 for non-negative inputs)
    /// - `None` when a bundle offer's minimum quantity is not reached, or the
    ///   policy refuses a fractional quantity
    pub fn discount_for(
        &self,
        product: &Product,
        quantity: f64,
        unit_price: Money,
        policy: BundleQuantityPolicy,
    ) -> Option<Discount> {
        let amount = match (self, self.bundle(unit_price)) {
            (Offer::TenPercentDiscount { percent }, _) => {
                -unit_price.multiply_quantity(quantity).percentage(*percent)
            }
            (_, Some(bundle)) => {
                let Some(units) = bundle_units(quantity, policy) else {
                    debug!(
                        product = %product.name(),
                        quantity,
                        %policy,
                        "Fractional quantity, bundle offer skipped"
                    );
                    return None;
                };
                bundle.discount(quantity, units, unit_price)?
            }
            (_, None) => return None,
        };

        Some(Discount::new(product.clone(), self.description(), amount))
    }
}

// =============================================================================
// Cart-wide application
// =============================================================================

/// Runs every registered offer against the cart's aggregated quantities.
///
/// ## Behavior
/// - One evaluation per distinct product, never per cart line
/// - Products with zero aggregated quantity or no offer are skipped
/// - Discounts come out in the order products were first added to the cart
pub fn handle_offers<C>(
    cart: &ShoppingCart,
    offers: &OfferRegistry,
    catalog: &C,
    config: &EngineConfig,
) -> Vec<Discount>
where
    C: SupermarketCatalog + ?Sized,
{
    let mut discounts = Vec::new();

    for line in cart.product_quantities() {
        if line.quantity == 0.0 {
            continue;
        }
        let Some(special_offer) = offers.offer_for(&line.product) else {
            continue;
        };

        let unit_price = catalog.unit_price(&line.product);
        match special_offer.offer.discount_for(
            &line.product,
            line.quantity,
            unit_price,
            config.bundle_quantity_policy,
        ) {
            Some(discount) => {
                debug!(
                    product = %line.product.name(),
                    quantity = line.quantity,
                    description = %discount.description,
                    amount = %discount.discount_amount,
                    "Offer applied"
                );
                discounts.push(discount);
            }
            None => {
                debug!(
                    product = %line.product.name(),
                    quantity = line.quantity,
                    offer_type = ?special_offer.offer.offer_type(),
                    "Offer not applicable"
                );
            }
        }
    }

    discounts
}

// =============================================================================
// Unit Tests
// =============================================================================
