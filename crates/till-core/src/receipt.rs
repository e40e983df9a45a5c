//! # Receipt
//!
//! Receipt assembly: line items at naive price plus the offer engine's
//! discounts.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart.items()  ──────► one ReceiptItem per addition (naive price)       │
//! │                                                                         │
//! │  cart.product_quantities() ──► handle_offers ──► Vec<Discount>          │
//! │                                                                         │
//! │  total_price = Σ item.total_price + Σ discount.discount_amount          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::cart::ShoppingCart;
use crate::catalog::SupermarketCatalog;
use crate::config::EngineConfig;
use crate::engine::handle_offers;
use crate::money::Money;
use crate::offers::OfferRegistry;
use crate::types::{Discount, Product};

/// One receipt line: a cart addition at its naive price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    pub product: Product,
    pub quantity: f64,
    /// Unit price at checkout
    pub price: Money,
    /// quantity × price, before any offer
    pub total_price: Money,
}

impl ReceiptItem {
    pub fn new(product: Product, quantity: f64, price: Money) -> Self {
        ReceiptItem {
            total_price: price.multiply_quantity(quantity),
            product,
            quantity,
            price,
        }
    }
}

/// The outcome of one checkout. Immutable once built.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    items: Vec<ReceiptItem>,
    discounts: Vec<Discount>,
}

impl Receipt {
    /// Line items in cart insertion order.
    pub fn items(&self) -> &[ReceiptItem] {
        &self.items
    }

    /// Discounts, at most one per product.
    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    /// Sum of the naive line totals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.total_price).sum()
    }

    /// Sum of the discount amounts (≤ 0).
    pub fn total_discount(&self) -> Money {
        self.discounts.iter().map(|d| d.discount_amount).sum()
    }

    /// Amount to pay: line totals plus (negative) discount amounts.
    pub fn total_price(&self) -> Money {
        self.subtotal() + self.total_discount()
    }
}

/// Prices `cart` against `catalog` and `offers`.
///
/// Pure: the inputs are only read, and the same inputs always give an equal
/// receipt.
pub fn checkout<C>(
    cart: &ShoppingCart,
    offers: &OfferRegistry,
    catalog: &C,
    config: &EngineConfig,
) -> Receipt
where
    C: SupermarketCatalog + ?Sized,
{
    let items = cart
        .items()
        .iter()
        .map(|line| {
            ReceiptItem::new(
                line.product.clone(),
                line.quantity,
                catalog.unit_price(&line.product),
            )
        })
        .collect();

    let discounts = handle_offers(cart, offers, catalog, config);

    Receipt { items, discounts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::offers::SpecialOfferType;
    use crate::types::ProductUnit;

    #[test]
    fn test_receipt_item_total() {
        let item = ReceiptItem::new(
            Product::new("rice", ProductUnit::Each),
            3.0,
            Money::new(2.0),
        );
        assert_eq!(item.total_price, Money::new(6.0));
    }

    #[test]
    fn test_empty_cart_gives_empty_receipt() {
        let receipt = checkout(
            &ShoppingCart::new(),
            &OfferRegistry::new(),
            &InMemoryCatalog::new(),
            &EngineConfig::default(),
        );
        assert_eq!(receipt, Receipt::default());
        assert!(receipt.total_price().is_zero());
    }

    #[test]
    fn test_one_line_item_per_addition() {
        let rice = Product::new("rice", ProductUnit::Each);
        let mut catalog = InMemoryCatalog::new();
        catalog.add_product(rice.clone(), Money::new(1.0));

        let mut offers = OfferRegistry::new();
        offers.add_special_offer(SpecialOfferType::ThreeForTwo, rice.clone(), 0.0);

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(rice.clone(), 2.0);
        cart.add_item(rice.clone());

        let receipt = checkout(&cart, &offers, &catalog, &EngineConfig::default());

        assert_eq!(receipt.items().len(), 2);
        assert_eq!(receipt.discounts().len(), 1);
        assert_eq!(receipt.subtotal(), Money::new(3.0));
        assert_eq!(receipt.total_discount(), Money::new(-1.0));
        assert_eq!(receipt.total_price(), Money::new(2.0));
    }

    #[test]
    fn test_checkout_inputs_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShoppingCart>();
        assert_send_sync::<OfferRegistry>();
        assert_send_sync::<InMemoryCatalog>();
        assert_send_sync::<Receipt>();
    }

    #[test]
    fn test_unknown_product_prices_at_zero() {
        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(Product::new("mystery", ProductUnit::Each), 4.0);

        let receipt = checkout(
            &cart,
            &OfferRegistry::new(),
            &InMemoryCatalog::new(),
            &EngineConfig::default(),
        );

        assert_eq!(receipt.items().len(), 1);
        assert!(receipt.total_price().is_zero());
    }
}
