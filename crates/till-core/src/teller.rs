//! # Teller
//!
//! The till operator: owns a catalog, the active offers and the engine
//! config, and checks carts out against them.
//!
//! ## Usage
//! ```rust
//! use till_core::{InMemoryCatalog, Money, Product, ProductUnit, ShoppingCart,
//!                 SpecialOfferType, SupermarketCatalog, Teller};
//!
//! let toothbrush = Product::new("toothbrush", ProductUnit::Each);
//! let mut catalog = InMemoryCatalog::new();
//! catalog.add_product(toothbrush.clone(), Money::new(10.0));
//!
//! let mut teller = Teller::new(catalog);
//! teller.add_special_offer(SpecialOfferType::ThreeForTwo, toothbrush.clone(), 0.0);
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_item_quantity(toothbrush, 3.0);
//!
//! let receipt = teller.checks_out_articles_from(&cart);
//! assert_eq!(receipt.total_price(), Money::new(20.0));
//! ```

use crate::cart::ShoppingCart;
use crate::catalog::SupermarketCatalog;
use crate::config::EngineConfig;
use crate::offers::{OfferRegistry, SpecialOffer, SpecialOfferType};
use crate::receipt::{checkout, Receipt};
use crate::types::Product;

/// Checks out carts against one catalog and one set of offers.
///
/// Checkout only borrows the teller, so several carts can be checked out
/// concurrently from a shared `&Teller` when `C: Sync`.
#[derive(Debug, Clone)]
pub struct Teller<C> {
    catalog: C,
    offers: OfferRegistry,
    config: EngineConfig,
}

impl<C: SupermarketCatalog> Teller<C> {
    /// Creates a teller with no offers and the default config.
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    pub fn with_config(catalog: C, config: EngineConfig) -> Self {
        Teller {
            catalog,
            offers: OfferRegistry::new(),
            config,
        }
    }

    /// Creates a teller from a ready-made offer registry.
    pub fn with_offers(catalog: C, offers: OfferRegistry, config: EngineConfig) -> Self {
        Teller {
            catalog,
            offers,
            config,
        }
    }

    /// Registers an offer, replacing any earlier offer for the same product.
    ///
    /// ## Returns
    /// The replaced offer, if there was one.
    pub fn add_special_offer(
        &mut self,
        offer_type: SpecialOfferType,
        product: Product,
        cost_after_discount: f64,
    ) -> Option<SpecialOffer> {
        self.offers
            .add_special_offer(offer_type, product, cost_after_discount)
    }

    /// Prices `cart`. See [`checkout`].
    pub fn checks_out_articles_from(&self, cart: &ShoppingCart) -> Receipt {
        checkout(cart, &self.offers, &self.catalog, &self.config)
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    pub fn offers(&self) -> &OfferRegistry {
        &self.offers
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::config::BundleQuantityPolicy;
    use crate::money::Money;
    use crate::types::ProductUnit;

    #[test]
    fn test_teller_applies_registered_offer() {
        let beans = Product::new("can of beans", ProductUnit::Each);
        let mut teller = Teller::new(InMemoryCatalog::new());
        teller
            .catalog_mut()
            .add_product(beans.clone(), Money::new(1.0));
        teller.add_special_offer(SpecialOfferType::TwoForAmount, beans.clone(), 1.0);

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(beans, 2.0);

        let receipt = teller.checks_out_articles_from(&cart);
        assert_eq!(receipt.total_price(), Money::new(1.0));
        assert_eq!(receipt.discounts()[0].description, "2 for 1.00");
    }

    #[test]
    fn test_teller_reports_replaced_offer() {
        let beans = Product::new("can of beans", ProductUnit::Each);
        let mut teller = Teller::new(InMemoryCatalog::new());

        assert!(teller
            .add_special_offer(SpecialOfferType::TwoForAmount, beans.clone(), 1.0)
            .is_none());
        assert!(teller
            .add_special_offer(SpecialOfferType::FiveForAmount, beans, 4.0)
            .is_some());
        assert_eq!(teller.offers().len(), 1);
    }

    #[test]
    fn test_teller_uses_configured_policy() {
        let cheese = Product::new("cheese", ProductUnit::Kilo);
        let mut catalog = InMemoryCatalog::new();
        catalog.add_product(cheese.clone(), Money::new(10.0));

        let config = EngineConfig::default()
            .with_bundle_quantity_policy(BundleQuantityPolicy::WholeUnitsOnly);
        let mut teller = Teller::with_config(catalog, config);
        teller.add_special_offer(SpecialOfferType::ThreeForTwo, cheese.clone(), 0.0);
        assert_eq!(*teller.config(), config);

        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(cheese, 2.6);

        let receipt = teller.checks_out_articles_from(&cart);
        assert!(receipt.discounts().is_empty());
        assert_eq!(receipt.total_price(), Money::new(26.0));
    }
}
