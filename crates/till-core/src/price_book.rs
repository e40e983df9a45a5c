//! # Price Book
//!
//! Builds a catalog and an offer registry from a JSON document.
//!
//! ## Document Format
//! ```json
//! {
//!   "products": [
//!     { "name": "toothbrush", "unit": "each", "price": 0.99 },
//!     { "name": "apples",     "unit": "kilo", "price": 1.99 }
//!   ],
//!   "offers": [
//!     { "product": "toothbrush", "type": "ten_percent_discount", "costAfterDiscount": 10.0 }
//!   ]
//! }
//! ```
//!
//! ## Loading Rules
//! - Every product name and price is validated
//! - A product declared twice is an error
//! - An offer must name a declared product
//! - Two offers for one product: the later one wins (logged)
//! - Bundle offers on products sold by weight are allowed but logged, since
//!   their quantities go through the bundle quantity policy

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::{InMemoryCatalog, SupermarketCatalog};
use crate::config::EngineConfig;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::offers::{Offer, OfferRegistry, SpecialOffer, SpecialOfferType};
use crate::teller::Teller;
use crate::types::{Product, ProductUnit};
use crate::validation::{validate_offer, validate_product_name, validate_unit_price};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PriceBookDocument {
    #[serde(default)]
    products: Vec<ProductEntry>,
    #[serde(default)]
    offers: Vec<OfferEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProductEntry {
    name: String,
    #[serde(default)]
    unit: ProductUnit,
    price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OfferEntry {
    product: String,
    #[serde(rename = "type")]
    offer_type: SpecialOfferType,
    #[serde(default)]
    cost_after_discount: f64,
}

/// A validated catalog plus the offers that apply to it.
#[derive(Debug, Clone, Default)]
pub struct PriceBook {
    catalog: InMemoryCatalog,
    offers: OfferRegistry,
}

impl PriceBook {
    /// Parses and validates a price book document.
    ///
    /// ## Errors
    /// - `CoreError::InvalidPriceBook` - malformed JSON or unknown fields
    /// - `CoreError::Validation` - bad name, price, duplicate product or offer
    ///   parameter
    /// - `CoreError::UnknownProduct` - offer for an undeclared product
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let document: PriceBookDocument = serde_json::from_str(json)?;

        let mut catalog = InMemoryCatalog::new();
        for entry in document.products {
            validate_product_name(&entry.name)?;
            validate_unit_price(entry.price)?;

            let product = Product::new(entry.name.trim(), entry.unit);
            if catalog.contains(&product) {
                return Err(ValidationError::Duplicate {
                    field: "product".to_string(),
                    value: product.name().to_string(),
                }
                .into());
            }
            catalog.add_product(product, Money::new(entry.price));
        }

        let mut offers = OfferRegistry::new();
        for entry in document.offers {
            let product = catalog
                .product(entry.product.trim())
                .cloned()
                .ok_or_else(|| CoreError::UnknownProduct(entry.product.clone()))?;

            let offer = Offer::from_parts(entry.offer_type, entry.cost_after_discount);
            validate_offer(&offer)?;

            if offer.is_bundle() && !product.unit().is_countable() {
                warn!(
                    product = %product.name(),
                    offer_type = ?entry.offer_type,
                    "Bundle offer on a product sold by weight"
                );
            }

            if let Some(replaced) = offers.insert(SpecialOffer::new(product, offer)) {
                warn!(
                    product = %replaced.product.name(),
                    replaced = ?replaced.offer.offer_type(),
                    "Price book lists more than one offer for product, keeping the last"
                );
            }
        }

        debug!(
            products = catalog.len(),
            offers = offers.len(),
            "Price book loaded"
        );

        Ok(PriceBook { catalog, offers })
    }

    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.catalog
    }

    pub fn offers(&self) -> &OfferRegistry {
        &self.offers
    }

    /// Splits into catalog and offers.
    pub fn into_parts(self) -> (InMemoryCatalog, OfferRegistry) {
        (self.catalog, self.offers)
    }

    /// A teller serving this price book.
    pub fn into_teller(self, config: EngineConfig) -> Teller<InMemoryCatalog> {
        Teller::with_offers(self.catalog, self.offers, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::ShoppingCart;

    const SAMPLE: &str = r#"{
        "products": [
            { "name": "toothbrush", "unit": "each", "price": 0.99 },
            { "name": "apples", "unit": "kilo", "price": 1.99 },
            { "name": "can of beans", "price": 1.00 }
        ],
        "offers": [
            { "product": "toothbrush", "type": "ten_percent_discount", "costAfterDiscount": 10.0 },
            { "product": "can of beans", "type": "two_for_amount", "costAfterDiscount": 1.5 }
        ]
    }"#;

    #[test]
    fn test_loads_products_and_offers() {
        let book = PriceBook::from_json(SAMPLE).unwrap();

        assert_eq!(book.catalog().len(), 3);
        assert_eq!(book.offers().len(), 2);

        let beans = book.catalog().product("can of beans").unwrap().clone();
        assert_eq!(beans.unit(), ProductUnit::Each);
        assert_eq!(book.catalog().unit_price(&beans), Money::new(1.0));
        assert_eq!(
            book.offers().offer_for(&beans).unwrap().offer,
            Offer::TwoForAmount {
                bundle_price: Money::new(1.5)
            }
        );
    }

    #[test]
    fn test_into_teller_checks_out() {
        let teller = PriceBook::from_json(SAMPLE)
            .unwrap()
            .into_teller(EngineConfig::default());

        let beans = teller.catalog().product("can of beans").unwrap().clone();
        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(beans, 2.0);

        assert_eq!(
            teller.checks_out_articles_from(&cart).total_price(),
            Money::new(1.5)
        );
    }

    #[test]
    fn test_three_for_two_needs_no_parameter() {
        let json = r#"{
            "products": [{ "name": "toothbrush", "price": 10.0 }],
            "offers": [{ "product": "toothbrush", "type": "three_for_two" }]
        }"#;
        let (_, offers) = PriceBook::from_json(json).unwrap().into_parts();
        assert_eq!(offers.iter().next().unwrap().offer, Offer::ThreeForTwo);
    }

    #[test]
    fn test_later_offer_wins() {
        let json = r#"{
            "products": [{ "name": "rice", "price": 2.0 }],
            "offers": [
                { "product": "rice", "type": "two_for_amount", "costAfterDiscount": 3.0 },
                { "product": "rice", "type": "five_for_amount", "costAfterDiscount": 8.0 }
            ]
        }"#;
        let book = PriceBook::from_json(json).unwrap();
        assert_eq!(book.offers().len(), 1);
        assert_eq!(
            book.offers().iter().next().unwrap().offer,
            Offer::FiveForAmount {
                bundle_price: Money::new(8.0)
            }
        );
    }

    #[test]
    fn test_unknown_product_in_offer() {
        let json = r#"{
            "products": [],
            "offers": [{ "product": "ghost", "type": "three_for_two" }]
        }"#;
        let err = PriceBook::from_json(json).unwrap_err();
        assert!(matches!(err, CoreError::UnknownProduct(name) if name == "ghost"));
    }

    #[test]
    fn test_duplicate_product() {
        let json = r#"{
            "products": [
                { "name": "rice", "price": 2.0 },
                { "name": "rice", "price": 2.5 }
            ]
        }"#;
        let err = PriceBook::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let negative_price = r#"{ "products": [{ "name": "rice", "price": -1.0 }] }"#;
        assert!(matches!(
            PriceBook::from_json(negative_price),
            Err(CoreError::Validation(_))
        ));

        let bad_percent = r#"{
            "products": [{ "name": "rice", "price": 1.0 }],
            "offers": [{ "product": "rice", "type": "ten_percent_discount", "costAfterDiscount": 150.0 }]
        }"#;
        assert!(matches!(
            PriceBook::from_json(bad_percent),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));

        let blank_name = r#"{ "products": [{ "name": " ", "price": 1.0 }] }"#;
        assert!(PriceBook::from_json(blank_name).is_err());
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            PriceBook::from_json("not json"),
            Err(CoreError::InvalidPriceBook(_))
        ));
        assert!(matches!(
            PriceBook::from_json(r#"{ "products": [], "discounts": [] }"#),
            Err(CoreError::InvalidPriceBook(_))
        ));
        assert!(matches!(
            PriceBook::from_json(
                r#"{ "products": [{ "name": "rice", "price": 1.0 }],
                     "offers": [{ "product": "rice", "type": "buy_one_get_one" }] }"#
            ),
            Err(CoreError::InvalidPriceBook(_))
        ));
    }
}
