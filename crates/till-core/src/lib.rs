//! # till-core: Pure Pricing Logic for Till
//!
//! This crate prices a shopping cart against a catalog and a set of special
//! offers and produces a receipt. Everything here is a pure computation with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Checkout Data Flow                             │
//! │                                                                         │
//! │   ┌───────────┐   ┌───────────────┐   ┌───────────────┐                │
//! │   │   cart    │   │    catalog    │   │    offers     │                │
//! │   │ additions │   │  unit prices  │   │ product→offer │                │
//! │   └─────┬─────┘   └───────┬───────┘   └───────┬───────┘                │
//! │         │                 │                   │                         │
//! │         └─────────────────┼───────────────────┘                         │
//! │                           ▼                                             │
//! │                 ┌───────────────────┐      ┌──────────────┐            │
//! │                 │      engine       │◄─────│    config    │            │
//! │                 │ per-product offer │      │ bundle policy│            │
//! │                 │    arithmetic     │      └──────────────┘            │
//! │                 └─────────┬─────────┘                                   │
//! │                           ▼                                             │
//! │                 ┌───────────────────┐                                   │
//! │                 │      receipt      │                                   │
//! │                 │ items + discounts │                                   │
//! │                 └───────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, ProductUnit, ProductQuantity, Discount
//! - [`money`] - Money amounts
//! - [`cart`] - ShoppingCart
//! - [`catalog`] - SupermarketCatalog trait and InMemoryCatalog
//! - [`offers`] - Offer definitions and the OfferRegistry
//! - [`engine`] - Offer application engine
//! - [`receipt`] - Receipt assembly (`checkout`)
//! - [`teller`] - Teller: catalog + offers + config in one place
//! - [`price_book`] - Catalog and offers from a JSON document
//! - [`config`] - Engine configuration
//! - [`validation`] - Opt-in input checks
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{checkout, EngineConfig, InMemoryCatalog, Money, OfferRegistry,
//!                 Product, ProductUnit, ShoppingCart, SpecialOfferType,
//!                 SupermarketCatalog};
//!
//! let beans = Product::new("can of beans", ProductUnit::Each);
//!
//! let mut catalog = InMemoryCatalog::new();
//! catalog.add_product(beans.clone(), Money::new(1.00));
//!
//! let mut offers = OfferRegistry::new();
//! offers.add_special_offer(SpecialOfferType::TwoForAmount, beans.clone(), 1.50);
//!
//! let mut cart = ShoppingCart::new();
//! cart.add_item_quantity(beans, 2.0);
//!
//! let receipt = checkout(&cart, &offers, &catalog, &EngineConfig::default());
//! assert_eq!(receipt.total_price(), Money::new(1.50));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod money;
pub mod offers;
pub mod price_book;
pub mod receipt;
pub mod teller;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use till_core::Money` instead of
// `use till_core::money::Money`

pub use cart::ShoppingCart;
pub use catalog::{InMemoryCatalog, SupermarketCatalog};
pub use config::{BundleQuantityPolicy, ConfigError, EngineConfig};
pub use engine::{handle_offers, Bundle};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use offers::{Offer, OfferRegistry, SpecialOffer, SpecialOfferType};
pub use price_book::PriceBook;
pub use receipt::{checkout, Receipt, ReceiptItem};
pub use teller::Teller;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
