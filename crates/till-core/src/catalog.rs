//! # Catalog
//!
//! Unit price lookup. Checkout only needs `unit_price`; where the prices come
//! from is the caller's business.

use std::collections::HashMap;

use crate::money::Money;
use crate::types::Product;

/// Source of unit prices.
///
/// ## Contract
/// - `unit_price` returns a non-negative price for every product added
/// - Unknown products are implementation-defined; checkout takes whatever is
///   returned at face value
pub trait SupermarketCatalog {
    /// Adds or reprices a product.
    fn add_product(&mut self, product: Product, price: Money);

    /// Current unit price of `product`.
    fn unit_price(&self, product: &Product) -> Money;
}

/// A catalog held in memory. Unknown products cost zero.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: HashMap<String, Product>,
    prices: HashMap<String, Money>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the catalog has been told about `product`.
    pub fn contains(&self, product: &Product) -> bool {
        self.prices.contains_key(product.name())
    }

    /// Looks a product up by name.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl SupermarketCatalog for InMemoryCatalog {
    fn add_product(&mut self, product: Product, price: Money) {
        self.prices.insert(product.name().to_string(), price);
        self.products.insert(product.name().to_string(), product);
    }

    fn unit_price(&self, product: &Product) -> Money {
        self.prices
            .get(product.name())
            .copied()
            .unwrap_or_else(Money::zero)
    }
}
