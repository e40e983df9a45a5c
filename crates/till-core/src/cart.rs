//! # Shopping Cart
//!
//! Records what the customer puts in the basket.
//!
//! ## Two Views of the Same Basket
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_item_quantity(apples, 1.0)                                         │
//! │  add_item_quantity(beans,  2.0)                                         │
//! │  add_item_quantity(apples, 0.5)                                         │
//! │                                                                         │
//! │  items()               (one per addition → receipt line items)          │
//! │    apples 1.0 │ beans 2.0 │ apples 0.5                                 │
//! │                                                                         │
//! │  product_quantities()  (one per product → offer engine)                 │
//! │    apples 1.5 │ beans 2.0                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Aggregates keep the order in which each product was first added.

use std::collections::HashMap;

use crate::types::{Product, ProductQuantity};
use crate::validation::{validate_quantity, ValidationResult};

/// The shopping cart.
///
/// ## Invariants
/// - `items` is in insertion order, one entry per addition
/// - For every product, the sum of its `items` quantities equals its
///   aggregated quantity
/// - Quantities are not validated by `add_item_quantity`; zero and negative
///   values flow straight into the arithmetic
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<ProductQuantity>,
    product_quantities: Vec<ProductQuantity>,
    index: HashMap<Product, usize>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single unit of `product`.
    pub fn add_item(&mut self, product: Product) {
        self.add_item_quantity(product, 1.0);
    }

    /// Adds `quantity` of `product`.
    ///
    /// ## Behavior
    /// - Always appends a new cart line
    /// - Creates the product's aggregate, or adds to the existing one
    pub fn add_item_quantity(&mut self, product: Product, quantity: f64) {
        match self.index.get(&product) {
            Some(&position) => self.product_quantities[position].quantity += quantity,
            None => {
                self.index
                    .insert(product.clone(), self.product_quantities.len());
                self.product_quantities
                    .push(ProductQuantity::new(product.clone(), quantity));
            }
        }
        self.items.push(ProductQuantity::new(product, quantity));
    }

    /// Like [`add_item_quantity`](Self::add_item_quantity), but rejects
    /// quantities that make no sense for the product's unit.
    ///
    /// ## Returns
    /// - `Ok(())` on success, cart updated
    /// - `Err(ValidationError)` if the quantity is not finite, not positive,
    ///   or fractional for a product sold by the piece; cart untouched
    pub fn try_add_item_quantity(&mut self, product: Product, quantity: f64) -> ValidationResult<()> {
        validate_quantity(product.unit(), quantity)?;
        self.add_item_quantity(product, quantity);
        Ok(())
    }

    /// Cart lines in insertion order.
    pub fn items(&self) -> &[ProductQuantity] {
        &self.items
    }

    /// Aggregated quantity per distinct product, in first-added order.
    pub fn product_quantities(&self) -> &[ProductQuantity] {
        &self.product_quantities
    }

    /// Aggregated quantity of `product`, zero if it was never added.
    pub fn quantity_of(&self, product: &Product) -> f64 {
        self.index
            .get(product)
            .map(|&position| self.product_quantities[position].quantity)
            .unwrap_or(0.0)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::ProductUnit;

    fn apples() -> Product {
        Product::new("apples", ProductUnit::Kilo)
    }

    fn beans() -> Product {
        Product::new("can of beans", ProductUnit::Each)
    }

    #[test]
    fn test_cart_add_item_is_one_unit() {
        let mut cart = ShoppingCart::new();
        cart.add_item(beans());

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.quantity_of(&beans()), 1.0);
    }

    #[test]
    fn test_cart_keeps_every_addition() {
        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(apples(), 1.0);
        cart.add_item_quantity(beans(), 2.0);
        cart.add_item_quantity(apples(), 0.5);

        let lines: Vec<(&str, f64)> = cart
            .items()
            .iter()
            .map(|line| (line.product.name(), line.quantity))
            .collect();
        assert_eq!(
            lines,
            vec![("apples", 1.0), ("can of beans", 2.0), ("apples", 0.5)]
        );
    }

    #[test]
    fn test_cart_aggregates_per_product_in_first_seen_order() {
        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(apples(), 1.0);
        cart.add_item_quantity(beans(), 2.0);
        cart.add_item_quantity(apples(), 0.5);

        let aggregates = cart.product_quantities();
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].product, apples());
        assert_eq!(aggregates[0].quantity, 1.5);
        assert_eq!(aggregates[1].product, beans());
        assert_eq!(aggregates[1].quantity, 2.0);
    }

    #[test]
    fn test_cart_accepts_non_positive_quantities() {
        let mut cart = ShoppingCart::new();
        cart.add_item_quantity(beans(), 3.0);
        cart.add_item_quantity(beans(), -1.0);
        cart.add_item_quantity(beans(), 0.0);

        assert_eq!(cart.items().len(), 3);
        assert_eq!(cart.quantity_of(&beans()), 2.0);
    }

    #[test]
    fn test_try_add_rejects_fractional_each() {
        let mut cart = ShoppingCart::new();

        let err = cart.try_add_item_quantity(beans(), 1.5).unwrap_err();
        assert!(matches!(err, ValidationError::NotWholeNumber { .. }));
        assert!(cart.is_empty());

        cart.try_add_item_quantity(apples(), 1.5).unwrap();
        assert_eq!(cart.quantity_of(&apples()), 1.5);
    }

    #[test]
    fn test_quantity_of_unknown_product_is_zero() {
        let cart = ShoppingCart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(&apples()), 0.0);
    }
}
