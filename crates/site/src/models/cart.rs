//! Shop cart stored in the session.

use ecobid_core::{Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Orders with a subtotal above this many rupees ship free.
const FREE_SHIPPING_THRESHOLD: i64 = 100;

/// Flat shipping charge below the free-shipping threshold.
const SHIPPING_CHARGE: i64 = 25;

/// One product line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// The session cart. Lines keep the order they were first added in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Add `quantity` of a product, merging with an existing line.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                product_id,
                quantity,
            });
        }
    }

    /// Set a line's quantity. Zero removes the line.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Remove a product's line entirely.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|l| &l.product_id != product_id);
    }

    /// Total number of items across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Computed totals for a cart.
#[derive(Debug, Clone)]
pub struct CartTotals {
    pub subtotal: Price,
    pub shipping: Price,
    pub total: Price,
}

impl CartTotals {
    /// Price a cart against the catalog.
    ///
    /// Lines whose product no longer exists in the catalog contribute
    /// nothing to the subtotal.
    #[must_use]
    pub fn compute(cart: &Cart) -> Self {
        let subtotal = cart
            .lines
            .iter()
            .filter_map(|line| {
                crate::catalog::find(&line.product_id).map(|p| p.price.times(line.quantity))
            })
            .fold(Price::rupees(0), |acc, line_total| acc + line_total);

        // Strictly above the threshold; a subtotal of exactly 100 still pays.
        let shipping = if subtotal.amount > Decimal::from(FREE_SHIPPING_THRESHOLD) {
            Price::rupees(0)
        } else {
            Price::rupees(SHIPPING_CHARGE)
        };

        let total = subtotal + shipping;

        Self {
            subtotal,
            shipping,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_existing_line() {
        let mut cart = Cart::default();
        cart.add(ProductId::new("1"), 1);
        cart.add(ProductId::new("1"), 2);
        cart.add(ProductId::new("2"), 1);

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::default();
        cart.add(ProductId::new("1"), 3);
        cart.set_quantity(&ProductId::new("1"), 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_updates_line() {
        let mut cart = Cart::default();
        cart.add(ProductId::new("1"), 3);
        cart.set_quantity(&ProductId::new("1"), 5);

        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_totals_below_free_shipping_threshold() {
        // Two bottle planters (15 each) plus wood shelves (45) = 75
        let mut cart = Cart::default();
        cart.add(ProductId::new("1"), 2);
        cart.add(ProductId::new("2"), 1);

        let totals = CartTotals::compute(&cart);
        assert_eq!(totals.subtotal.to_string(), "\u{20b9}75");
        assert_eq!(totals.shipping.to_string(), "\u{20b9}25");
        assert_eq!(totals.total.to_string(), "\u{20b9}100");
    }

    #[test]
    fn test_totals_above_free_shipping_threshold() {
        // Outdoor furniture alone is 120
        let mut cart = Cart::default();
        cart.add(ProductId::new("7"), 1);

        let totals = CartTotals::compute(&cart);
        assert!(totals.shipping.is_zero());
        assert_eq!(totals.total.to_string(), "\u{20b9}120");
    }

    #[test]
    fn test_totals_at_threshold_still_charge_shipping() {
        // Wall art is 25 each, so four land exactly on the threshold
        let mut cart = Cart::default();
        cart.add(ProductId::new("3"), 4);

        let totals = CartTotals::compute(&cart);
        assert_eq!(totals.subtotal.to_string(), "\u{20b9}100");
        assert_eq!(totals.shipping.to_string(), "\u{20b9}25");
        assert_eq!(totals.total.to_string(), "\u{20b9}125");
    }

    #[test]
    fn test_totals_skip_unknown_products() {
        let mut cart = Cart::default();
        cart.add(ProductId::new("does-not-exist"), 4);

        let totals = CartTotals::compute(&cart);
        assert!(totals.subtotal.is_zero());
    }
}
