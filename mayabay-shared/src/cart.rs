//! In-memory shopping cart: an ordered list of product+size selections.
//!
//! Cart state lives for the page only; a reload empties it. Line ids are
//! minted from the current time by the caller, unique enough for one
//! session's list and nothing more.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// One product+size selection inside the cart.
///
/// Copies the product's display fields so the line survives catalog
/// refreshes. Serialized as-is to the checkout endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Session-unique line identifier.
    pub line_id: u64,

    /// The catalog product this line was copied from.
    pub product_id: i64,

    /// Display name.
    pub name: String,

    /// Price in BRL; the size never changes it.
    pub price: f64,

    /// Image for the cart row.
    pub image_url: String,

    /// The chosen size.
    pub size: String,
}

impl CartLine {
    /// Copies `product`'s display fields into a new line.
    pub fn new(product: &Product, size: impl Into<String>, line_id: u64) -> Self {
        Self {
            line_id,
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            size: size.into(),
        }
    }
}

/// The cart itself: ordered lines, recomputed totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Appends a line to the end of the cart.
    pub fn add(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Removes exactly the line with `line_id`; no-op when absent.
    pub fn remove(&mut self, line_id: u64) {
        self.lines.retain(|line| line.line_id != line_id);
    }

    /// Sum of line prices.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(|line| line.price).sum()
    }

    /// Number of lines, for the count badge.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64) -> Product {
        Product {
            id,
            name: format!("Produto {id}"),
            price,
            category: "Feminino".to_string(),
            sub_category: String::new(),
            image_url: String::new(),
        }
    }

    #[test]
    fn test_add_then_remove_restores_cart() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&product(1, 100.0), "M", 10));
        let before_len = cart.len();
        let before_total = cart.total();

        cart.add(CartLine::new(&product(2, 50.0), "P", 11));
        cart.remove(11);

        assert_eq!(cart.len(), before_len);
        assert_eq!(cart.total(), before_total);
    }

    #[test]
    fn test_remove_unknown_line_is_a_noop() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&product(1, 100.0), "M", 10));

        cart.remove(999);

        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_sums_line_prices() {
        let mut cart = Cart::default();
        cart.add(CartLine::new(&product(1, 100.0), "M", 10));
        cart.add(CartLine::new(&product(2, 50.0), "G", 11));

        assert_eq!(cart.total(), 150.0);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_size_does_not_affect_total() {
        let item = product(1, 100.0);
        let mut small = Cart::default();
        small.add(CartLine::new(&item, "P", 1));
        let mut large = Cart::default();
        large.add(CartLine::new(&item, "GG", 2));

        assert_eq!(small.total(), large.total());
    }

    #[test]
    fn test_same_product_twice_keeps_both_lines() {
        let item = product(1, 100.0);
        let mut cart = Cart::default();
        cart.add(CartLine::new(&item, "M", 1));
        cart.add(CartLine::new(&item, "M", 2));

        cart.remove(1);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].line_id, 2);
    }

    #[test]
    fn test_line_copies_product_fields() {
        let item = product(7, 89.9);
        let line = CartLine::new(&item, "M", 42);

        assert_eq!(line.product_id, 7);
        assert_eq!(line.name, "Produto 7");
        assert_eq!(line.price, 89.9);
        assert_eq!(line.size, "M");
    }
}
