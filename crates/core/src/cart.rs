//! Cart

use rust_decimal::Decimal;

use crate::labels::LabelSet;

/// A single cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Product identifier
    pub product_id: String,

    /// Product category, matched against category eligibility rules
    pub category: String,

    /// Price of a single unit
    pub unit_price: Decimal,

    /// Number of units
    pub quantity: u32,
}

impl CartItem {
    /// Create a new cart line.
    pub fn new(
        product_id: impl Into<String>,
        category: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            category: category.into(),
            unit_price,
            quantity,
        }
    }

    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart holding the given items, in order.
    pub fn with_items(items: impl Into<Vec<CartItem>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Items in the cart.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of cart lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Total monetary value of the cart: the sum of every line's unit price times quantity.
///
/// An empty cart is worth zero.
pub fn cart_value(cart: &Cart) -> Decimal {
    cart.items
        .iter()
        .fold(Decimal::ZERO, |total, item| total.saturating_add(item.line_total()))
}

/// Total number of units in the cart.
pub fn item_count(cart: &Cart) -> u64 {
    cart.items
        .iter()
        .fold(0_u64, |count, item| count.saturating_add(u64::from(item.quantity)))
}

/// Distinct categories present in the cart.
pub fn categories(cart: &Cart) -> LabelSet {
    cart.items.iter().map(|item| item.category.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    fn test_items() -> [CartItem; 3] {
        [
            CartItem::new("p1", "electronics", dec!(100), 2),
            CartItem::new("p2", "books", dec!(12.50), 4),
            CartItem::new("p3", "electronics", dec!(0.99), 1),
        ]
    }

    #[test]
    fn empty_cart_has_zero_value_and_count() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart_value(&cart), Decimal::ZERO);
        assert_eq!(item_count(&cart), 0);
        assert!(categories(&cart).is_empty());
    }

    #[test]
    fn cart_value_sums_price_times_quantity() {
        let cart = Cart::with_items(test_items());

        assert_eq!(cart_value(&cart), dec!(250.99));
    }

    #[test]
    fn item_count_sums_quantities() {
        let cart = Cart::with_items(test_items());

        assert_eq!(cart.len(), 3);
        assert_eq!(item_count(&cart), 7);
    }

    #[test]
    fn zero_quantity_lines_contribute_nothing() {
        let cart = Cart::with_items([CartItem::new("p1", "books", dec!(40), 0)]);

        assert_eq!(cart_value(&cart), Decimal::ZERO);
        assert_eq!(item_count(&cart), 0);
    }

    #[test]
    fn categories_are_distinct() {
        let cart = Cart::with_items(test_items());

        assert_eq!(categories(&cart), LabelSet::from_strs(&["books", "electronics"]));
    }
}
