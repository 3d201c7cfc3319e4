//! Cart and cart item types.

use crate::cart::{CartPricing, LineItemPricing, PricingPolicy};
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shopping cart.
///
/// Holds at most one item per product id, in the order products were
/// first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart.
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the quantity when the product is already in the cart,
    /// otherwise appends a new item with quantity 1. Returns the item's
    /// resulting quantity.
    pub fn add_item(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            debug!(product_id = %product.id, quantity = existing.quantity, "cart quantity incremented");
            return existing.quantity;
        }

        self.items.push(CartItem::from_product(product, 1));
        debug!(product_id = %product.id, "cart item added");
        1
    }

    /// Set an item's quantity.
    ///
    /// A quantity of zero or below removes the item. Returns whether an
    /// item matched.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }

        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                debug!(product_id = %id, quantity = item.quantity, "cart quantity updated");
                true
            }
            None => false,
        }
    }

    /// Remove an item. Missing ids are a no-op.
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(product_id = %id, "cart item removed");
        }
        removed
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get an item by product id.
    pub fn get_item(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price x quantity over all items.
    pub fn total_price(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(Currency::default()), |acc, i| acc + i.line_total())
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculate the pricing breakdown shown in the cart panel.
    pub fn pricing(&self, policy: &PricingPolicy) -> CartPricing {
        let line_items = self
            .items
            .iter()
            .map(|item| LineItemPricing {
                product_id: item.id,
                unit_price: item.price,
                quantity: item.quantity,
                total: item.line_total(),
            })
            .collect();

        let subtotal = self.total_price();
        let shipping_total = Money::new(policy.shipping_cents, subtotal.currency);
        let tax_total = subtotal.basis_points(policy.tax_rate_bps);

        CartPricing {
            subtotal,
            shipping_total,
            tax_total,
            grand_total: subtotal + shipping_total + tax_total,
            line_items,
        }
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product id.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Quantity (always positive).
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart item from a product.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Price x quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply(i64::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: u32, dollars: i64) -> Product {
        Product::new(
            id,
            format!("Product {}", id),
            Category::Serums,
            Money::from_whole(dollars, Currency::USD),
            "https://example.com/p.jpg",
            "Test product",
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_add_same_item_twice_merges() {
        let mut cart = Cart::new();
        let p = product(1, 89);

        assert_eq!(cart.add_item(&p), 1);
        assert_eq!(cart.add_item(&p), 2);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get_item(p.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add_item(&product(3, 10));
        cart.add_item(&product(1, 10));
        cart.add_item(&product(3, 10));

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 10);
        cart.add_item(&p);

        assert!(cart.update_quantity(p.id, 5));
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        let a = product(1, 10);
        let b = product(2, 20);
        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&b);
        let before = cart.total_items();

        assert!(cart.update_quantity(a.id, 0));
        assert!(cart.get_item(a.id).is_none());
        assert_eq!(cart.total_items(), before - 2);
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = Cart::new();
        let p = product(1, 10);
        cart.add_item(&p);
        cart.update_quantity(p.id, -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 10));
        assert!(!cart.update_quantity(ProductId::new(42), 3));
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_update_quantity_has_no_upper_bound() {
        let mut cart = Cart::new();
        let p = product(1, 1);
        cart.add_item(&p);
        cart.update_quantity(p.id, 100_000);
        assert_eq!(cart.total_items(), 100_000);
        cart.update_quantity(p.id, i64::MAX);
        assert_eq!(cart.get_item(p.id).unwrap().quantity, u32::MAX);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let p = product(1, 10);
        cart.add_item(&p);

        assert!(cart.remove_item(p.id));
        assert!(!cart.remove_item(p.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_price() {
        let mut cart = Cart::new();
        let a = product(1, 10);
        let b = product(2, 20);
        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&b);

        assert_eq!(cart.total_price().amount_cents, 4000); // 2*10 + 1*20
    }

    #[test]
    fn test_pricing_adds_tax_and_free_shipping() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 89));
        cart.add_item(&product(2, 45));

        let pricing = cart.pricing(&PricingPolicy::default());
        assert_eq!(pricing.subtotal.amount_cents, 13400);
        assert!(pricing.is_free_shipping());
        assert_eq!(pricing.tax_total.amount_cents, 1072);
        assert_eq!(pricing.grand_total.amount_cents, 14472);
        assert_eq!(pricing.line_items.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&product(1, 10));
        cart.clear();
        assert!(cart.is_empty());
    }
}
