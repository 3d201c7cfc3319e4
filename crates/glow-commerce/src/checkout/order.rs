//! Order confirmation produced by a completed checkout.

use crate::cart::{Cart, CartItem, CartPricing, PricingPolicy};
use crate::ids::OrderId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a simulated order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Generated order number.
    pub order_id: OrderId,
    /// Items as they were in the cart at checkout.
    pub items: Vec<CartItem>,
    /// Pricing at checkout.
    pub pricing: CartPricing,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Capture the cart and its pricing.
    pub fn from_cart(cart: &Cart, policy: &PricingPolicy) -> Self {
        Self {
            order_id: OrderId::generate(),
            items: cart.items().to_vec(),
            pricing: cart.pricing(policy),
            placed_at: Utc::now(),
        }
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn headline(&self) -> &'static str {
        "Order Successful!"
    }

    pub fn message(&self) -> &'static str {
        "Thank you for your purchase. Your order has been confirmed."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;

    #[test]
    fn test_snapshot_is_independent_of_cart() {
        let catalog = Catalog::shared();
        let mut cart = Cart::new();
        cart.add_item(catalog.product(ProductId::new(10)).unwrap());
        cart.add_item(catalog.product(ProductId::new(10)).unwrap());

        let confirmation = OrderConfirmation::from_cart(&cart, &PricingPolicy::default());
        cart.clear();

        assert_eq!(confirmation.total_items(), 2);
        assert_eq!(confirmation.pricing.subtotal.amount_cents, 7000);
        assert_eq!(confirmation.pricing.tax_total.amount_cents, 560);
        assert!(confirmation.order_id.as_str().starts_with("SK-"));
    }

    #[test]
    fn test_serializes_to_json() {
        let catalog = Catalog::shared();
        let mut cart = Cart::new();
        cart.add_item(catalog.product(ProductId::new(2)).unwrap());

        let confirmation = OrderConfirmation::from_cart(&cart, &PricingPolicy::default());
        let json = serde_json::to_value(&confirmation).unwrap();
        assert_eq!(json["items"][0]["id"], 2);
        assert!(json["placed_at"].is_string());
    }
}
