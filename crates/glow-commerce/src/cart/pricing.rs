//! Cart pricing calculations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Tax and shipping rules applied to the cart subtotal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PricingPolicy {
    /// Sales tax in basis points (800 = 8%).
    pub tax_rate_bps: u32,
    /// Flat shipping charge in cents (0 = free shipping).
    pub shipping_cents: i64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate_bps: 800,
            shipping_cents: 0,
        }
    }
}

impl PricingPolicy {
    /// Tax rate as a percentage for display (e.g., 8.0).
    pub fn tax_percent(&self) -> f64 {
        f64::from(self.tax_rate_bps) / 100.0
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping_total: Money,
    /// Tax amount.
    pub tax_total: Money,
    /// Final total (subtotal + shipping + tax).
    pub grand_total: Money,
    /// Per-item pricing breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Check if shipping is free.
    pub fn is_free_shipping(&self) -> bool {
        self.shipping_total.is_zero()
    }

    /// Shipping label for the order summary.
    pub fn shipping_display(&self) -> String {
        if self.is_free_shipping() {
            "Free".to_string()
        } else {
            self.shipping_total.display()
        }
    }
}

/// Pricing breakdown for a single cart item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product id.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// unit_price * quantity.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_default_policy() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.tax_rate_bps, 800);
        assert_eq!(policy.shipping_cents, 0);
        assert!((policy.tax_percent() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shipping_display() {
        let mut pricing = CartPricing {
            subtotal: Money::new(10000, Currency::USD),
            shipping_total: Money::zero(Currency::USD),
            tax_total: Money::new(800, Currency::USD),
            grand_total: Money::new(10800, Currency::USD),
            line_items: vec![],
        };
        assert_eq!(pricing.shipping_display(), "Free");

        pricing.shipping_total = Money::new(595, Currency::USD);
        assert_eq!(pricing.shipping_display(), "$5.95");
    }
}
