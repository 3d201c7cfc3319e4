//! Shopping cart module.
//!
//! Contains the cart, its items, and the pricing breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem};
pub use pricing::{CartPricing, LineItemPricing, PricingPolicy};
