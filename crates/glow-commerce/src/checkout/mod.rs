//! Checkout module.
//!
//! Contains the simulated checkout flow and the order confirmation it
//! produces.

mod flow;
mod order;

pub use flow::{CheckoutFlow, CheckoutStatus, CheckoutTimings};
pub use order::OrderConfirmation;
