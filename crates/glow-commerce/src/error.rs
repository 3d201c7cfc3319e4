//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront commerce operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout was requested for an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// A checkout is already being processed.
    #[error("A checkout is already in progress")]
    CheckoutInProgress,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition {
        from: &'static str,
        to: &'static str,
    },

    /// Category tag not recognised.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
