//! Skincare storefront domain types and logic.
//!
//! This crate provides the in-memory model behind the storefront:
//!
//! - **Catalog**: Products, gift sets, categories, the shared static catalog
//! - **Cart**: Cart items keyed by product id, pricing breakdown
//! - **Checkout**: Simulated `Idle -> Processing -> Complete` checkout
//! - **Search**: Case-insensitive text and category filtering
//!
//! # Example
//!
//! ```rust
//! use glow_commerce::prelude::*;
//!
//! let catalog = Catalog::shared();
//! let serum = catalog.product(ProductId::new(1)).unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add_item(serum);
//! cart.add_item(serum);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price().display(), "$178.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartPricing, PricingPolicy};

    // Checkout
    pub use crate::checkout::{CheckoutFlow, CheckoutStatus, CheckoutTimings, OrderConfirmation};

    // Search
    pub use crate::search::{Filter, SearchQuery, SearchResults};
}
