//! Storefront state for the skincare shop.
//!
//! [`Storefront`] is the single state container behind every view: cart,
//! current page and search text, session, checkout progress, favorites
//! and the newsletter form. It is configured from a [`StorefrontConfig`]
//! file and works over the shared [`glow_commerce::catalog::Catalog`].
//!
//! ```rust
//! use glow_core::prelude::*;
//!
//! let mut store = Storefront::default();
//! store.search("  hydration ");
//! assert_eq!(store.page(), Page::Search);
//! assert!(!store.search_results().is_empty());
//!
//! store.navigate_to(Page::Products);
//! assert_eq!(store.navigator().search_query(), "");
//! ```

pub mod config;
pub mod error;
pub mod favorites;
pub mod newsletter;
pub mod router;
pub mod state;

pub use config::StorefrontConfig;
pub use error::CoreError;
pub use router::{Navigator, Page};
pub use state::Storefront;

// Re-export the domain crates so front-ends depend on one crate.
pub use glow_auth as auth;
pub use glow_commerce as commerce;

pub mod prelude {
    pub use crate::config::{LogFormat, StorefrontConfig, UiConfig};
    pub use crate::error::CoreError;
    pub use crate::favorites::Favorites;
    pub use crate::newsletter::{NewsletterSignup, NewsletterStatus};
    pub use crate::router::{Navigator, Page};
    pub use crate::state::Storefront;

    pub use glow_auth::{AuthMode, LoginForm, SignInPolicy, User};
    pub use glow_commerce::prelude::*;
}
