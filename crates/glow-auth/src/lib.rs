//! Customer session for the storefront.
//!
//! Provides the login form model, the sign-in / sign-up rules and the
//! single optional session user. There is no credential store: signing in
//! is a placeholder that never contacts a backend.

mod error;
mod form;
mod policy;
mod session;
mod user;

pub use error::AuthError;
pub use form::{AuthMode, LoginForm};
pub use policy::SignInPolicy;
pub use session::Session;
pub use user::User;
