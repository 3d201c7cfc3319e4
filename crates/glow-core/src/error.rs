//! Core error types.

use glow_auth::AuthError;
use glow_commerce::CommerceError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the storefront state and its configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Config file could not be read or written.
    #[error("cannot access config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file contents did not parse.
    #[error("invalid config file {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Page tag not recognised.
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

impl CoreError {
    /// True for errors the customer caused by submitting a form.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CoreError::Auth(_)
                | CoreError::Commerce(CommerceError::EmptyCart)
                | CoreError::Commerce(CommerceError::CheckoutInProgress)
        )
    }
}
