//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required form field was empty.
    #[error("{0} is required")]
    MissingField(&'static str),
}

impl AuthError {
    /// Name of the offending form field.
    pub fn field(&self) -> &'static str {
        match self {
            AuthError::MissingField(field) => *field,
        }
    }
}
