//! Login modal form model.

use crate::AuthError;
use serde::{Deserialize, Serialize};

/// Which side of the login modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    /// The other mode, for the "Sign Up" / "Sign In" switch link.
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account?",
            AuthMode::SignUp => "Already have an account?",
        }
    }

    /// Fields rendered in this mode, in form order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            AuthMode::SignIn => &["email", "password"],
            AuthMode::SignUp => &["name", "email", "phone", "password"],
        }
    }
}

/// Values typed into the login modal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn sign_up(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            password: password.into(),
        }
    }

    /// Set a field by its input name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "password" => self.password = value,
            _ => {}
        }
    }

    /// Read a field by its input name.
    pub fn get(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "password" => &self.password,
            _ => "",
        }
    }

    /// Check that every field the mode shows is filled in.
    ///
    /// Mirrors an HTML `required` input: only an empty value is missing,
    /// whitespace counts as filled in.
    pub fn validate(&self, mode: AuthMode) -> Result<(), AuthError> {
        for field in mode.fields() {
            if self.get(field).is_empty() {
                return Err(AuthError::MissingField(*field));
            }
        }
        Ok(())
    }

    /// Reset all fields after a submit.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
