//! Session management.

use crate::{AuthError, AuthMode, LoginForm, SignInPolicy, User};
use serde::{Deserialize, Serialize};
use tracing::info;

/// The current session: at most one signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Create a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in or sign up from the login form.
    ///
    /// Sign-up adopts the form's name, email and phone verbatim. Sign-in needs only
    /// an email and password and then defers to `policy`. Any previous
    /// user is replaced.
    pub fn login(
        &mut self,
        form: &LoginForm,
        mode: AuthMode,
        policy: SignInPolicy,
    ) -> Result<&User, AuthError> {
        form.validate(mode)?;

        let user = match mode {
            AuthMode::SignUp => User::new(
                form.name.as_str(),
                form.email.as_str(),
                form.phone.as_str(),
            ),
            AuthMode::SignIn => policy.resolve(form),
        };

        info!(email = %user.email, mode = ?mode, "customer signed in");
        Ok(self.user.insert(user))
    }

    /// Sign out. Returns the user that was signed in, if any.
    pub fn logout(&mut self) -> Option<User> {
        let user = self.user.take();
        if let Some(user) = &user {
            info!(email = %user.email, "customer signed out");
        }
        user
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
