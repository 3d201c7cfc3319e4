//! How sign-in picks the session identity.

use crate::{LoginForm, User};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identity adopted on sign-in.
///
/// Neither variant checks the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignInPolicy {
    /// Always sign in as [`User::demo`].
    #[default]
    DemoIdentity,
    /// Use the typed email; the name is taken from its local part.
    FromCredentials,
}

impl SignInPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignInPolicy::DemoIdentity => "demo-identity",
            SignInPolicy::FromCredentials => "from-credentials",
        }
    }

    /// Resolve the user for a sign-in form.
    pub fn resolve(&self, form: &LoginForm) -> User {
        match self {
            SignInPolicy::DemoIdentity => User::demo(),
            SignInPolicy::FromCredentials => {
                let email = form.email.trim();
                let local = email.split('@').next().unwrap_or(email);
                User::new(local, email, form.phone.trim())
            }
        }
    }
}

impl fmt::Display for SignInPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignInPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "demo-identity" => Ok(SignInPolicy::DemoIdentity),
            "from-credentials" => Ok(SignInPolicy::FromCredentials),
            other => Err(format!("unknown sign-in policy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_identity_ignores_form() {
        let form = LoginForm::sign_in("someone@else.org", "pw");
        assert_eq!(SignInPolicy::DemoIdentity.resolve(&form), User::demo());
    }

    #[test]
    fn test_from_credentials_uses_email() {
        let form = LoginForm::sign_in(" jo@example.com ", "pw");
        let user = SignInPolicy::FromCredentials.resolve(&form);
        assert_eq!(user.name, "jo");
        assert_eq!(user.email, "jo@example.com");
    }

    #[test]
    fn test_parse_and_serde_agree() {
        for policy in [SignInPolicy::DemoIdentity, SignInPolicy::FromCredentials] {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{}\"", policy));
            assert_eq!(policy.as_str().parse::<SignInPolicy>(), Ok(policy));
        }
        assert!("root".parse::<SignInPolicy>().is_err());
    }
}
