//! User types.

use serde::{Deserialize, Serialize};

/// The signed-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
}

impl User {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Fixed identity used by the demo sign-in.
    pub fn demo() -> Self {
        Self::new("Demo Customer", "demo@example.com", "555-0100")
    }

    /// First word of the name, for the header greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_name() {
        assert_eq!(User::new("Ada Lovelace", "a@b.c", "1").first_name(), "Ada");
        assert_eq!(User::new("", "a@b.c", "1").first_name(), "");
    }

    #[test]
    fn test_demo_identity() {
        let user = User::demo();
        assert_eq!(user.first_name(), "Demo");
        assert!(user.email.ends_with("@example.com"));
    }
}
