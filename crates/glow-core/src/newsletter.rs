//! Newsletter signup form.

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsletterStatus {
    #[default]
    Idle,
    /// Thank-you message showing.
    Subscribed,
}

/// State of the "Join Our Beauty Community" form.
///
/// No email is sent or stored anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    status: NewsletterStatus,
    email: String,
}

impl NewsletterSignup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> NewsletterStatus {
        self.status
    }

    pub fn is_subscribed(&self) -> bool {
        self.status == NewsletterStatus::Subscribed
    }

    /// Email of the last accepted submission.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Submit the form. Blank input leaves the state unchanged.
    pub fn submit(&mut self, email: &str) -> bool {
        let email = email.trim();
        if email.is_empty() {
            return false;
        }

        self.email = email.to_string();
        self.status = NewsletterStatus::Subscribed;
        info!(email = %self.email, "newsletter signup");
        true
    }

    /// Back to the empty form once the thank-you has been shown.
    pub fn reset(&mut self) {
        self.status = NewsletterStatus::Idle;
        self.email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_and_reset() {
        let mut signup = NewsletterSignup::new();
        assert!(signup.submit("fan@example.com"));
        assert!(signup.is_subscribed());
        assert_eq!(signup.email(), "fan@example.com");

        signup.reset();
        assert_eq!(signup.status(), NewsletterStatus::Idle);
        assert_eq!(signup.email(), "");
    }

    #[test]
    fn test_blank_email_ignored() {
        let mut signup = NewsletterSignup::new();
        assert!(!signup.submit("  "));
        assert!(!signup.is_subscribed());
    }
}
