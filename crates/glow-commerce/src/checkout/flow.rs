//! Simulated checkout state machine.

use crate::cart::{Cart, PricingPolicy};
use crate::checkout::OrderConfirmation;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tracing::info;

/// Where the checkout currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    /// No checkout running; the checkout button is enabled.
    #[default]
    Idle,
    /// Waiting on the simulated processing delay.
    Processing,
    /// Showing the order confirmation.
    Complete,
}

impl CheckoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStatus::Idle => "idle",
            CheckoutStatus::Processing => "processing",
            CheckoutStatus::Complete => "complete",
        }
    }

    /// Label for the checkout button.
    pub fn button_label(&self) -> &'static str {
        match self {
            CheckoutStatus::Processing => "Processing...",
            _ => "Secure Checkout",
        }
    }

    /// Cart controls are disabled while an order is processing.
    pub fn locks_cart(&self) -> bool {
        *self == CheckoutStatus::Processing
    }
}

/// Delays used by the simulated checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutTimings {
    /// Time spent "processing" the order.
    pub processing_ms: u64,
    /// How long the confirmation is shown before the cart resets.
    pub confirmation_ms: u64,
}

impl Default for CheckoutTimings {
    fn default() -> Self {
        Self {
            processing_ms: 2000,
            confirmation_ms: 3000,
        }
    }
}

impl CheckoutTimings {
    /// Zero delays, for tests and scripted runs.
    pub const fn instant() -> Self {
        Self {
            processing_ms: 0,
            confirmation_ms: 0,
        }
    }

    pub fn processing(&self) -> Duration {
        Duration::from_millis(self.processing_ms)
    }

    pub fn confirmation(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }
}

/// Checkout flow state.
///
/// There is no payment step and no failure path once processing starts:
/// `begin` -> `complete` -> `finish` always succeeds for a non-empty cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutFlow {
    status: CheckoutStatus,
    /// Delays applied by [`CheckoutFlow::run`].
    pub timings: CheckoutTimings,
    /// Confirmation of the most recent order, kept while `Complete`.
    confirmation: Option<OrderConfirmation>,
}

impl CheckoutFlow {
    /// Create an idle checkout flow.
    pub fn new(timings: CheckoutTimings) -> Self {
        Self {
            status: CheckoutStatus::Idle,
            timings,
            confirmation: None,
        }
    }

    pub fn status(&self) -> CheckoutStatus {
        self.status
    }

    pub fn is_processing(&self) -> bool {
        self.status == CheckoutStatus::Processing
    }

    pub fn is_complete(&self) -> bool {
        self.status == CheckoutStatus::Complete
    }

    /// Confirmation shown while the flow is `Complete`.
    pub fn confirmation(&self) -> Option<&OrderConfirmation> {
        self.confirmation.as_ref()
    }

    /// Start processing an order for `cart`.
    pub fn begin(&mut self, cart: &Cart) -> Result<(), CommerceError> {
        if self.status != CheckoutStatus::Idle {
            return Err(CommerceError::CheckoutInProgress);
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        self.status = CheckoutStatus::Processing;
        info!(items = cart.total_items(), total = %cart.total_price(), "checkout started");
        Ok(())
    }

    /// Finish processing and produce the order confirmation.
    pub fn complete(
        &mut self,
        cart: &Cart,
        policy: &PricingPolicy,
    ) -> Result<OrderConfirmation, CommerceError> {
        if self.status != CheckoutStatus::Processing {
            return Err(self.invalid_transition(CheckoutStatus::Complete));
        }

        let confirmation = OrderConfirmation::from_cart(cart, policy);
        self.status = CheckoutStatus::Complete;
        self.confirmation = Some(confirmation.clone());
        info!(order_id = %confirmation.order_id, total = %confirmation.pricing.grand_total, "checkout complete");
        Ok(confirmation)
    }

    /// Dismiss the confirmation, emptying the cart.
    pub fn finish(&mut self, cart: &mut Cart) -> Result<(), CommerceError> {
        if self.status != CheckoutStatus::Complete {
            return Err(self.invalid_transition(CheckoutStatus::Idle));
        }

        cart.clear();
        self.status = CheckoutStatus::Idle;
        self.confirmation = None;
        info!("checkout finished, cart cleared");
        Ok(())
    }

    /// Drive the whole checkout, waiting on `sleep` between steps.
    pub async fn run<S, F>(
        &mut self,
        cart: &mut Cart,
        policy: &PricingPolicy,
        sleep: S,
    ) -> Result<OrderConfirmation, CommerceError>
    where
        S: Fn(Duration) -> F,
        F: Future<Output = ()>,
    {
        self.begin(cart)?;
        sleep(self.timings.processing()).await;
        let confirmation = self.complete(cart, policy)?;
        sleep(self.timings.confirmation()).await;
        self.finish(cart)?;
        Ok(confirmation)
    }

    fn invalid_transition(&self, to: CheckoutStatus) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.status.as_str(),
            to: to.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ids::ProductId;
    use std::cell::RefCell;

    fn cart_with(ids: &[u32]) -> Cart {
        let catalog = Catalog::shared();
        let mut cart = Cart::new();
        for id in ids {
            cart.add_item(catalog.product(ProductId::new(*id)).unwrap());
        }
        cart
    }

    #[test]
    fn test_begin_refuses_empty_cart() {
        let mut flow = CheckoutFlow::default();
        assert_eq!(flow.begin(&Cart::new()), Err(CommerceError::EmptyCart));
        assert_eq!(flow.status(), CheckoutStatus::Idle);
    }

    #[test]
    fn test_begin_refuses_reentry() {
        let cart = cart_with(&[1]);
        let mut flow = CheckoutFlow::default();

        flow.begin(&cart).unwrap();
        assert!(flow.is_processing());
        assert_eq!(flow.begin(&cart), Err(CommerceError::CheckoutInProgress));
    }

    #[test]
    fn test_full_transition_sequence() {
        let mut cart = cart_with(&[1, 2]);
        let mut flow = CheckoutFlow::default();
        let policy = PricingPolicy::default();

        flow.begin(&cart).unwrap();
        let confirmation = flow.complete(&cart, &policy).unwrap();
        assert!(flow.is_complete());
        assert_eq!(confirmation.items.len(), 2);
        assert_eq!(confirmation.pricing.grand_total.amount_cents, 14472);
        assert!(flow.confirmation().is_some());
        assert!(!cart.is_empty());

        flow.finish(&mut cart).unwrap();
        assert!(cart.is_empty());
        assert_eq!(flow.status(), CheckoutStatus::Idle);
        assert!(flow.confirmation().is_none());
    }

    #[test]
    fn test_invalid_transitions() {
        let mut cart = cart_with(&[1]);
        let mut flow = CheckoutFlow::default();

        assert_eq!(
            flow.complete(&cart, &PricingPolicy::default()),
            Err(CommerceError::InvalidCheckoutTransition {
                from: "idle",
                to: "complete",
            })
        );
        assert!(flow.finish(&mut cart).is_err());
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_run_sleeps_with_configured_delays() {
        let mut cart = cart_with(&[3]);
        let mut flow = CheckoutFlow::default();
        let slept = RefCell::new(Vec::new());

        let confirmation = futures::executor::block_on(flow.run(
            &mut cart,
            &PricingPolicy::default(),
            |d| {
                slept.borrow_mut().push(d);
                async {}
            },
        ))
        .unwrap();

        assert_eq!(
            slept.into_inner(),
            vec![Duration::from_millis(2000), Duration::from_millis(3000)]
        );
        assert_eq!(confirmation.pricing.subtotal.amount_cents, 12500);
        assert!(cart.is_empty());
        assert_eq!(flow.status(), CheckoutStatus::Idle);
    }

    #[test]
    fn test_button_label() {
        assert_eq!(CheckoutStatus::Idle.button_label(), "Secure Checkout");
        assert_eq!(CheckoutStatus::Processing.button_label(), "Processing...");
        assert!(CheckoutStatus::Processing.locks_cart());
        assert!(!CheckoutStatus::Complete.locks_cart());
    }
}
