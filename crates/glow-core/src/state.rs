//! Top-level storefront state.

use crate::config::StorefrontConfig;
use crate::favorites::Favorites;
use crate::newsletter::NewsletterSignup;
use crate::router::{Navigator, Page};
use crate::CoreError;
use glow_auth::{AuthMode, LoginForm, Session, User};
use glow_commerce::cart::{Cart, CartPricing};
use glow_commerce::catalog::{Catalog, CategoryFilter, Product};
use glow_commerce::checkout::{CheckoutFlow, CheckoutStatus, OrderConfirmation};
use glow_commerce::search::{SearchQuery, SearchResults};
use glow_commerce::{CommerceError, Money, ProductId};
use std::future::Future;
use std::time::Duration;
use tracing::info;

/// Everything the storefront views read and mutate.
///
/// Views hold no copies of this data; they call methods here and
/// re-render from the result.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: &'static Catalog,
    config: StorefrontConfig,
    cart: Cart,
    navigator: Navigator,
    session: Session,
    checkout: CheckoutFlow,
    favorites: Favorites,
    newsletter: NewsletterSignup,
    cart_open: bool,
    login_open: bool,
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}

impl Storefront {
    /// Create a storefront over the shared catalog.
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_catalog(Catalog::shared(), config)
    }

    pub fn with_catalog(catalog: &'static Catalog, config: StorefrontConfig) -> Self {
        Self {
            catalog,
            checkout: CheckoutFlow::new(config.checkout),
            config,
            cart: Cart::new(),
            navigator: Navigator::new(),
            session: Session::new(),
            favorites: Favorites::new(),
            newsletter: NewsletterSignup::new(),
            cart_open: false,
            login_open: false,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    // Cart

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a catalog product (single product or gift set).
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<u32, CoreError> {
        let product = self
            .catalog
            .product(id)
            .ok_or(CommerceError::ProductNotFound(id))?;
        Ok(self.cart.add_item(product))
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        self.cart.remove_item(id)
    }

    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        self.cart.update_quantity(id, quantity)
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Subtotal, shipping, tax and total under the configured policy.
    pub fn pricing(&self) -> CartPricing {
        self.cart.pricing(&self.config.pricing)
    }

    // Panels

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn is_login_open(&self) -> bool {
        self.login_open
    }

    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    // Session

    pub fn user(&self) -> Option<&User> {
        self.session.current()
    }

    /// Submit the login modal. Closes it on success.
    pub fn login(&mut self, form: &LoginForm, mode: AuthMode) -> Result<&User, CoreError> {
        let user = self
            .session
            .login(form, mode, self.config.auth.sign_in_policy)?;
        self.login_open = false;
        Ok(user)
    }

    pub fn logout(&mut self) -> Option<User> {
        self.session.logout()
    }

    // Navigation and search

    pub fn page(&self) -> Page {
        self.navigator.page()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigate_to(&mut self, page: Page) {
        self.navigator.navigate_to(page);
    }

    pub fn shop_collection(&mut self) {
        self.navigator.shop_collection();
    }

    pub fn learn_more(&mut self) {
        self.navigator.learn_more();
    }

    pub fn search(&mut self, query: impl Into<String>) {
        self.navigator.search(query);
    }

    /// Products matching the current search text.
    pub fn search_results(&self) -> SearchResults {
        SearchQuery::parse(self.navigator.search_query()).apply(self.catalog.products())
    }

    pub fn products_in(&self, filter: CategoryFilter) -> Vec<&'static Product> {
        self.catalog.in_category(filter)
    }

    pub fn gift_sets(&self) -> &'static [Product] {
        self.catalog.gift_sets()
    }

    // Favorites and newsletter

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        self.favorites.toggle(id)
    }

    pub fn newsletter(&self) -> &NewsletterSignup {
        &self.newsletter
    }

    pub fn subscribe(&mut self, email: &str) -> bool {
        self.newsletter.submit(email)
    }

    pub fn reset_newsletter(&mut self) {
        self.newsletter.reset();
    }

    // Checkout

    pub fn checkout_status(&self) -> CheckoutStatus {
        self.checkout.status()
    }

    pub fn order_confirmation(&self) -> Option<&OrderConfirmation> {
        self.checkout.confirmation()
    }

    pub fn begin_checkout(&mut self) -> Result<(), CoreError> {
        Ok(self.checkout.begin(&self.cart)?)
    }

    pub fn complete_checkout(&mut self) -> Result<OrderConfirmation, CoreError> {
        Ok(self.checkout.complete(&self.cart, &self.config.pricing)?)
    }

    /// Empty the cart and close the cart panel.
    pub fn finish_checkout(&mut self) -> Result<(), CoreError> {
        self.checkout.finish(&mut self.cart)?;
        self.cart_open = false;
        Ok(())
    }

    /// Run the simulated checkout end to end.
    pub async fn checkout<S, F>(&mut self, sleep: S) -> Result<OrderConfirmation, CoreError>
    where
        S: Fn(Duration) -> F,
        F: Future<Output = ()>,
    {
        let policy = self.config.pricing;
        let confirmation = self.checkout.run(&mut self.cart, &policy, sleep).await?;
        self.cart_open = false;
        info!(order_id = %confirmation.order_id, "order placed");
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_unknown_product() {
        let mut store = Storefront::default();
        let err = store.add_to_cart(ProductId::new(999)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Commerce(CommerceError::ProductNotFound(_))
        ));
        assert_eq!(store.total_items(), 0);
    }

    #[test]
    fn test_gift_sets_can_be_added() {
        let mut store = Storefront::default();
        store.add_to_cart(ProductId::new(101)).unwrap();
        assert_eq!(store.total_price().display(), "$199.00");
    }

    #[test]
    fn test_login_closes_modal() {
        let mut store = Storefront::default();
        store.open_login();
        store
            .login(&LoginForm::sign_in("x@example.com", "pw"), AuthMode::SignIn)
            .unwrap();
        assert!(!store.is_login_open());
        assert_eq!(store.user(), Some(&User::demo()));
    }

    #[test]
    fn test_failed_login_keeps_modal_open() {
        let mut store = Storefront::default();
        store.open_login();
        assert!(store.login(&LoginForm::new(), AuthMode::SignUp).is_err());
        assert!(store.is_login_open());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_finish_checkout_closes_cart() {
        let mut store = Storefront::default();
        store.add_to_cart(ProductId::new(2)).unwrap();
        store.open_cart();

        store.begin_checkout().unwrap();
        store.complete_checkout().unwrap();
        assert!(store.is_cart_open());
        store.finish_checkout().unwrap();

        assert!(!store.is_cart_open());
        assert!(store.cart().is_empty());
    }
}
