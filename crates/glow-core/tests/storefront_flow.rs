//! End-to-end storefront behaviour over the shared catalog.

use futures::executor::block_on;
use glow_core::prelude::*;
use std::cell::Cell;
use std::time::Duration;

fn id(n: u32) -> ProductId {
    ProductId::new(n)
}

fn no_sleep(_: Duration) -> std::future::Ready<()> {
    std::future::ready(())
}

fn expected_total(store: &Storefront) -> i64 {
    store
        .cart()
        .items()
        .iter()
        .map(|i| i.price.amount_cents * i64::from(i.quantity))
        .sum()
}

#[test]
fn test_every_product_added_twice_has_one_entry() {
    let mut store = Storefront::default();
    let ids: Vec<ProductId> = store
        .catalog()
        .iter()
        .map(|p| p.id)
        .collect();

    for pid in &ids {
        store.add_to_cart(*pid).unwrap();
        store.add_to_cart(*pid).unwrap();
    }

    assert_eq!(store.cart().unique_item_count(), ids.len());
    assert!(store.cart().items().iter().all(|i| i.quantity == 2));
    assert_eq!(store.total_items(), 2 * ids.len() as u64);
}

#[test]
fn test_zero_quantity_drops_prior_quantity() {
    let mut store = Storefront::default();
    for _ in 0..3 {
        store.add_to_cart(id(4)).unwrap();
    }
    store.add_to_cart(id(7)).unwrap();
    let before = store.total_items();

    assert!(store.update_quantity(id(4), 0));
    assert_eq!(store.total_items(), before - 3);
    assert!(store.cart().get_item(id(4)).is_none());
}

#[test]
fn test_total_price_tracks_mixed_mutations() {
    let mut store = Storefront::default();
    store.add_to_cart(id(1)).unwrap();
    store.add_to_cart(id(3)).unwrap();
    store.add_to_cart(id(1)).unwrap();
    store.add_to_cart(id(102)).unwrap();
    assert_eq!(store.total_price().amount_cents, expected_total(&store));

    store.update_quantity(id(3), 4);
    store.remove_from_cart(id(102));
    store.remove_from_cart(id(55));
    store.update_quantity(id(1), -1);
    assert_eq!(store.total_price().amount_cents, expected_total(&store));
    assert_eq!(store.total_price().display(), "$500.00");
}

#[test]
fn test_blank_search_never_enters_search_page() {
    let mut store = Storefront::default();
    for query in ["", " ", "\t\n"] {
        store.search(query);
        assert_ne!(store.page(), Page::Search);
        assert!(store.search_results().is_empty());
    }
}

#[test]
fn test_typing_then_clearing_search_leaves_search_page() {
    let mut store = Storefront::default();
    for typed in ["s", "se", "ser", "serum"] {
        store.search(typed);
        assert_eq!(store.page(), Page::Search);
        assert_eq!(store.navigator().search_query(), typed);
    }
    assert_eq!(store.search_results().len(), 3);

    store.search("");
    assert_eq!(store.page(), Page::Home);
    assert!(!store.navigator().is_searching());
    assert!(store.navigator().shows_footer());
}

#[test]
fn test_back_to_home_from_search_results() {
    let mut store = Storefront::default();
    store.search("no such product");
    assert!(store.search_results().is_empty());
    assert!(!store.navigator().shows_footer());

    store.navigate_to(Page::Home);
    assert_eq!(store.page(), Page::Home);
    assert_eq!(store.navigator().search_query(), "");
    assert!(store.navigator().shows_footer());
}

#[test]
fn test_trailing_space_narrows_search() {
    let mut store = Storefront::default();
    store.search("serum ");
    let ids: Vec<u32> = store.search_results().items.iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1, 6]);
}

#[test]
fn test_description_substring_finds_single_product() {
    let mut store = Storefront::default();
    store.search("DARK CIRCLES");

    let results = store.search_results();
    assert_eq!(results.len(), 1);
    assert_eq!(results.items[0].id, id(5));
}

#[test]
fn test_search_skips_gift_sets() {
    let mut store = Storefront::default();
    store.search("Luxury Collection");
    assert_eq!(store.page(), Page::Search);
    assert!(store.search_results().is_empty());
}

#[test]
fn test_category_filter_is_exact_subsequence() {
    let store = Storefront::default();
    let all = store.catalog().products();

    for filter in CategoryFilter::tabs() {
        let expected: Vec<ProductId> = all
            .iter()
            .filter(|p| match filter {
                CategoryFilter::All => true,
                CategoryFilter::Only(c) => p.category == c,
            })
            .map(|p| p.id)
            .collect();
        let got: Vec<ProductId> = store.products_in(filter).iter().map(|p| p.id).collect();
        assert_eq!(got, expected, "filter {}", filter.as_str());
    }

    assert_eq!(store.products_in(CategoryFilter::All).len(), all.len());
}

#[test]
fn test_tax_and_total() {
    let mut store = Storefront::default();
    store.add_to_cart(id(10)).unwrap(); // $35
    store.add_to_cart(id(8)).unwrap(); // $72

    let pricing = store.pricing();
    assert_eq!(pricing.subtotal.display(), "$107.00");
    assert_eq!(pricing.shipping_display(), "Free");
    assert_eq!(pricing.tax_total.display(), "$8.56");
    assert_eq!(pricing.grand_total.display(), "$115.56");
}

#[test]
fn test_checkout_refuses_empty_cart() {
    let mut store = Storefront::default();
    let err = block_on(store.checkout(no_sleep)).unwrap_err();
    assert!(matches!(err, CoreError::Commerce(CommerceError::EmptyCart)));
    assert_eq!(store.checkout_status(), CheckoutStatus::Idle);
}

#[test]
fn test_checkout_refuses_reentry() {
    let mut store = Storefront::default();
    store.add_to_cart(id(6)).unwrap();
    store.begin_checkout().unwrap();

    let err = store.begin_checkout().unwrap_err();
    assert!(matches!(
        err,
        CoreError::Commerce(CommerceError::CheckoutInProgress)
    ));
    assert!(store.checkout_status().locks_cart());
}

#[test]
fn test_checkout_empties_cart_and_closes_panel() {
    let mut store = Storefront::default();
    store.add_to_cart(id(2)).unwrap();
    store.add_to_cart(id(9)).unwrap();
    store.open_cart();
    let sleeps = Cell::new(0);

    let confirmation = block_on(store.checkout(|_| {
        sleeps.set(sleeps.get() + 1);
        std::future::ready(())
    }))
    .unwrap();

    assert_eq!(sleeps.get(), 2);
    assert_eq!(confirmation.total_items(), 2);
    assert_eq!(confirmation.pricing.subtotal.display(), "$130.00");
    assert!(store.cart().is_empty());
    assert!(!store.is_cart_open());
    assert_eq!(store.checkout_status(), CheckoutStatus::Idle);
}

#[test]
fn test_navigation_clears_search() {
    let mut store = Storefront::default();
    store.search("serum");
    assert!(store.navigator().is_searching());

    for page in Page::NAV {
        store.search("serum");
        store.navigate_to(page);
        assert_eq!(store.navigator().search_query(), "");
        assert_eq!(store.page(), page);
    }
}

#[test]
fn test_sign_up_blank_field_rejected_and_logout_clears() {
    let mut store = Storefront::default();
    store.open_login();

    let blank_email = LoginForm::sign_up("Jordan Lee", "", "555-0142", "pw");
    let err = store.login(&blank_email, AuthMode::SignUp).unwrap_err();
    assert!(err.is_user_error());
    assert!(store.user().is_none());

    let form = LoginForm::sign_up("Jordan Lee", "jordan@example.com", "555-0142", "pw");
    let user = store.login(&form, AuthMode::SignUp).unwrap();
    assert_eq!(user.first_name(), "Jordan");

    assert!(store.logout().is_some());
    assert!(store.user().is_none());
}

#[test]
fn test_config_policy_drives_sign_in() {
    let mut config = StorefrontConfig::default();
    config.auth.sign_in_policy = SignInPolicy::FromCredentials;
    let mut store = Storefront::new(config);

    store
        .login(&LoginForm::sign_in("sam@example.com", "pw"), AuthMode::SignIn)
        .unwrap();
    assert_eq!(store.user().map(|u| u.name.as_str()), Some("sam"));
}

#[test]
fn test_config_tax_rate_applies() {
    let mut config = StorefrontConfig::default();
    config.pricing.tax_rate_bps = 1000;
    let mut store = Storefront::new(config);
    store.add_to_cart(id(2)).unwrap();

    assert_eq!(store.pricing().tax_total.display(), "$4.50");
}

#[test]
fn test_favorites_and_newsletter() {
    let mut store = Storefront::default();
    assert!(store.toggle_favorite(id(3)));
    assert!(store.favorites().contains(id(3)));

    assert!(!store.subscribe(""));
    assert!(store.subscribe("fan@example.com"));
    assert!(store.newsletter().is_subscribed());
    store.reset_newsletter();
    assert!(!store.newsletter().is_subscribed());
}
