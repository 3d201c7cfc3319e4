//! Product grid with category tabs.

use std::time::Duration;

use glow_core::commerce::catalog::{CategoryFilter, Product};
use glow_core::commerce::ProductId;
use leptos::logging::warn;
use leptos::prelude::*;

use super::stars;
use crate::app::use_store;

#[component]
pub fn ProductGrid() -> impl IntoView {
    let store = use_store();
    let (filter, set_filter) = signal(CategoryFilter::All);

    let products = move || store.with(|s| s.products_in(filter.get()));

    view! {
        <section id="products" class="section products">
            <div class="section-heading">
                <h2>"Our Products"</h2>
                <p>"Discover our complete range of premium skincare products"</p>
            </div>

            <div class="category-tabs">
                {CategoryFilter::tabs().map(|tab| view! {
                    <button
                        class="tab"
                        class:active=move || filter.get() == tab
                        on:click=move |_| set_filter.set(tab)
                    >
                        {tab.display_name()}
                    </button>
                }).collect::<Vec<_>>()}
            </div>

            <div class="product-grid">
                {move || products().into_iter().map(|product| view! {
                    <ProductCard product=product/>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub(crate) fn ProductCard(product: &'static Product) -> impl IntoView {
    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=product.image.as_str() alt=product.name.as_str()/>
                <div class="badges">
                    {product.is_new.then(|| view! { <span class="badge badge-new">"New"</span> })}
                    {product.is_bestseller.then(|| view! { <span class="badge badge-best">"Bestseller"</span> })}
                    {product.is_on_sale().then(|| view! { <span class="badge badge-sale">"Sale"</span> })}
                </div>
                <FavoriteButton id=product.id/>
            </div>
            <div class="product-info">
                <div class="product-category">{product.category.display_name()}</div>
                <h3>{product.name.as_str()}</h3>
                <p class="product-description">{product.description.as_str()}</p>
                <div class="rating">
                    {stars(product.full_stars())}
                    <span class="reviews">"(" {product.reviews.to_string()} ")"</span>
                </div>
                <div class="price-row">
                    <span class="price">{product.price.display()}</span>
                    {product.original_price.map(|original| view! {
                        <span class="original-price">{original.display()}</span>
                    })}
                </div>
                <AddToCartButton id=product.id/>
            </div>
        </div>
    }
}

/// Heart toggle backed by the storefront favorites.
#[component]
pub(crate) fn FavoriteButton(id: ProductId) -> impl IntoView {
    let store = use_store();
    let favorited = move || store.with(|s| s.favorites().contains(id));

    view! {
        <button
            class="favorite"
            class:favorited=favorited
            aria-label="Toggle favorite"
            on:click=move |_| { store.update(|s| { s.toggle_favorite(id); }); }
        >
            {move || if favorited() { "♥" } else { "♡" }}
        </button>
    }
}

/// Add button that shows "Added!" for a moment after a click.
#[component]
pub(crate) fn AddToCartButton(id: ProductId) -> impl IntoView {
    let store = use_store();
    let feedback = store.with_untracked(|s| s.config().ui.added_feedback_ms);
    let (added, set_added) = signal(false);

    let add = move |_| {
        let result = store.try_update(|s| s.add_to_cart(id).map(|_| ()));
        if let Some(Err(err)) = result {
            warn!("add to cart failed: {err}");
            return;
        }
        set_added.set(true);
        set_timeout(move || set_added.set(false), Duration::from_millis(feedback));
    };

    view! {
        <button class="btn btn-primary add-to-cart" class:added=move || added.get() on:click=add>
            {move || if added.get() { "✓ Added!" } else { "Add to Cart" }}
        </button>
    }
}
