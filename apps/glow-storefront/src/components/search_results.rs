//! Search results page with its empty state.

use glow_core::Page;
use leptos::prelude::*;

use super::products::ProductCard;
use crate::app::use_store;

#[component]
pub fn SearchResults() -> impl IntoView {
    let store = use_store();
    let results = Memo::new(move |_| store.with(|s| s.search_results()));
    let back_home = move |_: leptos::ev::MouseEvent| store.update(|s| s.navigate_to(Page::Home));

    view! {
        <section class="section search-results">
            <button class="link back-home" on:click=back_home>"← Back to Home"</button>

            <div class="section-heading">
                <h2>"Search Results for " <span class="accent">{move || results.with(|r| format!("\"{}\"", r.query))}</span></h2>
                <p>{move || results.with(|r| r.summary())}</p>
            </div>

            {move || {
                let results = results.get();
                if results.is_empty() {
                    view! {
                        <div class="empty-state">
                            <div class="empty-icon">"🔍"</div>
                            <h3>"No Results Found"</h3>
                            <p>{results.empty_message()}</p>
                            <button class="btn btn-primary" on:click=back_home>
                                "Browse All Products"
                            </button>
                        </div>
                    }.into_any()
                } else {
                    let catalog = store.with_untracked(|s| s.catalog());
                    view! {
                        <div class="product-grid">
                            {results.items.iter()
                                .filter_map(|item| catalog.product(item.id))
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="empty-state">
                            <h3>"Didn't find what you're looking for?"</h3>
                            <p>"Browse our full collection or try a different search term."</p>
                            <button class="btn btn-primary" on:click=back_home>
                                "Browse All Products"
                            </button>
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}
