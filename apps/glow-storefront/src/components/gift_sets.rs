//! Gift set bundles.

use leptos::prelude::*;

use super::products::{AddToCartButton, FavoriteButton};
use super::stars;
use crate::app::use_store;

#[component]
pub fn GiftSets() -> impl IntoView {
    let store = use_store();
    let sets = store.with_untracked(|s| s.gift_sets());

    view! {
        <section id="gift-sets" class="section gift-sets">
            <div class="section-heading">
                <h2>"Luxury Gift Sets"</h2>
                <p>"Curated collections for every skin type, beautifully packaged and priced to save"</p>
            </div>

            <div class="product-grid">
                {sets.iter().map(|set| view! {
                    <div class="product-card gift-card">
                        <div class="product-image">
                            <img src=set.image.as_str() alt=set.name.as_str()/>
                            <div class="badges">
                                {set.is_new.then(|| view! { <span class="badge badge-new">"New"</span> })}
                                {set.is_bestseller.then(|| view! { <span class="badge badge-best">"Bestseller"</span> })}
                            </div>
                            <FavoriteButton id=set.id/>
                        </div>
                        <div class="product-info">
                            <h3>{set.name.as_str()}</h3>
                            <p class="product-description">{set.description.as_str()}</p>
                            <div class="rating">
                                {stars(set.full_stars())}
                                <span class="reviews">"(" {set.reviews.to_string()} ")"</span>
                            </div>
                            <div class="includes">
                                <span class="includes-label">"Includes:"</span>
                                <ul>
                                    {set.includes.iter().map(|item| view! { <li>{item.as_str()}</li> }).collect::<Vec<_>>()}
                                </ul>
                            </div>
                            <div class="price-row">
                                <span class="price">{set.price.display()}</span>
                                {set.original_price.map(|original| view! {
                                    <span class="original-price">{original.display()}</span>
                                })}
                                {set.savings().map(|savings| view! {
                                    <span class="savings">"Save " {savings.display_short()}</span>
                                })}
                            </div>
                            <AddToCartButton id=set.id/>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
