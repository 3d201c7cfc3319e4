use leptos::prelude::*;

use crate::app::use_store;
use crate::content::HeroContent;

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_store();
    let content = HeroContent::default();
    let background = format!("background-image: url('{}')", content.background_image);

    view! {
        <section class="hero" style=background>
            <div class="hero-overlay"></div>
            <div class="hero-content">
                <div class="hero-badge">"✨ " {content.badge}</div>
                <h1>
                    {content.headline}
                    <span class="accent">{content.headline_accent}</span>
                </h1>
                <p class="hero-subheadline">{content.subheadline}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary" on:click=move |_| store.update(|s| s.shop_collection())>
                        {content.primary_cta} " →"
                    </button>
                    <button class="btn btn-outline" on:click=move |_| store.update(|s| s.learn_more())>
                        {content.secondary_cta}
                    </button>
                </div>
                <div class="hero-stats">
                    {content.stats.into_iter().map(|stat| view! {
                        <div class="stat">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
