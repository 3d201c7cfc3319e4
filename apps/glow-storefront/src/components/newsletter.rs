//! Newsletter signup section.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;

use crate::app::use_store;
use crate::content::NewsletterContent;

#[component]
pub fn Newsletter() -> impl IntoView {
    let store = use_store();
    let content = NewsletterContent::default();
    let reset_after = store.with_untracked(|s| s.config().ui.newsletter_reset_ms);
    let (email, set_email) = signal(String::new());
    let subscribed = Memo::new(move |_| store.with(|s| s.newsletter().is_subscribed()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let accepted = store
            .try_update(|s| s.subscribe(&email.get_untracked()))
            .unwrap_or(false);
        if !accepted {
            return;
        }
        set_timeout(
            move || {
                store.update(|s| s.reset_newsletter());
                set_email.set(String::new());
            },
            Duration::from_millis(reset_after),
        );
    };

    let NewsletterContent {
        badge,
        title,
        title_accent,
        subtitle,
        benefits,
        placeholder,
        button,
        disclaimer,
        success_title,
        success_message,
        social_proof,
    } = content;

    view! {
        <section class="section newsletter">
            <div class="section-heading">
                <div class="hero-badge">"🎁 " {badge}</div>
                <h2>{title} " " <span class="accent">{title_accent}</span></h2>
                <p>{subtitle}</p>
            </div>

            <div class="feature-grid benefits">
                {benefits.into_iter().map(|benefit| view! {
                    <div class="feature">
                        <div class="feature-icon">{benefit.icon}</div>
                        <h3>{benefit.title}</h3>
                        <p>{benefit.description}</p>
                    </div>
                }).collect::<Vec<_>>()}
            </div>

            <Show
                when=move || !subscribed.get()
                fallback=move || view! {
                    <div class="newsletter-success">
                        <h3>{success_title.clone()}</h3>
                        <p>{success_message.clone()}</p>
                    </div>
                }
            >
                <form class="newsletter-form" on:submit=on_submit>
                    <input
                        type="email"
                        required
                        placeholder=placeholder.clone()
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">{button.clone()}</button>
                    <p class="disclaimer">{disclaimer.clone()}</p>
                </form>
            </Show>

            <p class="social-proof">{social_proof}</p>
        </section>
    }
}
