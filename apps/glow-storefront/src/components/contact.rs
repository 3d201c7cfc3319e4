//! Contact page backed by the store config.

use leptos::prelude::*;

use crate::app::use_store;
use crate::content::ContactContent;

#[component]
pub fn Contact() -> impl IntoView {
    let store = use_store();
    let details = store.with_untracked(|s| s.config().store.clone());
    let content = ContactContent::default();
    let mailto = format!("mailto:{}", details.email);

    view! {
        <section id="contact" class="section contact">
            <div class="section-heading">
                <h2>{content.title}</h2>
                <p>{content.subtitle}</p>
            </div>

            <div class="contact-grid">
                <div class="contact-card">
                    <h3>"✉ Email"</h3>
                    <a href=mailto>{details.email}</a>
                </div>
                <div class="contact-card">
                    <h3>"☎ Phone"</h3>
                    <p>{details.phone}</p>
                </div>
                <div class="contact-card">
                    <h3>"📍 Visit Us"</h3>
                    <p>{details.address}</p>
                </div>
                <div class="contact-card">
                    <h3>"🕘 Hours"</h3>
                    <ul>
                        {content.hours.into_iter().map(|line| view! { <li>{line}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
