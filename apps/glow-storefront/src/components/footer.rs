//! Site footer with navigating link columns.

use leptos::prelude::*;

use crate::app::use_store;
use crate::content::FooterContent;

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_store();
    let details = store.with_untracked(|s| s.config().store.clone());
    let content = FooterContent::default();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <div class="brand">{details.name}</div>
                    <p>{content.tagline}</p>
                    <p class="footer-contact">{details.email} " · " {details.phone}</p>
                </div>

                {content.columns.into_iter().map(|column| view! {
                    <div class="footer-column">
                        <h4>{column.title}</h4>
                        <ul>
                            {column.links.into_iter().map(|link| match link.page {
                                Some(page) => view! {
                                    <li>
                                        <button class="link" on:click=move |_| store.update(|s| s.navigate_to(page))>
                                            {link.label}
                                        </button>
                                    </li>
                                }.into_any(),
                                None => view! { <li><span class="link">{link.label}</span></li> }.into_any(),
                            }).collect::<Vec<_>>()}
                        </ul>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
            <div class="footer-bottom">{content.copyright}</div>
        </footer>
    }
}
