//! Fixed header: brand, navigation, search, account and cart.

use glow_core::Page;
use leptos::ev;
use leptos::prelude::*;

use crate::app::use_store;

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let ui = store.with_untracked(|s| s.config().ui);
    let brand = store.with_untracked(|s| s.config().store.name.clone());

    let (solid, set_solid) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let scroll = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_solid.set(ui.header_is_solid(y));
    });
    on_cleanup(move || scroll.remove());

    let current = Memo::new(move |_| store.with(|s| s.page()));
    let cart_count = Memo::new(move |_| store.with(|s| s.total_items()));
    let query = Memo::new(move |_| store.with(|s| s.navigator().search_query().to_string()));
    let first_name = Memo::new(move |_| {
        store.with(|s| s.user().map(|u| u.first_name().to_string()))
    });

    let go = move |page: Page| {
        store.update(|s| s.navigate_to(page));
        set_menu_open.set(false);
    };

    // Every keystroke searches; clearing the box leaves the search page.
    let on_input = move |ev: ev::Event| {
        let text = event_target_value(&ev);
        store.update(|s| s.search(text));
    };
    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_menu_open.set(false);
    };

    let nav_links = move || {
        Page::NAV
            .into_iter()
            .map(|page| {
                view! {
                    <button
                        class="nav-link"
                        class:active=move || current.get() == page
                        on:click=move |_| go(page)
                    >
                        {page.display_name()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="site-header" class:solid=move || solid.get()>
            <div class="header-inner">
                <button class="brand" on:click=move |_| go(Page::Home)>{brand}</button>

                <nav class="nav-desktop">{nav_links}</nav>

                <div class="header-actions">
                    <form class="search-box" on:submit=on_search>
                        <input
                            type="search"
                            placeholder="Search products..."
                            prop:value=move || query.get()
                            on:input=on_input
                        />
                    </form>

                    {move || match first_name.get() {
                        Some(name) => view! {
                            <span class="greeting">"Hi, " {name}</span>
                            <button class="link" on:click=move |_| {
                                store.update(|s| { s.logout(); });
                            }>"Logout"</button>
                        }.into_any(),
                        None => view! {
                            <button
                                class="icon-button"
                                aria-label="Sign in"
                                on:click=move |_| store.update(|s| s.open_login())
                            >"👤"</button>
                        }.into_any(),
                    }}

                    <button
                        class="icon-button cart-button"
                        aria-label="Open cart"
                        on:click=move |_| store.update(|s| s.open_cart())
                    >
                        "🛍"
                        <Show when=move || { cart_count.get() > 0 }>
                            <span class="cart-badge">{move || cart_count.get().to_string()}</span>
                        </Show>
                    </button>

                    <button
                        class="icon-button menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="nav-mobile">{nav_links}</nav>
            </Show>
        </header>
    }
}
