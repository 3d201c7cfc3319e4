//! Slide-out cart with the simulated checkout.

use glow_core::commerce::ProductId;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::app::{use_store, Store};

/// Drive the checkout with browser timers: processing, then the
/// confirmation hold, then back to an empty cart with the panel closed.
fn start_checkout(store: Store) {
    let timings = store.with_untracked(|s| s.config().checkout);
    match store.try_update(|s| s.begin_checkout()) {
        Some(Ok(())) => {}
        Some(Err(err)) => {
            warn!("checkout refused: {err}");
            return;
        }
        None => return,
    }

    set_timeout(
        move || {
            if let Some(Err(err)) = store.try_update(|s| s.complete_checkout().map(|_| ())) {
                warn!("checkout failed: {err}");
                return;
            }
            set_timeout(
                move || {
                    if let Some(Err(err)) = store.try_update(|s| s.finish_checkout()) {
                        warn!("checkout did not finish: {err}");
                    }
                },
                timings.confirmation(),
            );
        },
        timings.processing(),
    );
}

#[component]
pub fn CartPanel() -> impl IntoView {
    let store = use_store();
    let open = Memo::new(move |_| store.with(|s| s.is_cart_open()));

    view! {
        <Show when=move || open.get()>
            <div class="overlay" on:click=move |_| store.update(|s| s.close_cart())></div>
            <aside class="cart-panel">
                <div class="cart-header">
                    <h2>"Shopping Cart (" {move || store.with(|s| s.cart().unique_item_count()).to_string()} ")"</h2>
                    <button class="icon-button" aria-label="Close cart" on:click=move |_| store.update(|s| s.close_cart())>
                        "✕"
                    </button>
                </div>
                <CartBody/>
            </aside>
        </Show>
    }
}

#[component]
fn CartBody() -> impl IntoView {
    let store = use_store();

    move || {
        let confirmation = store.with(|s| s.order_confirmation().cloned());
        if let Some(order) = confirmation {
            return view! {
                <div class="order-success">
                    <div class="success-icon">"✓"</div>
                    <h3>{order.headline()}</h3>
                    <p>{order.message()}</p>
                    <p class="order-number">"Order " {order.order_id.as_str().to_string()}</p>
                    <p class="order-total">{order.pricing.grand_total.display()}</p>
                </div>
            }
            .into_any();
        }

        if store.with(|s| s.cart().is_empty()) {
            return view! {
                <div class="empty-state">
                    <div class="empty-icon">"🛍"</div>
                    <h3>"Your cart is empty"</h3>
                    <p>"Add some products to get started!"</p>
                    <button class="btn btn-primary" on:click=move |_| store.update(|s| s.close_cart())>
                        "Continue Shopping"
                    </button>
                </div>
            }
            .into_any();
        }

        view! {
            <CartItems/>
            <CartSummary/>
        }
        .into_any()
    }
}

#[component]
fn CartItems() -> impl IntoView {
    let store = use_store();
    let locked = Memo::new(move |_| store.with(|s| s.checkout_status().locks_cart()));
    let set_quantity = move |id: ProductId, quantity: i64| {
        store.update(|s| {
            s.update_quantity(id, quantity);
        });
    };

    view! {
        <ul class="cart-items">
            {move || store.with(|s| s.cart().items().to_vec()).into_iter().map(|item| {
                let id = item.id;
                let quantity = i64::from(item.quantity);
                view! {
                    <li class="cart-item">
                        <img src=item.image.clone() alt=item.name.clone()/>
                        <div class="cart-item-info">
                            <h4>{item.name.clone()}</h4>
                            <p class="price">{item.price.display()}</p>
                            <div class="quantity">
                                <button
                                    disabled=move || locked.get()
                                    on:click=move |_| set_quantity(id, quantity - 1)
                                >"−"</button>
                                <span>{item.quantity.to_string()}</span>
                                <button
                                    disabled=move || locked.get()
                                    on:click=move |_| set_quantity(id, quantity + 1)
                                >"+"</button>
                            </div>
                        </div>
                        <div class="cart-item-side">
                            <span class="line-total">{item.line_total().display()}</span>
                            <button
                                class="link remove"
                                disabled=move || locked.get()
                                on:click=move |_| { store.update(|s| { s.remove_from_cart(id); }); }
                            >"Remove"</button>
                        </div>
                    </li>
                }
            }).collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
fn CartSummary() -> impl IntoView {
    let store = use_store();
    let pricing = Memo::new(move |_| store.with(|s| s.pricing()));
    let status = Memo::new(move |_| store.with(|s| s.checkout_status()));
    let tax_label = store.with_untracked(|s| format!("Tax ({}%)", s.config().pricing.tax_percent()));

    view! {
        <div class="cart-summary">
            <div class="summary-row">
                <span>"Subtotal"</span>
                <span>{move || pricing.with(|p| p.subtotal.display())}</span>
            </div>
            <div class="summary-row">
                <span>"Shipping"</span>
                <span class="shipping">{move || pricing.with(|p| p.shipping_display())}</span>
            </div>
            <div class="summary-row">
                <span>{tax_label}</span>
                <span>{move || pricing.with(|p| p.tax_total.display())}</span>
            </div>
            <div class="summary-row total">
                <span>"Total"</span>
                <span>{move || pricing.with(|p| p.grand_total.display())}</span>
            </div>
            <button
                class="btn btn-primary checkout"
                disabled=move || status.get().locks_cart()
                on:click=move |_| start_checkout(store)
            >
                {move || status.get().button_label()}
            </button>
            <p class="secure-note">"🔒 Secure checkout with SSL encryption"</p>
        </div>
    }
}
