//! Application shell and page switch.

use glow_core::{Page, Storefront};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{
    About, CartPanel, Contact, Footer, GiftSets, Header, Hero, LoginModal, Newsletter,
    ProductGrid, SearchResults, Testimonials,
};

/// Shared storefront state. Every view reads and writes through this signal.
pub type Store = RwSignal<Storefront>;

/// Fetch the storefront signal provided by [`App`].
pub fn use_store() -> Store {
    expect_context::<Store>()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(Storefront::default()));

    view! {
        <Meta name="description" content="SKINCARE - premium skincare crafted with science and nature"/>
        <Title text="SKINCARE"/>

        <Router>
            <Routes fallback=|| view! { <StorefrontPage/> }>
                <Route path=path!("") view=StorefrontPage/>
            </Routes>
        </Router>
    }
}

/// The single-page shell: header, current page, overlays.
#[component]
fn StorefrontPage() -> impl IntoView {
    let store = use_store();
    let page = Memo::new(move |_| store.with(|s| s.page()));
    let shows_footer = Memo::new(move |_| store.with(|s| s.navigator().shows_footer()));

    view! {
        <div class="storefront">
            <Header/>
            <main>
                {move || match page.get() {
                    Page::Home => view! {
                        <Hero/>
                        <About/>
                        <ProductGrid/>
                        <Testimonials/>
                        <Newsletter/>
                    }.into_any(),
                    Page::Products => view! { <div class="page"><ProductGrid/></div> }.into_any(),
                    Page::About => view! { <div class="page"><About/></div> }.into_any(),
                    Page::Reviews => view! { <div class="page"><Testimonials/></div> }.into_any(),
                    Page::Contact => view! { <div class="page"><Contact/></div> }.into_any(),
                    Page::GiftSets => view! { <div class="page"><GiftSets/></div> }.into_any(),
                    Page::Search => view! { <div class="page"><SearchResults/></div> }.into_any(),
                }}
            </main>
            <Show when=move || shows_footer.get()>
                <Footer/>
            </Show>
            <CartPanel/>
            <LoginModal/>
        </div>
    }
}
