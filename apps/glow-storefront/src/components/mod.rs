//! Storefront views.

mod about;
mod cart_panel;
mod contact;
mod footer;
mod gift_sets;
mod header;
mod hero;
mod login_modal;
mod newsletter;
mod products;
mod search_results;
mod testimonials;

pub use about::About;
pub use cart_panel::CartPanel;
pub use contact::Contact;
pub use footer::Footer;
pub use gift_sets::GiftSets;
pub use header::Header;
pub use hero::Hero;
pub use login_modal::LoginModal;
pub use newsletter::Newsletter;
pub use products::ProductGrid;
pub use search_results::SearchResults;
pub use testimonials::Testimonials;

/// Star glyphs for a 0-5 rating.
pub(crate) fn stars(full: usize) -> String {
    let full = full.min(5);
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}
