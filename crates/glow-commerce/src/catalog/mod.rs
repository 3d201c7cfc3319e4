//! Product catalog module.
//!
//! Contains products, categories, and the shared static catalog.

mod category;
mod data;
mod product;
mod store;

pub use category::{Category, CategoryFilter};
pub use product::Product;
pub use store::{filter_by_category, Catalog};
