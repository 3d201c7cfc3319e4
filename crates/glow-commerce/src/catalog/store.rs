//! The shared product catalog.

use crate::catalog::{data, Category, CategoryFilter, Product};
use crate::ids::ProductId;
use std::sync::OnceLock;

/// The storefront's full catalog: single products plus gift sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    gift_sets: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from explicit product lists.
    pub fn new(products: Vec<Product>, gift_sets: Vec<Product>) -> Self {
        Self {
            products,
            gift_sets,
        }
    }

    /// The storefront catalog, built once and shared by every view.
    pub fn shared() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(data::products(), data::gift_sets()))
    }

    /// Single products, in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Gift set bundles, in display order.
    pub fn gift_sets(&self) -> &[Product] {
        &self.gift_sets
    }

    /// Iterate over every sellable item.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().chain(self.gift_sets.iter())
    }

    /// Look up any product or gift set by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.iter().find(|p| p.id == id)
    }

    /// Products passing a category filter, preserving catalog order.
    pub fn in_category(&self, filter: CategoryFilter) -> Vec<&Product> {
        filter_by_category(&self.products, filter)
    }

    /// Number of products listed under a category.
    pub fn count_in(&self, category: Category) -> usize {
        self.iter().filter(|p| p.category == category).count()
    }
}

/// The subsequence of `products` admitted by `filter`.
pub fn filter_by_category(products: &[Product], filter: CategoryFilter) -> Vec<&Product> {
    products.iter().filter(|p| filter.admits(p.category)).collect()
}
