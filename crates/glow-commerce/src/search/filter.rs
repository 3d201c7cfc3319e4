//! Search filter types.

use crate::catalog::{CategoryFilter, Product};
use serde::{Deserialize, Serialize};

/// A search filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring of name, category or description.
    Text(String),
    /// Restrict to one category (or all).
    Category(CategoryFilter),
}

impl Filter {
    /// Create a text search filter. The needle is lowercased but keeps
    /// its whitespace, so `"serum "` only matches text with a trailing space.
    pub fn text(query: impl AsRef<str>) -> Self {
        Filter::Text(query.as_ref().to_lowercase())
    }

    /// Create a category filter.
    pub fn category(filter: impl Into<CategoryFilter>) -> Self {
        Filter::Category(filter.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(needle) => {
                if needle.trim().is_empty() {
                    return false;
                }
                product.name.to_lowercase().contains(needle.as_str())
                    || product.category.as_str().contains(needle.as_str())
                    || product.description.to_lowercase().contains(needle.as_str())
            }
            Filter::Category(filter) => filter.admits(product.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::ids::ProductId;

    fn serum() -> &'static Product {
        Catalog::shared().product(ProductId::new(1)).unwrap()
    }

    #[test]
    fn test_text_matches_name_case_insensitively() {
        assert!(Filter::text("VITAMIN").matches(serum()));
        assert!(Filter::text("c brightening").matches(serum()));
    }

    #[test]
    fn test_text_keeps_surrounding_whitespace() {
        assert!(Filter::text("vitamin c ").matches(serum()));
        assert!(!Filter::text(" vitamin").matches(serum()));
    }

    #[test]
    fn test_text_matches_category_tag() {
        assert!(Filter::text("serum").matches(serum()));
    }

    #[test]
    fn test_text_matches_description() {
        assert!(Filter::text("antioxidant").matches(serum()));
        assert!(!Filter::text("ceramide").matches(serum()));
    }

    #[test]
    fn test_blank_text_matches_nothing() {
        assert!(!Filter::text("   ").matches(serum()));
    }

    #[test]
    fn test_category_filter() {
        assert!(Filter::category(Category::Serums).matches(serum()));
        assert!(!Filter::category(Category::Cleansers).matches(serum()));
        assert!(Filter::category(CategoryFilter::All).matches(serum()));
    }
}
