//! Product categories and the category filter used by the catalog grid.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Cleansers,
    Serums,
    Moisturizers,
    Treatments,
    /// Curated bundles sold on the gift sets page.
    GiftSets,
}

impl Category {
    /// Categories shown as tabs on the product grid, in display order.
    pub const SHOP: [Category; 4] = [
        Category::Cleansers,
        Category::Serums,
        Category::Moisturizers,
        Category::Treatments,
    ];

    /// Get the category tag (e.g., "gift-sets").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cleansers => "cleansers",
            Category::Serums => "serums",
            Category::Moisturizers => "moisturizers",
            Category::Treatments => "treatments",
            Category::GiftSets => "gift-sets",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Cleansers => "Cleansers",
            Category::Serums => "Serums",
            Category::Moisturizers => "Moisturizers",
            Category::Treatments => "Treatments",
            Category::GiftSets => "Gift Sets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cleansers" => Ok(Category::Cleansers),
            "serums" => Ok(Category::Serums),
            "moisturizers" => Ok(Category::Moisturizers),
            "treatments" => Ok(Category::Treatments),
            "gift-sets" => Ok(Category::GiftSets),
            other => Err(CommerceError::UnknownCategory(other.to_string())),
        }
    }
}

/// The active tab on the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Products of exactly one category.
    Only(Category),
}

impl CategoryFilter {
    /// All tabs in display order, starting with "All Products".
    pub fn tabs() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::SHOP.into_iter().map(CategoryFilter::Only))
    }

    /// Check whether a category passes this filter.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(c) => c.display_name(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}
