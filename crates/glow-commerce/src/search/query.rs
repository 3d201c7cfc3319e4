//! Search query builder.

use crate::catalog::{CategoryFilter, Product};
use crate::search::{Filter, SearchResults};
use serde::{Deserialize, Serialize};

/// A search query: optional text plus a category restriction.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Text query as typed, `None` when blank.
    pub text: Option<String>,
    /// Category restriction.
    pub category: CategoryFilter,
}

impl SearchQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw search box input.
    pub fn parse(raw: &str) -> Self {
        Self::new().with_text(raw)
    }

    /// Set the text query. Blank input clears it; anything else is kept
    /// verbatim.
    pub fn with_text(mut self, raw: &str) -> Self {
        self.text = (!raw.trim().is_empty()).then(|| raw.to_string());
        self
    }

    /// Restrict to a category.
    pub fn with_category(mut self, filter: impl Into<CategoryFilter>) -> Self {
        self.category = filter.into();
        self
    }

    /// True when there is no text to search for.
    pub fn is_blank(&self) -> bool {
        self.text.is_none()
    }

    /// Filters this query applies.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(text) = &self.text {
            filters.push(Filter::text(text));
        }
        if self.category != CategoryFilter::All {
            filters.push(Filter::Category(self.category));
        }
        filters
    }

    /// Run the query over `products`, keeping catalog order.
    ///
    /// A blank query yields no results.
    pub fn apply(&self, products: &[Product]) -> SearchResults {
        let text = self.text.clone().unwrap_or_default();
        if self.is_blank() {
            return SearchResults::empty(text);
        }

        let filters = self.filters();
        let items = products
            .iter()
            .filter(|p| filters.iter().all(|f| f.matches(p)))
            .cloned()
            .collect();

        SearchResults::new(text, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};

    #[test]
    fn test_parse_keeps_text_verbatim() {
        let q = SearchQuery::parse("  serum ");
        assert_eq!(q.text.as_deref(), Some("  serum "));
        assert!(SearchQuery::parse(" \t ").is_blank());
    }

    #[test]
    fn test_apply_matches_untrimmed_text() {
        let results = SearchQuery::parse("serum ").apply(Catalog::shared().products());
        let ids: Vec<u32> = results.items.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 6]);
    }

    #[test]
    fn test_apply_with_category() {
        let catalog = Catalog::shared();
        let results = SearchQuery::parse("skin")
            .with_category(Category::Moisturizers)
            .apply(catalog.products());

        assert!(!results.is_empty());
        assert!(results
            .items
            .iter()
            .all(|p| p.category == Category::Moisturizers));
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let results = SearchQuery::parse("").apply(Catalog::shared().products());
        assert!(results.is_empty());
    }

    #[test]
    fn test_filters() {
        assert!(SearchQuery::new().filters().is_empty());
        let q = SearchQuery::parse("glow").with_category(Category::Serums);
        assert_eq!(q.filters().len(), 2);
    }
}
