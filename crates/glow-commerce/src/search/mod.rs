//! Search module.
//!
//! Case-insensitive text search over the product list, plus category
//! filtering.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::SearchQuery;
pub use results::SearchResults;

use crate::catalog::Product;

/// Products whose name, category or description contains `query`.
///
/// Matching ignores case but not whitespace: the query is used as typed.
/// A blank (empty or whitespace-only) query matches nothing. Order follows
/// `products`.
pub fn filter<'a>(query: &str, products: &'a [Product]) -> Vec<&'a Product> {
    let needle = Filter::text(query);
    products.iter().filter(|p| needle.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_filter_keeps_catalog_order() {
        let products = Catalog::shared().products();
        let ids: Vec<u32> = filter("serum", products).iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 6, 8]);
    }

    #[test]
    fn test_description_only_match() {
        let products = Catalog::shared().products();
        let found = filter("makeup removal", products);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Gentle Micellar Water");
    }

    #[test]
    fn test_trailing_space_is_part_of_the_query() {
        let products = Catalog::shared().products();
        let ids: Vec<u32> = filter("serum ", products).iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 6]);
    }

    #[test]
    fn test_whitespace_query_is_empty() {
        assert!(filter("   ", Catalog::shared().products()).is_empty());
    }
}
