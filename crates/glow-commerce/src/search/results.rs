//! Search results.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Products matched by a search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    /// The text that was searched for, as typed.
    pub query: String,
    /// Matching products in catalog order.
    pub items: Vec<Product>,
}

impl SearchResults {
    pub fn new(query: impl Into<String>, items: Vec<Product>) -> Self {
        Self {
            query: query.into(),
            items,
        }
    }

    /// Results with no matches.
    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Heading for the results page, e.g. `3 results for "serum"`.
    pub fn summary(&self) -> String {
        let noun = if self.items.len() == 1 {
            "result"
        } else {
            "results"
        };
        format!("{} {} for \"{}\"", self.items.len(), noun, self.query)
    }

    /// Message for the empty-state view.
    pub fn empty_message(&self) -> String {
        format!(
            "We couldn't find any products matching \"{}\". Try a different search term.",
            self.query
        )
    }
}
