//! Page router.
//!
//! One flat page tag plus the search box text. There is no history stack
//! and no per-page state survives navigation.

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Products,
    About,
    Reviews,
    Contact,
    GiftSets,
    Search,
}

impl Page {
    /// Header navigation, in display order.
    pub const NAV: [Page; 6] = [
        Page::Home,
        Page::Products,
        Page::About,
        Page::Reviews,
        Page::GiftSets,
        Page::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Products => "products",
            Page::About => "about",
            Page::Reviews => "reviews",
            Page::Contact => "contact",
            Page::GiftSets => "gift-sets",
            Page::Search => "search",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Products => "Products",
            Page::About => "About",
            Page::Reviews => "Reviews",
            Page::Contact => "Contact",
            Page::GiftSets => "Gift Sets",
            Page::Search => "Search",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "home" => Ok(Page::Home),
            "products" => Ok(Page::Products),
            "about" => Ok(Page::About),
            "reviews" => Ok(Page::Reviews),
            "contact" => Ok(Page::Contact),
            "gift-sets" => Ok(Page::GiftSets),
            "search" => Ok(Page::Search),
            other => Err(CoreError::UnknownPage(other.to_string())),
        }
    }
}

/// Current page and search text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    page: Page,
    search_query: String,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Raw search text as typed.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Switch page. Always clears the search text.
    pub fn navigate_to(&mut self, page: Page) {
        debug!(from = %self.page, to = %page, "navigate");
        self.page = page;
        self.search_query.clear();
    }

    /// Submit the search box.
    ///
    /// Non-blank text opens the search page; blank text goes home.
    pub fn search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.page = if self.search_query.trim().is_empty() {
            Page::Home
        } else {
            Page::Search
        };
        debug!(query = %self.search_query, page = %self.page, "search");
    }

    /// Hero "Shop Collection" button.
    pub fn shop_collection(&mut self) {
        self.navigate_to(Page::Products);
    }

    /// Hero "Learn More" button.
    pub fn learn_more(&mut self) {
        self.navigate_to(Page::About);
    }

    pub fn is_searching(&self) -> bool {
        self.page == Page::Search && !self.search_query.trim().is_empty()
    }

    /// Only the home page renders the footer.
    pub fn shows_footer(&self) -> bool {
        self.page == Page::Home && !self.is_searching()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_tags_round_trip() {
        for page in Page::NAV.into_iter().chain([Page::Search]) {
            assert_eq!(page.as_str().parse::<Page>().unwrap(), page);
        }
        assert!(matches!(
            "checkout".parse::<Page>(),
            Err(CoreError::UnknownPage(_))
        ));
    }

    #[test]
    fn test_search_enters_search_page() {
        let mut nav = Navigator::new();
        nav.search("serum");
        assert_eq!(nav.page(), Page::Search);
        assert!(nav.is_searching());
        assert!(!nav.shows_footer());
    }

    #[test]
    fn test_blank_search_goes_home() {
        let mut nav = Navigator::new();
        nav.navigate_to(Page::Products);
        nav.search("   ");
        assert_eq!(nav.page(), Page::Home);
        assert!(!nav.is_searching());
    }

    #[test]
    fn test_navigation_clears_search() {
        let mut nav = Navigator::new();
        nav.search("retinol");
        nav.navigate_to(Page::Contact);
        assert_eq!(nav.search_query(), "");
        assert!(!nav.is_searching());
    }

    #[test]
    fn test_hero_buttons() {
        let mut nav = Navigator::new();
        nav.shop_collection();
        assert_eq!(nav.page(), Page::Products);
        nav.learn_more();
        assert_eq!(nav.page(), Page::About);
    }

    #[test]
    fn test_footer_only_on_home() {
        let mut nav = Navigator::new();
        assert!(nav.shows_footer());
        nav.navigate_to(Page::Reviews);
        assert!(!nav.shows_footer());
    }
}
