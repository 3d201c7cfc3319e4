//! Product records.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Category the product is listed under.
    pub category: Category,
    /// Current price.
    pub price: Money,
    /// Compare-at price, shown struck through when on sale.
    pub original_price: Option<Money>,
    /// Image URL.
    pub image: String,
    /// Average rating out of 5.
    pub rating: f32,
    /// Number of reviews.
    pub reviews: u32,
    /// Show a "New" badge.
    pub is_new: bool,
    /// Show a "Bestseller" badge.
    pub is_bestseller: bool,
    /// Short marketing description.
    pub description: String,
    /// Items bundled in a gift set (empty for single products).
    pub includes: Vec<String>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: Category,
        price: Money,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category,
            price,
            original_price: None,
            image: image.into(),
            rating: 0.0,
            reviews: 0,
            is_new: false,
            is_bestseller: false,
            description: description.into(),
            includes: Vec::new(),
        }
    }

    /// Set the compare-at price.
    pub fn with_original_price(mut self, price: Money) -> Self {
        self.original_price = Some(price);
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Mark as new.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Mark as bestseller.
    pub fn bestseller(mut self) -> Self {
        self.is_bestseller = true;
        self
    }

    /// Set the bundled items.
    pub fn with_includes<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes = items.into_iter().map(Into::into).collect();
        self
    }

    /// Check if this product is on sale (has a higher compare-at price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Amount saved against the compare-at price.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|_| self.is_on_sale())
            .map(|op| op - self.price)
    }

    /// Check if this is a gift set bundle.
    pub fn is_gift_set(&self) -> bool {
        self.category == Category::GiftSets
    }

    /// Number of filled stars when rendering the rating.
    pub fn full_stars(&self) -> usize {
        self.rating.floor().clamp(0.0, 5.0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn serum() -> Product {
        Product::new(
            1,
            "Vitamin C Brightening Serum",
            Category::Serums,
            Money::from_whole(89, Currency::USD),
            "https://example.com/serum.jpg",
            "Powerful antioxidant serum",
        )
    }

    #[test]
    fn test_product_creation() {
        let product = serum();
        assert_eq!(product.id, ProductId::new(1));
        assert!(!product.is_on_sale());
        assert!(product.savings().is_none());
        assert!(!product.is_gift_set());
    }

    #[test]
    fn test_product_on_sale() {
        let product = serum().with_original_price(Money::from_whole(110, Currency::USD));
        assert!(product.is_on_sale());
        assert_eq!(product.savings(), Some(Money::from_whole(21, Currency::USD)));
    }

    #[test]
    fn test_original_price_below_price_is_not_a_sale() {
        let product = serum().with_original_price(Money::from_whole(50, Currency::USD));
        assert!(!product.is_on_sale());
        assert!(product.savings().is_none());
    }

    #[test]
    fn test_full_stars() {
        assert_eq!(serum().with_rating(4.9, 10).full_stars(), 4);
        assert_eq!(serum().with_rating(5.0, 10).full_stars(), 5);
    }
}
