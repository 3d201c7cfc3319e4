//! Favorited products (the heart toggle on product cards).

use glow_commerce::ProductId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: Vec<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a product's favorite flag. Returns the new state.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| *f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Favorited ids in the order they were first favorited.
    pub fn iter(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
