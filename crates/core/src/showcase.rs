//! Favorites and recently viewed products.

use serde::Serialize;
use tracing::debug;

use crate::types::ProductId;

/// Per-session showcase state: which products were favorited or opened.
///
/// Both lists keep first-seen order and never hold duplicates. Like the
/// cart, it is built only through its methods:
///
/// ```compile_fail
/// let showcase: maison_luxe_core::Showcase =
///     serde_json::from_str(r#"{"favorites":[],"viewed":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Showcase {
    favorites: Vec<ProductId>,
    viewed: Vec<ProductId>,
}

impl Showcase {
    /// Create empty showcase state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            favorites: Vec::new(),
            viewed: Vec::new(),
        }
    }

    /// Flip the favorite flag for `id`. Returns `true` if it is now a favorite.
    pub fn toggle_favorite(&mut self, id: ProductId) -> bool {
        if let Some(index) = self.favorites.iter().position(|&f| f == id) {
            self.favorites.remove(index);
            false
        } else {
            self.favorites.push(id);
            true
        }
    }

    /// Whether `id` is a favorite.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(&id)
    }

    /// Favorited products in the order they were added.
    #[must_use]
    pub fn favorites(&self) -> &[ProductId] {
        &self.favorites
    }

    /// Record that `id` was opened. Viewing the same product again is a no-op.
    pub fn view(&mut self, id: ProductId) {
        debug!(product_id = %id, "Viewing product");
        if !self.viewed.contains(&id) {
            self.viewed.push(id);
        }
    }

    /// Viewed products in first-view order.
    #[must_use]
    pub fn viewed(&self) -> &[ProductId] {
        &self.viewed
    }
}
