//! The cart store.
//!
//! [`CartStore`] owns the line items a shopper has picked. It is a plain
//! value held by whoever owns the session; every mutation goes through
//! `&mut self`, so there is exactly one writer.
//!
//! # Invariants
//!
//! - At most one [`LineItem`] per [`ProductId`].
//! - Every line item has `quantity >= 1`. Setting a quantity of zero or less
//!   removes the item.
//! - Name, price and image are copied from the product on first add and are
//!   never refreshed afterwards.
//!
//! # Example
//!
//! ```
//! use maison_luxe_core::{CartStore, Catalog, ProductId};
//!
//! let catalog = Catalog::builtin();
//! let watch = catalog.get(ProductId::new(1)).unwrap();
//!
//! let mut cart = CartStore::new();
//! cart.add(watch);
//! cart.add(watch);
//! assert_eq!(cart.get(watch.id).unwrap().quantity, 2);
//! assert!((cart.compute_total() - 2400.0).abs() < f64::EPSILON);
//!
//! cart.update_quantity(watch.id, 0);
//! assert!(cart.is_empty());
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One product in the cart, with the quantity wanted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// ID of the product this item was created from.
    pub id: ProductId,
    /// Product name at the time of first add.
    pub name: String,
    /// Product price text at the time of first add.
    pub price: Price,
    /// Product image at the time of first add.
    pub image: String,
    /// Number of units, always at least 1.
    pub quantity: u64,
}

impl LineItem {
    fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    ///
    /// A price that does not parse counts as zero; the failure is logged,
    /// not returned.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        match self.price.amount() {
            Ok(unit) => unit.saturating_mul(Decimal::from(self.quantity)),
            Err(e) => {
                warn!(
                    product_id = %self.id,
                    price = %self.price,
                    error = %e,
                    "Unparseable price, counting line as zero"
                );
                Decimal::ZERO
            }
        }
    }
}

/// The shopper's cart.
///
/// Serializable for display surfaces. A cart cannot be deserialized, so every
/// cart is built through the methods that keep the invariants:
///
/// ```compile_fail
/// let cart: maison_luxe_core::CartStore =
///     serde_json::from_str(r#"{"items":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of `product`.
    ///
    /// If the product is already in the cart its quantity goes up by one and
    /// the stored name/price/image are left alone. Otherwise a new line item
    /// with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.find_mut(product.id) {
            item.quantity = item.quantity.saturating_add(1);
            debug!(product_id = %product.id, quantity = item.quantity, "Incremented cart item");
            return;
        }

        self.items.push(LineItem::from_product(product));
        debug!(product_id = %product.id, "Added cart item");
    }

    /// Set the quantity of the item with `id`.
    ///
    /// A quantity of zero or below removes the item. There is no upper
    /// limit. Returns `false` if no item has that ID, in which case the cart
    /// is unchanged.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        let Ok(quantity) = u64::try_from(quantity) else {
            return self.remove(id).is_some();
        };
        if quantity == 0 {
            return self.remove(id).is_some();
        }

        match self.find_mut(id) {
            Some(item) => {
                item.quantity = quantity;
                debug!(product_id = %id, quantity, "Updated cart item quantity");
                true
            }
            None => false,
        }
    }

    /// Remove the item with `id`, returning it if it was present.
    pub fn remove(&mut self, id: ProductId) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        debug!(product_id = %id, "Removed cart item");
        Some(removed)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        let lines = self.items.len();
        self.items.clear();
        debug!(lines, "Cleared cart");
    }

    /// Exact order total.
    ///
    /// Each line contributes unit price times quantity; lines whose price
    /// does not parse contribute zero (see [`LineItem::line_total`]).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(LineItem::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Order total as a float, for display surfaces that want one.
    ///
    /// An empty cart totals `0.0`.
    #[must_use]
    pub fn compute_total(&self) -> f64 {
        self.subtotal().to_f64().unwrap_or(0.0)
    }

    /// Line items in the order they were first added.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line item.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of distinct line items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all line items, for the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    fn find_mut(&mut self, id: ProductId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: i32, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(price),
            image: format!("/p{id}.jpg"),
            category: Category::Watch,
            rating: 5.0,
            is_new: None,
        }
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = CartStore::new();
        let p = product(1, "1200.00");
        cart.add(&p);

        assert_eq!(cart.len(), 1);
        let item = cart.get(p.id).unwrap();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.name, p.name);
        assert_eq!(item.price, p.price);
        assert_eq!(item.image, p.image);
    }

    #[test]
    fn test_repeat_add_increments_without_resync() {
        let mut cart = CartStore::new();
        let mut p = product(1, "1200.00");
        cart.add(&p);

        p.name = "Renamed".to_string();
        p.price = Price::new("9999.00");
        p.image = "/other.jpg".to_string();
        cart.add(&p);

        assert_eq!(cart.len(), 1);
        let item = cart.get(p.id).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.name, "Product 1");
        assert_eq!(item.price.as_str(), "1200.00");
        assert_eq!(item.image, "/p1.jpg");
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = CartStore::new();
        cart.add(&product(3, "1.00"));
        cart.add(&product(1, "1.00"));
        cart.add(&product(3, "1.00"));
        cart.add(&product(2, "1.00"));

        let ids: Vec<i32> = cart.items().iter().map(|i| i.id.as_i32()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_update_quantity_sets_directly() {
        let mut cart = CartStore::new();
        let p = product(1, "10.00");
        cart.add(&p);

        assert!(cart.update_quantity(p.id, 250));
        assert_eq!(cart.get(p.id).unwrap().quantity, 250);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = CartStore::new();
        let p = product(1, "10.00");
        cart.add(&p);
        cart.add(&product(2, "10.00"));

        let mut expected = cart.clone();
        expected.remove(p.id);

        assert!(cart.update_quantity(p.id, 0));
        assert_eq!(cart, expected);
        assert!(cart.get(p.id).is_none());
    }

    #[test]
    fn test_update_quantity_negative_removes() {
        let mut cart = CartStore::new();
        let p = product(1, "10.00");
        cart.add(&p);

        assert!(cart.update_quantity(p.id, -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut cart = CartStore::new();
        cart.add(&product(1, "10.00"));
        let before = cart.clone();

        assert!(!cart.update_quantity(ProductId::new(42), 5));
        assert!(!cart.update_quantity(ProductId::new(42), 0));
        assert!(cart.remove(ProductId::new(42)).is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_empty_total_is_zero() {
        let cart = CartStore::new();
        assert_eq!(cart.compute_total(), 0.0);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_total_with_separator_and_suffix() {
        let mut cart = CartStore::new();
        let p = product(1, "1,200.00 DH");
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.compute_total(), 2400.0);
    }

    #[test]
    fn test_total_across_lines() {
        let mut cart = CartStore::new();
        cart.add(&product(2, "300.00 DH"));
        let sport = product(6, "4,500.00 DH");
        cart.add(&sport);
        cart.update_quantity(sport.id, 3);

        assert_eq!(cart.compute_total(), 13800.0);
    }

    #[test]
    fn test_malformed_price_contributes_zero() {
        let mut cart = CartStore::new();
        cart.add(&product(1, "prix sur demande"));
        cart.add(&product(2, "300.00 DH"));
        cart.add(&product(3, ""));

        assert_eq!(cart.compute_total(), 300.0);
    }

    #[test]
    fn test_negative_and_exponent_prices_contribute_zero() {
        let mut cart = CartStore::new();
        cart.add(&product(1, "-5.00 DH"));
        cart.add(&product(2, "100.00"));
        cart.add(&product(3, "1e3"));
        cart.update_quantity(ProductId::new(1), 4);

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.subtotal(), Decimal::new(10_000, 2));
        assert_eq!(cart.compute_total(), 100.0);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add(&product(1, "10.00"));
        cart.add(&product(2, "20.00"));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.compute_total(), 0.0);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_item_count() {
        let mut cart = CartStore::new();
        let p = product(1, "10.00");
        cart.add(&p);
        cart.add(&product(2, "10.00"));
        cart.update_quantity(p.id, 4);

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_add_update_remove_sequence() {
        let mut cart = CartStore::new();
        let p = product(1, "1200.00");
        cart.add(&p);
        cart.add(&p);
        cart.update_quantity(p.id, 5);
        assert_eq!(cart.compute_total(), 6000.0);

        cart.remove(p.id);
        assert!(cart.is_empty());
        assert_eq!(cart.compute_total(), 0.0);
    }
}
