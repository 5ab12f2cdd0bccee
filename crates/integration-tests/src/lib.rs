//! Integration tests for Maison Luxe.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p maison-luxe-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart store behaviour against the built-in catalog
//! - `checkout_flow` - Checkout hand-off and cart clearing
//! - `catalog_data` - Loading and validating external catalog data
//!
//! Helpers shared by the test files live here.

use maison_luxe_core::{Catalog, Product, ProductId};

/// Fetch a built-in product by numeric ID.
///
/// # Panics
///
/// Panics if the built-in catalog has no such product.
#[must_use]
pub fn builtin_product(id: i32) -> Product {
    Catalog::builtin()
        .get(ProductId::new(id))
        .cloned()
        .expect("product exists in built-in catalog")
}
