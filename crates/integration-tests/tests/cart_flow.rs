//! Integration tests for the cart store.
//!
//! These tests drive `CartStore` with products from the built-in catalog and
//! with hand-built products whose prices use the display format
//! (`"1,200.00 DH"`).

#![allow(clippy::float_cmp, clippy::unwrap_used, clippy::indexing_slicing)]

use maison_luxe_core::{CartStore, Catalog, Category, Price, Product, ProductId};
use maison_luxe_integration_tests::builtin_product;

fn priced(id: i32, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Article {id}"),
        price: Price::new(price),
        image: format!("/a{id}.jpg"),
        category: Category::Eyewear,
        rating: 4.5,
        is_new: None,
    }
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_every_catalog_product_once() {
    let catalog = Catalog::builtin();
    let mut cart = CartStore::new();
    for product in catalog.products() {
        cart.add(product);
    }

    assert_eq!(cart.len(), catalog.len());
    for (item, product) in cart.items().iter().zip(catalog.products()) {
        assert_eq!(item.id, product.id);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.name, product.name);
        assert_eq!(item.price, product.price);
        assert_eq!(item.image, product.image);
    }
}

#[test]
fn test_repeat_add_keeps_snapshot() {
    let mut product = builtin_product(3);
    let mut cart = CartStore::new();
    cart.add(&product);

    // Catalog data changes after the first add
    product.price = Price::new("950.00");
    cart.add(&product);

    let item = cart.get(product.id).unwrap();
    assert_eq!(item.quantity, 2);
    assert_eq!(item.price.as_str(), "800.00");
    assert_eq!(cart.compute_total(), 1600.0);
}

// =============================================================================
// Update / Remove
// =============================================================================

#[test]
fn test_update_to_zero_equals_remove() {
    let mut updated = CartStore::new();
    let mut removed = CartStore::new();
    for cart in [&mut updated, &mut removed] {
        cart.add(&builtin_product(1));
        cart.add(&builtin_product(2));
        cart.add(&builtin_product(3));
    }

    updated.update_quantity(ProductId::new(2), 0);
    removed.remove(ProductId::new(2));

    assert_eq!(updated, removed);
    assert!(updated.get(ProductId::new(2)).is_none());
}

#[test]
fn test_operations_on_missing_id_leave_cart_unchanged() {
    let mut cart = CartStore::new();
    cart.add(&builtin_product(7));
    let before = cart.clone();

    for quantity in [-1, 0, 1, 10] {
        cart.update_quantity(ProductId::new(8), quantity);
    }
    cart.remove(ProductId::new(8));

    assert_eq!(cart, before);
}

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_total_empty() {
    assert_eq!(CartStore::new().compute_total(), 0.0);
}

#[test]
fn test_total_single_line_with_separator() {
    let mut cart = CartStore::new();
    let product = priced(1, "1,200.00 DH");
    cart.add(&product);
    cart.update_quantity(product.id, 2);

    assert_eq!(cart.compute_total(), 2400.0);
}

#[test]
fn test_total_two_lines() {
    let mut cart = CartStore::new();
    cart.add(&priced(1, "300.00 DH"));
    let product = priced(2, "4,500.00 DH");
    cart.add(&product);
    cart.update_quantity(product.id, 3);

    assert_eq!(cart.compute_total(), 13800.0);
}

#[test]
fn test_total_whole_builtin_catalog() {
    let mut cart = CartStore::new();
    for product in Catalog::builtin().products() {
        cart.add(product);
    }

    // 1200 + 300 + 800 + 2800 + 2500 + 4500 + 1580 + 3900 + 1800 + 2600 + 2200 + 5200
    assert_eq!(cart.compute_total(), 29380.0);
    assert_eq!(cart.subtotal(), rust_decimal::Decimal::new(29_380, 0));
}

#[test]
fn test_malformed_price_does_not_poison_total() {
    let mut cart = CartStore::new();
    cart.add(&priced(1, "1,200.00 DH"));
    cart.add(&priced(2, "N/A"));
    cart.update_quantity(ProductId::new(2), 4);

    assert_eq!(cart.compute_total(), 1200.0);
    assert_eq!(cart.item_count(), 5);
}

// =============================================================================
// Clear / Sequences
// =============================================================================

#[test]
fn test_clear_always_empties() {
    let mut cart = CartStore::new();
    cart.clear();
    assert!(cart.is_empty());

    for product in Catalog::builtin().products() {
        cart.add(product);
        cart.add(product);
    }
    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.compute_total(), 0.0);
}

#[test]
fn test_add_add_update_remove_sequence() {
    let mut cart = CartStore::new();
    let product = priced(1, "1200.00");

    cart.add(&product);
    cart.add(&product);
    assert_eq!(cart.get(product.id).unwrap().quantity, 2);

    cart.update_quantity(product.id, 5);
    assert_eq!(cart.get(product.id).unwrap().quantity, 5);

    cart.remove(product.id);
    assert!(cart.is_empty());
    assert_eq!(cart.compute_total(), 0.0);
}

#[test]
fn test_cart_serializes_line_items() {
    let mut cart = CartStore::new();
    cart.add(&builtin_product(2));

    let json = serde_json::to_value(&cart).unwrap();
    assert_eq!(json["items"][0]["id"], 2);
    assert_eq!(json["items"][0]["price"], "300.00");
    assert_eq!(json["items"][0]["quantity"], 1);
}
