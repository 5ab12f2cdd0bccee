//! Integration tests for the checkout hand-off.

#![allow(clippy::float_cmp, clippy::unwrap_used, clippy::indexing_slicing)]

use maison_luxe_core::checkout::complete;
use maison_luxe_core::{CartStore, CheckoutError, CheckoutSummary, ProductId};
use maison_luxe_integration_tests::builtin_product;
use rust_decimal::Decimal;

fn cart_with(ids: &[i32]) -> CartStore {
    let mut cart = CartStore::new();
    for &id in ids {
        cart.add(&builtin_product(id));
    }
    cart
}

#[test]
fn test_summary_reflects_cart() {
    let cart = cart_with(&[1, 1, 12]);
    let summary = CheckoutSummary::from_cart(&cart).unwrap();

    assert_eq!(summary.lines, cart.items());
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.total(), cart.compute_total());
    assert_eq!(summary.subtotal, Decimal::new(7_600, 0));
}

#[test]
fn test_completion_clears_cart_and_issues_receipt() {
    let mut cart = cart_with(&[4, 9]);
    let summary = CheckoutSummary::from_cart(&cart).unwrap();
    let receipt = complete(&summary, &mut cart).unwrap();

    assert!(cart.is_empty());
    assert_eq!(cart.compute_total(), 0.0);
    assert_eq!(receipt.item_count, 2);
    assert_eq!(receipt.subtotal, Decimal::new(4_600, 0));
}

#[test]
fn test_receipts_have_distinct_references() {
    let mut cart = cart_with(&[1]);
    let first = complete(&CheckoutSummary::from_cart(&cart).unwrap(), &mut cart).unwrap();

    cart.add(&builtin_product(1));
    let second = complete(&CheckoutSummary::from_cart(&cart).unwrap(), &mut cart).unwrap();

    assert_ne!(first.reference, second.reference);
    assert!(second.completed_at >= first.completed_at);
}

#[test]
fn test_cannot_check_out_empty_cart() {
    let cart = CartStore::new();
    assert_eq!(
        CheckoutSummary::from_cart(&cart),
        Err(CheckoutError::EmptyCart)
    );
}

#[test]
fn test_cart_edited_during_checkout() {
    let mut cart = cart_with(&[2]);
    let summary = CheckoutSummary::from_cart(&cart).unwrap();
    cart.update_quantity(ProductId::new(2), 3);

    assert_eq!(complete(&summary, &mut cart), Err(CheckoutError::CartChanged));
    assert_eq!(cart.get(ProductId::new(2)).unwrap().quantity, 3);
}

#[test]
fn test_receipt_serializes() {
    let mut cart = cart_with(&[2]);
    let receipt = complete(&CheckoutSummary::from_cart(&cart).unwrap(), &mut cart).unwrap();

    let json = serde_json::to_value(&receipt).unwrap();
    assert_eq!(json["item_count"], 1);
    assert_eq!(json["subtotal"], "300.00");
    assert!(json["reference"].is_string());
}
