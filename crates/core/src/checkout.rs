//! Checkout hand-off.
//!
//! There is no payment gateway. The payment surface shows a
//! [`CheckoutSummary`] taken from the cart and, once it reports success,
//! calls [`complete`]. Completion clears the cart and returns a [`Receipt`].
//! Abandoning a checkout is simply dropping the summary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::cart::{CartStore, LineItem};

/// Errors that can occur during checkout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    /// Checkout was started with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,
    /// The cart was modified after the summary was taken.
    #[error("cart changed since checkout started")]
    CartChanged,
}

/// What the shopper is about to pay for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// Line items at the time checkout started.
    pub lines: Vec<LineItem>,
    /// Total units.
    pub item_count: u64,
    /// Exact amount due.
    pub subtotal: Decimal,
}

impl CheckoutSummary {
    /// Snapshot the cart for the payment surface.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if there is nothing to pay for.
    pub fn from_cart(cart: &CartStore) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(Self {
            lines: cart.items().to_vec(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
        })
    }

    /// Amount due as a float.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.subtotal.to_f64().unwrap_or(0.0)
    }
}

/// Confirmation of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Order reference shown to the shopper.
    pub reference: Uuid,
    /// Total units paid for.
    pub item_count: u64,
    /// Amount paid.
    pub subtotal: Decimal,
    /// When completion was confirmed.
    pub completed_at: DateTime<Utc>,
}

/// Finish a checkout after the payment surface confirms success.
///
/// Clears `cart` and returns a receipt for what was in it. The receipt's
/// count and amount are taken from the cart itself, never from the summary.
///
/// # Errors
///
/// Returns [`CheckoutError::CartChanged`] and leaves the cart untouched if
/// it no longer matches the summary the shopper agreed to.
pub fn complete(
    summary: &CheckoutSummary,
    cart: &mut CartStore,
) -> Result<Receipt, CheckoutError> {
    if cart.items() != summary.lines.as_slice() {
        return Err(CheckoutError::CartChanged);
    }

    let receipt = Receipt {
        reference: Uuid::new_v4(),
        item_count: cart.item_count(),
        subtotal: cart.subtotal(),
        completed_at: Utc::now(),
    };
    cart.clear();

    info!(
        reference = %receipt.reference,
        items = receipt.item_count,
        subtotal = %receipt.subtotal,
        "Checkout completed"
    );
    Ok(receipt)
}
