//! Shopping session state.

use maison_luxe_core::{CartStore, Catalog, CheckoutSummary, Showcase, format_amount, parse_amount};
use rust_decimal::Decimal;

/// Everything one shopping session owns.
///
/// Commands receive `&mut ShopSession`; there is no shared or global state.
#[derive(Debug, Clone)]
pub struct ShopSession {
    catalog: Catalog,
    currency_suffix: String,
    /// The shopper's cart.
    pub cart: CartStore,
    /// Favorites and viewed products.
    pub showcase: Showcase,
    /// Summary shown by `checkout`, awaiting `confirm` or `cancel`.
    pub pending_checkout: Option<CheckoutSummary>,
}

impl ShopSession {
    /// Start a session with an empty cart.
    #[must_use]
    pub fn new(catalog: Catalog, currency_suffix: impl Into<String>) -> Self {
        Self {
            catalog,
            currency_suffix: currency_suffix.into(),
            cart: CartStore::new(),
            showcase: Showcase::new(),
            pending_checkout: None,
        }
    }

    /// Get a reference to the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Format an amount with the session currency.
    #[must_use]
    pub fn money(&self, amount: Decimal) -> String {
        format_amount(amount, &self.currency_suffix)
    }

    /// Format a catalog price string, falling back to the raw text if it
    /// does not parse.
    #[must_use]
    pub fn price_label(&self, price: &str) -> String {
        parse_amount(price).map_or_else(|_| price.to_string(), |amount| self.money(amount))
    }
}
