//! Maison Luxe Core - Catalog, cart and checkout state.
//!
//! This crate holds everything with testable semantics in the Maison Luxe
//! showcase:
//! - [`catalog`] - The read-only product list (watches and eyewear)
//! - [`cart`] - The cart store: line items, quantities and the order total
//! - [`showcase`] - Favorites and recently viewed products
//! - [`checkout`] - Summary snapshot and completion hand-off
//! - [`types`] - Newtype IDs, prices and product categories
//!
//! # Architecture
//!
//! The core crate does no I/O. State is held in plain owned structs that a
//! display surface keeps in its own session state and mutates through `&mut`
//! references, one user event at a time.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod showcase;
pub mod types;

pub use cart::{CartStore, LineItem};
pub use catalog::{Catalog, CatalogError, Product};
pub use checkout::{CheckoutError, CheckoutSummary, Receipt};
pub use showcase::Showcase;
pub use types::*;
