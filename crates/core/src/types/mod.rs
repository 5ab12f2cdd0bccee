//! Core types for Maison Luxe.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;

pub use category::{Category, CategoryError};
pub use id::*;
pub use price::{DEFAULT_CURRENCY_SUFFIX, Price, PriceError, format_amount, parse_amount};
