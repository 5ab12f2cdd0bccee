//! CLI command implementations.
//!
//! - [`catalog`] - Print the catalog
//! - [`shop`] - Interactive shopping session

pub mod catalog;
pub mod shop;
