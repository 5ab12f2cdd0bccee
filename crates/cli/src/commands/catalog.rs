//! Catalog listing.
//!
//! # Usage
//!
//! ```bash
//! # Everything, grouped by category
//! ml-cli catalog
//!
//! # One category, or only new arrivals
//! ml-cli catalog --category lunette
//! ml-cli catalog --new
//!
//! # Machine-readable
//! ml-cli catalog --json
//! ```

use std::io::{self, Write};
use std::str::FromStr;

use maison_luxe_core::{Category, Product};

use crate::catalog_file::load_catalog;
use crate::config::CliConfig;
use crate::error::Result;
use crate::state::ShopSession;

/// Which products a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    /// Every product, grouped by category.
    All,
    /// One category.
    Category(Category),
    /// Products flagged as new.
    New,
    /// The session's favorites.
    Favorites,
}

impl FromStr for ListFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "tout" => Ok(Self::All),
            "new" | "nouveautes" | "nouveautés" => Ok(Self::New),
            "fav" | "favs" | "favorites" | "favoris" => Ok(Self::Favorites),
            other => other
                .parse::<Category>()
                .map(Self::Category)
                .map_err(|_| s.to_string()),
        }
    }
}

/// Print the catalog to stdout.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or stdout cannot be
/// written.
pub fn list(config: &CliConfig, filter: ListFilter, json: bool) -> Result<()> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    let session = ShopSession::new(catalog, config.currency_suffix.clone());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let products = filtered(&session, filter);
        serde_json::to_writer_pretty(&mut out, &products)?;
        writeln!(out)?;
    } else {
        write_listing(&mut out, &session, filter)?;
    }
    Ok(())
}

/// Products matching `filter`, in catalog order.
#[must_use]
pub fn filtered(session: &ShopSession, filter: ListFilter) -> Vec<&Product> {
    let catalog = session.catalog();
    match filter {
        ListFilter::All => catalog.products().iter().collect(),
        ListFilter::Category(category) => catalog.by_category(category).collect(),
        ListFilter::New => catalog.new_arrivals().collect(),
        ListFilter::Favorites => session
            .showcase
            .favorites()
            .iter()
            .filter_map(|&id| catalog.get(id))
            .collect(),
    }
}

/// Write a listing; the full catalog is split into category sections.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_listing<W: Write>(
    out: &mut W,
    session: &ShopSession,
    filter: ListFilter,
) -> io::Result<()> {
    if filter == ListFilter::All {
        for category in Category::ALL {
            let products: Vec<&Product> = session.catalog().by_category(category).collect();
            if products.is_empty() {
                continue;
            }
            writeln!(out, "{}", category.label())?;
            for product in products {
                write_product_row(out, session, product)?;
            }
        }
        return Ok(());
    }

    let products = filtered(session, filter);
    if products.is_empty() {
        writeln!(out, "No products.")?;
    }
    for product in products {
        write_product_row(out, session, product)?;
    }
    Ok(())
}

/// One line per product: id, name, price, rating and badges.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_product_row<W: Write>(
    out: &mut W,
    session: &ShopSession,
    product: &Product,
) -> io::Result<()> {
    let new_badge = if product.is_new() { "  NEW" } else { "" };
    let favorite = if session.showcase.is_favorite(product.id) {
        "  (favorite)"
    } else {
        ""
    };

    writeln!(
        out,
        "  #{:<3} {:<26} {:>14}  {:.1}/5{new_badge}{favorite}",
        product.id.as_i32(),
        product.name,
        session.price_label(product.price.as_str()),
        product.rating,
    )
}
