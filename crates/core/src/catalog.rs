//! The product catalog.
//!
//! The catalog is read-only once built. It comes either from the built-in
//! collection ([`Catalog::builtin`]) or from external data validated by
//! [`Catalog::new`] / [`Catalog::from_json_str`]. Reading files is left to
//! the caller.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{Category, Price, PriceError, ProductId};

/// Errors raised while building a catalog from external data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two products share an ID.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    /// A product's price cannot be parsed.
    #[error("product {id} has an invalid price: {source}")]
    InvalidPrice {
        /// Offending product.
        id: ProductId,
        /// Why the price was rejected.
        #[source]
        source: PriceError,
    },
    /// The JSON document is malformed.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog key.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Display price, e.g. `"1200.00"` or `"1,200.00 DH"`.
    pub price: Price,
    /// Image path or URL.
    pub image: String,
    /// Product line.
    pub category: Category,
    /// Average review score out of 5.
    pub rating: f64,
    /// Shown with a "new" badge.
    #[serde(default, alias = "isNew", skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
}

impl Product {
    /// Whether the product carries the "new" badge.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }
}

/// The fixed list of products shown in the showcase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from external product data.
    ///
    /// # Errors
    ///
    /// Returns an error if two products share an ID or a price does not
    /// parse. Catalog data is checked up front so a bad file fails at
    /// startup rather than showing up as a zero in someone's total.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            product
                .price
                .amount()
                .map_err(|source| CatalogError::InvalidPrice {
                    id: product.id,
                    source,
                })?;
        }
        Ok(Self { products })
    }

    /// Parse and validate a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails [`Catalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// The built-in collection of six watches and six pairs of eyewear.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products in one category, in display order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.category == category)
    }

    /// Products flagged as new.
    pub fn new_arrivals(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_new())
    }

    /// Number of products.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn product(
    id: i32,
    name: &str,
    price: &str,
    image: &str,
    category: Category,
    rating: f64,
    is_new: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::new(price),
        image: image.to_owned(),
        category,
        rating,
        is_new: is_new.then_some(true),
    }
}

fn builtin_products() -> Vec<Product> {
    use Category::{Eyewear, Watch};

    vec![
        product(1, "Montre Royale Or", "1200.00", "/watch1.jpg", Watch, 5.0, true),
        product(2, "Lunettes Prestige", "300.00", "/s1.jpg", Eyewear, 5.0, false),
        product(3, "Montre Élégance", "800.00", "/watch2.jpg", Watch, 4.8, false),
        product(4, "Lunettes Aviateur Luxe", "2800.00", "/s2.jpg", Eyewear, 4.9, true),
        product(5, "Montre Diamant", "2500.00", "/w3.jpg", Watch, 5.0, true),
        product(6, "Lunettes Sport Luxe", "4500.00", "/s3.jpg", Eyewear, 4.7, false),
        product(7, "Montre Chronographe", "1580.00", "/w4.jpg", Watch, 4.9, true),
        product(8, "Lunettes Cat Eye", "3900.00", "/s4.jpg", Eyewear, 4.8, false),
        product(9, "Montre Automatique", "1800.00", "/w5.jpg", Watch, 5.0, false),
        product(10, "Lunettes Vintage", "2600.00", "/s5.jpg", Eyewear, 4.6, false),
        product(
            11,
            "Montre Smart Luxe",
            "2200.00",
            "https://images.pexels.com/photos/437037/pexels-photo-437037.jpeg?auto=compress&cs=tinysrgb&w=600",
            Watch,
            4.7,
            true,
        ),
        product(
            12,
            "Lunettes Polarisées",
            "5200.00",
            "https://images.pexels.com/photos/46710/pexels-photo-46710.jpeg?auto=compress&cs=tinysrgb&w=600",
            Eyewear,
            4.9,
            false,
        ),
    ]
}
