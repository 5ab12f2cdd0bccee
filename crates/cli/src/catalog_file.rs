//! Loading the catalog from a data file.
//!
//! The file is a list of products in JSON or YAML, chosen by extension:
//!
//! ```yaml
//! - id: 1
//!   name: Montre Royale Or
//!   price: "1,200.00 DH"
//!   image: /watch1.jpg
//!   category: montre
//!   rating: 5
//!   isNew: true
//! ```

use std::path::Path;

use maison_luxe_core::{Catalog, Product};
use tracing::info;

use crate::error::{CliError, Result};

/// Catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns `CliError::UnsupportedFormat` for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(CliError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Parse catalog file contents.
///
/// # Errors
///
/// Returns an error if the contents do not parse or fail catalog validation.
pub fn parse_catalog(contents: &str, format: CatalogFormat) -> Result<Catalog> {
    let catalog = match format {
        CatalogFormat::Json => Catalog::from_json_str(contents)?,
        CatalogFormat::Yaml => {
            let products: Vec<Product> = serde_yaml::from_str(contents)?;
            Catalog::new(products)?
        }
    };
    Ok(catalog)
}

/// Load the catalog from `path`, or the built-in catalog when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension,
/// or does not hold a valid catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        let catalog = Catalog::builtin();
        info!(products = catalog.len(), "Using built-in catalog");
        return Ok(catalog);
    };

    let format = CatalogFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::CatalogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&contents, format)?;
    info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
    Ok(catalog)
}
