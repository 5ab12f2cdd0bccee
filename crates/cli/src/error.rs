//! Unified CLI error type with Sentry capture.

use std::path::PathBuf;

use maison_luxe_core::CatalogError;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error for CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog data failed validation.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog YAML is malformed.
    #[error("Invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Catalog file extension is not `.json`, `.yaml` or `.yml`.
    #[error("Unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Writing output or reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Log the error and report it to Sentry (no-op when Sentry is not initialized).
    pub fn report(&self) {
        let event_id = sentry::capture_error(self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Command failed"
        );
    }
}

/// Result type alias for `CliError`.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let err = CliError::UnsupportedFormat(PathBuf::from("catalog.toml"));
        assert_eq!(err.to_string(), "Unsupported catalog format: catalog.toml");

        let err = CliError::Config(ConfigError::InvalidEnvVar(
            "MAISON_LUXE_CURRENCY".to_string(),
            "bad".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid environment variable MAISON_LUXE_CURRENCY: bad"
        );
    }

    #[test]
    fn test_catalog_error_converts() {
        let catalog_err = CatalogError::DuplicateId(maison_luxe_core::ProductId::new(3));
        let err: CliError = catalog_err.into();
        assert_eq!(err.to_string(), "Catalog error: duplicate product id 3");
    }
}
