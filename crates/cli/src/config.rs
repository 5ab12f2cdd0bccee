//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `MAISON_LUXE_CATALOG` - Path to a JSON or YAML catalog (default: built-in)
//! - `MAISON_LUXE_CURRENCY` - Currency suffix shown after amounts (default: DH)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `RUST_LOG` - Log filter (default: `maison_luxe_cli=info,maison_luxe_core=warn`)

use std::path::PathBuf;

use maison_luxe_core::DEFAULT_CURRENCY_SUFFIX;
use thiserror::Error;

const MAX_CURRENCY_SUFFIX_LENGTH: usize = 8;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// External catalog file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Suffix appended to displayed amounts
    pub currency_suffix: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. "production")
    pub sentry_environment: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_path = get_optional_env("MAISON_LUXE_CATALOG").map(PathBuf::from);
        let currency_suffix = get_env_or_default("MAISON_LUXE_CURRENCY", DEFAULT_CURRENCY_SUFFIX);
        validate_currency_suffix(&currency_suffix, "MAISON_LUXE_CURRENCY")?;

        Ok(Self {
            catalog_path,
            currency_suffix,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// A suffix containing digits or separators would read as part of the amount.
fn validate_currency_suffix(suffix: &str, var_name: &str) -> Result<(), ConfigError> {
    if suffix.chars().count() > MAX_CURRENCY_SUFFIX_LENGTH {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be at most {MAX_CURRENCY_SUFFIX_LENGTH} characters"),
        ));
    }
    if suffix
        .chars()
        .any(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, ',' | '.' | '-'))
    {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("{suffix:?} must not contain digits, spaces or separators"),
        ));
    }
    Ok(())
}
