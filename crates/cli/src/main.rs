//! Maison Luxe CLI - Browse the collection and shop from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! ml-cli catalog
//! ml-cli catalog --category montre
//!
//! # Interactive shopping session (cart, favorites, checkout)
//! ml-cli shop
//!
//! # Use a catalog file instead of the built-in collection
//! ml-cli --catalog data/catalog.yaml shop
//! ```
//!
//! # Commands
//!
//! - `catalog` - Print the product catalog
//! - `shop` - Start an interactive shopping session

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use maison_luxe_core::Category;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog_file;
mod commands;
mod config;
mod error;
mod state;

use commands::catalog::ListFilter;
use config::CliConfig;
use error::{CliError, Result};
use state::ShopSession;

#[derive(Parser)]
#[command(name = "ml-cli")]
#[command(author, version, about = "Maison Luxe showcase and cart")]
struct Cli {
    /// Catalog file (.json, .yaml or .yml); overrides `MAISON_LUXE_CATALOG`
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the product catalog
    Catalog {
        /// Only show one category (`montre`/`watch`, `lunette`/`eyewear`)
        #[arg(short, long, conflicts_with = "new")]
        category: Option<Category>,

        /// Only show new arrivals
        #[arg(short, long)]
        new: bool,

        /// Print products as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive shopping session
    Shop,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &CliConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Logs go to stderr so they never mix into listings or the shop prompt.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "maison_luxe_cli=info,maison_luxe_core=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            CliError::from(e).report();
            std::process::exit(1);
        }
    };

    let sentry_guard = init_sentry(&config);

    if let Err(e) = run(cli, config) {
        e.report();
        // process::exit skips destructors; the guard flushes pending events on drop
        drop(sentry_guard);
        std::process::exit(1);
    }
}

fn run(cli: Cli, mut config: CliConfig) -> Result<()> {
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    match cli.command {
        Commands::Catalog {
            category,
            new,
            json,
        } => {
            let filter = match (category, new) {
                (Some(category), _) => ListFilter::Category(category),
                (None, true) => ListFilter::New,
                (None, false) => ListFilter::All,
            };
            commands::catalog::list(&config, filter, json)?;
        }
        Commands::Shop => {
            let catalog = catalog_file::load_catalog(config.catalog_path.as_deref())?;
            let mut session = ShopSession::new(catalog, config.currency_suffix);
            commands::shop::interactive(&mut session)?;
        }
    }
    Ok(())
}
