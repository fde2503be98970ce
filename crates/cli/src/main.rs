//! Cartwheel CLI - fetches the cart and renders it.
//!
//! The binary plays the part of the UI layer: it loads the initial items
//! from the remote catalog once, applies any requested adjustments through
//! the store's named operations, and renders the line items with the
//! navbar-style running total. Cart state lives for one invocation; nothing
//! is persisted.
//!
//! # Usage
//!
//! ```bash
//! # Fetch and render the cart
//! cw-cli show
//!
//! # Adjust quantities before rendering
//! cw-cli show --increase rec1JZlfCIBOPdcT2 --decrease rec4tuBcLLDEEbPi4
//!
//! # Drop a line, or empty the cart entirely
//! cw-cli show --remove rec1JZlfCIBOPdcT2
//! cw-cli show --clear
//! ```
//!
//! # Environment Variables
//!
//! - `CARTWHEEL_CATALOG_URL` - Remote catalog endpoint
//! - `CARTWHEEL_REQUEST_TIMEOUT_SECS` - Catalog request timeout
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `RUST_LOG` - Tracing filter (default: info for the cartwheel crates)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use cartwheel_store::CartConfig;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cw-cli")]
#[command(author, version, about = "Cartwheel CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the cart and render it after optional adjustments
    Show(commands::show::ShowArgs),
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &CartConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
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

#[tokio::main]
async fn main() {
    // Load configuration from environment (needed for Sentry init)
    let config = CartConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cartwheel_cli=info,cartwheel_store=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: CartConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show(args) => commands::show::run(config, args).await?,
    }
    Ok(())
}
