//! Skillfeed - Feed selection and peer comparison engine
//!
//! Serves the practice-feed HTTP API: queue building, submission recording,
//! peer comparison, and session progress.

use anyhow::Result;
use clap::{Parser, Subcommand};
use skillfeed::api::build_app;
use skillfeed::catalog::ChallengeCatalog;
use skillfeed::config::SkillfeedConfig;
use skillfeed::storage::{FeedStore, JsonFeedStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skillfeed")]
#[command(author = "Skillfeed Team")]
#[command(version)]
#[command(about = "Feed selection and peer comparison engine for practice challenges")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "SKILLFEED_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the skillfeed API server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },

    /// Summarize the loaded challenge catalog
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("skillfeed={},tower_http=debug", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        SkillfeedConfig::from_file(config_path)?
    } else {
        SkillfeedConfig::default()
    };

    match cli.command {
        Commands::Serve { host, port } => {
            run_server(config, host, port).await?;
        }
        Commands::Config { default } => {
            show_config(if default { None } else { Some(&config) })?;
        }
        Commands::Catalog => {
            show_catalog(&config)?;
        }
    }

    Ok(())
}

fn load_catalog(config: &SkillfeedConfig) -> Result<ChallengeCatalog> {
    match &config.catalog.path {
        Some(path) => {
            tracing::info!("Loading catalog from {}", path.display());
            Ok(ChallengeCatalog::from_file(path)?)
        }
        None => {
            tracing::info!("No catalog file configured, using builtin content");
            Ok(ChallengeCatalog::builtin())
        }
    }
}

async fn run_server(
    config: SkillfeedConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting skillfeed");

    let catalog = Arc::new(load_catalog(&config)?);
    tracing::info!("Catalog loaded: {} challenges", catalog.len());

    let store: Option<Arc<dyn FeedStore>> = if config.storage.enabled {
        let data_dir = config
            .storage
            .data_dir
            .clone()
            .unwrap_or_else(JsonFeedStore::default_dir);
        tracing::info!("Persistence at {}", data_dir.display());
        Some(Arc::new(JsonFeedStore::new(data_dir).await?))
    } else {
        tracing::warn!("Persistence disabled; submit/compare/progress will answer 503");
        None
    };

    let app = build_app(catalog, store, &config.server.cors_origins);

    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

fn show_config(config: Option<&SkillfeedConfig>) -> Result<()> {
    let config = config.cloned().unwrap_or_default();
    let toml = toml::to_string_pretty(&config)?;
    println!("{}", toml);
    Ok(())
}

fn show_catalog(config: &SkillfeedConfig) -> Result<()> {
    let catalog = load_catalog(config)?;

    println!("{} challenges", catalog.len());
    println!();
    println!("By type:");
    for (ty, count) in catalog.counts_by_type() {
        println!("  {:<18} {}", ty, count);
    }
    println!();
    println!("By concept area:");
    for (area, count) in catalog.counts_by_area() {
        println!("  {:<22} {}", area, count);
    }

    Ok(())
}
