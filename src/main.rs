use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cartana::{App, AppConfig};

#[derive(Debug, Parser)]
#[command(name = "cartana", version, about = "Find any product on the internet with Cartana")]
struct Cli {
    /// Path to open at startup, e.g. `/searchpage`.
    path: Option<String>,

    /// Read configuration from this file instead of the platform default.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cartana=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_required(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::load().unwrap_or_else(|err| {
            warn!(error = %err, "using default configuration");
            AppConfig::default()
        }),
    };

    let initial_path = cli.path.unwrap_or_else(|| config.initial_path.clone());
    info!(path = %initial_path, "starting Cartana");

    App::run(config, initial_path)
}
