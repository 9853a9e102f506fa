/// Indexer Mock Server
///
/// Answers txwatch protocol requests from an in-memory chain, optionally
/// seeded from a saved store snapshot.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use indexer_mock::{load_indexer, run_server};
use txwatch::WatcherConfig;

#[derive(Debug)]
struct Config {
    snapshot: Option<PathBuf>,
    height: Option<u32>,
    server_host: String,
    server_port: u16,
}

impl Config {
    fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // Load .env file if present

        let snapshot = env::var("INDEXER_SNAPSHOT").ok().map(PathBuf::from);

        let height = match env::var("INDEXER_HEIGHT") {
            Ok(value) => Some(value.parse().context("Invalid INDEXER_HEIGHT")?),
            Err(_) => None,
        };

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "9091".to_string())
            .parse()
            .context("Invalid SERVER_PORT")?;

        Ok(Self {
            snapshot,
            height,
            server_host,
            server_port,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting indexer mock...");

    let config = Config::from_env().context("Failed to load configuration")?;
    let versions = WatcherConfig::from_env().address_versions();

    let indexer = load_indexer(config.snapshot.as_deref(), versions, config.height)
        .context("Failed to load snapshot")?;
    log::info!("Chain height {}", indexer.height());

    run_server(indexer, config.server_host, config.server_port)
        .await
        .context("Server error")?;

    Ok(())
}
