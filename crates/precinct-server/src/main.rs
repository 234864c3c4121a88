//! Server binary for the Precinct voter check-in service.
//!
//! Wires together the in-memory store, the demo seed routine, and the
//! REST API server.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `precinct-config.yaml` (defaults if absent)
//! 3. Construct the store and seed the demo data
//! 4. Serve the REST API until the process is terminated

mod config;

use std::path::Path;
use std::sync::Arc;

use precinct_api::server::{ServerConfig, start_server};
use precinct_api::state::AppState;
use precinct_store::PollStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Default configuration file path, relative to the working directory.
const CONFIG_PATH: &str = "precinct-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration parsing or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration; a missing file means a default demo setup.
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::default()
    };

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.filter.clone())),
        )
        .with_target(true)
        .init();

    info!("precinct-server starting");

    // 3. Construct and seed the store. State lives in process memory
    // only; every start begins from the same demo data set.
    let mut store = config
        .seed
        .rng_seed
        .map_or_else(PollStore::new, PollStore::with_seed);
    if config.seed.demo_data {
        store.seed_demo_data();
    }

    let state = Arc::new(AppState::new(store));

    // 4. Serve until terminated.
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
