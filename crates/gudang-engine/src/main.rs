//! Service binary for the Gudang inventory dashboard.
//!
//! Wires together the persisted collection store, the randomized event
//! simulator, and the dashboard API server, then runs until terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `gudang-config.yaml`
//! 3. Open the JSON file store (seeding on first run)
//! 4. Create simulator control state
//! 5. Start the dashboard API server
//! 6. Start the simulator loop
//! 7. Stop both cleanly on Ctrl-C

mod error;

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gudang_observer::state::AppState;
use gudang_sim::{GudangConfig, RngDraws, SimControl};
use gudang_store::{JsonFileAdapter, Store};

use crate::error::EngineError;

/// Application entry point for the Gudang service.
///
/// # Errors
///
/// Returns an error if any initialization step fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration first so logging can honor its level.
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(true)
        .init();

    info!("gudang-engine starting");
    info!(
        host = config.server.host,
        port = config.server.port,
        data_dir = config.storage.data_dir,
        interval_ms = config.simulator.interval_ms,
        low_stock_threshold = config.simulator.low_stock_threshold,
        "Configuration loaded"
    );

    // 2. Open the store over the JSON file adapter.
    let adapter = JsonFileAdapter::open(&config.storage.data_dir).map_err(EngineError::from)?;
    let store = Store::open(Box::new(adapter));
    info!(
        stock_items = store.stock().len(),
        orders = store.orders().len(),
        "Store opened"
    );
    let store = Arc::new(RwLock::new(store));

    // 3. Create simulator control state.
    let control = Arc::new(SimControl::new(config.simulator.interval_ms));
    if config.simulator.start_paused {
        control.pause();
        info!("Simulator starting paused");
    }

    // 4. Start the dashboard API server.
    let app_state = Arc::new(AppState::new(
        Arc::clone(&store),
        Arc::clone(&control),
        config.simulator.low_stock_threshold,
    ));
    let server_config = config.server.clone();
    let server_handle = tokio::spawn(async move {
        gudang_observer::start_server(&server_config, app_state).await
    });

    // 5. Start the simulator loop.
    let sim_handle = tokio::spawn(gudang_sim::run_simulator(
        Arc::clone(&store),
        Arc::clone(&control),
        Box::new(RngDraws::new()),
    ));

    // 6. Run until Ctrl-C or a fatal server error.
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(error) = result {
                warn!(%error, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        }
        result = server_handle => {
            match result {
                Ok(Ok(())) => info!("Dashboard server exited"),
                Ok(Err(error)) => {
                    return Err(Box::new(EngineError::from(error)) as Box<dyn std::error::Error>);
                }
                Err(error) => warn!(%error, "Dashboard server task failed"),
            }
        }
    }

    // 7. Stop the simulator and wait for it to drain.
    control.request_stop();
    if let Err(error) = sim_handle.await {
        warn!(%error, "Simulator task failed during shutdown");
    }

    info!("gudang-engine shutdown complete");
    Ok(())
}

/// Load the service configuration from `gudang-config.yaml`.
///
/// Looks for the config file relative to the current working directory;
/// `GUDANG_CONFIG` overrides the path. A missing file yields defaults.
fn load_config() -> Result<GudangConfig, EngineError> {
    let path = std::env::var("GUDANG_CONFIG").unwrap_or_else(|_| String::from("gudang-config.yaml"));
    let config_path = Path::new(&path);
    let mut config = if config_path.exists() {
        GudangConfig::from_file(config_path)?
    } else {
        // Logging is not up yet; the defaults are logged right after init.
        GudangConfig::default()
    };
    config.apply_env_overrides();
    Ok(config)
}
