use std::{sync::Arc, thread};

use anyhow::{Context, Result};
use log::{error, info};
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};
use tokio::sync::broadcast;

use propcompare::{
    catalog::Catalog,
    config::{self, Config},
    logger::setup_logger,
    pricing,
    web::{self, AppState},
};

fn spawn_signal_listener(shutdown_tx: broadcast::Sender<()>) -> Result<()> {
    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("failed to register signal handlers")?;
    thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            info!("Received signal {}, shutting down", signal);
            let _ = shutdown_tx.send(());
        }
    });
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::read_config();

    // Initialize logger
    setup_logger(config.as_ref().map_or("info", |config| config.log_level()))?;

    let config: Arc<Config> = match config {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!("failed to read config: {err:#}");
            std::process::exit(1);
        }
    };

    let catalog = Arc::new(Catalog::load(&config.data_dir())?);
    let model = pricing::from_config(&config)?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    spawn_signal_listener(shutdown_tx)?;

    let state = AppState {
        config,
        catalog,
        model,
    };

    if let Err(err) = web::start_http_server(state, shutdown_rx).await {
        error!("Error: {:?}", err);
        return Err(err);
    }

    Ok(())
}
