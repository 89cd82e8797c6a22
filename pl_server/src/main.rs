//! Poker league tournament server.
//!
//! Serves tournament registration, results, profiles, and the
//! leaderboard over HTTP, backed by a single JSON document store.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Error;
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use pl_server::{api, config::ServerConfig};
use poker_league::{AdminPolicy, Store};

const HELP: &str = "\
Run a poker league tournament server

USAGE:
  pl_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:3000]
  --data-file  PATH        Path to the JSON document   [default: env DATA_FILE or data.json]
  --admins     ID,ID,...   Admin user ids              [default: env ADMIN_IDS]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  DATA_FILE                Path to the persisted JSON document
  ADMIN_IDS                Comma-separated admin user ids
  LEADERBOARD_SIZE         Number of leaderboard entries served
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind: Option<SocketAddr> = pargs.value_from_str("--bind").ok();
    let data_file: Option<PathBuf> = pargs.value_from_str("--data-file").ok();
    let admins: Option<String> = pargs.value_from_str("--admins").ok();

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    let config = ServerConfig::from_env(bind, data_file, admins)?;
    config.validate()?;

    info!("Starting poker league server at {}", config.bind);
    info!("Opening document store at {}", config.data_file.display());

    let store = Arc::new(Store::open(&config.data_file).await?);

    if config.admin_ids.is_empty() {
        log::warn!("No admin ids configured; admin operations will be rejected");
    }
    let policy = AdminPolicy::new(config.admin_ids.iter().copied());

    let state = api::AppState::new(store, policy, config.leaderboard_size);
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
