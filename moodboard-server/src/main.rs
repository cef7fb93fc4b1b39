//! moodboard-server - Main entry point
//!
//! Resolves configuration, starts the periodic update source, and serves the
//! HTTP API and live channel until Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moodboard_common::config::{self, BoardConfig, CliOverrides};
use moodboard_server::broadcast::{SongBroadcaster, BROADCAST_CAPACITY};
use moodboard_server::credentials::CredentialStore;
use moodboard_server::music_service::{MusicService, SpotifyClient};
use moodboard_server::source::UpdateSource;
use moodboard_server::store::SongFeed;
use moodboard_server::{build_router, AppState};

/// Command-line arguments for moodboard-server
#[derive(Parser, Debug)]
#[command(name = "moodboard-server")]
#[command(about = "Live mood board for what people are listening to")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to config.toml
    #[arg(short, long, env = "MOODBOARD_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::default_config_path);
    let toml_config = config::load_toml_config(config_path.as_deref())
        .context("Failed to load config file")?;
    let toml_found = toml_config.is_some();

    let config = BoardConfig::resolve(
        &CliOverrides { port: args.port },
        toml_config.unwrap_or_default(),
    )
    .context("Invalid configuration")?;

    // Initialize tracing
    let default_filter = format!(
        "moodboard_server={0},moodboard_common={0},tower_http={0}",
        config.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting moodboard-server v{}", env!("CARGO_PKG_VERSION"));
    match (&config_path, toml_found) {
        (Some(path), true) => info!("Loaded config from {}", path.display()),
        (Some(path), false) => warn!("Config file {} not found, using defaults", path.display()),
        (None, _) => warn!("No config directory available, using defaults"),
    }
    info!(
        production = config.production,
        dashboard = %config.dashboard_url,
        tick = ?config.tick_interval,
        "Configuration resolved"
    );
    if config.spotify.client_id.is_empty() {
        warn!("SPOTIFY_CLIENT_ID not set; only mock songs until authorization is configured");
    }

    let music: Arc<dyn MusicService> = Arc::new(
        SpotifyClient::new(config.spotify.clone()).context("Failed to create music client")?,
    );
    let feed = Arc::new(SongFeed::new(SongBroadcaster::new(BROADCAST_CAPACITY)));
    let credentials = Arc::new(CredentialStore::new());

    let updates = UpdateSource::new(
        Arc::clone(&feed),
        Arc::clone(&credentials),
        Arc::clone(&music),
        config.tick_interval,
    )
    .spawn();

    let state = AppState::new(
        feed,
        credentials,
        music,
        config.dashboard_url.clone(),
        config.allowed_origins.clone(),
    );
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    updates.abort();
    info!("Server shutdown complete");

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
