//! moodboard-server library
//!
//! Live "what people are listening to" board: a periodic update source feeds
//! a bounded song store, every new song fans out to connected viewers, and a
//! small HTTP API exposes lyrics, mood classification, the recent feed and
//! windowed mood statistics.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod broadcast;
pub mod catalog;
pub mod classifier;
pub mod credentials;
pub mod error;
pub mod music_service;
pub mod sentiment;
pub mod source;
pub mod stats;
pub mod store;

use credentials::CredentialStore;
use music_service::MusicService;
use store::SongFeed;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Bounded recent-song feed (also owns the broadcaster)
    pub feed: Arc<SongFeed>,
    /// Music service access token, once authorized
    pub credentials: Arc<CredentialStore>,
    /// Music service client
    pub music: Arc<dyn MusicService>,
    /// Dashboard base URL, target of the OAuth redirect
    pub dashboard_url: String,
    /// Origins permitted by CORS
    pub allowed_origins: Vec<String>,
}

impl AppState {
    pub fn new(
        feed: Arc<SongFeed>,
        credentials: Arc<CredentialStore>,
        music: Arc<dyn MusicService>,
        dashboard_url: String,
        allowed_origins: Vec<String>,
    ) -> Self {
        Self {
            feed,
            credentials,
            music,
            dashboard_url,
            allowed_origins,
        }
    }
}

/// Build application router
///
/// JSON endpoints live under `/api`; health, the live channel and the OAuth
/// flow sit at the root.
pub fn build_router(state: AppState) -> Router {
    let cors = api::cors_layer(&state.allowed_origins);

    Router::new()
        .nest("/api", api::api_routes())
        .merge(api::health_routes())
        .merge(api::sse_routes())
        .merge(api::auth_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
