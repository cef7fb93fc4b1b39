//! HTTP API

pub mod auth;
pub mod handlers;
pub mod health;
pub mod sse;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::AppState;

pub use auth::auth_routes;
pub use health::health_routes;
pub use sse::sse_routes;

/// JSON endpoints, nested under `/api` by the router
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/now-playing", get(handlers::now_playing))
        .route("/lyrics", get(handlers::lyrics))
        .route("/mood", get(handlers::mood))
        .route("/recent-songs", get(handlers::recent_songs))
        .route("/mood-stats", get(handlers::mood_stats))
}

/// CORS restricted to the configured dashboard origins, GET and POST only
///
/// Origins that are not valid header values are logged and skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
}
