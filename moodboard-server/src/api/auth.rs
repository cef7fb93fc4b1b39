//! Music service OAuth flow
//!
//! `/auth/spotify` sends the browser to the provider; `/auth/callback`
//! exchanges the returned code, stores the token and sends the browser back
//! to the dashboard with `?auth=success` or `?auth=error`. Callback failures
//! never surface as HTTP errors.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    /// Set by the provider when the user denies access
    pub error: Option<String>,
}

/// Outcome reported to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Success,
    Error,
}

impl AuthOutcome {
    fn as_str(self) -> &'static str {
        match self {
            AuthOutcome::Success => "success",
            AuthOutcome::Error => "error",
        }
    }
}

/// `<dashboard>/?auth=<outcome>`
pub fn dashboard_redirect_url(dashboard_url: &str, outcome: AuthOutcome) -> String {
    format!(
        "{}/?auth={}",
        dashboard_url.trim_end_matches('/'),
        outcome.as_str()
    )
}

/// GET /auth/spotify
pub async fn authorize(State(state): State<AppState>) -> Response {
    match state.music.authorize_url() {
        Ok(url) => Redirect::to(&url).into_response(),
        Err(e) => {
            error!("Cannot build authorize URL: {}", e);
            ApiError::from(e).into_response()
        }
    }
}

/// GET /auth/callback?code=
pub async fn callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Redirect {
    let outcome = match query.code.filter(|c| !c.is_empty()) {
        None => {
            warn!(provider_error = ?query.error, "OAuth callback without code");
            AuthOutcome::Error
        }
        Some(code) => match state.music.exchange_code(&code).await {
            Ok(token) => {
                state.credentials.set(token).await;
                info!("Music service authorized");
                AuthOutcome::Success
            }
            Err(e) => {
                error!("Token exchange failed: {}", e);
                AuthOutcome::Error
            }
        },
    };

    Redirect::to(&dashboard_redirect_url(&state.dashboard_url, outcome))
}

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/spotify", get(authorize))
        .route("/auth/callback", get(callback))
}
