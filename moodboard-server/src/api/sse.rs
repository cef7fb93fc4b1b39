//! Live channel
//!
//! Each viewer gets one `recentSongs` frame with the current recent view,
//! then one `newSong` frame per song appended after it connected. Snapshot
//! and subscription are taken together, so no song is missed or repeated.

use axum::{
    extract::State,
    response::sse::{Event, Sse},
    routing::get,
    Router,
};
use futures::stream::Stream;
use std::convert::Infallible;
use tracing::debug;

use crate::broadcast::viewer_sse;
use crate::store::RECENT_VIEW_LEN;
use crate::AppState;

/// GET /events
pub async fn event_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (snapshot, rx) = state.feed.subscribe_with_snapshot(RECENT_VIEW_LEN).await;
    debug!(viewers = state.feed.broadcaster().viewer_count(), "Subscribed viewer");

    viewer_sse(snapshot, rx)
}

pub fn sse_routes() -> Router<AppState> {
    Router::new().route("/events", get(event_stream))
}
