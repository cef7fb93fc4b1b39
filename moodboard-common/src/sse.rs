//! Server-Sent Events (SSE) utilities
//!
//! Encodes [`BoardEvent`]s for the live channel.

use axum::response::sse::{Event, KeepAlive};
use std::time::Duration;

use crate::events::BoardEvent;
use crate::{Error, Result};

/// Keep-alive comment interval for viewer streams
pub const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Convert a board event into an axum SSE event
///
/// The SSE `event:` field carries the event name, `data:` carries the JSON payload.
pub fn to_sse_event(event: &BoardEvent) -> Result<Event> {
    let payload = event
        .payload()
        .map_err(|e| Error::Internal(format!("Failed to serialize {}: {}", event.name(), e)))?;

    Event::default()
        .event(event.name())
        .json_data(payload)
        .map_err(|e| Error::Internal(format!("Failed to encode {}: {}", event.name(), e)))
}

/// Keep-alive configuration shared by all viewer streams
pub fn keep_alive() -> KeepAlive {
    KeepAlive::new()
        .interval(KEEP_ALIVE_INTERVAL)
        .text("keep-alive")
}
