//! Broadcast channel for dashboard viewers
//!
//! Fans out each newly stored song to every connected viewer. Delivery is
//! best-effort: a viewer that falls behind the channel buffer skips the songs
//! it missed, and sending never waits on a viewer.

use axum::response::sse::{Event, Sse};
use futures::stream::{self, Stream, StreamExt};
use moodboard_common::sse::{keep_alive, to_sse_event};
use moodboard_common::{BoardEvent, SongEvent};
use std::convert::Infallible;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, info, warn};

/// Songs buffered per viewer before a slow viewer starts skipping
pub const BROADCAST_CAPACITY: usize = 100;

/// Fan-out side of the live channel
#[derive(Clone)]
pub struct SongBroadcaster {
    tx: broadcast::Sender<SongEvent>,
}

impl SongBroadcaster {
    /// Create a new broadcaster
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of songs buffered per viewer
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        debug!("Song broadcaster initialized with capacity {}", capacity);
        Self { tx }
    }

    /// Send a song to all connected viewers, ignoring if none are connected
    ///
    /// Returns the number of viewers the song was queued for.
    pub fn publish(&self, song: SongEvent) -> usize {
        match self.tx.send(song) {
            Ok(count) => {
                debug!("Broadcast newSong to {} viewers", count);
                count
            }
            Err(_) => 0,
        }
    }

    /// Register a new viewer
    pub fn subscribe(&self) -> broadcast::Receiver<SongEvent> {
        self.tx.subscribe()
    }

    /// Number of currently connected viewers
    pub fn viewer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for SongBroadcaster {
    fn default() -> Self {
        Self::new(BROADCAST_CAPACITY)
    }
}

/// Build the event sequence for one viewer: the snapshot first, then each new song
pub fn viewer_events(
    snapshot: Vec<SongEvent>,
    rx: broadcast::Receiver<SongEvent>,
) -> impl Stream<Item = BoardEvent> {
    let updates = BroadcastStream::new(rx).filter_map(|result| async move {
        match result {
            Ok(song) => Some(BoardEvent::NewSong(song)),
            Err(e) => {
                // Lagged viewer; the skipped songs are not replayed
                warn!("Viewer stream error: {:?}", e);
                None
            }
        }
    });

    stream::once(async move { BoardEvent::RecentSongs(snapshot) }).chain(updates)
}

/// Wrap a viewer's event sequence as an SSE response
pub fn viewer_sse(
    snapshot: Vec<SongEvent>,
    rx: broadcast::Receiver<SongEvent>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("Viewer connected, snapshot of {} songs", snapshot.len());

    let stream = viewer_events(snapshot, rx).filter_map(|event| async move {
        match to_sse_event(&event) {
            Ok(sse) => Some(Ok(sse)),
            Err(e) => {
                warn!("Dropping {} event: {}", event.name(), e);
                None
            }
        }
    });

    Sse::new(stream).keep_alive(keep_alive())
}
