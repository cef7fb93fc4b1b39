//! Song feed store
//!
//! Append-only, capacity-bounded sequence of [`SongEvent`]s: the single source
//! of truth for recent activity. Oldest songs are evicted first once the
//! capacity is exceeded. All reads return owned snapshots.
//!
//! Appending also publishes the song to the [`SongBroadcaster`] while the
//! write lock is held, so a viewer registered through
//! [`SongFeed::subscribe_with_snapshot`] sees every song exactly once, either
//! in its snapshot or as a later broadcast.

use chrono::{DateTime, Utc};
use moodboard_common::SongEvent;
use std::collections::VecDeque;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use crate::broadcast::SongBroadcaster;

/// Maximum number of songs retained
pub const FEED_CAPACITY: usize = 50;

/// Number of songs in the viewer-facing recent view
pub const RECENT_VIEW_LEN: usize = 20;

pub struct SongFeed {
    songs: RwLock<VecDeque<SongEvent>>,
    capacity: usize,
    broadcaster: SongBroadcaster,
}

impl SongFeed {
    /// Create an empty feed with the default capacity
    pub fn new(broadcaster: SongBroadcaster) -> Self {
        Self::with_capacity(FEED_CAPACITY, broadcaster)
    }

    pub fn with_capacity(capacity: usize, broadcaster: SongBroadcaster) -> Self {
        Self {
            songs: RwLock::new(VecDeque::with_capacity(capacity + 1)),
            capacity,
            broadcaster,
        }
    }

    /// Append a song, evict from the front past capacity, and broadcast it
    ///
    /// A timestamp earlier than the newest stored song is raised to it, keeping
    /// timestamps non-decreasing in insertion order. Returns the stored song.
    pub async fn append(&self, mut song: SongEvent) -> SongEvent {
        let mut songs = self.songs.write().await;

        if let Some(last) = songs.back() {
            if song.timestamp < last.timestamp {
                debug!(id = %song.id, "Clock went backwards, clamping song timestamp");
                song.timestamp = last.timestamp;
            }
        }

        songs.push_back(song.clone());
        while songs.len() > self.capacity {
            songs.pop_front();
        }

        self.broadcaster.publish(song.clone());
        song
    }

    /// Last `n` songs in insertion order
    pub async fn recent_view(&self, n: usize) -> Vec<SongEvent> {
        let songs = self.songs.read().await;
        tail(&songs, n)
    }

    /// Songs with `timestamp >= since`, in insertion order
    pub async fn windowed(&self, since: DateTime<Utc>) -> Vec<SongEvent> {
        let songs = self.songs.read().await;
        // Timestamps are non-decreasing, so matching songs form a suffix
        let start = songs.partition_point(|s| s.timestamp < since);
        songs.range(start..).cloned().collect()
    }

    /// Every stored song, in insertion order
    pub async fn snapshot(&self) -> Vec<SongEvent> {
        self.songs.read().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.songs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.songs.read().await.is_empty()
    }

    /// Register a viewer: the last `n` songs plus a receiver for every later append
    pub async fn subscribe_with_snapshot(
        &self,
        n: usize,
    ) -> (Vec<SongEvent>, broadcast::Receiver<SongEvent>) {
        let songs = self.songs.read().await;
        let rx = self.broadcaster.subscribe();
        (tail(&songs, n), rx)
    }

    pub fn broadcaster(&self) -> &SongBroadcaster {
        &self.broadcaster
    }
}

impl Default for SongFeed {
    fn default() -> Self {
        Self::new(SongBroadcaster::default())
    }
}

fn tail(songs: &VecDeque<SongEvent>, n: usize) -> Vec<SongEvent> {
    let skip = songs.len().saturating_sub(n);
    songs.iter().skip(skip).cloned().collect()
}
