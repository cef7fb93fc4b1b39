//! Third-party music service integration
//!
//! The rest of the service only sees the [`MusicService`] trait: an OAuth
//! authorize URL, a code-for-token exchange, and a "currently playing" lookup.

use async_trait::async_trait;
use moodboard_common::Result;
use serde::Serialize;

pub mod spotify;

pub use spotify::SpotifyClient;

/// Track reported by the music service
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackInfo {
    pub name: String,
    pub artist: String,
    pub id: String,
}

/// Playback state reported by the music service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackStatus {
    pub is_playing: bool,
    /// None when the service reports no current item
    pub track: Option<TrackInfo>,
}

impl PlaybackStatus {
    /// The track, only if it is actively playing
    pub fn playing_track(&self) -> Option<&TrackInfo> {
        self.track.as_ref().filter(|_| self.is_playing)
    }
}

/// Music service seam
///
/// Implemented by [`SpotifyClient`]; tests substitute an in-process fake.
#[async_trait]
pub trait MusicService: Send + Sync {
    /// URL the browser is redirected to for authorization
    fn authorize_url(&self) -> Result<String>;

    /// Exchange an authorization code for an access token
    async fn exchange_code(&self, code: &str) -> Result<String>;

    /// Current playback of the user owning `access_token`
    ///
    /// `Ok(None)` when the service reports nothing at all (e.g. no active device).
    async fn currently_playing(&self, access_token: &str) -> Result<Option<PlaybackStatus>>;
}
