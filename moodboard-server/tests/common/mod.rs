//! Shared test helpers: an in-process music service and app construction

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moodboard_common::{Error, MoodLabel, Result, SongEvent};
use moodboard_server::broadcast::SongBroadcaster;
use moodboard_server::credentials::CredentialStore;
use moodboard_server::music_service::{MusicService, PlaybackStatus, TrackInfo};
use moodboard_server::store::SongFeed;
use moodboard_server::AppState;
use std::sync::Arc;

pub const DASHBOARD_URL: &str = "http://localhost:3000";
pub const AUTHORIZE_URL: &str = "https://accounts.example/authorize?client_id=test";

/// Music service double with canned answers
pub struct FakeMusicService {
    /// `Err(msg)` simulates a transport or auth failure
    pub playback: std::result::Result<Option<PlaybackStatus>, String>,
    /// `Err(msg)` simulates a rejected code
    pub exchange: std::result::Result<String, String>,
}

impl FakeMusicService {
    pub fn nothing_reported() -> Self {
        Self {
            playback: Ok(None),
            exchange: Ok("fake-token".to_string()),
        }
    }

    pub fn playing(track: TrackInfo, is_playing: bool) -> Self {
        Self {
            playback: Ok(Some(PlaybackStatus {
                is_playing,
                track: Some(track),
            })),
            ..Self::nothing_reported()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            playback: Err(msg.to_string()),
            exchange: Err(msg.to_string()),
        }
    }
}

#[async_trait]
impl MusicService for FakeMusicService {
    fn authorize_url(&self) -> Result<String> {
        Ok(AUTHORIZE_URL.to_string())
    }

    async fn exchange_code(&self, _code: &str) -> Result<String> {
        self.exchange.clone().map_err(Error::Upstream)
    }

    async fn currently_playing(&self, _access_token: &str) -> Result<Option<PlaybackStatus>> {
        self.playback.clone().map_err(Error::Upstream)
    }
}

pub fn track(name: &str, artist: &str, id: &str) -> TrackInfo {
    TrackInfo {
        name: name.to_string(),
        artist: artist.to_string(),
        id: id.to_string(),
    }
}

pub fn song(id: &str, mood: MoodLabel, timestamp: DateTime<Utc>) -> SongEvent {
    SongEvent {
        id: id.to_string(),
        name: format!("Song {}", id),
        artist: "Artist".to_string(),
        user: "User1".to_string(),
        avatar: "🎵".to_string(),
        timestamp,
        mood,
        lyrics: "la la la".to_string(),
    }
}

pub fn app_state(music: FakeMusicService) -> AppState {
    AppState::new(
        Arc::new(SongFeed::new(SongBroadcaster::default())),
        Arc::new(CredentialStore::new()),
        Arc::new(music),
        DASHBOARD_URL.to_string(),
        vec![DASHBOARD_URL.to_string()],
    )
}
