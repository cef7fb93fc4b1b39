//! Update source
//!
//! On a fixed period, produces one song (a mock pick or the live "currently
//! playing" track), tags it with a mood, and appends it to the feed, which
//! broadcasts it. A tick that produces nothing is logged and skipped; nothing
//! a tick does can stop the timer.

use chrono::{DateTime, Utc};
use moodboard_common::{time, SongEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog;
use crate::classifier::classify;
use crate::credentials::CredentialStore;
use crate::error::TransientSkip;
use crate::music_service::{MusicService, TrackInfo};
use crate::store::SongFeed;

/// Listener label for live songs
pub const LIVE_USER: &str = "You";

/// Avatar for live songs
pub const LIVE_AVATAR: &str = "🎧";

/// Classifier input for live songs until real lyrics are fetched
pub const PLACEHOLDER_LYRICS: &str = "Real lyrics would be fetched here";

/// Where this tick's song comes from, decided once per tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongSource {
    /// No credential: pick from the sample catalog
    Mock,
    /// Credential held: ask the music service
    Live { access_token: String },
}

impl SongSource {
    pub async fn select(credentials: &CredentialStore) -> Self {
        match credentials.get().await {
            Some(access_token) => SongSource::Live { access_token },
            None => SongSource::Mock,
        }
    }
}

pub struct UpdateSource {
    feed: Arc<SongFeed>,
    credentials: Arc<CredentialStore>,
    music: Arc<dyn MusicService>,
    period: Duration,
}

impl UpdateSource {
    pub fn new(
        feed: Arc<SongFeed>,
        credentials: Arc<CredentialStore>,
        music: Arc<dyn MusicService>,
        period: Duration,
    ) -> Self {
        Self {
            feed,
            credentials,
            music,
            period,
        }
    }

    /// Run one update: produce, classify, append (which broadcasts)
    pub async fn tick(&self) -> Result<SongEvent, TransientSkip> {
        let song = match SongSource::select(&self.credentials).await {
            SongSource::Mock => mock_song(time::now()),
            SongSource::Live { access_token } => self.live_song(&access_token).await?,
        };

        let stored = self.feed.append(song).await;
        info!(
            id = %stored.id,
            name = %stored.name,
            artist = %stored.artist,
            mood = %stored.mood,
            "New song in feed"
        );
        Ok(stored)
    }

    async fn live_song(&self, access_token: &str) -> Result<SongEvent, TransientSkip> {
        let status = self.music.currently_playing(access_token).await?;
        let track = status
            .as_ref()
            .and_then(|s| s.playing_track())
            .ok_or(TransientSkip::NothingPlaying)?;
        Ok(live_song_from(track, time::now()))
    }

    /// Spawn the periodic loop on the runtime
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Tick forever; the first tick fires one full period after start
    pub async fn run(self) {
        info!("Update source running every {:?}", self.period);

        let mut ticker = tokio::time::interval_at(
            tokio::time::Instant::now() + self.period,
            self.period,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match self.tick().await {
                Ok(_) => {}
                Err(TransientSkip::NothingPlaying) => debug!("Tick skipped: nothing playing"),
                Err(e) => warn!("Tick skipped: {}", e),
            }
        }
    }
}

/// Song picked at random from the sample catalog
pub fn mock_song(at: DateTime<Utc>) -> SongEvent {
    let mut rng = rand::thread_rng();
    let pick = catalog::random_song(&mut rng);
    let user = catalog::random_user(&mut rng);
    let classification = classify(pick.lyrics);

    SongEvent {
        id: event_id(pick.id, at),
        name: pick.name.to_string(),
        artist: pick.artist.to_string(),
        user,
        avatar: pick.avatar.to_string(),
        timestamp: at,
        mood: classification.mood,
        lyrics: pick.lyrics.to_string(),
    }
}

/// Song built from a live track, attributed to the credential holder
pub fn live_song_from(track: &TrackInfo, at: DateTime<Utc>) -> SongEvent {
    let classification = classify(PLACEHOLDER_LYRICS);

    SongEvent {
        id: event_id(&track.id, at),
        name: track.name.clone(),
        artist: track.artist.clone(),
        user: LIVE_USER.to_string(),
        avatar: LIVE_AVATAR.to_string(),
        timestamp: at,
        mood: classification.mood,
        lyrics: PLACEHOLDER_LYRICS.to_string(),
    }
}

/// `<marker>-<epoch millis>-<random suffix>`
fn event_id(marker: &str, at: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", marker, time::epoch_millis(at), &suffix[..8])
}
