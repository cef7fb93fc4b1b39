//! JSON endpoint handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::catalog;
use crate::classifier::Classification;
use crate::error::{ApiError, ApiResult};
use crate::music_service::TrackInfo;
use crate::sentiment;
use crate::stats::{self, MoodCounts};
use crate::store::RECENT_VIEW_LEN;
use crate::AppState;
use moodboard_common::{time, SongEvent};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LyricsQuery {
    pub track: Option<String>,
    pub artist: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LyricsResponse {
    pub lyrics: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodQuery {
    pub lyrics: Option<String>,
}

/// Classification plus the rated words that produced it
#[derive(Debug, Serialize)]
pub struct MoodResponse {
    #[serde(flatten)]
    pub classification: Classification,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlayingResponse {
    pub is_playing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<TrackInfo>,
}

impl NowPlayingResponse {
    fn not_playing() -> Self {
        Self {
            is_playing: false,
            track: None,
        }
    }
}

/// Required query parameter; an empty value counts as absent
fn required(value: Option<String>, name: &str) -> ApiResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::MissingInput(format!("{} is required", name)))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/now-playing
///
/// Without a credential, answers with a random sample song. With one, asks
/// the music service; an empty answer or a paused track is "not playing".
pub async fn now_playing(State(state): State<AppState>) -> ApiResult<Json<NowPlayingResponse>> {
    let Some(token) = state.credentials.get().await else {
        let pick = catalog::random_song(&mut rand::thread_rng());
        return Ok(Json(NowPlayingResponse {
            is_playing: true,
            track: Some(TrackInfo {
                name: pick.name.to_string(),
                artist: pick.artist.to_string(),
                id: pick.id.to_string(),
            }),
        }));
    };

    match state.music.currently_playing(&token).await {
        Ok(Some(status)) => match status.track {
            Some(track) => Ok(Json(NowPlayingResponse {
                is_playing: status.is_playing,
                track: Some(track),
            })),
            None => Ok(Json(NowPlayingResponse::not_playing())),
        },
        Ok(None) => {
            debug!("Music service reports nothing playing");
            Ok(Json(NowPlayingResponse::not_playing()))
        }
        Err(e) => {
            error!("Now-playing lookup failed: {}", e);
            Err(ApiError::Upstream(
                "Failed to fetch currently playing track".to_string(),
            ))
        }
    }
}

/// GET /api/lyrics?track=&artist=
pub async fn lyrics(Query(query): Query<LyricsQuery>) -> ApiResult<Json<LyricsResponse>> {
    let track = required(query.track, "track")?;
    let artist = required(query.artist, "artist")?;

    Ok(Json(LyricsResponse {
        lyrics: catalog::lyrics_for(&track, &artist).to_string(),
    }))
}

/// GET /api/mood?lyrics=
pub async fn mood(Query(query): Query<MoodQuery>) -> ApiResult<Json<MoodResponse>> {
    let lyrics = required(query.lyrics, "lyrics")?;
    let analysis = sentiment::analyze(&lyrics);

    Ok(Json(MoodResponse {
        classification: Classification::from(&analysis),
        positive: analysis.positive,
        negative: analysis.negative,
    }))
}

/// GET /api/recent-songs
///
/// Oldest first, at most the last 20.
pub async fn recent_songs(State(state): State<AppState>) -> Json<Vec<SongEvent>> {
    Json(state.feed.recent_view(RECENT_VIEW_LEN).await)
}

/// GET /api/mood-stats
pub async fn mood_stats(State(state): State<AppState>) -> Json<MoodCounts> {
    Json(stats::mood_counts(&state.feed, time::now()).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_absent_and_empty() {
        assert!(matches!(
            required(None, "lyrics"),
            Err(ApiError::MissingInput(_))
        ));
        assert!(matches!(
            required(Some(String::new()), "lyrics"),
            Err(ApiError::MissingInput(_))
        ));
        assert_eq!(required(Some("x".into()), "lyrics").unwrap(), "x");
    }

    #[test]
    fn test_not_playing_omits_track() {
        let json = serde_json::to_value(NowPlayingResponse::not_playing()).unwrap();
        assert_eq!(json, serde_json::json!({ "isPlaying": false }));
    }
}
