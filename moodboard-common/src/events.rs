//! Event types for the mood board live channel
//!
//! A [`SongEvent`] is one observed (or simulated) playback instance tagged with
//! a [`MoodLabel`]. [`BoardEvent`] is what viewers receive over the live channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Avatar glyph used when a song source does not supply one
pub const DEFAULT_AVATAR: &str = "🎵";

/// Mood assigned to a song by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Happy,
    Sad,
    Angry,
    Energetic,
    Neutral,
}

impl MoodLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Happy => "happy",
            MoodLabel::Sad => "sad",
            MoodLabel::Angry => "angry",
            MoodLabel::Energetic => "energetic",
            MoodLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One playback instance in the song feed
///
/// Created only by the update source and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongEvent {
    /// Unique per event, never reused
    pub id: String,
    /// Track title
    pub name: String,
    /// Primary artist
    pub artist: String,
    /// Attributed listener (mock identity or "You")
    pub user: String,
    /// Display glyph
    #[serde(default = "default_avatar")]
    pub avatar: String,
    /// When the event was recorded
    pub timestamp: DateTime<Utc>,
    /// Classified mood
    pub mood: MoodLabel,
    /// Classifier input text (may be a placeholder)
    pub lyrics: String,
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

/// Events pushed to dashboard viewers
#[derive(Debug, Clone, PartialEq)]
pub enum BoardEvent {
    /// Snapshot of the recent view, sent once to a viewer when it connects
    RecentSongs(Vec<SongEvent>),

    /// A single newly stored song, fanned out to every connected viewer
    NewSong(SongEvent),
}

impl BoardEvent {
    /// Event name on the wire
    pub fn name(&self) -> &'static str {
        match self {
            BoardEvent::RecentSongs(_) => "recentSongs",
            BoardEvent::NewSong(_) => "newSong",
        }
    }

    /// JSON payload on the wire (array for snapshots, object for single songs)
    pub fn payload(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            BoardEvent::RecentSongs(songs) => serde_json::to_value(songs),
            BoardEvent::NewSong(song) => serde_json::to_value(song),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_song() -> SongEvent {
        SongEvent {
            id: "1-1700000000000".to_string(),
            name: "Blinding Lights".to_string(),
            artist: "The Weeknd".to_string(),
            user: "User1".to_string(),
            avatar: "🎵".to_string(),
            timestamp: Utc::now(),
            mood: MoodLabel::Energetic,
            lyrics: "I feel like I am just missing something".to_string(),
        }
    }

    #[test]
    fn test_mood_label_serializes_lowercase() {
        for label in [
            MoodLabel::Happy,
            MoodLabel::Sad,
            MoodLabel::Angry,
            MoodLabel::Energetic,
            MoodLabel::Neutral,
        ] {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }

    #[test]
    fn test_mood_label_display_matches_wire_name() {
        assert_eq!(MoodLabel::Energetic.to_string(), "energetic");
    }

    #[test]
    fn test_song_event_missing_avatar_defaults() {
        let json = serde_json::json!({
            "id": "x",
            "name": "Song",
            "artist": "Artist",
            "user": "You",
            "timestamp": "2024-01-01T00:00:00Z",
            "mood": "neutral",
            "lyrics": ""
        });
        let song: SongEvent = serde_json::from_value(json).unwrap();
        assert_eq!(song.avatar, DEFAULT_AVATAR);
    }

    #[test]
    fn test_board_event_names() {
        let song = sample_song();
        assert_eq!(BoardEvent::RecentSongs(vec![]).name(), "recentSongs");
        assert_eq!(BoardEvent::NewSong(song).name(), "newSong");
    }

    #[test]
    fn test_board_event_payload_shapes() {
        let song = sample_song();

        let snapshot = BoardEvent::RecentSongs(vec![song.clone(), song.clone()])
            .payload()
            .unwrap();
        assert_eq!(snapshot.as_array().map(|a| a.len()), Some(2));

        let single = BoardEvent::NewSong(song).payload().unwrap();
        assert_eq!(single["name"], "Blinding Lights");
        assert_eq!(single["mood"], "energetic");
    }
}
