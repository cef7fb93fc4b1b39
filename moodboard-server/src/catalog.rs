//! Sample songs and canned lyrics used when no live playback is available

use rand::seq::SliceRandom;
use rand::Rng;

/// Text returned by the lyric lookup for unknown tracks
pub const FALLBACK_LYRICS: &str = "Sample lyrics for mood analysis";

/// Number of distinct mock listeners (`User1`..`User5`)
pub const MOCK_USER_COUNT: u32 = 5;

/// One entry of the sample catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSong {
    /// Stable marker combined into event ids
    pub id: &'static str,
    pub name: &'static str,
    pub artist: &'static str,
    pub avatar: &'static str,
    pub lyrics: &'static str,
}

pub static SAMPLE_SONGS: [CatalogSong; 3] = [
    CatalogSong {
        id: "1",
        name: "Blinding Lights",
        artist: "The Weeknd",
        avatar: "🎵",
        lyrics: "I feel like I am just missing something whenever you are gone",
    },
    CatalogSong {
        id: "2",
        name: "drivers license",
        artist: "Olivia Rodrigo",
        avatar: "🎶",
        lyrics: "And you are probably with that blonde girl",
    },
    CatalogSong {
        id: "3",
        name: "Good 4 U",
        artist: "Olivia Rodrigo",
        avatar: "🎤",
        lyrics: "Well good for you I guess you moved on really easily",
    },
];

/// Lyric table keyed by exact track title
static LYRICS: [(&str, &str); 3] = [
    (
        "Blinding Lights",
        "I feel like I am just missing something whenever you are gone",
    ),
    (
        "drivers license",
        "And you are probably with that blonde girl who always made me doubt",
    ),
    (
        "Good 4 U",
        "Well good for you I guess you moved on really easily",
    ),
];

/// Pick a sample song uniformly at random
pub fn random_song<R: Rng>(rng: &mut R) -> &'static CatalogSong {
    SAMPLE_SONGS
        .choose(rng)
        .unwrap_or(&SAMPLE_SONGS[0])
}

/// Pick a mock listener label uniformly at random
pub fn random_user<R: Rng>(rng: &mut R) -> String {
    format!("User{}", rng.gen_range(1..=MOCK_USER_COUNT))
}

/// Look up lyrics by track title, falling back to a generic placeholder
///
/// The artist is accepted for API symmetry but does not affect the lookup.
pub fn lyrics_for(track: &str, _artist: &str) -> &'static str {
    LYRICS
        .iter()
        .find(|(title, _)| *title == track)
        .map(|(_, lyrics)| *lyrics)
        .unwrap_or(FALLBACK_LYRICS)
}
