//! Mood statistics over a trailing window
//!
//! Derived on request, never stored. Moods with no songs in the window are
//! absent from the result rather than present with a zero count.

use chrono::{DateTime, Duration, Utc};
use moodboard_common::time::window_start;
use moodboard_common::{MoodLabel, SongEvent};
use std::collections::BTreeMap;

use crate::store::SongFeed;

/// Mood label → number of songs
pub type MoodCounts = BTreeMap<MoodLabel, usize>;

/// Length of the trailing window
pub fn stats_window() -> Duration {
    Duration::minutes(10)
}

/// Count moods of songs with `timestamp > now - window`
pub fn count_moods<'a, I>(songs: I, now: DateTime<Utc>, window: Duration) -> MoodCounts
where
    I: IntoIterator<Item = &'a SongEvent>,
{
    let cutoff = window_start(now, window);
    let mut counts = MoodCounts::new();
    for song in songs.into_iter().filter(|s| s.timestamp > cutoff) {
        *counts.entry(song.mood).or_insert(0) += 1;
    }
    counts
}

/// Mood counts of the feed over the last ten minutes before `now`
pub async fn mood_counts(feed: &SongFeed, now: DateTime<Utc>) -> MoodCounts {
    let window = stats_window();
    let candidates = feed.windowed(window_start(now, window)).await;
    count_moods(&candidates, now, window)
}
