//! Mood classifier
//!
//! Maps text to a [`MoodLabel`] from its sentiment score and comparative score.
//! Deterministic and side-effect free.

use moodboard_common::MoodLabel;
use serde::Serialize;

use crate::sentiment::{self, Analysis};

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub mood: MoodLabel,
    pub score: i32,
    pub comparative: f64,
}

impl From<&Analysis> for Classification {
    fn from(analysis: &Analysis) -> Self {
        Self {
            mood: label_for(analysis.score, analysis.comparative),
            score: analysis.score,
            comparative: analysis.comparative,
        }
    }
}

/// Classify text (may be empty)
pub fn classify(text: &str) -> Classification {
    Classification::from(&sentiment::analyze(text))
}

/// Label assignment, first match wins
///
/// NOTE: the `angry` branch can never fire: any score below -5 is already
/// below -2 and returns `sad`. Kept in this order until the owner of the mood
/// rules decides whether `angry` should be checked before `sad`.
pub fn label_for(score: i32, comparative: f64) -> MoodLabel {
    if score > 2 {
        MoodLabel::Happy
    } else if score < -2 {
        MoodLabel::Sad
    } else if score < -5 {
        MoodLabel::Angry
    } else if comparative > 0.5 {
        MoodLabel::Energetic
    } else {
        MoodLabel::Neutral
    }
}
