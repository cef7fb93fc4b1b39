//! # Mood Board Common Library
//!
//! Shared code for the mood board service:
//! - Song event and mood label types
//! - Live channel event types and their SSE encoding
//! - Configuration resolution
//! - Common error type
//! - Timestamp helpers

pub mod config;
pub mod error;
pub mod events;
pub mod sse;
pub mod time;

pub use error::{Error, Result};
pub use events::{BoardEvent, MoodLabel, SongEvent};
