//! Journal categories and per-category streak state.
//!
//! Each journal type is an independent counting namespace: streaks and
//! badges for one type never interact with another. The snake_case wire
//! values are embedded in badge ids, so they are part of the persisted
//! format and must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The four journal engagement categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalType {
    /// Guided daily entries
    Journey,
    /// Mood check-ins
    Mood,
    /// Thought-reframing entries
    Flip,
    /// Any entry of any kind
    Overall,
}

impl JournalType {
    /// All journal types.
    pub const ALL: [JournalType; 4] = [
        JournalType::Journey,
        JournalType::Mood,
        JournalType::Flip,
        JournalType::Overall,
    ];

    /// Stable lowercase slug, as used in badge ids.
    pub fn slug(&self) -> &'static str {
        match self {
            JournalType::Journey => "journey",
            JournalType::Mood => "mood",
            JournalType::Flip => "flip",
            JournalType::Overall => "overall",
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            JournalType::Journey => "Daily Journey",
            JournalType::Mood => "Mood Check-In",
            JournalType::Flip => "Thought Flip",
            JournalType::Overall => "Overall",
        }
    }
}

impl fmt::Display for JournalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for JournalType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "journey" => Ok(JournalType::Journey),
            "mood" => Ok(JournalType::Mood),
            "flip" => Ok(JournalType::Flip),
            "overall" => Ok(JournalType::Overall),
            other => Err(ValidationError::UnknownJournalType(other.to_string())),
        }
    }
}

/// Consecutive-day streak state for one journal type.
///
/// Owned and persisted by the host; the engine only computes
/// transitions over it and hands back new values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// The journal type this streak counts
    pub journal_type: JournalType,

    /// Consecutive local calendar days with at least one entry
    pub current_streak: u32,

    /// Date-only string of the most recent entry; absent before the first entry
    pub last_entry_date: Option<String>,
}

impl StreakState {
    /// Fresh state for a type with no entries yet.
    pub fn new(journal_type: JournalType) -> Self {
        Self {
            journal_type,
            current_streak: 0,
            last_entry_date: None,
        }
    }
}
