//! Core error types for emberline-core.
//!
//! This module defines the error hierarchy using thiserror. The engine
//! is pure, so every error is raised synchronously at a call boundary;
//! there is no partial failure or retry concept inside the library.

use thiserror::Error;

/// Core error type for emberline-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Date parsing/normalization errors
    #[error("Date error: {0}")]
    Date(#[from] DateParseError),

    /// Caller contract violations
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised when an input string is not a recognizable date.
///
/// These must surface to the caller rather than degrade into bad day
/// arithmetic; a swallowed parse failure would silently corrupt streak
/// counts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// A 10-character input that is not a valid calendar date
    #[error("'{input}' is not a valid YYYY-MM-DD date")]
    InvalidDateOnly { input: String },

    /// An input that is neither a date-only string nor a parseable timestamp
    #[error("'{input}' is not a recognizable date or timestamp")]
    UnrecognizedTimestamp { input: String },
}

/// Caller contract violations.
///
/// Streak values are `u32` throughout, so negative streaks cannot be
/// expressed; what remains to validate are the stringly-typed values
/// that cross the host's persistence boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Unknown journal type slug
    #[error("Unknown journal type: '{0}'")]
    UnknownJournalType(String),

    /// A day count that is not one of the fixed milestone thresholds
    #[error("{days} days is not a milestone threshold")]
    UnknownThreshold { days: u32 },

    /// A badge id that does not split into a type slug and a threshold
    #[error("Malformed badge id: '{id}'")]
    MalformedBadgeId { id: String },

    /// A badge whose id disagrees with its own type/threshold fields
    #[error("Badge id '{id}' does not match '{expected}'")]
    BadgeIdMismatch { id: String, expected: String },

    /// An entry event applied against streak state of another journal type
    #[error("Entry for journal type '{event}' applied to streak state for '{state}'")]
    JournalTypeMismatch { event: String, state: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
