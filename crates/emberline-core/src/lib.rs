//! # Emberline Core Library
//!
//! This library provides the streak and milestone engine for the
//! Emberline journaling app: the logic that tracks consecutive-day
//! engagement per journal category and awards one-time achievement
//! badges when fixed thresholds are crossed.
//!
//! ## Architecture
//!
//! The engine is a pure computation layer. Every function is
//! synchronous and side-effect-free over immutable inputs: streak state
//! and the badge set are explicit arguments and return values, owned
//! and persisted by the host around each call. "Today" is always
//! supplied by the caller, never read from a clock, so the engine is
//! safe to invoke concurrently for different users or journal types.
//!
//! ## Key Components
//!
//! - [`calculate_updated_streak`]: streak transition applied per saved entry
//! - [`recalculate_streak_from_dates`]: full-history rebuild for repair/import
//! - [`check_for_new_milestones`]: one-time threshold-crossing detection
//! - [`get_badge_display_info`]: static display catalog for earned badges
//! - [`get_milestones_for_type`]: earned/locked projection for displays
//! - [`record_entry`]: the whole per-entry transaction as one call

pub mod date;
pub mod engine;
pub mod error;
pub mod journal;
pub mod milestones;
pub mod streak;

pub use date::{days_between, normalize_to_date_only, to_local_date_string};
pub use engine::{record_entry, EntryEvent, EntryOutcome};
pub use error::{CoreError, DateParseError, Result, ValidationError};
pub use journal::{JournalType, StreakState};
pub use milestones::{
    badge_id, catalog_entry, check_for_new_milestones, get_badge_display_info,
    get_milestones_for_type, BadgeDisplay, BadgeDisplayInfo, BadgeSet, EarnedBadge,
    MilestoneStatus, MilestoneThreshold,
};
pub use streak::{calculate_updated_streak, recalculate_streak_from_dates, StreakUpdate};
