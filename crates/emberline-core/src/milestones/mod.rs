//! Milestone badges for Emberline
//!
//! This module covers everything badge-shaped: the fixed threshold
//! table, earned-badge records and their id-keyed set, one-time
//! crossing detection, the static display catalog, and the
//! earned/locked projection for achievement displays.

mod badge;
mod catalog;
mod detector;
mod status;

pub use badge::{badge_id, BadgeSet, EarnedBadge, MilestoneThreshold};

pub use catalog::{catalog_entry, get_badge_display_info, BadgeDisplay, BadgeDisplayInfo};

pub use detector::check_for_new_milestones;

pub use status::{get_milestones_for_type, MilestoneStatus};
