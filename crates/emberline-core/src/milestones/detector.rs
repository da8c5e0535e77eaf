//! One-time milestone detection over streak transitions.

use crate::journal::JournalType;
use crate::milestones::badge::{BadgeSet, EarnedBadge, MilestoneThreshold};

/// Detect thresholds newly crossed by a streak moving from `old_streak`
/// to `new_streak`.
///
/// Detection only fires on genuine forward progress: a same-day re-save
/// or a reset (`new_streak <= old_streak`) returns nothing. A threshold
/// T is crossed iff `old_streak < T <= new_streak`, so one large jump
/// (e.g. importing a 90-day backlog) reports every threshold it passes,
/// ascending. Thresholds whose badge id is already present in
/// `existing` are skipped, which makes a second call with the first
/// call's output folded in return nothing.
///
/// `today` is stamped onto new badges as their earned date and is
/// expected to be an already-normalized date-only string from the
/// host's clock.
pub fn check_for_new_milestones(
    journal_type: JournalType,
    old_streak: u32,
    new_streak: u32,
    existing: &BadgeSet,
    today: &str,
) -> Vec<EarnedBadge> {
    if new_streak <= old_streak {
        return Vec::new();
    }

    let mut earned = Vec::new();
    for threshold in MilestoneThreshold::ALL {
        let days = threshold.days();
        if old_streak < days && days <= new_streak && !existing.contains(journal_type, threshold)
        {
            earned.push(EarnedBadge::new(journal_type, threshold, today));
        }
    }

    if !earned.is_empty() {
        tracing::debug!(
            %journal_type,
            old_streak,
            new_streak,
            count = earned.len(),
            "milestones crossed"
        );
    }

    earned
}
