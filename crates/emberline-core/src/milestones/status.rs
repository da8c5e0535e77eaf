//! Earned/locked projection for achievement displays.

use serde::{Deserialize, Serialize};

use crate::journal::JournalType;
use crate::milestones::badge::{badge_id, BadgeSet, EarnedBadge, MilestoneThreshold};

/// Earned/locked status of one threshold for one journal type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneStatus {
    /// The threshold this row describes
    pub threshold: MilestoneThreshold,

    /// Whether the badge has been earned
    pub earned: bool,

    /// The earned record, when present
    pub badge: Option<EarnedBadge>,
}

impl MilestoneStatus {
    /// Days of streak still needed to earn this milestone. Zero once earned.
    pub fn days_remaining(&self, current_streak: u32) -> u32 {
        if self.earned {
            0
        } else {
            self.threshold.days().saturating_sub(current_streak)
        }
    }
}

/// Project earned/locked status for all five thresholds of a type.
///
/// Always exactly five rows, ascending by threshold, regardless of how
/// many are earned. Pure projection; nothing is mutated.
pub fn get_milestones_for_type(
    journal_type: JournalType,
    earned: &BadgeSet,
) -> [MilestoneStatus; 5] {
    MilestoneThreshold::ALL.map(|threshold| {
        let badge = earned.get(&badge_id(journal_type, threshold)).cloned();
        MilestoneStatus {
            threshold,
            earned: badge.is_some(),
            badge,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_is_always_five_ascending_rows() {
        let statuses = get_milestones_for_type(JournalType::Journey, &BadgeSet::new());
        let days: Vec<u32> = statuses.iter().map(|s| s.threshold.days()).collect();
        assert_eq!(days, vec![7, 14, 30, 60, 90]);
        assert!(statuses.iter().all(|s| !s.earned && s.badge.is_none()));
    }

    #[test]
    fn test_earned_rows_carry_the_badge_record() {
        let mut set = BadgeSet::new();
        set.insert(EarnedBadge::new(
            JournalType::Journey,
            MilestoneThreshold::Week,
            "2026-02-10",
        ))
        .unwrap();
        set.insert(EarnedBadge::new(
            JournalType::Journey,
            MilestoneThreshold::Fortnight,
            "2026-02-17",
        ))
        .unwrap();

        let statuses = get_milestones_for_type(JournalType::Journey, &set);
        assert!(statuses[0].earned);
        assert_eq!(
            statuses[1].badge.as_ref().unwrap().earned_date,
            "2026-02-17"
        );
        assert!(!statuses[2].earned);
    }

    #[test]
    fn test_projection_ignores_other_types() {
        let mut set = BadgeSet::new();
        set.insert(EarnedBadge::new(
            JournalType::Mood,
            MilestoneThreshold::Week,
            "2026-02-10",
        ))
        .unwrap();

        let statuses = get_milestones_for_type(JournalType::Journey, &set);
        assert!(statuses.iter().all(|s| !s.earned));
    }

    #[test]
    fn test_days_remaining_counts_down_and_floors_at_zero() {
        let statuses = get_milestones_for_type(JournalType::Flip, &BadgeSet::new());
        assert_eq!(statuses[0].days_remaining(5), 2);
        assert_eq!(statuses[0].days_remaining(12), 0);
        assert_eq!(statuses[4].days_remaining(30), 60);
    }

    #[test]
    fn test_days_remaining_is_zero_once_earned() {
        let mut set = BadgeSet::new();
        set.insert(EarnedBadge::new(
            JournalType::Flip,
            MilestoneThreshold::Week,
            "2026-02-10",
        ))
        .unwrap();

        let statuses = get_milestones_for_type(JournalType::Flip, &set);
        assert_eq!(statuses[0].days_remaining(3), 0);
    }
}
