//! Consecutive-day streak transitions.
//!
//! Two pure functions live here: the transition function applied on
//! every saved entry, and the full-history rebuild used by repair and
//! import tooling. Neither reads a clock or stores anything; "today" is
//! always supplied by the caller.

use serde::{Deserialize, Serialize};

use crate::date::{days_between, normalize_to_date_only, parse_date_only};
use crate::error::DateParseError;

/// Result of applying one entry to a streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakUpdate {
    /// Streak value after the entry
    pub new_streak: u32,

    /// Normalized date-only string of the entry just applied
    pub last_entry_date: String,
}

/// Apply a newly saved entry to a streak.
///
/// The transition only looks at the immediately preceding entry date:
/// - no prior entry -> streak starts at 1;
/// - same day (a re-save or edit) -> `max(current_streak, 1)`; a streak
///   never regresses below 1 once any entry exists;
/// - consecutive day -> `current_streak + 1`;
/// - any other delta, forward gap or backdated entry alike -> reset to 1.
///
/// Backdated entries deliberately reset rather than backfill; changing
/// that requires updating the transition tests below.
pub fn calculate_updated_streak(
    current_streak: u32,
    last_entry_date: Option<&str>,
    new_entry_date: &str,
) -> Result<StreakUpdate, DateParseError> {
    let entry_date = normalize_to_date_only(new_entry_date)?;

    let Some(last) = last_entry_date else {
        return Ok(StreakUpdate {
            new_streak: 1,
            last_entry_date: entry_date,
        });
    };

    let diff = days_between(&entry_date, last)?;
    let new_streak = match diff {
        0 => current_streak.max(1),
        1 => current_streak.saturating_add(1),
        _ => 1,
    };

    tracing::trace!(
        current_streak,
        new_streak,
        diff,
        %entry_date,
        "streak transition"
    );

    Ok(StreakUpdate {
        new_streak,
        last_entry_date: entry_date,
    })
}

/// Rebuild a streak count from a full entry-date history.
///
/// `dates` must be distinct date-only strings sorted most-recent-first;
/// deduplication is the caller's responsibility. The walk starts at
/// `today` and counts while each date matches the cursor, so a history
/// whose newest entry is not today yields 0. Agrees with replaying the
/// same history entry-by-entry through [`calculate_updated_streak`].
pub fn recalculate_streak_from_dates<S: AsRef<str>>(
    dates: &[S],
    today: &str,
) -> Result<u32, DateParseError> {
    let mut cursor = parse_date_only(&normalize_to_date_only(today)?)?;
    let mut streak = 0u32;

    for date in dates {
        let date = parse_date_only(date.as_ref())?;
        if date != cursor {
            break;
        }
        streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    Ok(streak)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_starts_streak_at_one() {
        let update = calculate_updated_streak(0, None, "2026-02-10").unwrap();
        assert_eq!(update.new_streak, 1);
        assert_eq!(update.last_entry_date, "2026-02-10");
    }

    #[test]
    fn test_same_day_resave_keeps_streak() {
        let update = calculate_updated_streak(5, Some("2026-02-10"), "2026-02-10").unwrap();
        assert_eq!(update.new_streak, 5);
    }

    #[test]
    fn test_same_day_floors_streak_at_one() {
        // A pathological stored 0 with a last-entry date self-heals to 1.
        let update = calculate_updated_streak(0, Some("2026-02-10"), "2026-02-10").unwrap();
        assert_eq!(update.new_streak, 1);
    }

    #[test]
    fn test_consecutive_day_increments() {
        let update = calculate_updated_streak(5, Some("2026-02-10"), "2026-02-11").unwrap();
        assert_eq!(update.new_streak, 6);
        assert_eq!(update.last_entry_date, "2026-02-11");
    }

    #[test]
    fn test_gap_resets_to_one() {
        let update = calculate_updated_streak(5, Some("2026-02-10"), "2026-02-20").unwrap();
        assert_eq!(update.new_streak, 1);
    }

    #[test]
    fn test_backdated_entry_resets_to_one() {
        let update = calculate_updated_streak(5, Some("2026-02-10"), "2026-02-08").unwrap();
        assert_eq!(update.new_streak, 1);
        assert_eq!(update.last_entry_date, "2026-02-08");
    }

    #[test]
    fn test_timestamp_entry_is_normalized() {
        let update =
            calculate_updated_streak(3, Some("2026-02-10"), "2026-02-11T22:15:00").unwrap();
        assert_eq!(update.new_streak, 4);
        assert_eq!(update.last_entry_date, "2026-02-11");
    }

    #[test]
    fn test_malformed_entry_date_errors_instead_of_resetting() {
        let result = calculate_updated_streak(5, Some("2026-02-10"), "not-a-date-at");
        assert!(result.is_err());
    }

    #[test]
    fn test_recalculate_counts_back_from_today() {
        let dates = ["2026-02-10", "2026-02-09", "2026-02-08"];
        assert_eq!(recalculate_streak_from_dates(&dates, "2026-02-10").unwrap(), 3);
    }

    #[test]
    fn test_recalculate_is_zero_when_newest_is_not_today() {
        let dates = ["2026-02-09", "2026-02-08"];
        assert_eq!(recalculate_streak_from_dates(&dates, "2026-02-10").unwrap(), 0);
    }

    #[test]
    fn test_recalculate_stops_at_first_gap() {
        let dates = ["2026-02-10", "2026-02-09", "2026-02-07", "2026-02-06"];
        assert_eq!(recalculate_streak_from_dates(&dates, "2026-02-10").unwrap(), 2);
    }

    #[test]
    fn test_recalculate_handles_empty_history() {
        let dates: [&str; 0] = [];
        assert_eq!(recalculate_streak_from_dates(&dates, "2026-02-10").unwrap(), 0);
    }

    #[test]
    fn test_recalculate_crosses_month_boundary() {
        let dates = ["2026-03-01", "2026-02-28", "2026-02-27"];
        assert_eq!(recalculate_streak_from_dates(&dates, "2026-03-01").unwrap(), 3);
    }

    #[test]
    fn test_recalculate_rejects_malformed_history() {
        let dates = ["2026-02-10", "garbage"];
        assert!(recalculate_streak_from_dates(&dates, "2026-02-10").is_err());
    }
}
