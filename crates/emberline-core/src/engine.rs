//! Entry-recording facade.
//!
//! Hosts that want the whole per-entry transaction as one call use
//! [`record_entry`]: streak transition first, then milestone detection
//! against the before/after pair. The caller persists the returned
//! state and badges together; concurrent submissions for the same
//! (user, journal type) must be serialized by the host, not here.

use serde::{Deserialize, Serialize};

use crate::date::normalize_to_date_only;
use crate::error::{Result, ValidationError};
use crate::journal::{JournalType, StreakState};
use crate::milestones::{check_for_new_milestones, BadgeSet, EarnedBadge};
use crate::streak::calculate_updated_streak;

/// A completed journal entry, as raised by the journaling UI flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryEvent {
    /// Which journal type the entry belongs to
    pub journal_type: JournalType,

    /// Local date of the entry; date-only string or a timestamp
    pub entry_date: String,
}

/// Everything the host needs to persist after recording one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOutcome {
    /// Updated streak state to write back
    pub state: StreakState,

    /// Newly earned badges to append, ascending by threshold
    pub new_badges: Vec<EarnedBadge>,
}

/// Record one entry: apply the streak transition, then detect any newly
/// crossed milestones.
///
/// `prior` is the persisted state for the event's journal type, absent
/// before the first entry; passing state for a different type is a
/// caller error. `badges` is the full badge set across all types (ids
/// embed the type, so cross-type collision is impossible). `today` is
/// the host clock's local date, stamped onto new badges.
pub fn record_entry(
    event: &EntryEvent,
    prior: Option<&StreakState>,
    badges: &BadgeSet,
    today: &str,
) -> Result<EntryOutcome> {
    if let Some(state) = prior {
        if state.journal_type != event.journal_type {
            return Err(ValidationError::JournalTypeMismatch {
                event: event.journal_type.to_string(),
                state: state.journal_type.to_string(),
            }
            .into());
        }
    }

    let old_streak = prior.map(|state| state.current_streak).unwrap_or(0);
    let last_entry_date = prior.and_then(|state| state.last_entry_date.as_deref());

    let update = calculate_updated_streak(old_streak, last_entry_date, &event.entry_date)?;
    let today = normalize_to_date_only(today)?;
    let new_badges = check_for_new_milestones(
        event.journal_type,
        old_streak,
        update.new_streak,
        badges,
        &today,
    );

    tracing::debug!(
        journal_type = %event.journal_type,
        old_streak,
        new_streak = update.new_streak,
        new_badges = new_badges.len(),
        "entry recorded"
    );

    Ok(EntryOutcome {
        state: StreakState {
            journal_type: event.journal_type,
            current_streak: update.new_streak,
            last_entry_date: Some(update.last_entry_date),
        },
        new_badges,
    })
}
