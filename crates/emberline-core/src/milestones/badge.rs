//! Milestone thresholds, earned badges, and the id-keyed badge set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::journal::JournalType;

/// The fixed streak lengths that award a one-time badge.
///
/// Serializes as its day value, so the wire format stays the plain
/// numbers the host already persists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u32", try_from = "u32")]
pub enum MilestoneThreshold {
    Week,
    Fortnight,
    Month,
    TwoMonths,
    Quarter,
}

impl MilestoneThreshold {
    /// All thresholds, ascending.
    pub const ALL: [MilestoneThreshold; 5] = [
        MilestoneThreshold::Week,
        MilestoneThreshold::Fortnight,
        MilestoneThreshold::Month,
        MilestoneThreshold::TwoMonths,
        MilestoneThreshold::Quarter,
    ];

    /// Streak length in days.
    pub fn days(self) -> u32 {
        match self {
            MilestoneThreshold::Week => 7,
            MilestoneThreshold::Fortnight => 14,
            MilestoneThreshold::Month => 30,
            MilestoneThreshold::TwoMonths => 60,
            MilestoneThreshold::Quarter => 90,
        }
    }
}

impl From<MilestoneThreshold> for u32 {
    fn from(threshold: MilestoneThreshold) -> u32 {
        threshold.days()
    }
}

impl TryFrom<u32> for MilestoneThreshold {
    type Error = ValidationError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        MilestoneThreshold::ALL
            .into_iter()
            .find(|threshold| threshold.days() == days)
            .ok_or(ValidationError::UnknownThreshold { days })
    }
}

impl fmt::Display for MilestoneThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

/// Deterministic badge id for a (type, threshold) pair, e.g. `mood-7`.
pub fn badge_id(journal_type: JournalType, threshold: MilestoneThreshold) -> String {
    format!("{}-{}", journal_type.slug(), threshold.days())
}

/// A one-time achievement record for crossing a threshold.
///
/// Created exactly once per (type, threshold) pair and kept forever;
/// `celebrated` is the only field that changes afterwards, flipped by
/// the UI once the badge has been shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarnedBadge {
    /// Deterministic id, `{journal_type}-{days}`
    pub id: String,

    /// Journal type the badge belongs to
    pub journal_type: JournalType,

    /// Threshold that was crossed
    pub threshold: MilestoneThreshold,

    /// Date-only string stamped when the badge was earned
    pub earned_date: String,

    /// Whether the celebration UI has been shown for this badge
    pub celebrated: bool,
}

impl EarnedBadge {
    /// Create a freshly earned, not-yet-celebrated badge.
    pub fn new(
        journal_type: JournalType,
        threshold: MilestoneThreshold,
        earned_date: &str,
    ) -> Self {
        Self {
            id: badge_id(journal_type, threshold),
            journal_type,
            threshold,
            earned_date: earned_date.to_string(),
            celebrated: false,
        }
    }

    /// Split a badge id back into its type and threshold.
    pub fn parse_id(id: &str) -> Result<(JournalType, MilestoneThreshold), ValidationError> {
        let (slug, days) = id
            .rsplit_once('-')
            .ok_or_else(|| ValidationError::MalformedBadgeId { id: id.to_string() })?;
        let journal_type: JournalType = slug.parse()?;
        let days: u32 = days
            .parse()
            .map_err(|_| ValidationError::MalformedBadgeId { id: id.to_string() })?;
        let threshold = MilestoneThreshold::try_from(days)?;
        Ok((journal_type, threshold))
    }
}

/// Collection of earned badges keyed by id.
///
/// Membership by id is the sole uniqueness mechanism; `insert` is
/// first-write-wins, which gives the set its append-only semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeSet {
    badges: BTreeMap<String, EarnedBadge>,
}

impl BadgeSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a badge with this id exists.
    pub fn contains_id(&self, id: &str) -> bool {
        self.badges.contains_key(id)
    }

    /// Whether the (type, threshold) badge exists.
    pub fn contains(&self, journal_type: JournalType, threshold: MilestoneThreshold) -> bool {
        self.contains_id(&badge_id(journal_type, threshold))
    }

    /// Look up a badge by id.
    pub fn get(&self, id: &str) -> Option<&EarnedBadge> {
        self.badges.get(id)
    }

    /// Insert a badge, validating that its id matches its own fields.
    ///
    /// Returns `false` if a badge with the same id already exists; the
    /// existing record wins and the new one is dropped.
    pub fn insert(&mut self, badge: EarnedBadge) -> Result<bool, ValidationError> {
        let parsed = EarnedBadge::parse_id(&badge.id)?;
        if parsed != (badge.journal_type, badge.threshold) {
            return Err(ValidationError::BadgeIdMismatch {
                id: badge.id.clone(),
                expected: badge_id(badge.journal_type, badge.threshold),
            });
        }
        if self.badges.contains_key(&badge.id) {
            return Ok(false);
        }
        self.badges.insert(badge.id.clone(), badge);
        Ok(true)
    }

    /// Flip the celebrated flag on a badge. Returns `false` if absent.
    pub fn mark_celebrated(&mut self, id: &str) -> bool {
        match self.badges.get_mut(id) {
            Some(badge) => {
                badge.celebrated = true;
                true
            }
            None => false,
        }
    }

    /// Number of badges in the set.
    pub fn len(&self) -> usize {
        self.badges.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// All badges, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &EarnedBadge> {
        self.badges.values()
    }

    /// Badges belonging to one journal type.
    pub fn for_type(&self, journal_type: JournalType) -> impl Iterator<Item = &EarnedBadge> {
        self.badges
            .values()
            .filter(move |badge| badge.journal_type == journal_type)
    }
}
