//! Static display metadata for every badge.
//!
//! The catalog is total by construction: one exhaustive match over the
//! closed (type, threshold) pairs, so a missing entry is a compile
//! error rather than a runtime fallback. Each journal type carries its
//! own thematic copy, and every 90-day capstone is `reflective` --
//! rendered contemplatively instead of with confetti.

use serde::Serialize;

use crate::journal::JournalType;
use crate::milestones::badge::{EarnedBadge, MilestoneThreshold};

/// Display metadata for one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeDisplayInfo {
    /// Short badge title
    pub title: &'static str,

    /// Emoji icon
    pub icon: &'static str,

    /// One-sentence description shown in the celebration UI
    pub description: &'static str,

    /// Contemplative rather than celebratory presentation
    pub reflective: bool,
}

/// Catalog entry for a (type, threshold) pair.
pub fn catalog_entry(
    journal_type: JournalType,
    threshold: MilestoneThreshold,
) -> BadgeDisplayInfo {
    use JournalType::*;
    use MilestoneThreshold::*;

    let (title, icon, description) = match (journal_type, threshold) {
        (Journey, Week) => (
            "First Week of Pages",
            "🌱",
            "Seven days of showing up for your daily pages.",
        ),
        (Journey, Fortnight) => (
            "Two Weeks Deep",
            "🌿",
            "Fourteen consecutive days of guided journaling.",
        ),
        (Journey, Month) => (
            "A Month of Mornings",
            "🌳",
            "Thirty days in a row of making space to write.",
        ),
        (Journey, TwoMonths) => (
            "Sixty-Day Devotion",
            "🏞️",
            "Two months of daily pages without missing a beat.",
        ),
        (Journey, Quarter) => (
            "Ninety Days of You",
            "🌄",
            "A season of daily writing. Look back at where you started.",
        ),

        (Mood, Week) => (
            "Week of Weather",
            "⛅",
            "You've charted your inner weather seven days straight.",
        ),
        (Mood, Fortnight) => (
            "Fortnight Forecast",
            "🌤️",
            "Two weeks of naming how you feel, every day.",
        ),
        (Mood, Month) => (
            "Thirty-Day Barometer",
            "🌈",
            "A full month of daily mood check-ins.",
        ),
        (Mood, TwoMonths) => (
            "Two Months of Tides",
            "🌞",
            "Sixty days of noticing the rise and fall of your moods.",
        ),
        (Mood, Quarter) => (
            "Season of Feeling",
            "🌅",
            "Ninety days of moods, mapped. Notice what the patterns tell you.",
        ),

        (Flip, Week) => (
            "Seven Flips",
            "🔄",
            "A week of turning difficult thoughts around.",
        ),
        (Flip, Fortnight) => (
            "Fourteen Reframes",
            "🪞",
            "Two weeks of daily practice seeing another side.",
        ),
        (Flip, Month) => (
            "Thirty Turnarounds",
            "💡",
            "A month of reframing, one thought at a time.",
        ),
        (Flip, TwoMonths) => (
            "Sixty Shifts",
            "🦋",
            "Two months of steadily changing how you talk to yourself.",
        ),
        (Flip, Quarter) => (
            "The Long Reframe",
            "🧘",
            "Ninety days of reframing. The practice is becoming the habit.",
        ),

        (Overall, Week) => (
            "One Week Strong",
            "⭐",
            "Seven consecutive days of journaling, any kind at all.",
        ),
        (Overall, Fortnight) => (
            "Fourteen and Counting",
            "🌟",
            "Two unbroken weeks of showing up for yourself.",
        ),
        (Overall, Month) => (
            "The Thirty Club",
            "🏅",
            "Thirty straight days with at least one entry.",
        ),
        (Overall, TwoMonths) => (
            "Sixty-Day Steady",
            "🏆",
            "Two months of daily presence in your journal.",
        ),
        (Overall, Quarter) => (
            "Ninety Days Present",
            "🕯️",
            "Ninety consecutive days. Sit with how far you've come.",
        ),
    };

    BadgeDisplayInfo {
        title,
        icon,
        description,
        reflective: threshold == Quarter,
    }
}

/// A catalog entry annotated with the journal type's display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeDisplay {
    /// Human-readable journal type label, e.g. "Mood Check-In"
    pub type_label: &'static str,

    /// Short badge title
    pub title: &'static str,

    /// Emoji icon
    pub icon: &'static str,

    /// One-sentence description
    pub description: &'static str,

    /// Contemplative rather than celebratory presentation
    pub reflective: bool,
}

/// Look up display metadata for an earned badge.
pub fn get_badge_display_info(badge: &EarnedBadge) -> BadgeDisplay {
    let info = catalog_entry(badge.journal_type, badge.threshold);
    BadgeDisplay {
        type_label: badge.journal_type.label(),
        title: info.title,
        icon: info.icon,
        description: info.description,
        reflective: info.reflective,
    }
}
