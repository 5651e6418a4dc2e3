//! Leveling state machine for spaced repetition.
//!
//! Every learnable item climbs a fixed ladder of levels 0..=6. Level 0 means
//! "new / currently not scheduled"; levels 1-6 are successive repetition
//! stages with growing review intervals.
//!
//! ## Transitions
//!
//! ```text
//! learn:      0..=5 -> level+1  (resumes from max_level after an auto-reset)
//! learn:      6     -> 6        (terminal, stays on a 30-day interval)
//! reset:      any   -> 0        (manual, discards resumability)
//! auto-reset: due   -> 0        (sweep, preserves the level in max_level)
//! ```

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Review interval in days, indexed by target level.
pub const INTERVALS: [i64; 7] = [0, 2, 4, 7, 14, 21, 30];

/// Highest repetition stage. Terminal for interval growth.
pub const MAX_LEVEL: u8 = 6;

/// Tag on sentence history entries distinguishing learns from resets.
///
/// Word histories never carried this tag, so it stays optional on the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Learned,
    Reset,
}

/// One recorded level transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub from_level: u8,
    pub to_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<HistoryAction>,
}

/// Scheduling state shared by words and sentences.
///
/// Flattened into each item so the stored JSON stays flat and camelCase.
///
/// Invariants:
/// - `next_review_date` is present iff `level > 0` and the item has not been
///   auto-reset.
/// - `max_level` is present only between an auto-reset and the next learn;
///   it is the level the item fell from and makes the climb resumable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    #[serde(default)]
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_level: Option<u8>,
    #[serde(default)]
    pub last_learned_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_review_date: Option<NaiveDate>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl ReviewState {
    /// Advance one repetition stage and project the next review date.
    ///
    /// An item that was auto-reset resumes from the level it fell from
    /// (`max_level`) instead of restarting the ladder at 1. Total over any
    /// well-formed state; never fails.
    pub fn learn(&mut self, today: NaiveDate, action: Option<HistoryAction>) {
        let base = match (self.level, self.max_level) {
            (0, Some(max)) => max,
            (level, _) => level,
        };
        let next = (base + 1).min(MAX_LEVEL);
        self.history.push(HistoryEntry {
            date: today,
            from_level: self.level,
            to_level: next,
            action,
        });
        self.level = next;
        self.max_level = None;
        self.last_learned_date = Some(today);
        self.next_review_date = Some(today + Duration::days(INTERVALS[next as usize]));
    }

    /// Manual demotion to level 0.
    ///
    /// Unlike the sweep's auto-reset this abandons progress: `max_level` is
    /// left untouched rather than set from the current level, so an item
    /// reset from a scheduled level climbs again from 1.
    pub fn reset(&mut self, today: NaiveDate, action: Option<HistoryAction>) {
        self.history.push(HistoryEntry {
            date: today,
            from_level: self.level,
            to_level: 0,
            action,
        });
        self.level = 0;
        self.last_learned_date = None;
        self.next_review_date = None;
    }

    /// System-initiated demotion of a due item, called by the sweep.
    ///
    /// Remembers the level the item fell from in `max_level`; the next learn
    /// consumes it and resumes the ladder. No history entry is recorded.
    pub(crate) fn auto_reset(&mut self) {
        self.max_level = Some(self.level);
        self.level = 0;
        self.last_learned_date = None;
        self.next_review_date = None;
    }

    /// Whether the review date has arrived or passed.
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.level > 0 && self.next_review_date.map_or(false, |d| d <= today)
    }
}
