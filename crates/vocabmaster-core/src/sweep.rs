//! Due-item sweep.
//!
//! Demotes every item whose review date has arrived back to level 0 while
//! remembering the level it fell from, so the next learn resumes the ladder
//! instead of restarting it.

use chrono::NaiveDate;

use crate::leveling::ReviewState;

/// Auto-reset every due state in the collection.
///
/// Returns whether anything changed so the caller can skip the persistence
/// write on read-only inspection. Idempotent: swept items drop to level 0
/// and fail the `level > 0` guard on the next run.
pub fn sweep_due<'a, I>(states: I, today: NaiveDate) -> bool
where
    I: IntoIterator<Item = &'a mut ReviewState>,
{
    let mut changed = false;
    for state in states {
        if state.is_due(today) {
            state.auto_reset();
            changed = true;
        }
    }
    changed
}
