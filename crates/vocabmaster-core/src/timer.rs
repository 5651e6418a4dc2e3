//! Study-timer accountant.
//!
//! Converts a running wall-clock timer into accumulated daily study time and
//! settles each day against the configured goal at calendar-day boundaries,
//! carrying surplus or debt forward. Fully-skipped days each accrue one full
//! goal of debt.
//!
//! The accountant has no thread of its own and never reads the wall clock
//! directly. Every entry point takes the caller's [`Clock`] so one consistent
//! "now" drives the whole operation, and every entry point rolls the day over
//! first. Each mutating call returns whether state changed, so callers can
//! skip the persistence write otherwise.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Settled days kept in the timer history. Oldest entries drop first.
pub const HISTORY_DAYS: usize = 90;

/// Trailing days of history included in a [`TimerStatus`].
const STATUS_HISTORY_DAYS: usize = 30;

/// One settled calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Milliseconds studied on `date`.
    pub studied: i64,
    /// The configured daily goal at settlement time.
    pub goal: i64,
    /// Carry-over that applied to `date` when it was settled.
    pub carry_over: i64,
}

/// Study-timer state, one instance per data set.
///
/// Mutated only through the accountant entry points below; the persistence
/// layer reads and writes it as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyTimer {
    pub is_running: bool,
    /// Present iff `is_running`.
    pub started_at: Option<DateTime<Utc>>,
    /// Milliseconds studied on `today_date`, excluding any running interval.
    pub today_studied: i64,
    pub today_date: NaiveDate,
    /// Positive = surplus banked from past days, negative = debt owed.
    pub carry_over: i64,
    #[serde(default)]
    pub history: Vec<DayRecord>,
}

/// Live snapshot reported to callers.
///
/// `today_studied` here is the projected total including the running
/// interval; the settled accumulator in [`StudyTimer`] is not touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStatus {
    pub is_running: bool,
    pub today_studied: i64,
    pub effective_goal: i64,
    /// Remaining time toward the effective goal, clamped at zero.
    pub remaining: i64,
    pub carry_over: i64,
    pub daily_goal: i64,
    pub today_date: NaiveDate,
    pub history: Vec<DayRecord>,
}

impl StudyTimer {
    /// Fresh idle state accounting against `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            is_running: false,
            started_at: None,
            today_studied: 0,
            today_date: today,
            carry_over: 0,
            history: Vec::new(),
        }
    }

    /// Start the timer. No-op when already running.
    pub fn start(&mut self, clock: &impl Clock, goal_ms: i64) -> bool {
        let rolled = self.roll_over(clock.today(), goal_ms);
        if self.is_running {
            return rolled;
        }
        self.is_running = true;
        self.started_at = Some(clock.now());
        true
    }

    /// Stop the timer, flushing the elapsed interval into `today_studied`.
    /// No-op when already idle.
    pub fn stop(&mut self, clock: &impl Clock, goal_ms: i64) -> bool {
        let rolled = self.roll_over(clock.today(), goal_ms);
        let Some(started_at) = self.started_at else {
            return rolled;
        };
        if !self.is_running {
            return rolled;
        }
        let elapsed = (clock.now() - started_at).num_milliseconds().max(0);
        self.today_studied += elapsed;
        self.is_running = false;
        self.started_at = None;
        true
    }

    /// Report the live total without flushing the running interval.
    ///
    /// The rollover guard still runs, so the returned flag tells the caller
    /// whether a day boundary was settled and a write is warranted.
    pub fn status(&mut self, clock: &impl Clock, goal_ms: i64) -> (TimerStatus, bool) {
        let rolled = self.roll_over(clock.today(), goal_ms);

        let running_ms = match (self.is_running, self.started_at) {
            (true, Some(started_at)) => (clock.now() - started_at).num_milliseconds().max(0),
            _ => 0,
        };
        let live_total = self.today_studied + running_ms;
        let effective_goal = goal_ms - self.carry_over;

        let tail = self.history.len().saturating_sub(STATUS_HISTORY_DAYS);
        let status = TimerStatus {
            is_running: self.is_running,
            today_studied: live_total,
            effective_goal,
            remaining: (effective_goal - live_total).max(0),
            carry_over: self.carry_over,
            daily_goal: goal_ms,
            today_date: self.today_date,
            history: self.history[tail..].to_vec(),
        };
        (status, rolled)
    }

    /// Settle the day boundary, if one has passed. Runs first in every
    /// entry point.
    ///
    /// Settles `today_date` against the goal it owed (goal minus carry-over),
    /// appends its history record, fills each fully-skipped day in between
    /// with a zero-activity record and one full goal of debt, then starts the
    /// new day with an empty accumulator. A still-running interval does not
    /// survive the boundary: its unflushed portion is discarded and the timer
    /// is forced idle.
    pub fn roll_over(&mut self, today: NaiveDate, goal_ms: i64) -> bool {
        if self.today_date == today {
            return false;
        }

        let effective_goal = goal_ms - self.carry_over;
        let surplus = self.today_studied - effective_goal;

        self.history.push(DayRecord {
            date: self.today_date,
            studied: self.today_studied,
            goal: goal_ms,
            carry_over: self.carry_over,
        });

        // Fully-skipped days sit strictly between the settled day and today.
        // A backwards date change settles the old day but skips nothing.
        let days_diff = (today - self.today_date).num_days();
        let mut carry = surplus;
        for offset in 1..days_diff {
            carry -= goal_ms;
            self.history.push(DayRecord {
                date: self.today_date + Duration::days(offset),
                studied: 0,
                goal: goal_ms,
                carry_over: 0,
            });
        }

        if self.history.len() > HISTORY_DAYS {
            let excess = self.history.len() - HISTORY_DAYS;
            self.history.drain(..excess);
        }

        self.carry_over = carry;
        self.today_studied = 0;
        self.today_date = today;
        self.is_running = false;
        self.started_at = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use proptest::prelude::*;

    const GOAL: i64 = 3 * 60 * 60 * 1000;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn at(s: &str) -> FixedClock {
        FixedClock(s.parse().unwrap())
    }

    #[test]
    fn start_then_stop_accumulates_elapsed() {
        let mut timer = StudyTimer::new(d("2024-01-01"));

        assert!(timer.start(&at("2024-01-01T10:00:00Z"), GOAL));
        assert!(timer.is_running);
        // Accumulator holds settled time only while running.
        assert_eq!(timer.today_studied, 0);

        assert!(timer.stop(&at("2024-01-01T10:45:00Z"), GOAL));
        assert!(!timer.is_running);
        assert_eq!(timer.started_at, None);
        assert_eq!(timer.today_studied, 45 * 60 * 1000);
    }

    #[test]
    fn start_is_idempotent_while_running() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        timer.start(&at("2024-01-01T10:00:00Z"), GOAL);
        let started_at = timer.started_at;

        assert!(!timer.start(&at("2024-01-01T11:00:00Z"), GOAL));
        assert_eq!(timer.started_at, started_at);
    }

    #[test]
    fn stop_while_idle_is_a_no_op() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        assert!(!timer.stop(&at("2024-01-01T10:00:00Z"), GOAL));
        assert_eq!(timer.today_studied, 0);
    }

    #[test]
    fn status_projects_running_interval_without_flushing() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        timer.today_studied = 10 * 60 * 1000;
        timer.start(&at("2024-01-01T10:00:00Z"), GOAL);

        let (status, rolled) = timer.status(&at("2024-01-01T10:20:00Z"), GOAL);
        assert!(!rolled);
        assert_eq!(status.today_studied, 30 * 60 * 1000);
        assert_eq!(status.remaining, GOAL - 30 * 60 * 1000);
        // The settled accumulator is untouched.
        assert_eq!(timer.today_studied, 10 * 60 * 1000);
    }

    #[test]
    fn remaining_is_clamped_at_zero() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        timer.today_studied = GOAL + 1;
        let (status, _) = timer.status(&at("2024-01-01T20:00:00Z"), GOAL);
        assert_eq!(status.remaining, 0);
    }

    #[test]
    fn carry_over_surplus_shrinks_the_effective_goal() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        timer.carry_over = 30 * 60 * 1000;
        let (status, _) = timer.status(&at("2024-01-01T08:00:00Z"), GOAL);
        assert_eq!(status.effective_goal, GOAL - 30 * 60 * 1000);
        assert_eq!(status.remaining, GOAL - 30 * 60 * 1000);
    }

    #[test]
    fn rollover_settles_shortfall_into_debt() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        timer.today_studied = GOAL - 60 * 60 * 1000; // one hour short

        assert!(timer.roll_over(d("2024-01-02"), GOAL));
        assert_eq!(timer.carry_over, -(60 * 60 * 1000));
        assert_eq!(timer.today_studied, 0);
        assert_eq!(timer.today_date, d("2024-01-02"));
        assert_eq!(
            timer.history,
            vec![DayRecord {
                date: d("2024-01-01"),
                studied: GOAL - 60 * 60 * 1000,
                goal: GOAL,
                carry_over: 0,
            }]
        );
    }

    #[test]
    fn rollover_with_one_skipped_day_accrues_two_goals_of_debt() {
        let mut timer = StudyTimer::new(d("2024-01-01"));

        assert!(timer.roll_over(d("2024-01-03"), GOAL));
        assert_eq!(timer.carry_over, -2 * GOAL);
        assert_eq!(timer.history.len(), 2);
        assert_eq!(
            timer.history[1],
            DayRecord {
                date: d("2024-01-02"),
                studied: 0,
                goal: GOAL,
                carry_over: 0,
            }
        );
    }

    #[test]
    fn rollover_discards_the_running_interval() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        timer.start(&at("2024-01-01T23:00:00Z"), GOAL);

        // Next query happens after midnight: the unflushed two hours are
        // dropped, not split across the boundary.
        let (status, rolled) = timer.status(&at("2024-01-02T01:00:00Z"), GOAL);
        assert!(rolled);
        assert!(!status.is_running);
        assert_eq!(status.today_studied, 0);
        assert_eq!(timer.started_at, None);
        assert_eq!(timer.history[0].studied, 0);
        assert_eq!(timer.carry_over, -GOAL);
    }

    #[test]
    fn rollover_same_day_is_a_no_op() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        timer.today_studied = 1234;
        assert!(!timer.roll_over(d("2024-01-01"), GOAL));
        assert_eq!(timer.today_studied, 1234);
        assert!(timer.history.is_empty());
    }

    #[test]
    fn backwards_date_change_settles_without_skipped_debt() {
        let mut timer = StudyTimer::new(d("2024-01-10"));
        timer.today_studied = GOAL;

        assert!(timer.roll_over(d("2024-01-08"), GOAL));
        // Goal was met, so no debt; no phantom skipped days either.
        assert_eq!(timer.carry_over, 0);
        assert_eq!(timer.history.len(), 1);
        assert_eq!(timer.today_date, d("2024-01-08"));
    }

    #[test]
    fn history_is_capped_at_ninety_days() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        // 100 single-day rollovers.
        for _ in 0..100 {
            let next = timer.today_date + Duration::days(1);
            timer.roll_over(next, GOAL);
        }
        assert_eq!(timer.history.len(), HISTORY_DAYS);
        // Oldest entries dropped first.
        assert_eq!(timer.history[0].date, d("2024-01-11"));
        assert_eq!(timer.history.last().unwrap().date, d("2024-04-09"));
    }

    #[test]
    fn history_cap_covers_skipped_day_records_too() {
        let mut timer = StudyTimer::new(d("2024-01-01"));
        timer.roll_over(d("2024-06-01"), GOAL);
        assert_eq!(timer.history.len(), HISTORY_DAYS);
    }

    proptest! {
        // new_carry = studied - (goal - old_carry) - skipped * goal
        #[test]
        fn rollover_carry_accounting_identity(
            studied in 0i64..12 * 60 * 60 * 1000,
            old_carry in -10 * GOAL..10 * GOAL,
            gap_days in 1i64..30,
        ) {
            let mut timer = StudyTimer::new(d("2024-01-01"));
            timer.today_studied = studied;
            timer.carry_over = old_carry;

            timer.roll_over(d("2024-01-01") + Duration::days(gap_days), GOAL);

            let skipped = gap_days - 1;
            prop_assert_eq!(
                timer.carry_over,
                studied - (GOAL - old_carry) - skipped * GOAL
            );
            prop_assert_eq!(timer.history.len() as i64, gap_days.min(HISTORY_DAYS as i64));
        }
    }
}
