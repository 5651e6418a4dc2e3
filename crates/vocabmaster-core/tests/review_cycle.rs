//! End-to-end review cycle against the public API.
//!
//! Walks one word through add -> learn -> sweep -> resume, and the timer
//! through a day boundary, persisting between each step like a caller would.

use chrono::NaiveDate;
use vocabmaster_core::{Clock, Database, FixedClock, NewWord, Stats};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn at(s: &str) -> FixedClock {
    FixedClock(s.parse().unwrap())
}

#[test]
fn word_survives_a_full_review_cycle_across_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    // Day 1: add and learn.
    {
        let mut db = Database::open_at(path.clone()).unwrap();
        let id = db
            .add_word(
                NewWord {
                    word: "perseverance".into(),
                    meaning_vi: "sự bền chí".into(),
                    ..Default::default()
                },
                d("2024-01-01"),
            )
            .unwrap()
            .id;
        db.word_mut(id).unwrap().learn(d("2024-01-01"));
        db.save().unwrap();
    }

    // Day 3: the word is due; a read path sweeps it.
    {
        let mut db = Database::open_at(path.clone()).unwrap();
        assert!(db.sweep_due(d("2024-01-03")));
        let word = db.word(1).unwrap();
        assert_eq!(word.review.level, 0);
        assert_eq!(word.review.max_level, Some(1));
        assert_eq!(word.review.next_review_date, None);
        db.save().unwrap();
    }

    // Same day: learning again resumes the ladder at level 2.
    {
        let mut db = Database::open_at(path.clone()).unwrap();
        db.word_mut(1).unwrap().learn(d("2024-01-03"));
        let word = db.word(1).unwrap();
        assert_eq!(word.review.level, 2);
        assert_eq!(word.review.next_review_date, Some(d("2024-01-07")));
        assert_eq!(word.review.history.len(), 2);
        db.save().unwrap();

        let stats = Stats::collect(&db.data.words, d("2024-01-03"));
        assert_eq!(stats.learned, 1);
        assert_eq!(stats.by_level[&2], 1);
    }
}

#[test]
fn timer_settles_across_a_reload_and_a_day_boundary() {
    const GOAL: i64 = 3 * 60 * 60 * 1000;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    {
        let mut db = Database::open_at(path.clone()).unwrap();
        let clock = at("2024-01-01T10:00:00Z");
        let timer = db.timer_mut(clock.today());
        timer.start(&clock, GOAL);
        timer.stop(&at("2024-01-01T12:00:00Z"), GOAL);
        db.save().unwrap();
    }

    // Two days later the shortfall and the skipped day both become debt.
    {
        let mut db = Database::open_at(path).unwrap();
        let clock = at("2024-01-03T08:00:00Z");
        let timer = db.timer_mut(clock.today());
        let (status, rolled) = timer.status(&clock, GOAL);
        assert!(rolled);

        // Studied 2h of 3h on day one (-1h), skipped day two (-3h).
        assert_eq!(status.carry_over, -(60 * 60 * 1000) - GOAL);
        assert_eq!(status.effective_goal, GOAL - status.carry_over);
        assert_eq!(status.history.len(), 2);
        assert_eq!(status.history[0].studied, 2 * 60 * 60 * 1000);
        assert_eq!(status.history[1].studied, 0);
    }
}
