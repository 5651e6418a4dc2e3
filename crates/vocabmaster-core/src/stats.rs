//! Collection statistics.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::Word;
use crate::leveling::MAX_LEVEL;

/// Aggregate view of the word collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    /// Count per level 0..=6; every level key is present even when zero.
    pub by_level: BTreeMap<u8, usize>,
    /// Words whose review lands exactly today.
    pub due_today: usize,
    /// Words at any scheduled level (> 0).
    pub learned: usize,
    /// Words at the terminal level.
    pub mastered: usize,
}

impl Stats {
    pub fn collect(words: &[Word], today: NaiveDate) -> Self {
        let mut by_level: BTreeMap<u8, usize> = (0..=MAX_LEVEL).map(|l| (l, 0)).collect();
        for word in words {
            *by_level.entry(word.review.level).or_default() += 1;
        }

        Self {
            total: words.len(),
            by_level,
            due_today: words
                .iter()
                .filter(|w| w.review.next_review_date == Some(today))
                .count(),
            learned: words.iter().filter(|w| w.review.level > 0).count(),
            mastered: words
                .iter()
                .filter(|w| w.review.level == MAX_LEVEL)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewWord;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn word_at_level(id: u64, level: u8) -> Word {
        let mut word = NewWord {
            word: format!("w{id}"),
            meaning_vi: "nghĩa".into(),
            ..Default::default()
        }
        .into_word(id, d("2024-01-01"));
        word.review.level = level;
        if level > 0 {
            word.review.next_review_date = Some(d("2024-02-01"));
        }
        word
    }

    #[test]
    fn histogram_counts_every_level() {
        let words = vec![
            word_at_level(1, 0),
            word_at_level(2, 0),
            word_at_level(3, 2),
            word_at_level(4, 6),
        ];
        let stats = Stats::collect(&words, d("2024-01-15"));

        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_level[&0], 2);
        assert_eq!(stats.by_level[&2], 1);
        assert_eq!(stats.by_level[&6], 1);
        assert_eq!(stats.by_level[&3], 0);
        assert_eq!(stats.learned, 2);
        assert_eq!(stats.mastered, 1);
    }

    #[test]
    fn due_today_matches_the_exact_date() {
        let mut due = word_at_level(1, 3);
        due.review.next_review_date = Some(d("2024-01-15"));
        let overdue = word_at_level(2, 3); // 2024-02-01, not "due today"

        let stats = Stats::collect(&[due, overdue], d("2024-01-15"));
        assert_eq!(stats.due_today, 1);
    }

    #[test]
    fn serializes_camel_case() {
        let stats = Stats::collect(&[], d("2024-01-15"));
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json.get("byLevel").is_some());
        assert!(json.get("dueToday").is_some());
        assert_eq!(json["total"], 0);
    }
}
