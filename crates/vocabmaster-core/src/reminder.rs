//! Daily reminder content.
//!
//! Counts new and due items and builds the notification message the desktop
//! shell displays. Delivery itself is out of scope; the core only decides
//! whether a reminder is owed today and what it should say.

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::item::Word;
use crate::storage::ReminderConfig;

/// Motivational quotes, paired with a Vietnamese translation where one
/// exists.
const QUOTES: [(&str, Option<&str>); 10] = [
    (
        "Suffering is a test. That's all it is. Suffering is the true test of life.",
        Some("Đau khổ là một thử thách. Đó là tất cả. Đau khổ là thử thách thực sự của cuộc sống."),
    ),
    (
        "You are in danger of living a life so comfortable that you will die without ever realizing your true potential.",
        Some("Bạn đang có nguy cơ sống một cuộc sống quá thoải mái đến nỗi bạn sẽ chết mà không bao giờ nhận ra tiềm năng thực sự của mình."),
    ),
    (
        "We live in an external world. Everything, you have to see it, touch it. If you can for the rest of your life, live inside yourself - to find greatness, you have to go inside.",
        None,
    ),
    (
        "The only way that you're ever going to get to the other side of this journey is by suffering. You have to suffer in order to grow. Some people get it, some people don't.",
        None,
    ),
    (
        "The most important conversation is the one you have with yourself.",
        Some("Cuộc trò chuyện quan trọng nhất là cuộc trò chuyện bạn có với chính mình."),
    ),
    (
        "Don't stop when you're tired. Stop when you're done.",
        Some("Đừng dừng lại khi bạn mệt. Dừng lại khi bạn hoàn thành."),
    ),
    (
        "If you can see yourself doing something, you can do it. If you can't see yourself doing it, usually you can't achieve it.",
        None,
    ),
    (
        "We all have the ability to come from nothing to something.",
        None,
    ),
    (
        "You have to build calluses on your brain just like how you build calluses on your hands.",
        None,
    ),
    (
        "Motivation is crap. Motivation comes and goes. When you're driven, whatever is in front of you will get destroyed.",
        Some("Động lực là vớ vẩn. Động lực đến rồi đi. Khi bạn có quyết tâm, bất cứ thứ gì trước mặt bạn sẽ bị phá hủy."),
    ),
];

/// Read-only counts the reminder is built from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueCounts {
    /// Items at level 0, never scheduled or awaiting a (re)start.
    pub new_words: usize,
    /// Scheduled items whose review date has arrived or passed.
    pub due_words: usize,
}

impl DueCounts {
    pub fn scan(words: &[Word], today: NaiveDate) -> Self {
        Self {
            new_words: words.iter().filter(|w| w.review.level == 0).count(),
            due_words: words.iter().filter(|w| w.review.is_due(today)).count(),
        }
    }
}

/// A reminder is owed at most once per day, and only when enabled.
pub fn should_show(config: &ReminderConfig, today: NaiveDate) -> bool {
    config.enabled && config.last_reminder_date != Some(today)
}

/// Notification content handed to the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderMessage {
    pub title: String,
    pub body: String,
}

/// Build the day's reminder with a randomly chosen quote.
pub fn build_message(counts: DueCounts, show_vietnamese: bool, rng: &mut impl Rng) -> ReminderMessage {
    let (en, vi) = QUOTES.choose(rng).copied().unwrap_or(QUOTES[0]);

    let body = if show_vietnamese {
        let quote = vi.unwrap_or(en);
        format!(
            "{} từ mới | {} từ cần ôn\n\n\"{}\"\n- David Goggins",
            counts.new_words, counts.due_words, quote
        )
    } else {
        format!(
            "{} new words | {} words to review\n\n\"{}\"\n- David Goggins",
            counts.new_words, counts.due_words, en
        )
    };

    ReminderMessage {
        title: "VocabMaster - Time to Learn!".to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::NewWord;
    use rand::rngs::mock::StepRng;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn words() -> Vec<Word> {
        let mut new = NewWord {
            word: "alpha".into(),
            meaning_vi: "a".into(),
            ..Default::default()
        }
        .into_word(1, d("2024-01-01"));
        new.learn(d("2024-01-01")); // due 2024-01-03

        let fresh = NewWord {
            word: "beta".into(),
            meaning_vi: "b".into(),
            ..Default::default()
        }
        .into_word(2, d("2024-01-02"));

        vec![new, fresh]
    }

    #[test]
    fn counts_split_new_and_due() {
        let counts = DueCounts::scan(&words(), d("2024-01-03"));
        assert_eq!(counts.new_words, 1);
        assert_eq!(counts.due_words, 1);

        let counts = DueCounts::scan(&words(), d("2024-01-02"));
        assert_eq!(counts.new_words, 1);
        assert_eq!(counts.due_words, 0);
    }

    #[test]
    fn scan_reports_due_words_without_demoting_them() {
        let mut words = words();
        let counts = DueCounts::scan(&words, d("2024-01-03"));
        assert_eq!(counts.due_words, 1);
        // Scanning is read-only: the due word keeps its level and schedule.
        assert_eq!(words[0].review.level, 1);
        assert_eq!(words[0].review.next_review_date, Some(d("2024-01-03")));

        // A sweep run before the scan would hide the due word behind the
        // new-word count, so the counts have to be taken first.
        crate::sweep::sweep_due(words.iter_mut().map(|w| &mut w.review), d("2024-01-03"));
        let counts = DueCounts::scan(&words, d("2024-01-03"));
        assert_eq!(counts.due_words, 0);
        assert_eq!(counts.new_words, 2);
    }

    #[test]
    fn reminder_is_gated_to_once_per_day() {
        let mut config = ReminderConfig::default();
        assert!(should_show(&config, d("2024-01-03")));

        config.last_reminder_date = Some(d("2024-01-03"));
        assert!(!should_show(&config, d("2024-01-03")));
        assert!(should_show(&config, d("2024-01-04")));

        config.enabled = false;
        assert!(!should_show(&config, d("2024-01-04")));
    }

    #[test]
    fn message_formats_counts_in_both_languages() {
        let counts = DueCounts {
            new_words: 4,
            due_words: 2,
        };
        let mut rng = StepRng::new(0, 1);

        let en = build_message(counts, false, &mut rng);
        assert!(en.body.starts_with("4 new words | 2 words to review"));

        let vi = build_message(counts, true, &mut rng);
        assert!(vi.body.starts_with("4 từ mới | 2 từ cần ôn"));
    }

    #[test]
    fn vietnamese_message_falls_back_to_english_quote() {
        // Untranslated quotes keep the English text even in Vietnamese mode.
        let counts = DueCounts {
            new_words: 0,
            due_words: 0,
        };
        let mut rng = StepRng::new(0, 1);
        for _ in 0..QUOTES.len() {
            let message = build_message(counts, true, &mut rng);
            assert!(message.body.contains('"'));
        }
    }
}
