//! Learnable items: vocabulary words and sentences.
//!
//! Both variants share the same [`ReviewState`] scheduling machinery and
//! differ only in payload fields. The review state is serde-flattened so the
//! stored JSON stays flat and camelCase, matching the historical `db.json`
//! layout (including the `ipaUK`/`meaningVI` style keys).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::leveling::{HistoryAction, ReviewState};

/// A vocabulary word.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: u64,
    pub word: String,
    #[serde(rename = "ipaUK", default)]
    pub ipa_uk: Option<String>,
    #[serde(rename = "ipaUS", default)]
    pub ipa_us: Option<String>,
    #[serde(rename = "meaningEN", default)]
    pub meaning_en: Option<String>,
    /// Historical exports sometimes carry `null` here; it loads as empty
    /// rather than failing the whole batch.
    #[serde(rename = "meaningVI", default, deserialize_with = "null_to_empty")]
    pub meaning_vi: String,
    #[serde(default)]
    pub example: Option<String>,
    /// Defaulted on import when the incoming record omits it.
    #[serde(default)]
    pub date_added: NaiveDate,
    #[serde(flatten)]
    pub review: ReviewState,
}

fn null_to_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

fn default_category() -> String {
    "Custom".to_string()
}

impl Word {
    /// Advance one repetition stage.
    pub fn learn(&mut self, today: NaiveDate) {
        self.review.learn(today, None);
    }

    /// Manual demotion to level 0.
    pub fn reset(&mut self, today: NaiveDate) {
        self.review.reset(today, None);
    }
}

/// Fields accepted when creating a word. `word` and `meaning_vi` are
/// required; everything else is optional payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWord {
    pub word: String,
    #[serde(rename = "ipaUK", default)]
    pub ipa_uk: Option<String>,
    #[serde(rename = "ipaUS", default)]
    pub ipa_us: Option<String>,
    #[serde(rename = "meaningEN", default)]
    pub meaning_en: Option<String>,
    #[serde(rename = "meaningVI")]
    pub meaning_vi: String,
    #[serde(default)]
    pub example: Option<String>,
}

impl NewWord {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.word.trim().is_empty() {
            return Err(ValidationError::MissingField("word").into());
        }
        if self.meaning_vi.trim().is_empty() {
            return Err(ValidationError::MissingField("meaningVI").into());
        }
        Ok(())
    }

    pub(crate) fn into_word(self, id: u64, today: NaiveDate) -> Word {
        Word {
            id,
            word: self.word,
            ipa_uk: self.ipa_uk,
            ipa_us: self.ipa_us,
            meaning_en: self.meaning_en,
            meaning_vi: self.meaning_vi,
            example: self.example,
            date_added: today,
            review: ReviewState::default(),
        }
    }
}

/// A practice sentence. History entries carry an explicit action tag, which
/// word histories never did.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    /// Reassigned on import, so payload-only records may omit it.
    #[serde(default)]
    pub id: u64,
    pub en: String,
    pub vi: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub date_added: NaiveDate,
    #[serde(flatten)]
    pub review: ReviewState,
}

impl Sentence {
    /// Advance one repetition stage.
    pub fn learn(&mut self, today: NaiveDate) {
        self.review.learn(today, Some(HistoryAction::Learned));
    }

    /// Manual demotion to level 0.
    pub fn reset(&mut self, today: NaiveDate) {
        self.review.reset(today, Some(HistoryAction::Reset));
    }
}

/// Fields accepted when creating a sentence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSentence {
    pub en: String,
    pub vi: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewSentence {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.en.trim().is_empty() {
            return Err(ValidationError::MissingField("en").into());
        }
        if self.vi.trim().is_empty() {
            return Err(ValidationError::MissingField("vi").into());
        }
        Ok(())
    }

    pub(crate) fn into_sentence(self, id: u64, today: NaiveDate) -> Sentence {
        Sentence {
            id,
            en: self.en,
            vi: self.vi,
            category: self.category.unwrap_or_else(default_category),
            date_added: today,
            review: ReviewState::default(),
        }
    }
}
