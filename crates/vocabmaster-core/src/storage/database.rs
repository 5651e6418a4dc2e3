//! Whole-document JSON storage.
//!
//! The entire data set -- words, sentences, id sequences and the study timer
//! -- lives in one `db.json` document that is read and written as a whole on
//! every mutation. No partial-field update persists independently.
//!
//! A failed save never discards the in-memory result; the caller decides
//! whether to retry or surface the error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, ItemKind, Result, StorageError};
use crate::item::{NewSentence, NewWord, Sentence, Word};
use crate::sweep;
use crate::timer::StudyTimer;

use super::data_dir;

/// The persisted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbData {
    pub words: Vec<Word>,
    pub sentences: Vec<Sentence>,
    pub next_id: u64,
    pub next_sentence_id: u64,
    /// Absent until the timer is first used. Malformed persisted state
    /// normalizes to `None` (and then to defaults) instead of failing the
    /// whole load; timer state is advisory and reconstructible.
    #[serde(
        default,
        deserialize_with = "timer_or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub study_timer: Option<StudyTimer>,
}

impl Default for DbData {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            sentences: Vec::new(),
            next_id: 1,
            next_sentence_id: 1,
            study_timer: None,
        }
    }
}

fn timer_or_default<'de, D>(de: D) -> Result<Option<StudyTimer>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(serde_json::from_value(value).unwrap_or(None))
}

/// Result of a bulk word import.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// JSON database for the whole data set.
pub struct Database {
    path: PathBuf,
    pub data: DbData,
}

impl Database {
    /// Open the database at `~/.config/vocabmaster/db.json`.
    ///
    /// A missing file yields the default empty document.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("db.json");
        Self::open_at(path)
    }

    /// Open the database at an explicit path (tests use a temp dir).
    pub fn open_at(path: PathBuf) -> Result<Self> {
        let data = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| StorageError::LoadFailed {
                path: path.clone(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => DbData::default(),
            Err(e) => {
                return Err(StorageError::LoadFailed {
                    path,
                    message: e.to_string(),
                }
                .into())
            }
        };
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole document. Goes through a temp file and rename so a
    /// failed write cannot truncate the existing database.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp = self.path.with_extension("json.tmp");
        let save_failed = |e: io::Error| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        };
        fs::write(&tmp, json).map_err(save_failed)?;
        fs::rename(&tmp, &self.path).map_err(save_failed)?;
        Ok(())
    }

    // ── Words ────────────────────────────────────────────────────────

    /// Create a word at the next id. Newest words go to the front of the
    /// list, matching how the collection has always been ordered.
    pub fn add_word(&mut self, new: NewWord, today: NaiveDate) -> Result<&Word> {
        new.validate()?;
        let id = self.data.next_id;
        self.data.next_id += 1;
        self.data.words.insert(0, new.into_word(id, today));
        Ok(&self.data.words[0])
    }

    pub fn word(&self, id: u64) -> Result<&Word> {
        self.data
            .words
            .iter()
            .find(|w| w.id == id)
            .ok_or(CoreError::NotFound {
                kind: ItemKind::Word,
                id,
            })
    }

    pub fn word_mut(&mut self, id: u64) -> Result<&mut Word> {
        self.data
            .words
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(CoreError::NotFound {
                kind: ItemKind::Word,
                id,
            })
    }

    /// Replace a word's payload fields. The id, the date added and all
    /// scheduling state stay as they were.
    pub fn update_word(&mut self, id: u64, new: NewWord) -> Result<&Word> {
        new.validate()?;
        let word = self.word_mut(id)?;
        word.word = new.word;
        word.ipa_uk = new.ipa_uk;
        word.ipa_us = new.ipa_us;
        word.meaning_en = new.meaning_en;
        word.meaning_vi = new.meaning_vi;
        word.example = new.example;
        Ok(word)
    }

    pub fn remove_word(&mut self, id: u64) -> Result<Word> {
        let index = self
            .data
            .words
            .iter()
            .position(|w| w.id == id)
            .ok_or(CoreError::NotFound {
                kind: ItemKind::Word,
                id,
            })?;
        Ok(self.data.words.remove(index))
    }

    /// Bulk-insert words, skipping any whose text already exists
    /// (case-insensitive). Incoming scheduling state is preserved; ids are
    /// reassigned from the document's sequence.
    pub fn import_words(&mut self, incoming: Vec<Word>, today: NaiveDate) -> ImportSummary {
        let mut existing: std::collections::HashSet<String> = self
            .data
            .words
            .iter()
            .map(|w| w.word.to_lowercase())
            .collect();

        let mut imported = 0;
        let mut skipped = 0;
        for mut word in incoming {
            let key = word.word.to_lowercase();
            if existing.contains(&key) {
                skipped += 1;
                continue;
            }
            word.id = self.data.next_id;
            self.data.next_id += 1;
            if word.date_added == NaiveDate::default() {
                word.date_added = today;
            }
            existing.insert(key);
            self.data.words.push(word);
            imported += 1;
        }

        ImportSummary { imported, skipped }
    }

    // ── Sentences ────────────────────────────────────────────────────

    pub fn add_sentence(&mut self, new: NewSentence, today: NaiveDate) -> Result<&Sentence> {
        new.validate()?;
        let id = self.data.next_sentence_id;
        self.data.next_sentence_id += 1;
        self.data.sentences.push(new.into_sentence(id, today));
        Ok(self.data.sentences.last().unwrap())
    }

    pub fn sentence(&self, id: u64) -> Result<&Sentence> {
        self.data
            .sentences
            .iter()
            .find(|s| s.id == id)
            .ok_or(CoreError::NotFound {
                kind: ItemKind::Sentence,
                id,
            })
    }

    pub fn sentence_mut(&mut self, id: u64) -> Result<&mut Sentence> {
        self.data
            .sentences
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(CoreError::NotFound {
                kind: ItemKind::Sentence,
                id,
            })
    }

    pub fn remove_sentence(&mut self, id: u64) -> Result<Sentence> {
        let index = self
            .data
            .sentences
            .iter()
            .position(|s| s.id == id)
            .ok_or(CoreError::NotFound {
                kind: ItemKind::Sentence,
                id,
            })?;
        Ok(self.data.sentences.remove(index))
    }

    /// Bulk-insert sentences, skipping any whose English text already
    /// exists (case-insensitive). Ids are reassigned from the document's
    /// sequence; payload-only records get today as their date added.
    pub fn import_sentences(&mut self, incoming: Vec<Sentence>, today: NaiveDate) -> ImportSummary {
        let mut existing: std::collections::HashSet<String> = self
            .data
            .sentences
            .iter()
            .map(|s| s.en.to_lowercase())
            .collect();

        let mut imported = 0;
        let mut skipped = 0;
        for mut sentence in incoming {
            let key = sentence.en.to_lowercase();
            if existing.contains(&key) {
                skipped += 1;
                continue;
            }
            sentence.id = self.data.next_sentence_id;
            self.data.next_sentence_id += 1;
            if sentence.date_added == NaiveDate::default() {
                sentence.date_added = today;
            }
            existing.insert(key);
            self.data.sentences.push(sentence);
            imported += 1;
        }

        ImportSummary { imported, skipped }
    }

    // ── Cross-collection operations ──────────────────────────────────

    /// Sweep due words and sentences. Returns whether anything changed,
    /// so read paths can skip the save.
    pub fn sweep_due(&mut self, today: NaiveDate) -> bool {
        let words = sweep::sweep_due(self.data.words.iter_mut().map(|w| &mut w.review), today);
        let sentences = sweep::sweep_due(
            self.data.sentences.iter_mut().map(|s| &mut s.review),
            today,
        );
        words || sentences
    }

    /// The study timer, created lazily on first use so it starts accounting
    /// against the caller's current date.
    pub fn timer_mut(&mut self, today: NaiveDate) -> &mut StudyTimer {
        self.data
            .study_timer
            .get_or_insert_with(|| StudyTimer::new(today))
    }
}
