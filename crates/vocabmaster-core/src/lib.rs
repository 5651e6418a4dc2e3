//! # VocabMaster Core Library
//!
//! Core business logic for VocabMaster, a spaced-repetition vocabulary and
//! sentence tracker with a daily study-time accountant. All operations are
//! available via the standalone CLI binary; any desktop shell is a thin
//! layer over this same library.
//!
//! ## Architecture
//!
//! - **Leveling Engine**: a pure per-item state machine over a fixed interval
//!   ladder; items climb on `learn`, drop on `reset`, and are demoted (with
//!   resumability) by the due sweep
//! - **Study-Timer Accountant**: wall-clock-delta time accounting with
//!   day-boundary settlement and cross-day surplus/debt carry-over
//! - **Storage**: whole-document JSON persistence and TOML configuration
//! - **Collaborator contracts**: backup rotation, reminder content, and
//!   statistics consumed by the surrounding shell
//!
//! All mutating entry points take an injected [`Clock`] so a single "now"
//! drives each logical operation; there are no internal threads and no
//! ad-hoc wall-clock reads.
//!
//! ## Key Components
//!
//! - [`ReviewState`]: leveling state machine
//! - [`sweep_due`]: due-item sweep
//! - [`StudyTimer`]: study-time accountant
//! - [`Database`]: JSON document persistence
//! - [`Config`]: application configuration

pub mod backup;
pub mod clock;
pub mod error;
pub mod item;
pub mod leveling;
pub mod reminder;
pub mod stats;
pub mod storage;
pub mod sweep;
pub mod timer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, ItemKind, Result, StorageError, ValidationError};
pub use item::{NewSentence, NewWord, Sentence, Word};
pub use leveling::{HistoryAction, HistoryEntry, ReviewState, INTERVALS, MAX_LEVEL};
pub use reminder::{DueCounts, ReminderMessage};
pub use stats::Stats;
pub use storage::{Config, Database, ImportSummary};
pub use sweep::sweep_due;
pub use timer::{DayRecord, StudyTimer, TimerStatus};
