use std::path::PathBuf;

use clap::Subcommand;
use vocabmaster_core::{Clock, Database, NewWord, SystemClock, Word};

#[derive(Subcommand)]
pub enum WordAction {
    /// Add a new word
    Add {
        word: String,
        /// Vietnamese meaning (required)
        #[arg(long)]
        meaning_vi: String,
        /// UK IPA transcription
        #[arg(long)]
        ipa_uk: Option<String>,
        /// US IPA transcription
        #[arg(long)]
        ipa_us: Option<String>,
        /// English meaning
        #[arg(long)]
        meaning_en: Option<String>,
        /// Example sentence
        #[arg(long)]
        example: Option<String>,
    },
    /// Replace a word's fields, keeping its scheduling state
    Update {
        id: u64,
        word: String,
        /// Vietnamese meaning (required)
        #[arg(long)]
        meaning_vi: String,
        /// UK IPA transcription
        #[arg(long)]
        ipa_uk: Option<String>,
        /// US IPA transcription
        #[arg(long)]
        ipa_us: Option<String>,
        /// English meaning
        #[arg(long)]
        meaning_en: Option<String>,
        /// Example sentence
        #[arg(long)]
        example: Option<String>,
    },
    /// List all words (sweeps due items first)
    List,
    /// Show a single word
    Show { id: u64 },
    /// Mark a word as learned, advancing one level
    Learn { id: u64 },
    /// Reset a word to level 0, discarding resumability
    Reset { id: u64 },
    /// Delete a word
    Remove { id: u64 },
    /// Print all words as JSON
    Export,
    /// Import words from a JSON export, deduplicated case-insensitively
    Import { path: PathBuf },
}

pub fn run(action: WordAction) -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    let today = clock.today();
    let mut db = Database::open()?;

    match action {
        WordAction::Add {
            word,
            meaning_vi,
            ipa_uk,
            ipa_us,
            meaning_en,
            example,
        } => {
            let added = db.add_word(
                NewWord {
                    word,
                    ipa_uk,
                    ipa_us,
                    meaning_en,
                    meaning_vi,
                    example,
                },
                today,
            )?;
            let json = serde_json::to_string_pretty(added)?;
            db.save()?;
            println!("{json}");
        }
        WordAction::Update {
            id,
            word,
            meaning_vi,
            ipa_uk,
            ipa_us,
            meaning_en,
            example,
        } => {
            let updated = db.update_word(
                id,
                NewWord {
                    word,
                    ipa_uk,
                    ipa_us,
                    meaning_en,
                    meaning_vi,
                    example,
                },
            )?;
            let json = serde_json::to_string_pretty(updated)?;
            db.save()?;
            println!("{json}");
        }
        WordAction::List => {
            if db.sweep_due(today) {
                db.save()?;
            }
            println!("{}", serde_json::to_string_pretty(&db.data.words)?);
        }
        WordAction::Show { id } => {
            if db.sweep_due(today) {
                db.save()?;
            }
            println!("{}", serde_json::to_string_pretty(db.word(id)?)?);
        }
        WordAction::Learn { id } => {
            let word = db.word_mut(id)?;
            word.learn(today);
            let json = serde_json::to_string_pretty(&*word)?;
            db.save()?;
            println!("{json}");
        }
        WordAction::Reset { id } => {
            let word = db.word_mut(id)?;
            word.reset(today);
            let json = serde_json::to_string_pretty(&*word)?;
            db.save()?;
            println!("{json}");
        }
        WordAction::Remove { id } => {
            let removed = db.remove_word(id)?;
            db.save()?;
            println!("{}", serde_json::to_string_pretty(&removed)?);
        }
        WordAction::Export => {
            println!("{}", serde_json::to_string_pretty(&db.data.words)?);
        }
        WordAction::Import { path } => {
            let text = std::fs::read_to_string(path)?;
            let incoming: Vec<Word> = serde_json::from_str(&text)?;
            let summary = db.import_words(incoming, today);
            db.save()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
