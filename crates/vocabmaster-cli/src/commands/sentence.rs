use std::path::PathBuf;

use clap::Subcommand;
use vocabmaster_core::{Clock, Database, NewSentence, Sentence, SystemClock};

#[derive(Subcommand)]
pub enum SentenceAction {
    /// Add a new sentence
    Add {
        /// English text
        en: String,
        /// Vietnamese translation
        vi: String,
        /// Category label (defaults to "Custom")
        #[arg(long)]
        category: Option<String>,
    },
    /// List all sentences (sweeps due items first)
    List,
    /// Show a single sentence
    Show { id: u64 },
    /// Mark a sentence as learned, advancing one level
    Learned { id: u64 },
    /// Reset a sentence to level 0
    Reset { id: u64 },
    /// Delete a sentence
    Remove { id: u64 },
    /// Import sentences from a JSON file, deduplicated on the English text
    Import { path: PathBuf },
}

pub fn run(action: SentenceAction) -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    let today = clock.today();
    let mut db = Database::open()?;

    match action {
        SentenceAction::Add { en, vi, category } => {
            let added = db.add_sentence(NewSentence { en, vi, category }, today)?;
            let json = serde_json::to_string_pretty(added)?;
            db.save()?;
            println!("{json}");
        }
        SentenceAction::List => {
            if db.sweep_due(today) {
                db.save()?;
            }
            println!("{}", serde_json::to_string_pretty(&db.data.sentences)?);
        }
        SentenceAction::Show { id } => {
            if db.sweep_due(today) {
                db.save()?;
            }
            println!("{}", serde_json::to_string_pretty(db.sentence(id)?)?);
        }
        SentenceAction::Learned { id } => {
            let sentence = db.sentence_mut(id)?;
            sentence.learn(today);
            let json = serde_json::to_string_pretty(&*sentence)?;
            db.save()?;
            println!("{json}");
        }
        SentenceAction::Reset { id } => {
            let sentence = db.sentence_mut(id)?;
            sentence.reset(today);
            let json = serde_json::to_string_pretty(&*sentence)?;
            db.save()?;
            println!("{json}");
        }
        SentenceAction::Remove { id } => {
            let removed = db.remove_sentence(id)?;
            db.save()?;
            println!("{}", serde_json::to_string_pretty(&removed)?);
        }
        SentenceAction::Import { path } => {
            let text = std::fs::read_to_string(path)?;
            let incoming: Vec<Sentence> = serde_json::from_str(&text)?;
            let summary = db.import_sentences(incoming, today);
            db.save()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
