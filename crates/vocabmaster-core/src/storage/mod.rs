//! Persistence: the JSON database document and TOML configuration.

mod config;
pub mod database;

pub use config::{BackupConfig, Config, ReminderConfig, TimerConfig};
pub use database::{Database, DbData, ImportSummary};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/vocabmaster[-dev]/` based on VOCABMASTER_ENV.
///
/// Set VOCABMASTER_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("VOCABMASTER_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("vocabmaster-dev")
    } else {
        base_dir.join("vocabmaster")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
