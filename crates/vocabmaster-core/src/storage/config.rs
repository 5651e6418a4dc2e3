//! TOML-based application configuration.
//!
//! Stores:
//! - The daily study goal for the timer accountant
//! - Daily reminder preferences
//! - Backup retention and cadence
//!
//! Configuration is stored at `~/.config/vocabmaster/config.toml`. Every
//! field has a serde default, so a missing or partial file still loads.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StorageError};

use super::data_dir;

/// Study-timer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Daily study goal in minutes.
    #[serde(default = "default_daily_goal_minutes")]
    pub daily_goal_minutes: u32,
}

impl TimerConfig {
    /// The goal in the milliseconds the accountant works in.
    pub fn daily_goal_ms(&self) -> i64 {
        i64::from(self.daily_goal_minutes) * 60_000
    }
}

/// Daily reminder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Local time of day the shell should fire the reminder, "HH:MM".
    #[serde(default = "default_reminder_time")]
    pub time: String,
    #[serde(default = "default_true")]
    pub show_vietnamese: bool,
    /// Gates the reminder to once per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reminder_date: Option<NaiveDate>,
}

/// Backup retention configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Newest snapshots kept after rotation.
    #[serde(default = "default_keep_count")]
    pub keep_count: usize,
    /// Minimum days between automatic backups.
    #[serde(default = "default_interval_days")]
    pub interval_days: i64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/vocabmaster/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub reminder: ReminderConfig,
    #[serde(default)]
    pub backup: BackupConfig,
}

// Default functions
fn default_daily_goal_minutes() -> u32 {
    180
}
fn default_reminder_time() -> String {
    "09:00".into()
}
fn default_keep_count() -> usize {
    10
}
fn default_interval_days() -> i64 {
    7
}
fn default_true() -> bool {
    true
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            daily_goal_minutes: default_daily_goal_minutes(),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            time: default_reminder_time(),
            show_vietnamese: true,
            last_reminder_date: None,
        }
    }
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            keep_count: default_keep_count(),
            interval_days: default_interval_days(),
        }
    }
}

impl Config {
    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        let path = data_dir()?.join("config.toml");
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(StorageError::ConfigLoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into())
            }
        };
        toml::from_str(&text).map_err(|e| {
            StorageError::ConfigLoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        let path = data_dir()?.join("config.toml");
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let failed = |message: String| StorageError::ConfigSaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let text = toml::to_string_pretty(self).map_err(|e| failed(e.to_string()))?;
        fs::write(path, text).map_err(|e| failed(e.to_string()))?;
        Ok(())
    }

    /// Directory backup snapshots are written to.
    pub fn backup_dir() -> Result<PathBuf> {
        Ok(data_dir()?.join("backups"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_goal() {
        let config = Config::default();
        assert_eq!(config.timer.daily_goal_minutes, 180);
        assert_eq!(config.timer.daily_goal_ms(), 3 * 60 * 60 * 1000);
        assert!(config.reminder.enabled);
        assert_eq!(config.reminder.time, "09:00");
        assert_eq!(config.backup.keep_count, 10);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str(
            "[timer]\n\
             daily_goal_minutes = 90\n",
        )
        .unwrap();
        assert_eq!(config.timer.daily_goal_minutes, 90);
        assert!(config.reminder.enabled);
        assert_eq!(config.backup.interval_days, 7);
    }

    #[test]
    fn round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.timer.daily_goal_minutes = 240;
        config.reminder.last_reminder_date = Some("2024-05-01".parse().unwrap());
        config.save_to(&path).unwrap();

        let back = Config::load_from(&path).unwrap();
        assert_eq!(back.timer.daily_goal_minutes, 240);
        assert_eq!(
            back.reminder.last_reminder_date,
            Some("2024-05-01".parse().unwrap())
        );
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.timer.daily_goal_minutes, 180);
    }
}
