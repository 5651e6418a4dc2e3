//! Backup snapshots of the database document.
//!
//! Timestamped JSON copies with a small metadata block, rotated so only the
//! newest few survive. Automatic backups run on a weekly cadence decided by
//! [`should_backup`]; the scheduling itself belongs to the shell.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::DbData;

pub const BACKUP_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupMetadata {
    pub created_at: DateTime<Utc>,
    pub word_count: usize,
    pub version: String,
}

/// Snapshot file layout: the document plus a metadata block.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackupFile {
    #[serde(flatten)]
    data: DbData,
    backup_metadata: BackupMetadata,
}

/// Only the metadata block, for reading timestamps out of existing snapshots.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataOnly {
    backup_metadata: BackupMetadata,
}

/// Write a snapshot of `data` into `dir` and rotate old snapshots.
///
/// Returns `None` when there are no words to back up.
pub fn create_backup(
    data: &DbData,
    dir: &Path,
    keep: usize,
    now: DateTime<Utc>,
) -> Result<Option<PathBuf>> {
    if data.words.is_empty() {
        return Ok(None);
    }
    fs::create_dir_all(dir)?;

    let file = BackupFile {
        data: data.clone(),
        backup_metadata: BackupMetadata {
            created_at: now,
            word_count: data.words.len(),
            version: BACKUP_VERSION.to_string(),
        },
    };

    let filename = format!("backup_{}.json", now.format("%Y-%m-%dT%H-%M-%S"));
    let path = dir.join(filename);
    fs::write(&path, serde_json::to_string_pretty(&file)?)?;

    clean_old_backups(dir, keep)?;
    Ok(Some(path))
}

/// Delete all but the newest `keep` snapshots. Returns how many were removed.
pub fn clean_old_backups(dir: &Path, keep: usize) -> Result<usize> {
    let mut entries = backup_entries(dir)?;
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let mut removed = 0;
    for (path, _) in entries.into_iter().skip(keep) {
        fs::remove_file(path)?;
        removed += 1;
    }
    Ok(removed)
}

/// Whether the newest snapshot is old enough to warrant another.
///
/// True when the directory is missing, empty, or its newest snapshot is at
/// least `interval_days` old.
pub fn should_backup(dir: &Path, interval_days: i64, now: DateTime<Utc>) -> bool {
    let entries = match backup_entries(dir) {
        Ok(entries) => entries,
        Err(_) => return true,
    };
    match entries.iter().map(|(_, created)| *created).max() {
        Some(latest) => (now - latest).num_days() >= interval_days,
        None => true,
    }
}

/// Snapshot paths with their metadata timestamps. Snapshots whose metadata
/// cannot be read sort as oldest so rotation removes them first.
fn backup_entries(dir: &Path) -> Result<Vec<(PathBuf, DateTime<Utc>)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if !name.starts_with("backup_") || !name.ends_with(".json") {
            continue;
        }
        let created_at = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str::<MetadataOnly>(&text).ok())
            .map(|meta| meta.backup_metadata.created_at)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        entries.push((path, created_at));
    }
    Ok(entries)
}
