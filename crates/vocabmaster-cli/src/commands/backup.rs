use clap::Subcommand;
use serde_json::json;
use vocabmaster_core::{backup, Clock, Config, Database, SystemClock};

#[derive(Subcommand)]
pub enum BackupAction {
    /// Create a backup snapshot now and rotate old ones
    Run,
    /// Report whether the backup cadence calls for a new snapshot
    Check,
}

pub fn run(action: BackupAction) -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    let config = Config::load()?;
    let dir = Config::backup_dir()?;

    match action {
        BackupAction::Run => {
            let db = Database::open()?;
            let result =
                backup::create_backup(&db.data, &dir, config.backup.keep_count, clock.now())?;
            let output = match result {
                Some(path) => json!({ "created": path }),
                None => json!({ "created": null, "message": "no words to back up" }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        BackupAction::Check => {
            let due = backup::should_backup(&dir, config.backup.interval_days, clock.now());
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({ "backupDue": due }))?
            );
        }
    }

    Ok(())
}
