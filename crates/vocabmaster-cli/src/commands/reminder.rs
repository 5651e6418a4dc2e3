use clap::Subcommand;
use serde_json::json;
use vocabmaster_core::{reminder, Clock, Config, Database, DueCounts, SystemClock};

#[derive(Subcommand)]
pub enum ReminderAction {
    /// Print new/due counts as JSON
    Counts,
    /// Build today's reminder message and mark it shown
    Show,
    /// Build a reminder message without the once-per-day gate
    Test,
}

pub fn run(action: ReminderAction) -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    let today = clock.today();
    let db = Database::open()?;
    // No sweep here: the reminder reports due items, and sweeping first
    // would demote them all to level 0 before they are counted.
    let counts = DueCounts::scan(&db.data.words, today);

    match action {
        ReminderAction::Counts => {
            println!("{}", serde_json::to_string_pretty(&counts)?);
        }
        ReminderAction::Show => {
            let mut config = Config::load()?;
            if !reminder::should_show(&config.reminder, today) {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "shown": false,
                        "reason": "disabled or already shown today"
                    }))?
                );
                return Ok(());
            }
            let message = reminder::build_message(
                counts,
                config.reminder.show_vietnamese,
                &mut rand::thread_rng(),
            );
            config.reminder.last_reminder_date = Some(today);
            config.save()?;
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
        ReminderAction::Test => {
            let config = Config::load()?;
            let message = reminder::build_message(
                counts,
                config.reminder.show_vietnamese,
                &mut rand::thread_rng(),
            );
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
    }

    Ok(())
}
