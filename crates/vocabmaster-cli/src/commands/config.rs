use clap::Subcommand;
use vocabmaster_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Set a configuration value by dotted key
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "timer.daily_goal_minutes" => config.timer.daily_goal_minutes = value.parse()?,
                "reminder.enabled" => config.reminder.enabled = value.parse()?,
                "reminder.time" => config.reminder.time = value,
                "reminder.show_vietnamese" => config.reminder.show_vietnamese = value.parse()?,
                "backup.keep_count" => config.backup.keep_count = value.parse()?,
                "backup.interval_days" => config.backup.interval_days = value.parse()?,
                _ => return Err(format!("unknown configuration key: {key}").into()),
            }
            config.save()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
