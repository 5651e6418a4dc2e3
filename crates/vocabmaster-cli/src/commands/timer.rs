use clap::Subcommand;
use vocabmaster_core::{Clock, Config, Database, SystemClock};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the study timer (no-op when already running)
    Start,
    /// Stop the timer and bank the elapsed interval
    Stop,
    /// Print timer status as JSON without flushing the running interval
    Status,
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    let config = Config::load()?;
    let goal_ms = config.timer.daily_goal_ms();
    let mut db = Database::open()?;
    let timer = db.timer_mut(clock.today());

    let changed = match action {
        TimerAction::Start => timer.start(&clock, goal_ms),
        TimerAction::Stop => timer.stop(&clock, goal_ms),
        TimerAction::Status => false,
    };
    let (status, rolled) = timer.status(&clock, goal_ms);
    let json = serde_json::to_string_pretty(&status)?;

    if changed || rolled {
        db.save()?;
    }
    println!("{json}");
    Ok(())
}
