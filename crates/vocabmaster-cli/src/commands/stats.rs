use vocabmaster_core::{Clock, Database, Stats, SystemClock};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    let today = clock.today();
    let mut db = Database::open()?;

    // Stats count post-sweep levels, so due items show up as level 0.
    if db.sweep_due(today) {
        db.save()?;
    }

    let stats = Stats::collect(&db.data.words, today);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
