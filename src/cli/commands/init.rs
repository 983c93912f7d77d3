use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::store::migrate::applied_versions;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing dailywork…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db);

    let store = Store::open(&db)?;
    let versions = applied_versions(store.conn())?;

    success(format!(
        "Database initialized at {} ({} migrations applied)",
        db,
        versions.len()
    ));

    if let Err(e) = store.log("init", "Database initialized", &format!("Database initialized at {db}")) {
        warning(format!("Failed to write internal log: {e}"));
    }

    println!("🎉 dailywork initialization completed!");
    Ok(())
}
