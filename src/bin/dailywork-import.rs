//! Bulk-load the historical work log for one user.

use clap::Parser;
use dailywork::config::Config;
use dailywork::errors::AppResult;
use dailywork::import::{HISTORY, run_import};
use dailywork::store::Store;

#[derive(Parser)]
#[command(
    name = "dailywork-import",
    version = env!("CARGO_PKG_VERSION"),
    about = "Upload the historical work log for a user"
)]
struct Args {
    /// Owner identity (user id) the records are attached to
    owner: String,

    /// Override database path
    #[arg(long = "db")]
    db: Option<String>,
}

fn run(args: Args) -> AppResult<()> {
    let mut cfg = Config::load()?;
    if let Some(db) = args.db {
        cfg.database = db;
    }

    let store = Store::open(&cfg.database)?;
    let summary = run_import(&store, &args.owner, HISTORY);

    println!(
        "\nImport complete! Successfully uploaded {} records.",
        summary.uploaded
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
