//! One-shot bulk load of a historical work log into the store.
//!
//! Records go straight to `Store::add_work`: there is no duplicate-date
//! check and no transaction, so a partial run leaves what it managed to
//! write.

mod records;

pub use records::HISTORY;

use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::error;
use crate::utils::date::parse_date;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub uploaded: usize,
    pub failed: usize,
}

/// Insert every `(date, description)` pair for `owner`. A record that
/// cannot be parsed or written is reported and skipped.
pub fn run_import(store: &Store, owner: &str, records: &[(&str, &str)]) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for (date, description) in records {
        match import_one(store, owner, date, description) {
            Ok(()) => {
                println!("Uploaded record for: {date}");
                summary.uploaded += 1;
            }
            Err(e) => {
                error(format!("Error adding record for {date}: {e}"));
                let _ = store.log("import_failed", date, &e.to_string());
                summary.failed += 1;
            }
        }
    }

    let _ = store.log(
        "import",
        owner,
        &format!("{} uploaded, {} failed", summary.uploaded, summary.failed),
    );

    summary
}

fn import_one(store: &Store, owner: &str, date: &str, description: &str) -> AppResult<()> {
    let date = parse_date(date)?;
    store.add_work(owner, date, description)?;
    Ok(())
}
