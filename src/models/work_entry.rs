use chrono::NaiveDate;
use serde::Serialize;

/// One dated work-log record, as stored in the `works` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkEntry {
    pub id: String,          // ⇔ works.id (assigned by the store)
    pub owner_id: String,    // ⇔ works.user_id
    pub date: NaiveDate,     // ⇔ works.date (TEXT "YYYY-MM-DD")
    pub description: String, // ⇔ works.description
    pub created_at: String,  // ⇔ works.created_at (TEXT, RFC 3339, set by the store)
}

impl WorkEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// First characters of the id, enough to address it from the CLI.
    pub fn short_id(&self) -> &str {
        short(&self.id)
    }
}

pub(crate) fn short(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}
