use super::work_entry::short;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A dated and timed reminder, as stored in the `todos` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoEntry {
    pub id: String,
    pub owner_id: String,
    pub date: NaiveDate, // ⇔ todos.date (TEXT "YYYY-MM-DD")
    pub time: NaiveTime, // ⇔ todos.time (TEXT "HH:MM")
    pub reason: String,
    pub completed: bool,
    pub alerted: bool, // persisted, never read by any view
    pub created_at: String,
}

impl TodoEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn short_id(&self) -> &str {
        short(&self.id)
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}
