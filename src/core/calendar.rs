use crate::models::{TodoEntry, WorkEntry};
use crate::utils::date::{calendar_title, tasks_heading};
use chrono::NaiveDate;

/// What happened and what is planned on a single day.
#[derive(Debug)]
pub struct DayView<'a> {
    pub date: NaiveDate,
    pub works: Vec<&'a WorkEntry>,
    pub todos: Vec<&'a TodoEntry>,
}

impl<'a> DayView<'a> {
    /// Exact date match on both lists; input order is kept, so todos stay
    /// pending-first.
    pub fn project(date: NaiveDate, works: &'a [WorkEntry], todos: &'a [TodoEntry]) -> Self {
        Self {
            date,
            works: works.iter().filter(|w| w.date == date).collect(),
            todos: todos.iter().filter(|t| t.date == date).collect(),
        }
    }

    pub fn title(&self) -> String {
        calendar_title(self.date)
    }

    pub fn heading(&self) -> String {
        tasks_heading(self.date)
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty() && self.todos.is_empty()
    }
}
