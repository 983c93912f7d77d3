use crate::models::{TodoEntry, WorkEntry};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Overview {
    pub this_month_works: usize,
    pub pending_todos: usize,
    pub total_works: usize,
    pub total_todos: usize,
}

impl Overview {
    pub fn compute(works: &[WorkEntry], todos: &[TodoEntry], today: NaiveDate) -> Self {
        Self {
            this_month_works: works
                .iter()
                .filter(|w| w.date.year() == today.year() && w.date.month() == today.month())
                .count(),
            pending_todos: todos.iter().filter(|t| !t.completed).count(),
            total_works: works.len(),
            total_todos: todos.len(),
        }
    }
}
