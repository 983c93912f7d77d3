use crate::core::calendar::DayView;
use crate::core::overview::Overview;
use crate::core::todo::TodoManager;
use crate::core::work::WorkManager;
use crate::models::Identity;
use crate::store::Store;
use chrono::NaiveDate;

/// The signed-in screen: both live lists of one user.
pub struct Dashboard<'a> {
    pub identity: Identity,
    pub works: WorkManager<'a>,
    pub todos: TodoManager<'a>,
}

impl<'a> Dashboard<'a> {
    pub fn open(store: &'a Store, identity: Identity) -> Self {
        let works = WorkManager::open(store, &identity);
        let todos = TodoManager::open(store, &identity);
        Self {
            identity,
            works,
            todos,
        }
    }

    /// Standing notices left by failed subscriptions, works first.
    pub fn notices(&self) -> impl Iterator<Item = &str> {
        [self.works.notice(), self.todos.notice()].into_iter().flatten()
    }

    pub fn day_view(&self, date: NaiveDate) -> DayView<'_> {
        DayView::project(date, self.works.entries(), self.todos.entries())
    }

    pub fn overview(&self, today: NaiveDate) -> Overview {
        Overview::compute(self.works.entries(), self.todos.entries(), today)
    }

    /// Release both subscriptions.
    pub fn close(self) {
        self.works.close();
        self.todos.close();
    }
}
