use crate::core::confirm::{Confirmer, DeleteOutcome};
use crate::core::work::resolve_prefix;
use crate::errors::{AppError, AppResult};
use crate::models::{Identity, TodoEntry};
use crate::store::Store;
use crate::store::watch::Subscription;
use crate::ui::messages::error;
use chrono::{NaiveDate, NaiveTime};

/// Reminders of one signed-in user. The list is always held pending-first.
pub struct TodoManager<'a> {
    store: &'a Store,
    owner: String,
    subscription: Subscription<TodoEntry>,
    todos: Vec<TodoEntry>,
    notice: Option<String>,
}

impl<'a> TodoManager<'a> {
    pub fn open(store: &'a Store, identity: &Identity) -> Self {
        let mut manager = Self {
            store,
            owner: identity.uid.clone(),
            subscription: store.subscribe_todos(&identity.uid),
            todos: Vec::new(),
            notice: None,
        };
        manager.refresh();
        manager
    }

    pub fn refresh(&mut self) -> bool {
        match self.subscription.latest() {
            Some(Ok(todos)) => {
                self.todos = pending_first(todos);
                true
            }
            Some(Err(e)) => {
                let msg = "Failed to load todos. Please check permissions or indexes.";
                error(format!("{msg} ({e})"));
                let _ = self.store.log("subscription_error", "todos", &e.to_string());
                self.notice = Some(msg.to_string());
                false
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[TodoEntry] {
        &self.todos
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_live(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn create(&mut self, date: NaiveDate, time: NaiveTime, reason: &str) -> AppResult<TodoEntry> {
        if reason.trim().is_empty() {
            return Err(AppError::MissingField("reason"));
        }

        let entry = self.store.add_todo(&self.owner, date, time, reason)?;
        let _ = self.store.log(
            "todo_add",
            &format!("{} {}", entry.date_str(), entry.time_str()),
            &entry.id,
        );
        self.refresh();
        Ok(entry)
    }

    /// Date, time and reason only; status flags are left alone.
    pub fn update(
        &mut self,
        id: &str,
        date: NaiveDate,
        time: NaiveTime,
        reason: &str,
    ) -> AppResult<()> {
        if reason.trim().is_empty() {
            return Err(AppError::MissingField("reason"));
        }

        self.store.update_todo(&self.owner, id, date, time, reason)?;
        let _ = self.store.log(
            "todo_edit",
            &format!("{} {}", date.format("%Y-%m-%d"), time.format("%H:%M")),
            id,
        );
        self.refresh();
        Ok(())
    }

    /// Flip `completed` from the value currently shown. Returns the new value.
    pub fn toggle(&mut self, id: &str) -> AppResult<bool> {
        let current = self
            .get(id)
            .map(|t| t.completed)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        self.store.set_todo_completed(&self.owner, id, !current)?;
        let _ = self.store.log(
            "todo_toggle",
            id,
            if current { "Marked pending" } else { "Marked completed" },
        );
        self.refresh();
        Ok(!current)
    }

    pub fn delete(&mut self, id: &str, confirmer: &mut dyn Confirmer) -> AppResult<DeleteOutcome> {
        if !confirmer.confirm("Delete Todo", "Are you sure you want to delete this todo?") {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.store.delete_todo(&self.owner, id)?;
        let _ = self.store.log("todo_del", id, "Todo deleted");
        self.refresh();
        Ok(DeleteOutcome::Deleted)
    }

    pub fn get(&self, id: &str) -> Option<&TodoEntry> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn resolve_id(&self, needle: &str) -> AppResult<String> {
        resolve_prefix(self.todos.iter().map(|t| t.id.as_str()), needle)
    }

    pub fn pending_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn close(self) {
        self.subscription.cancel();
    }
}

/// Pending before completed; the incoming (date, time) order is kept
/// inside each group.
pub fn pending_first(todos: Vec<TodoEntry>) -> Vec<TodoEntry> {
    let (mut pending, completed): (Vec<_>, Vec<_>) = todos.into_iter().partition(|t| !t.completed);
    pending.extend(completed);
    pending
}
