use crate::core::confirm::{Confirmer, DeleteOutcome};
use crate::core::range::{DateRange, filter_by_range};
use crate::errors::{AppError, AppResult};
use crate::models::{Identity, WorkEntry};
use crate::store::Store;
use crate::store::watch::Subscription;
use crate::ui::messages::error;
use crate::utils::date::display_date;
use chrono::NaiveDate;

/// Work log of one signed-in user, kept current by a live subscription.
pub struct WorkManager<'a> {
    store: &'a Store,
    owner: String,
    subscription: Subscription<WorkEntry>,
    works: Vec<WorkEntry>,
    notice: Option<String>,
}

impl<'a> WorkManager<'a> {
    /// Subscribe to the owner's works and take the initial snapshot.
    pub fn open(store: &'a Store, identity: &Identity) -> Self {
        let mut manager = Self {
            store,
            owner: identity.uid.clone(),
            subscription: store.subscribe_works(&identity.uid),
            works: Vec::new(),
            notice: None,
        };
        manager.refresh();
        manager
    }

    /// Apply the most recent snapshot, if one arrived. A failed
    /// subscription keeps the last good list and leaves a standing notice.
    pub fn refresh(&mut self) -> bool {
        match self.subscription.latest() {
            Some(Ok(works)) => {
                self.works = works;
                true
            }
            Some(Err(e)) => {
                let msg = "Failed to load works. Please check permissions or indexes.";
                error(format!("{msg} ({e})"));
                let _ = self.store.log("subscription_error", "works", &e.to_string());
                self.notice = Some(msg.to_string());
                false
            }
            None => false,
        }
    }

    /// Descending by date.
    pub fn entries(&self) -> &[WorkEntry] {
        &self.works
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_live(&self) -> bool {
        self.subscription.is_active()
    }

    /// At most one entry per date: checked against the in-memory list
    /// before anything is written.
    pub fn create(&mut self, date: NaiveDate, description: &str) -> AppResult<WorkEntry> {
        if description.trim().is_empty() {
            return Err(AppError::MissingField("description"));
        }
        if self.works.iter().any(|w| w.date == date) {
            return Err(AppError::DuplicateDate(display_date(date)));
        }

        let entry = self.store.add_work(&self.owner, date, description)?;
        let _ = self.store.log("work_add", &entry.date_str(), &entry.id);
        self.refresh();
        Ok(entry)
    }

    /// Overwrites date and description. The one-per-date rule is not
    /// re-checked here; see `date_taken_by_other`.
    pub fn update(&mut self, id: &str, date: NaiveDate, description: &str) -> AppResult<()> {
        if description.trim().is_empty() {
            return Err(AppError::MissingField("description"));
        }

        self.store.update_work(&self.owner, id, date, description)?;
        let _ = self
            .store
            .log("work_edit", &date.format("%Y-%m-%d").to_string(), id);
        self.refresh();
        Ok(())
    }

    /// Whether an entry other than `id` already sits on `date`.
    pub fn date_taken_by_other(&self, id: &str, date: NaiveDate) -> bool {
        self.works.iter().any(|w| w.date == date && w.id != id)
    }

    pub fn delete(&mut self, id: &str, confirmer: &mut dyn Confirmer) -> AppResult<DeleteOutcome> {
        if !confirmer.confirm(
            "Delete Work",
            "Are you sure you want to delete this work entry?",
        ) {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.store.delete_work(&self.owner, id)?;
        let _ = self.store.log("work_del", id, "Work entry deleted");
        self.refresh();
        Ok(DeleteOutcome::Deleted)
    }

    pub fn get(&self, id: &str) -> Option<&WorkEntry> {
        self.works.iter().find(|w| w.id == id)
    }

    /// Exact id, or a unique prefix of at least 4 characters.
    pub fn resolve_id(&self, needle: &str) -> AppResult<String> {
        resolve_prefix(self.works.iter().map(|w| w.id.as_str()), needle)
    }

    pub fn filter(&self, range: &DateRange) -> Vec<&WorkEntry> {
        filter_by_range(&self.works, range)
    }

    /// Explicit teardown of the live query.
    pub fn close(self) {
        self.subscription.cancel();
    }
}

pub(crate) fn resolve_prefix<'i>(
    ids: impl Iterator<Item = &'i str>,
    needle: &str,
) -> AppResult<String> {
    let needle = needle.trim();
    let mut found: Option<&str> = None;

    for id in ids {
        if id == needle {
            return Ok(id.to_string());
        }
        if needle.len() >= 4 && id.starts_with(needle) {
            if found.is_some() {
                return Err(AppError::AmbiguousId(needle.to_string()));
            }
            found = Some(id);
        }
    }

    found
        .map(str::to_string)
        .ok_or_else(|| AppError::NotFound(needle.to_string()))
}
