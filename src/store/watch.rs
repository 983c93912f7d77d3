//! Live queries: observers registered on a collection receive a full
//! replacement snapshot after every change to it.

use crate::errors::AppResult;
use crate::models::{TodoEntry, WorkEntry};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Weak;
use std::sync::mpsc::{Receiver, Sender};

pub(crate) type Feed<T> = Sender<AppResult<Vec<T>>>;

pub(crate) enum Watcher {
    Works { owner: String, feed: Feed<WorkEntry> },
    Todos { owner: String, feed: Feed<TodoEntry> },
}

impl Watcher {
    pub(crate) fn owner(&self) -> &str {
        match self {
            Watcher::Works { owner, .. } | Watcher::Todos { owner, .. } => owner,
        }
    }
}

#[derive(Default)]
pub(crate) struct WatchRegistry {
    next_id: u64,
    watchers: BTreeMap<u64, Watcher>,
}

impl WatchRegistry {
    pub(crate) fn register(&mut self, watcher: Watcher) -> u64 {
        self.next_id += 1;
        self.watchers.insert(self.next_id, watcher);
        self.next_id
    }

    pub(crate) fn remove(&mut self, id: u64) {
        self.watchers.remove(&id);
    }

    pub(crate) fn contains(&self, id: u64) -> bool {
        self.watchers.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.watchers.len()
    }

    /// Distinct owners with at least one live observer, per collection.
    pub(crate) fn owners(&self) -> (Vec<String>, Vec<String>) {
        let mut works = Vec::new();
        let mut todos = Vec::new();
        for w in self.watchers.values() {
            let bucket = match w {
                Watcher::Works { .. } => &mut works,
                Watcher::Todos { .. } => &mut todos,
            };
            if !bucket.iter().any(|o: &String| o == w.owner()) {
                bucket.push(w.owner().to_string());
            }
        }
        (works, todos)
    }

    pub(crate) fn deliver_works(&mut self, owner: &str, snapshot: &AppResult<Vec<WorkEntry>>) {
        self.deliver(owner, snapshot, |w| match w {
            Watcher::Works { feed, .. } => Some(feed),
            _ => None,
        });
    }

    pub(crate) fn deliver_todos(&mut self, owner: &str, snapshot: &AppResult<Vec<TodoEntry>>) {
        self.deliver(owner, snapshot, |w| match w {
            Watcher::Todos { feed, .. } => Some(feed),
            _ => None,
        });
    }

    /// Push one snapshot to every matching observer. A failed query is
    /// delivered once and ends the observer; so does a receiver that went
    /// away without cancelling.
    fn deliver<T: Clone>(
        &mut self,
        owner: &str,
        snapshot: &AppResult<Vec<T>>,
        pick: impl Fn(&Watcher) -> Option<&Feed<T>>,
    ) {
        let mut ended = Vec::new();

        for (id, w) in &self.watchers {
            if w.owner() != owner {
                continue;
            }
            let Some(feed) = pick(w) else {
                continue;
            };

            let sent = match snapshot {
                Ok(items) => feed.send(Ok(items.clone())).is_ok(),
                Err(e) => {
                    let _ = feed.send(Err(crate::errors::AppError::Subscription(e.to_string())));
                    false
                }
            };

            if !sent {
                ended.push(*id);
            }
        }

        for id in ended {
            self.watchers.remove(&id);
        }
    }
}

/// Handle on a live query: a lazy, finite sequence of full snapshots.
///
/// The observer stays registered until `cancel()` is called (dropping the
/// handle has the same effect) or until the query fails.
pub struct Subscription<T> {
    id: Option<u64>,
    rx: Receiver<AppResult<Vec<T>>>,
    registry: Weak<RefCell<WatchRegistry>>,
}

impl<T> Subscription<T> {
    pub(crate) fn new(
        id: Option<u64>,
        rx: Receiver<AppResult<Vec<T>>>,
        registry: Weak<RefCell<WatchRegistry>>,
    ) -> Self {
        Self { id, rx, registry }
    }

    /// Next undelivered snapshot, oldest first.
    pub fn try_next(&self) -> Option<AppResult<Vec<T>>> {
        self.rx.try_recv().ok()
    }

    /// Drain everything pending and keep only the most recent snapshot.
    pub fn latest(&self) -> Option<AppResult<Vec<T>>> {
        self.rx.try_iter().last()
    }

    pub fn is_active(&self) -> bool {
        match (self.id, self.registry.upgrade()) {
            (Some(id), Some(reg)) => reg.borrow().contains(id),
            _ => false,
        }
    }

    pub fn cancel(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let (Some(id), Some(reg)) = (self.id.take(), self.registry.upgrade()) {
            reg.borrow_mut().remove(id);
        }
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.detach();
    }
}
