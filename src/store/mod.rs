//! Client handle on the backing document store.
//!
//! `Store` is constructed once at startup and passed by reference to every
//! component that reads or writes records. It owns the SQLite connection,
//! the schema migrations and the registry of live subscriptions.

pub mod accounts;
pub mod log;
pub mod migrate;
mod todos;
pub mod watch;
mod works;

use crate::errors::{AppError, AppResult};
use crate::models::{Identity, TodoEntry, WorkEntry};
use accounts::AuthServiceError;
use chrono::{NaiveDate, NaiveTime, SecondsFormat, Utc};
use rusqlite::Connection;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;
use std::rc::Rc;
use std::sync::mpsc;
use watch::{Subscription, WatchRegistry, Watcher};

pub struct Store {
    conn: Connection,
    watchers: Rc<RefCell<WatchRegistry>>,
    data_version: Cell<i64>,
}

impl Store {
    /// Open (or create) the store at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if let Some(parent) = p.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Self::from_connection(Connection::open(p)?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        migrate::run_pending_migrations(&conn)?;
        let version = read_data_version(&conn)?;
        Ok(Self {
            conn,
            watchers: Rc::new(RefCell::new(WatchRegistry::default())),
            data_version: Cell::new(version),
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Append a line to the audit log.
    pub fn log(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::ttlog(&self.conn, operation, target, message)
    }

    // ---------------------------
    // works
    // ---------------------------

    pub fn list_works(&self, owner: &str) -> AppResult<Vec<WorkEntry>> {
        works::list_works(&self.conn, owner)
    }

    pub fn add_work(
        &self,
        owner: &str,
        date: NaiveDate,
        description: &str,
    ) -> AppResult<WorkEntry> {
        let entry = works::insert_work(&self.conn, owner, date, description)?;
        self.publish_works(owner);
        Ok(entry)
    }

    pub fn update_work(
        &self,
        owner: &str,
        id: &str,
        date: NaiveDate,
        description: &str,
    ) -> AppResult<()> {
        works::update_work(&self.conn, owner, id, date, description)?;
        self.publish_works(owner);
        Ok(())
    }

    pub fn delete_work(&self, owner: &str, id: &str) -> AppResult<()> {
        works::delete_work(&self.conn, owner, id)?;
        self.publish_works(owner);
        Ok(())
    }

    pub fn subscribe_works(&self, owner: &str) -> Subscription<WorkEntry> {
        let (tx, rx) = mpsc::channel();
        let initial = self.list_works(owner);
        let id = match initial {
            Ok(items) => {
                let _ = tx.send(Ok(items));
                Some(self.watchers.borrow_mut().register(Watcher::Works {
                    owner: owner.to_string(),
                    feed: tx,
                }))
            }
            Err(e) => {
                let _ = tx.send(Err(AppError::Subscription(e.to_string())));
                None
            }
        };
        Subscription::new(id, rx, Rc::downgrade(&self.watchers))
    }

    fn publish_works(&self, owner: &str) {
        let snapshot = self.list_works(owner);
        self.watchers.borrow_mut().deliver_works(owner, &snapshot);
    }

    // ---------------------------
    // todos
    // ---------------------------

    pub fn list_todos(&self, owner: &str) -> AppResult<Vec<TodoEntry>> {
        todos::list_todos(&self.conn, owner)
    }

    pub fn add_todo(
        &self,
        owner: &str,
        date: NaiveDate,
        time: NaiveTime,
        reason: &str,
    ) -> AppResult<TodoEntry> {
        let entry = todos::insert_todo(&self.conn, owner, date, time, reason)?;
        self.publish_todos(owner);
        Ok(entry)
    }

    pub fn update_todo(
        &self,
        owner: &str,
        id: &str,
        date: NaiveDate,
        time: NaiveTime,
        reason: &str,
    ) -> AppResult<()> {
        todos::update_todo(&self.conn, owner, id, date, time, reason)?;
        self.publish_todos(owner);
        Ok(())
    }

    pub fn set_todo_completed(&self, owner: &str, id: &str, completed: bool) -> AppResult<()> {
        todos::set_completed(&self.conn, owner, id, completed)?;
        self.publish_todos(owner);
        Ok(())
    }

    pub fn delete_todo(&self, owner: &str, id: &str) -> AppResult<()> {
        todos::delete_todo(&self.conn, owner, id)?;
        self.publish_todos(owner);
        Ok(())
    }

    pub fn subscribe_todos(&self, owner: &str) -> Subscription<TodoEntry> {
        let (tx, rx) = mpsc::channel();
        let initial = self.list_todos(owner);
        let id = match initial {
            Ok(items) => {
                let _ = tx.send(Ok(items));
                Some(self.watchers.borrow_mut().register(Watcher::Todos {
                    owner: owner.to_string(),
                    feed: tx,
                }))
            }
            Err(e) => {
                let _ = tx.send(Err(AppError::Subscription(e.to_string())));
                None
            }
        };
        Subscription::new(id, rx, Rc::downgrade(&self.watchers))
    }

    fn publish_todos(&self, owner: &str) {
        let snapshot = self.list_todos(owner);
        self.watchers.borrow_mut().deliver_todos(owner, &snapshot);
    }

    /// Number of live observers across both collections.
    pub fn live_subscriptions(&self) -> usize {
        self.watchers.borrow().len()
    }

    /// Pick up commits made through other connections to the same file
    /// (another session of the same user) and re-publish snapshots.
    /// Returns whether anything changed.
    pub fn sync(&self) -> AppResult<bool> {
        let version = read_data_version(&self.conn)?;
        if version == self.data_version.get() {
            return Ok(false);
        }
        self.data_version.set(version);

        let (work_owners, todo_owners) = self.watchers.borrow().owners();
        for owner in work_owners {
            self.publish_works(&owner);
        }
        for owner in todo_owners {
            self.publish_todos(&owner);
        }
        Ok(true)
    }

    // ---------------------------
    // accounts
    // ---------------------------

    pub fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthServiceError> {
        accounts::create_account(&self.conn, email, password)
    }

    pub fn verify_account(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, AuthServiceError> {
        accounts::verify_account(&self.conn, email, password)
    }
}

fn read_data_version(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("PRAGMA data_version", [], |row| row.get(0))?)
}

/// Creation timestamps are assigned here, never by callers.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn date_column(s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(s.to_string())),
        )
    })
}

pub(crate) fn time_column(s: &str) -> rusqlite::Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(s.to_string())),
        )
    })
}
