//! Queries on the `todos` collection. Every statement is scoped by owner.

use super::{date_column, now_timestamp, time_column};
use crate::errors::{AppError, AppResult};
use crate::models::TodoEntry;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, Row, params};

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<TodoEntry> {
    let date_str: String = row.get("date")?;
    let time_str: String = row.get("time")?;

    Ok(TodoEntry {
        id: row.get("id")?,
        owner_id: row.get("user_id")?,
        date: date_column(&date_str)?,
        time: time_column(&time_str)?,
        reason: row.get("reason")?,
        completed: row.get::<_, i32>("completed")? == 1,
        alerted: row.get::<_, i32>("alerted")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Store order: ascending by (date, time). Pending/completed grouping is a
/// client concern and happens in the todo manager.
pub(crate) fn list_todos(conn: &Connection, owner: &str) -> AppResult<Vec<TodoEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, date, time, reason, completed, alerted, created_at
         FROM todos
         WHERE user_id = ?1
         ORDER BY date ASC, time ASC, created_at ASC",
    )?;

    let rows = stmt.query_map([owner], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub(crate) fn insert_todo(
    conn: &Connection,
    owner: &str,
    date: NaiveDate,
    time: NaiveTime,
    reason: &str,
) -> AppResult<TodoEntry> {
    let entry = TodoEntry {
        id: uuid::Uuid::new_v4().to_string(),
        owner_id: owner.to_string(),
        date,
        time,
        reason: reason.to_string(),
        completed: false,
        alerted: false,
        created_at: now_timestamp(),
    };

    conn.execute(
        "INSERT INTO todos (id, user_id, date, time, reason, completed, alerted, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, 0, 0, ?6)",
        params![
            entry.id,
            entry.owner_id,
            entry.date_str(),
            entry.time_str(),
            entry.reason,
            entry.created_at,
        ],
    )?;

    Ok(entry)
}

pub(crate) fn update_todo(
    conn: &Connection,
    owner: &str,
    id: &str,
    date: NaiveDate,
    time: NaiveTime,
    reason: &str,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE todos SET date = ?1, time = ?2, reason = ?3
         WHERE id = ?4 AND user_id = ?5",
        params![
            date.format("%Y-%m-%d").to_string(),
            time.format("%H:%M").to_string(),
            reason,
            id,
            owner,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(())
}

pub(crate) fn set_completed(
    conn: &Connection,
    owner: &str,
    id: &str,
    completed: bool,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE todos SET completed = ?1 WHERE id = ?2 AND user_id = ?3",
        params![if completed { 1 } else { 0 }, id, owner],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(())
}

pub(crate) fn delete_todo(conn: &Connection, owner: &str, id: &str) -> AppResult<()> {
    let changed = conn.execute(
        "DELETE FROM todos WHERE id = ?1 AND user_id = ?2",
        params![id, owner],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(())
}
