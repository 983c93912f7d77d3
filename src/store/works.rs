//! Queries on the `works` collection. Every statement is scoped by owner.

use super::{date_column, now_timestamp};
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, Row, params};

pub(crate) fn map_row(row: &Row) -> rusqlite::Result<WorkEntry> {
    let date_str: String = row.get("date")?;

    Ok(WorkEntry {
        id: row.get("id")?,
        owner_id: row.get("user_id")?,
        date: date_column(&date_str)?,
        description: row.get("description")?,
        created_at: row.get("created_at")?,
    })
}

pub(crate) fn list_works(conn: &Connection, owner: &str) -> AppResult<Vec<WorkEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, date, description, created_at
         FROM works
         WHERE user_id = ?1
         ORDER BY date DESC, created_at DESC",
    )?;

    let rows = stmt.query_map([owner], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub(crate) fn insert_work(
    conn: &Connection,
    owner: &str,
    date: NaiveDate,
    description: &str,
) -> AppResult<WorkEntry> {
    let entry = WorkEntry {
        id: uuid::Uuid::new_v4().to_string(),
        owner_id: owner.to_string(),
        date,
        description: description.to_string(),
        created_at: now_timestamp(),
    };

    conn.execute(
        "INSERT INTO works (id, user_id, date, description, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.id,
            entry.owner_id,
            entry.date_str(),
            entry.description,
            entry.created_at,
        ],
    )?;

    Ok(entry)
}

pub(crate) fn update_work(
    conn: &Connection,
    owner: &str,
    id: &str,
    date: NaiveDate,
    description: &str,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE works SET date = ?1, description = ?2
         WHERE id = ?3 AND user_id = ?4",
        params![date.format("%Y-%m-%d").to_string(), description, id, owner],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(())
}

pub(crate) fn delete_work(conn: &Connection, owner: &str, id: &str) -> AppResult<()> {
    let changed = conn.execute(
        "DELETE FROM works WHERE id = ?1 AND user_id = ?2",
        params![id, owner],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(())
}
