use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};

/// One schema step. Applied in order, each exactly once.
struct Migration {
    version: &'static str,
    message: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250920_0001_create_accounts",
        message: "Created accounts table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS accounts (
            uid          TEXT PRIMARY KEY,
            email        TEXT NOT NULL UNIQUE,
            salt         TEXT NOT NULL,
            hash         TEXT NOT NULL,
            iterations   INTEGER NOT NULL,
            created_at   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250920_0002_create_works",
        message: "Created works collection",
        sql: r#"
        CREATE TABLE IF NOT EXISTS works (
            id           TEXT PRIMARY KEY,
            user_id      TEXT NOT NULL,
            date         TEXT NOT NULL,
            description  TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_works_user_date ON works(user_id, date);
        "#,
    },
    Migration {
        version: "20250920_0003_create_todos",
        message: "Created todos collection",
        sql: r#"
        CREATE TABLE IF NOT EXISTS todos (
            id           TEXT PRIMARY KEY,
            user_id      TEXT NOT NULL,
            date         TEXT NOT NULL,
            time         TEXT NOT NULL,
            reason       TEXT NOT NULL,
            completed    INTEGER NOT NULL DEFAULT 0,
            alerted      INTEGER NOT NULL DEFAULT 0,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_todos_user_date_time ON todos(user_id, date, time);
        "#,
    },
];

/// Ensure that the `log` table exists. Migration bookkeeping lives in it,
/// so it is created before anything else.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked every time a store is opened; already applied steps are skipped.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        conn.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            params![chrono::Local::now().to_rfc3339(), m.version, m.message],
        )?;
    }

    Ok(())
}

/// Versions currently recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
