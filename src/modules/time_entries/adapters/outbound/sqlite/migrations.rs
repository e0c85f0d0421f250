//! Schema migrations for the SQLite store.
//!
//! The schema version lives in `PRAGMA user_version`. Each migration upgrades
//! the schema by one version and runs when the store is opened.

use rusqlite::Connection;
use thiserror::Error;

const CURRENT_VERSION: i32 = 1;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("unknown migration version: {0}")]
    UnknownVersion(i32),
}

pub fn get_version(conn: &Connection) -> rusqlite::Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_version(conn: &Connection, version: i32) -> rusqlite::Result<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
}

pub fn run(conn: &mut Connection) -> Result<(), MigrationError> {
    let current = get_version(conn)?;
    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        let tx = conn.transaction()?;
        run_migration(&tx, version)?;
        set_version(&tx, version)?;
        tx.commit()?;
    }
    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), MigrationError> {
    match version {
        1 => Ok(migrate_v1(conn)?),
        _ => Err(MigrationError::UnknownVersion(version)),
    }
}

/// Initial schema.
///
/// `ux_time_entries_running_user` is the single-running-timer guard: a unique
/// index over `user_id` restricted to live running rows.
fn migrate_v1(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS users (
            user_id TEXT PRIMARY KEY,
            is_deleted INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS tasks (
            task_id TEXT PRIMARY KEY,
            is_completed INTEGER NOT NULL DEFAULT 0,
            completed_at INTEGER,
            is_deleted INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS time_entries (
            time_entry_id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL REFERENCES users(user_id),
            task_id TEXT NOT NULL REFERENCES tasks(task_id),
            start_at INTEGER NOT NULL,
            end_at INTEGER,
            state TEXT NOT NULL CHECK (state IN ('Running', 'Paused', 'Completed')),
            last_paused_at INTEGER,
            total_paused_ms INTEGER NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            deleted_at INTEGER,
            created_at INTEGER NOT NULL,
            last_modified INTEGER NOT NULL,
            version INTEGER NOT NULL DEFAULT 0
        );

        CREATE UNIQUE INDEX IF NOT EXISTS ux_time_entries_running_user
        ON time_entries(user_id)
        WHERE state = 'Running' AND is_deleted = 0;

        CREATE INDEX IF NOT EXISTS idx_time_entries_user_start
        ON time_entries(user_id, start_at);
        ",
    )
}
