// SQLite implementation of the TimeEntryRepository, TaskDirectory and
// UserDirectory ports.
//
// Responsibilities
// - Own one connection behind a mutex and run every call on the blocking pool.
// - Apply each write as one statement or one transaction.
// - Translate the running-entry unique index violation into
//   RepositoryError::ActiveSessionExists.

mod migrations;

use crate::modules::time_entries::core::ports::{
    RepositoryError, TaskDirectory, TaskRef, TimeEntryRepository, UserDirectory, UserRef,
};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;
use std::sync::{Arc, Mutex};

const SELECT_TIME_ENTRY: &str = "SELECT time_entry_id, user_id, task_id, start_at, end_at, state, \
     last_paused_at, total_paused_ms, is_deleted, deleted_at, created_at, last_modified, version \
     FROM time_entries";

#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, RepositoryError> {
        let conn = Connection::open(path).map_err(|e| {
            RepositoryError::Backend(format!("failed to open database {}: {e}", path.display()))
        })?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory().map_err(backend)?;
        Self::from_connection(conn)
    }

    fn from_connection(mut conn: Connection) -> Result<Self, RepositoryError> {
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(backend)?;
        migrations::run(&mut conn)
            .map_err(|e| RepositoryError::Backend(format!("failed to run migrations: {e}")))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub async fn schema_version(&self) -> Result<i32, RepositoryError> {
        self.execute(|conn| migrations::get_version(conn).map_err(backend))
            .await
    }

    async fn execute<F, T>(&self, task: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut Connection) -> Result<T, RepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| RepositoryError::Backend("sqlite connection poisoned".into()))?;
            task(&mut guard)
        })
        .await
        .map_err(|e| RepositoryError::Backend(format!("sqlite task failed: {e}")))?
    }
}

fn backend(error: rusqlite::Error) -> RepositoryError {
    RepositoryError::Backend(error.to_string())
}

fn write_error(error: rusqlite::Error, user_id: &str) -> RepositoryError {
    match &error {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepositoryError::ActiveSessionExists {
                user_id: user_id.to_string(),
            }
        }
        _ => backend(error),
    }
}

fn row_to_time_entry(row: &Row) -> rusqlite::Result<TimeEntry> {
    let state: String = row.get("state")?;
    let state = state
        .parse::<TimeEntryState>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;
    Ok(TimeEntry {
        time_entry_id: row.get("time_entry_id")?,
        user_id: row.get("user_id")?,
        task_id: row.get("task_id")?,
        start: row.get("start_at")?,
        end: row.get("end_at")?,
        state,
        last_paused_at: row.get("last_paused_at")?,
        total_paused_ms: row.get("total_paused_ms")?,
        is_deleted: row.get("is_deleted")?,
        deleted_at: row.get("deleted_at")?,
        created_at: row.get("created_at")?,
        last_modified: row.get("last_modified")?,
        version: row.get("version")?,
    })
}

fn live_version(conn: &Connection, time_entry_id: &str) -> rusqlite::Result<Option<i64>> {
    conn.query_row(
        "SELECT version FROM time_entries WHERE time_entry_id = ?1 AND is_deleted = 0",
        params![time_entry_id],
        |row| row.get(0),
    )
    .optional()
}

fn stale_write(
    conn: &Connection,
    time_entry_id: &str,
    expected_version: i64,
) -> Result<RepositoryError, RepositoryError> {
    Ok(match live_version(conn, time_entry_id).map_err(backend)? {
        None => RepositoryError::NotFound(time_entry_id.to_string()),
        Some(actual) => RepositoryError::VersionMismatch {
            time_entry_id: time_entry_id.to_string(),
            expected: expected_version,
            actual,
        },
    })
}

fn query_entries(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> Result<Vec<TimeEntry>, RepositoryError> {
    let mut stmt = conn.prepare(sql).map_err(backend)?;
    let rows = stmt
        .query_map(params, row_to_time_entry)
        .map_err(backend)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(backend)
}

#[async_trait::async_trait]
impl TimeEntryRepository for SqliteStore {
    async fn insert(&self, entry: &TimeEntry) -> Result<(), RepositoryError> {
        let record = entry.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO time_entries (time_entry_id, user_id, task_id, start_at, end_at, state,
                     last_paused_at, total_paused_ms, is_deleted, deleted_at, created_at, last_modified, version)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    record.time_entry_id,
                    record.user_id,
                    record.task_id,
                    record.start,
                    record.end,
                    record.state.as_str(),
                    record.last_paused_at,
                    record.total_paused_ms,
                    record.is_deleted,
                    record.deleted_at,
                    record.created_at,
                    record.last_modified,
                    record.version,
                ],
            )
            .map_err(|e| write_error(e, &record.user_id))?;
            Ok(())
        })
        .await
    }

    async fn find(&self, time_entry_id: &str) -> Result<Option<TimeEntry>, RepositoryError> {
        let time_entry_id = time_entry_id.to_string();
        self.execute(move |conn| {
            conn.query_row(
                &format!("{SELECT_TIME_ENTRY} WHERE time_entry_id = ?1 AND is_deleted = 0"),
                params![time_entry_id],
                row_to_time_entry,
            )
            .optional()
            .map_err(backend)
        })
        .await
    }

    async fn update(
        &self,
        entry: &TimeEntry,
        expected_version: i64,
    ) -> Result<TimeEntry, RepositoryError> {
        let record = entry.clone();
        self.execute(move |conn| {
            let tx = conn.transaction().map_err(backend)?;
            let changed = tx
                .execute(
                    "UPDATE time_entries
                     SET state = ?1,
                         end_at = ?2,
                         last_paused_at = ?3,
                         total_paused_ms = ?4,
                         last_modified = ?5,
                         version = version + 1
                     WHERE time_entry_id = ?6 AND version = ?7 AND is_deleted = 0",
                    params![
                        record.state.as_str(),
                        record.end,
                        record.last_paused_at,
                        record.total_paused_ms,
                        record.last_modified,
                        record.time_entry_id,
                        expected_version,
                    ],
                )
                .map_err(|e| write_error(e, &record.user_id))?;
            if changed == 0 {
                return Err(stale_write(&tx, &record.time_entry_id, expected_version)?);
            }
            let stored = tx
                .query_row(
                    &format!("{SELECT_TIME_ENTRY} WHERE time_entry_id = ?1"),
                    params![record.time_entry_id],
                    row_to_time_entry,
                )
                .map_err(backend)?;
            tx.commit().map_err(backend)?;
            Ok(stored)
        })
        .await
    }

    async fn soft_delete(
        &self,
        time_entry_id: &str,
        expected_version: i64,
        at: i64,
    ) -> Result<(), RepositoryError> {
        let time_entry_id = time_entry_id.to_string();
        self.execute(move |conn| {
            let tx = conn.transaction().map_err(backend)?;
            let changed = tx
                .execute(
                    "UPDATE time_entries
                     SET is_deleted = 1,
                         deleted_at = ?1,
                         last_modified = ?1,
                         version = version + 1
                     WHERE time_entry_id = ?2 AND version = ?3 AND is_deleted = 0",
                    params![at, time_entry_id, expected_version],
                )
                .map_err(backend)?;
            if changed == 0 {
                return Err(stale_write(&tx, &time_entry_id, expected_version)?);
            }
            tx.commit().map_err(backend)
        })
        .await
    }

    async fn find_running_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<TimeEntry>, RepositoryError> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            conn.query_row(
                &format!(
                    "{SELECT_TIME_ENTRY} WHERE user_id = ?1 AND state = 'Running' AND is_deleted = 0"
                ),
                params![user_id],
                row_to_time_entry,
            )
            .optional()
            .map_err(backend)
        })
        .await
    }

    async fn find_paused_by_user(&self, user_id: &str) -> Result<Vec<TimeEntry>, RepositoryError> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            query_entries(
                conn,
                &format!(
                    "{SELECT_TIME_ENTRY} WHERE user_id = ?1 AND state = 'Paused' AND is_deleted = 0 \
                     ORDER BY start_at ASC"
                ),
                params![user_id],
            )
        })
        .await
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_desc: bool,
    ) -> Result<Vec<TimeEntry>, RepositoryError> {
        let user_id = user_id.to_string();
        let order = if sort_by_start_desc { "DESC" } else { "ASC" };
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.execute(move |conn| {
            query_entries(
                conn,
                &format!(
                    "{SELECT_TIME_ENTRY} WHERE user_id = ?1 AND is_deleted = 0 \
                     ORDER BY start_at {order}, time_entry_id {order} LIMIT ?2 OFFSET ?3"
                ),
                params![user_id, limit, offset],
            )
        })
        .await
    }
}

#[async_trait::async_trait]
impl TaskDirectory for SqliteStore {
    async fn find_task(&self, task_id: &str) -> Result<Option<TaskRef>, RepositoryError> {
        let task_id = task_id.to_string();
        self.execute(move |conn| {
            conn.query_row(
                "SELECT task_id, is_completed FROM tasks WHERE task_id = ?1 AND is_deleted = 0",
                params![task_id],
                |row| {
                    Ok(TaskRef {
                        task_id: row.get(0)?,
                        is_completed: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(backend)
        })
        .await
    }

    async fn complete_task(&self, task_id: &str, at: i64) -> Result<(), RepositoryError> {
        let task_id = task_id.to_string();
        self.execute(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE tasks SET is_completed = 1, completed_at = ?1
                     WHERE task_id = ?2 AND is_deleted = 0 AND is_completed = 0",
                    params![at, task_id],
                )
                .map_err(backend)?;
            if changed == 1 {
                return Ok(());
            }
            let exists = conn
                .query_row(
                    "SELECT 1 FROM tasks WHERE task_id = ?1 AND is_deleted = 0",
                    params![task_id],
                    |_| Ok(()),
                )
                .optional()
                .map_err(backend)?
                .is_some();
            if exists {
                Err(RepositoryError::TaskAlreadyCompleted(task_id))
            } else {
                Err(RepositoryError::NotFound(task_id))
            }
        })
        .await
    }

    async fn reopen_task(&self, task_id: &str) -> Result<(), RepositoryError> {
        let task_id = task_id.to_string();
        self.execute(move |conn| {
            let changed = conn
                .execute(
                    "UPDATE tasks SET is_completed = 0, completed_at = NULL
                     WHERE task_id = ?1 AND is_deleted = 0",
                    params![task_id],
                )
                .map_err(backend)?;
            if changed == 0 {
                return Err(RepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn upsert_task(&self, task: TaskRef) -> Result<(), RepositoryError> {
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO tasks (task_id, is_completed) VALUES (?1, ?2)
                 ON CONFLICT(task_id) DO UPDATE SET is_completed = MAX(is_completed, excluded.is_completed)",
                params![task.task_id, task.is_completed],
            )
            .map_err(backend)?;
            Ok(())
        })
        .await
    }
}

#[async_trait::async_trait]
impl UserDirectory for SqliteStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRef>, RepositoryError> {
        let user_id = user_id.to_string();
        self.execute(move |conn| {
            conn.query_row(
                "SELECT user_id FROM users WHERE user_id = ?1 AND is_deleted = 0",
                params![user_id],
                |row| Ok(UserRef { user_id: row.get(0)? }),
            )
            .optional()
            .map_err(backend)
        })
        .await
    }

    async fn upsert_user(&self, user: UserRef) -> Result<(), RepositoryError> {
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO users (user_id) VALUES (?1) ON CONFLICT(user_id) DO NOTHING",
                params![user.user_id],
            )
            .map_err(backend)?;
            Ok(())
        })
        .await
    }
}
