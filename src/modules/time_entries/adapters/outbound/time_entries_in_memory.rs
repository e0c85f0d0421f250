// In memory implementation of the TimeEntryRepository port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep rows in a map keyed by time entry id.
// - Enforce optimistic concurrency by checking the expected version.
// - Enforce "one running entry per user" under the write guard, the same way
//   the SQLite partial unique index does.

use crate::modules::time_entries::core::ports::{RepositoryError, TimeEntryRepository};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTimeEntryStore {
    rows: RwLock<HashMap<String, TimeEntry>>,
    is_offline: bool,
    delay_write_ms: AtomicU64,
}

impl InMemoryTimeEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps before every write, so concurrent callers interleave their loads.
    pub fn set_delay_write_ms(&self, ms: u64) {
        self.delay_write_ms.store(ms, Ordering::SeqCst);
    }

    /// Every row including soft-deleted ones, for assertions.
    pub async fn all_rows(&self) -> Vec<TimeEntry> {
        self.rows.read().await.values().cloned().collect()
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Time entry store offline".into()));
        }
        Ok(())
    }

    async fn delay_write(&self) {
        let ms = self.delay_write_ms.load(Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

fn another_running_entry(
    rows: &HashMap<String, TimeEntry>,
    candidate: &TimeEntry,
) -> Option<RepositoryError> {
    if !candidate.is_running() {
        return None;
    }
    rows.values()
        .any(|row| {
            row.time_entry_id != candidate.time_entry_id
                && row.user_id == candidate.user_id
                && row.is_running()
        })
        .then(|| RepositoryError::ActiveSessionExists {
            user_id: candidate.user_id.clone(),
        })
}

fn check_version(
    rows: &HashMap<String, TimeEntry>,
    time_entry_id: &str,
    expected_version: i64,
) -> Result<(), RepositoryError> {
    let stored = rows
        .get(time_entry_id)
        .filter(|row| !row.is_deleted)
        .ok_or_else(|| RepositoryError::NotFound(time_entry_id.to_string()))?;
    if stored.version != expected_version {
        return Err(RepositoryError::VersionMismatch {
            time_entry_id: time_entry_id.to_string(),
            expected: expected_version,
            actual: stored.version,
        });
    }
    Ok(())
}

#[async_trait::async_trait]
impl TimeEntryRepository for InMemoryTimeEntryStore {
    async fn insert(&self, entry: &TimeEntry) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.rows.write().await;
        if let Some(violation) = another_running_entry(&guard, entry) {
            return Err(violation);
        }
        if guard.contains_key(&entry.time_entry_id) {
            return Err(RepositoryError::Backend(format!(
                "duplicate time entry id {}",
                entry.time_entry_id
            )));
        }
        guard.insert(entry.time_entry_id.clone(), entry.clone());
        Ok(())
    }

    async fn find(&self, time_entry_id: &str) -> Result<Option<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .get(time_entry_id)
            .filter(|row| !row.is_deleted)
            .cloned())
    }

    async fn update(
        &self,
        entry: &TimeEntry,
        expected_version: i64,
    ) -> Result<TimeEntry, RepositoryError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.rows.write().await;
        check_version(&guard, &entry.time_entry_id, expected_version)?;
        if let Some(violation) = another_running_entry(&guard, entry) {
            return Err(violation);
        }
        let mut stored = entry.clone();
        stored.version = expected_version + 1;
        guard.insert(stored.time_entry_id.clone(), stored.clone());
        Ok(stored)
    }

    async fn soft_delete(
        &self,
        time_entry_id: &str,
        expected_version: i64,
        at: i64,
    ) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut guard = self.rows.write().await;
        check_version(&guard, time_entry_id, expected_version)?;
        if let Some(row) = guard.get_mut(time_entry_id) {
            row.is_deleted = true;
            row.deleted_at = Some(at);
            row.last_modified = at;
            row.version = expected_version + 1;
        }
        Ok(())
    }

    async fn find_running_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        Ok(guard
            .values()
            .find(|row| row.user_id == user_id && row.is_running())
            .cloned())
    }

    async fn find_paused_by_user(&self, user_id: &str) -> Result<Vec<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<TimeEntry> = guard
            .values()
            .filter(|row| {
                row.user_id == user_id && !row.is_deleted && row.state == TimeEntryState::Paused
            })
            .cloned()
            .collect();
        items.sort_by_key(|row| row.start);
        Ok(items)
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_desc: bool,
    ) -> Result<Vec<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        let guard = self.rows.read().await;
        let mut items: Vec<TimeEntry> = guard
            .values()
            .filter(|row| row.user_id == user_id && !row.is_deleted)
            .cloned()
            .collect();

        items.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| a.time_entry_id.cmp(&b.time_entry_id))
        });
        if sort_by_start_desc {
            items.reverse();
        }

        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}
