// Ports define what the timer core needs from storage, without implementing it.
//
// Responsibilities
// - TimeEntryRepository: load and write back time entry rows atomically.
// - TaskDirectory, UserDirectory: answer questions about referenced entities.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
// - Stores never hard delete. `soft_delete` is the only removal path.

use crate::modules::time_entries::core::time_entry::TimeEntry;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The filtered unique constraint over running entries was violated.
    #[error("user {user_id} already has a running time entry")]
    ActiveSessionExists { user_id: String },

    #[error("version mismatch for {time_entry_id}: expected {expected}, actual {actual}")]
    VersionMismatch {
        time_entry_id: String,
        expected: i64,
        actual: i64,
    },

    #[error("record {0} not found")]
    NotFound(String),

    #[error("task {0} is already completed")]
    TaskAlreadyCompleted(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TaskRef {
    pub task_id: String,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserRef {
    pub user_id: String,
}

#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// Persists a new row. Fails with `ActiveSessionExists` if it would be a
    /// second running entry for its user.
    async fn insert(&self, entry: &TimeEntry) -> Result<(), RepositoryError>;

    /// Finds a non-deleted entry.
    async fn find(&self, time_entry_id: &str) -> Result<Option<TimeEntry>, RepositoryError>;

    /// Writes `entry` back if the stored version still equals `expected_version`.
    /// Returns the row as stored, with its new version.
    async fn update(
        &self,
        entry: &TimeEntry,
        expected_version: i64,
    ) -> Result<TimeEntry, RepositoryError>;

    /// Rewrites a delete into `is_deleted = true, deleted_at = at`.
    async fn soft_delete(
        &self,
        time_entry_id: &str,
        expected_version: i64,
        at: i64,
    ) -> Result<(), RepositoryError>;

    async fn find_running_by_user(
        &self,
        user_id: &str,
    ) -> Result<Option<TimeEntry>, RepositoryError>;

    async fn find_paused_by_user(&self, user_id: &str) -> Result<Vec<TimeEntry>, RepositoryError>;

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_desc: bool,
    ) -> Result<Vec<TimeEntry>, RepositoryError>;
}

#[async_trait]
pub trait TaskDirectory: Send + Sync {
    async fn find_task(&self, task_id: &str) -> Result<Option<TaskRef>, RepositoryError>;
    /// Marks an open task completed. Fails with `TaskAlreadyCompleted` when
    /// another caller got there first.
    async fn complete_task(&self, task_id: &str, at: i64) -> Result<(), RepositoryError>;
    /// Undoes `complete_task` when the rest of the completion could not be saved.
    async fn reopen_task(&self, task_id: &str) -> Result<(), RepositoryError>;
    /// Registers a task. An existing completed task never goes back to open.
    async fn upsert_task(&self, task: TaskRef) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRef>, RepositoryError>;
    async fn upsert_user(&self, user: UserRef) -> Result<(), RepositoryError>;
}
