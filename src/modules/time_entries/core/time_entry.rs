// TimeEntry is the persisted session record.
//
// Timestamps
// - All i64 values are epoch milliseconds.
//
// Boundaries
// - No input or output here. Stores load and save this shape as-is.

use crate::modules::time_entries::core::state::TimeEntryState;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub start: i64,
    pub end: Option<i64>,
    pub state: TimeEntryState,
    pub last_paused_at: Option<i64>,
    pub total_paused_ms: i64,
    pub is_deleted: bool,
    pub deleted_at: Option<i64>,
    pub created_at: i64,
    pub last_modified: i64,
    /// Optimistic concurrency token. Incremented by the store on every write.
    pub version: i64,
}

impl TimeEntry {
    /// Creates a fresh entry in `Running`. Creation is entry into Running.
    pub fn started(
        time_entry_id: impl Into<String>,
        user_id: impl Into<String>,
        task_id: impl Into<String>,
        now: i64,
    ) -> Self {
        Self {
            time_entry_id: time_entry_id.into(),
            user_id: user_id.into(),
            task_id: task_id.into(),
            start: now,
            end: None,
            state: TimeEntryState::Running,
            last_paused_at: None,
            total_paused_ms: 0,
            is_deleted: false,
            deleted_at: None,
            created_at: now,
            last_modified: now,
            version: 0,
        }
    }

    /// Tracked time: wall clock from `start` to `end` (or `now`), minus paused time.
    ///
    /// While paused the open interval since `last_paused_at` is not folded into
    /// `total_paused_ms` yet, so it is subtracted here to keep the value frozen.
    pub fn duration_ms(&self, now: i64) -> i64 {
        let until = self.end.unwrap_or(now);
        let open_pause = match (self.state, self.last_paused_at) {
            (TimeEntryState::Paused, Some(paused_at)) => (until - paused_at).max(0),
            _ => 0,
        };
        (until - self.start - self.total_paused_ms - open_pause).max(0)
    }

    pub fn is_running(&self) -> bool {
        !self.is_deleted && self.state == TimeEntryState::Running
    }
}
