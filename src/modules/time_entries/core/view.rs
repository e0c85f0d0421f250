// Read shape of a time entry as returned to callers, with the derived duration.

use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::time_entry::TimeEntry;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TimeEntryView {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub start: i64,
    pub end: Option<i64>,
    pub state: TimeEntryState,
    pub last_paused_at: Option<i64>,
    pub total_paused_ms: i64,
    pub duration_ms: i64,
    pub created_at: i64,
    pub last_modified: i64,
}

impl TimeEntryView {
    pub fn at(entry: TimeEntry, now: i64) -> Self {
        let duration_ms = entry.duration_ms(now);
        Self {
            time_entry_id: entry.time_entry_id,
            user_id: entry.user_id,
            task_id: entry.task_id,
            start: entry.start,
            end: entry.end,
            state: entry.state,
            last_paused_at: entry.last_paused_at,
            total_paused_ms: entry.total_paused_ms,
            duration_ms,
            created_at: entry.created_at,
            last_modified: entry.last_modified,
        }
    }
}
