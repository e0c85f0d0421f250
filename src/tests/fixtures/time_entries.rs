// Shared test fixtures for time entry rows.

use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntryDto {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub start: i64,
}

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        let dto: TimeEntryDto = serde_json::from_str(include_str!("json/time_entry.json"))
            .expect("invalid time entry fixture");
        Self {
            inner: TimeEntry::started(dto.time_entry_id, dto.user_id, dto.task_id, dto.start),
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn task_id(mut self, v: impl Into<String>) -> Self {
        self.inner.task_id = v.into();
        self
    }

    pub fn start(mut self, v: i64) -> Self {
        self.inner.start = v;
        self.inner.created_at = v;
        self.inner.last_modified = v;
        self
    }

    pub fn paused_at(mut self, v: i64) -> Self {
        self.inner.state = TimeEntryState::Paused;
        self.inner.last_paused_at = Some(v);
        self.inner.last_modified = v;
        self
    }

    pub fn total_paused_ms(mut self, v: i64) -> Self {
        self.inner.total_paused_ms = v;
        self
    }

    pub fn completed_at(mut self, v: i64) -> Self {
        self.inner.state = TimeEntryState::Completed;
        self.inner.end = Some(v);
        self.inner.last_paused_at = None;
        self.inner.last_modified = v;
        self
    }

    pub fn version(mut self, v: i64) -> Self {
        self.inner.version = v;
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_the_json_fixture() {
        let built = TimeEntryBuilder::default().build();
        assert_eq!(built.time_entry_id, "te-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.task_id, "task-fixed-0001");
        assert_eq!(built.start, 1_700_000_000_000);
        assert_eq!(built.state, TimeEntryState::Running);
    }

    #[rstest]
    fn it_should_build_a_completed_entry() {
        let built = TimeEntryBuilder::new()
            .paused_at(1_700_000_010_000)
            .completed_at(1_700_000_020_000)
            .build();
        assert_eq!(built.state, TimeEntryState::Completed);
        assert_eq!(built.end, Some(1_700_000_020_000));
        assert_eq!(built.last_paused_at, None);
    }
}
