// Shared GraphQL types for the time entry use cases.

use async_graphql::{Enum, ErrorExtensions, SimpleObject};

use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "TimeEntryState")]
pub enum GqlTimeEntryState {
    Running,
    Paused,
    Completed,
}

impl From<TimeEntryState> for GqlTimeEntryState {
    fn from(state: TimeEntryState) -> Self {
        match state {
            TimeEntryState::Running => GqlTimeEntryState::Running,
            TimeEntryState::Paused => GqlTimeEntryState::Paused,
            TimeEntryState::Completed => GqlTimeEntryState::Completed,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "TimeEntry")]
pub struct GqlTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub start: i64,
    pub end: Option<i64>,
    pub state: GqlTimeEntryState,
    pub last_paused_at: Option<i64>,
    pub total_paused_ms: i64,
    pub duration_ms: i64,
    pub created_at: i64,
    pub last_modified: i64,
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(v: TimeEntryView) -> Self {
        Self {
            time_entry_id: v.time_entry_id,
            user_id: v.user_id,
            task_id: v.task_id,
            start: v.start,
            end: v.end,
            state: v.state.into(),
            last_paused_at: v.last_paused_at,
            total_paused_ms: v.total_paused_ms,
            duration_ms: v.duration_ms,
            created_at: v.created_at,
            last_modified: v.last_modified,
        }
    }
}

/// Carries the stable error code in `extensions.code`.
pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    let code = error.code();
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("code", code))
}
