use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    Pause,
    Resume,
    Stop,
}

impl fmt::Display for TimerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            TimerAction::Pause => "pause",
            TimerAction::Resume => "resume",
            TimerAction::Stop => "stop",
        };
        f.write_str(verb)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("cannot {action} a time entry that is {state}")]
    InvalidTransition {
        action: TimerAction,
        state: TimeEntryState,
    },

    #[error("time entry is paused but has no pause timestamp")]
    MissingPauseTimestamp,

    #[error("task {task_id} is already completed")]
    TaskAlreadyCompleted { task_id: String },

    #[error("user {user_id} already has running time entry {time_entry_id}")]
    ActiveSessionExists {
        user_id: String,
        time_entry_id: String,
    },
}

/// Outcome of a pure decide function. `Accepted` carries the row to write back.
#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { entry: TimeEntry },
    Rejected { reason: DecideError },
}

impl Decision {
    pub fn into_result(self) -> Result<TimeEntry, DecideError> {
        match self {
            Decision::Accepted { entry } => Ok(entry),
            Decision::Rejected { reason } => Err(reason),
        }
    }
}
