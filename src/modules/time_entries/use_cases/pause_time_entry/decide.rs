use crate::modules::time_entries::core::decision::{DecideError, Decision, TimerAction};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::pause_time_entry::command::PauseTimeEntry;

/// Paused time is not accumulated here; Resume and Stop fold it in.
pub fn decide_pause(entry: &TimeEntry, command: PauseTimeEntry) -> Decision {
    match entry.state {
        TimeEntryState::Running => Decision::Accepted {
            entry: TimeEntry {
                state: TimeEntryState::Paused,
                last_paused_at: Some(command.occurred_at),
                last_modified: command.occurred_at,
                ..entry.clone()
            },
        },
        state => Decision::Rejected {
            reason: DecideError::InvalidTransition {
                action: TimerAction::Pause,
                state,
            },
        },
    }
}
