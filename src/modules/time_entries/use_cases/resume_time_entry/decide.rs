use crate::modules::time_entries::core::decision::{DecideError, Decision, TimerAction};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::resume_time_entry::command::ResumeTimeEntry;

pub fn decide_resume(entry: &TimeEntry, command: ResumeTimeEntry) -> Decision {
    if entry.state != TimeEntryState::Paused {
        return Decision::Rejected {
            reason: DecideError::InvalidTransition {
                action: TimerAction::Resume,
                state: entry.state,
            },
        };
    }
    let Some(paused_at) = entry.last_paused_at else {
        return Decision::Rejected {
            reason: DecideError::MissingPauseTimestamp,
        };
    };
    // Clock skew between calls must not shrink the accumulated pause.
    let paused_for = (command.occurred_at - paused_at).max(0);
    Decision::Accepted {
        entry: TimeEntry {
            state: TimeEntryState::Running,
            last_paused_at: None,
            total_paused_ms: entry.total_paused_ms + paused_for,
            last_modified: command.occurred_at,
            ..entry.clone()
        },
    }
}
