use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::ports::TaskRef;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::start_time_entry::command::StartTimeEntry;

/// `running` is the user's current running entry, if any. The store enforces
/// the same rule again on insert, so a concurrent start still loses.
pub fn decide_start(
    task: &TaskRef,
    running: Option<&TimeEntry>,
    command: StartTimeEntry,
) -> Decision {
    if task.is_completed {
        return Decision::Rejected {
            reason: DecideError::TaskAlreadyCompleted {
                task_id: task.task_id.clone(),
            },
        };
    }
    if let Some(active) = running {
        return Decision::Rejected {
            reason: DecideError::ActiveSessionExists {
                user_id: active.user_id.clone(),
                time_entry_id: active.time_entry_id.clone(),
            },
        };
    }
    Decision::Accepted {
        entry: TimeEntry::started(
            command.time_entry_id,
            command.user_id,
            command.task_id,
            command.occurred_at,
        ),
    }
}
