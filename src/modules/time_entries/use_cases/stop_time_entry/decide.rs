use crate::modules::time_entries::core::decision::{DecideError, Decision, TimerAction};
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::core::time_entry::TimeEntry;

/// Completes a Running or Paused entry at `occurred_at`, folding an open pause
/// interval into `total_paused_ms` first.
pub fn decide_stop(entry: &TimeEntry, occurred_at: i64) -> Decision {
    if entry.state.is_terminal() {
        return Decision::Rejected {
            reason: DecideError::InvalidTransition {
                action: TimerAction::Stop,
                state: entry.state,
            },
        };
    }
    let open_pause = match (entry.state, entry.last_paused_at) {
        (TimeEntryState::Paused, Some(paused_at)) => (occurred_at - paused_at).max(0),
        _ => 0,
    };
    Decision::Accepted {
        entry: TimeEntry {
            state: TimeEntryState::Completed,
            end: Some(occurred_at),
            last_paused_at: None,
            total_paused_ms: entry.total_paused_ms + open_pause,
            last_modified: occurred_at,
            ..entry.clone()
        },
    }
}
