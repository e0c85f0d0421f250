// Lifecycle state of a time entry.
//
// Running <-> Paused any number of times, then Completed. Completed is terminal.
// The string form is what the SQLite adapter stores in the `state` column.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TimeEntryState {
    Running,
    Paused,
    Completed,
}

impl TimeEntryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeEntryState::Running => "Running",
            TimeEntryState::Paused => "Paused",
            TimeEntryState::Completed => "Completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TimeEntryState::Completed)
    }
}

impl fmt::Display for TimeEntryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown time entry state '{0}'")]
pub struct UnknownTimeEntryState(pub String);

impl FromStr for TimeEntryState {
    type Err = UnknownTimeEntryState;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Running" => Ok(TimeEntryState::Running),
            "Paused" => Ok(TimeEntryState::Paused),
            "Completed" => Ok(TimeEntryState::Completed),
            other => Err(UnknownTimeEntryState(other.to_string())),
        }
    }
}
