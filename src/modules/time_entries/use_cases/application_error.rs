use crate::modules::time_entries::core::decision::DecideError;
use crate::modules::time_entries::core::ports::RepositoryError;
use crate::shared::core::primitives::EmptyIdentifier;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    InvalidTransition(DecideError),

    #[error("user {user_id} already has a running time entry")]
    ConflictingActiveSession { user_id: String },

    #[error("time entry {time_entry_id} was modified concurrently")]
    ConcurrentModification { time_entry_id: String },

    #[error(transparent)]
    Storage(RepositoryError),
}

impl ApplicationError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ApplicationError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Stable machine readable code, shared by the HTTP and GraphQL surfaces.
    pub fn code(&self) -> &'static str {
        match self {
            ApplicationError::Validation(_) => "validation_error",
            ApplicationError::NotFound { .. } => "not_found",
            ApplicationError::InvalidTransition(_) => "invalid_transition",
            ApplicationError::ConflictingActiveSession { .. } => "conflicting_active_session",
            ApplicationError::ConcurrentModification { .. } => "concurrent_modification",
            ApplicationError::Storage(_) => "storage_error",
        }
    }
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        match reason {
            DecideError::ActiveSessionExists { user_id, .. } => {
                ApplicationError::ConflictingActiveSession { user_id }
            }
            other => ApplicationError::InvalidTransition(other),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::ActiveSessionExists { user_id } => {
                ApplicationError::ConflictingActiveSession { user_id }
            }
            RepositoryError::VersionMismatch { time_entry_id, .. } => {
                ApplicationError::ConcurrentModification { time_entry_id }
            }
            RepositoryError::NotFound(id) => ApplicationError::not_found("time entry", id),
            RepositoryError::TaskAlreadyCompleted(task_id) => {
                ApplicationError::InvalidTransition(DecideError::TaskAlreadyCompleted { task_id })
            }
            other => ApplicationError::Storage(other),
        }
    }
}

impl From<EmptyIdentifier> for ApplicationError {
    fn from(error: EmptyIdentifier) -> Self {
        ApplicationError::Validation(error.to_string())
    }
}
