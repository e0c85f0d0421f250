// Loads shared by the command and query handlers.
//
// Each helper turns a missing record into ApplicationError::NotFound with the
// entity name callers see in the error message.

use crate::modules::time_entries::core::ports::{
    TaskDirectory, TaskRef, TimeEntryRepository, UserDirectory,
};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;

pub async fn load_time_entry(
    repository: &dyn TimeEntryRepository,
    time_entry_id: &str,
) -> Result<TimeEntry, ApplicationError> {
    repository
        .find(time_entry_id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("time entry", time_entry_id))
}

pub async fn ensure_user(users: &dyn UserDirectory, user_id: &str) -> Result<(), ApplicationError> {
    users
        .find_user(user_id)
        .await?
        .map(|_| ())
        .ok_or_else(|| ApplicationError::not_found("user", user_id))
}

pub async fn load_task(tasks: &dyn TaskDirectory, task_id: &str) -> Result<TaskRef, ApplicationError> {
    tasks
        .find_task(task_id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("task", task_id))
}
