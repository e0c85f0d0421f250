use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::ports::{
    RepositoryError, TaskDirectory, TimeEntryRepository, UserDirectory,
};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::complete_task::command::CompleteTask;
use crate::modules::time_entries::use_cases::lookups::{ensure_user, load_task};
use crate::modules::time_entries::use_cases::stop_time_entry::decide::decide_stop;
use crate::shared::core::primitives::require_id;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTask {
    pub task_id: String,
    pub stopped_time_entry: Option<TimeEntry>,
}

/// Marks a task completed and stops the user's running entry when it times
/// that task. The task is completed first and reopened if the stop cannot be
/// saved, so a failed call leaves both unchanged.
pub struct CompleteTaskHandler {
    repository: Arc<dyn TimeEntryRepository>,
    tasks: Arc<dyn TaskDirectory>,
    users: Arc<dyn UserDirectory>,
}

impl CompleteTaskHandler {
    pub fn new(
        repository: Arc<dyn TimeEntryRepository>,
        tasks: Arc<dyn TaskDirectory>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            repository,
            tasks,
            users,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: CompleteTask) -> Result<CompletedTask, ApplicationError> {
        let user_id = require_id("user_id", &command.user_id)?;
        let task_id = require_id("task_id", &command.task_id)?;

        ensure_user(&*self.users, user_id).await?;
        let task = load_task(&*self.tasks, task_id).await?;
        if task.is_completed {
            let reason = DecideError::TaskAlreadyCompleted {
                task_id: task.task_id,
            };
            warn!(%reason, "complete task rejected");
            return Err(reason.into());
        }

        let running = self
            .repository
            .find_running_by_user(user_id)
            .await?
            .filter(|entry| entry.task_id == task.task_id);

        let stop = match running {
            Some(current) => match decide_stop(&current, command.occurred_at) {
                Decision::Accepted { entry } => Some((entry, current.version)),
                Decision::Rejected { reason } => {
                    warn!(%reason, "complete task rejected");
                    return Err(reason.into());
                }
            },
            None => None,
        };

        if let Err(error) = self
            .tasks
            .complete_task(&task.task_id, command.occurred_at)
            .await
        {
            warn!(%error, "complete task rejected by the store");
            return Err(match error {
                RepositoryError::NotFound(id) => ApplicationError::not_found("task", id),
                other => other.into(),
            });
        }

        let stopped_time_entry = match stop {
            Some((entry, expected_version)) => {
                match self.repository.update(&entry, expected_version).await {
                    Ok(stored) => Some(stored),
                    Err(error) => {
                        warn!(%error, "stopping the running entry failed, reopening the task");
                        if let Err(rollback) = self.tasks.reopen_task(&task.task_id).await {
                            error!(%rollback, task_id = %task.task_id, "failed to reopen task");
                        }
                        return Err(error.into());
                    }
                }
            }
            None => None,
        };

        info!(
            task_id = %task.task_id,
            stopped = stopped_time_entry.is_some(),
            "task completed"
        );
        Ok(CompletedTask {
            task_id: task.task_id,
            stopped_time_entry,
        })
    }
}
