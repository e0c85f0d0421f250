use crate::modules::time_entries::core::decision::Decision;
use crate::modules::time_entries::core::ports::{TaskDirectory, TimeEntryRepository, UserDirectory};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::lookups::{ensure_user, load_task};
use crate::modules::time_entries::use_cases::start_time_entry::command::StartTimeEntry;
use crate::modules::time_entries::use_cases::start_time_entry::decide::decide_start;
use crate::shared::core::primitives::require_id;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StartTimeEntryHandler {
    repository: Arc<dyn TimeEntryRepository>,
    tasks: Arc<dyn TaskDirectory>,
    users: Arc<dyn UserDirectory>,
}

impl StartTimeEntryHandler {
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
    pub async fn handle(&self, command: StartTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let user_id = require_id("user_id", &command.user_id)?.to_string();
        let task_id = require_id("task_id", &command.task_id)?.to_string();

        ensure_user(&*self.users, &user_id).await?;
        let task = load_task(&*self.tasks, &task_id).await?;
        let running = self.repository.find_running_by_user(&user_id).await?;

        let command = StartTimeEntry {
            user_id,
            task_id,
            ..command
        };
        match decide_start(&task, running.as_ref(), command) {
            Decision::Accepted { entry } => {
                if let Err(error) = self.repository.insert(&entry).await {
                    warn!(%error, "start rejected by the store");
                    return Err(error.into());
                }
                info!(time_entry_id = %entry.time_entry_id, "time entry started");
                Ok(entry)
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "start rejected");
                Err(reason.into())
            }
        }
    }
}
