use crate::modules::time_entries::core::decision::Decision;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::lookups::load_time_entry;
use crate::modules::time_entries::use_cases::pause_time_entry::command::PauseTimeEntry;
use crate::modules::time_entries::use_cases::pause_time_entry::decide::decide_pause;
use crate::shared::core::primitives::require_id;
use std::sync::Arc;
use tracing::{info, warn};

pub struct PauseTimeEntryHandler {
    repository: Arc<dyn TimeEntryRepository>,
}

impl PauseTimeEntryHandler {
    pub fn new(repository: Arc<dyn TimeEntryRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: PauseTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let time_entry_id = require_id("time_entry_id", &command.time_entry_id)?;
        let current = load_time_entry(&*self.repository, time_entry_id).await?;

        match decide_pause(&current, command) {
            Decision::Accepted { entry } => {
                match self.repository.update(&entry, current.version).await {
                    Ok(stored) => {
                        info!(time_entry_id = %stored.time_entry_id, "time entry paused");
                        Ok(stored)
                    }
                    Err(error) => {
                        warn!(%error, "pause rejected by the store");
                        Err(error.into())
                    }
                }
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "pause rejected");
                Err(reason.into())
            }
        }
    }
}
