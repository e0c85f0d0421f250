use crate::modules::time_entries::core::decision::Decision;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::lookups::load_time_entry;
use crate::modules::time_entries::use_cases::stop_time_entry::command::StopTimeEntry;
use crate::modules::time_entries::use_cases::stop_time_entry::decide::decide_stop;
use crate::shared::core::primitives::require_id;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StopTimeEntryHandler {
    repository: Arc<dyn TimeEntryRepository>,
}

impl StopTimeEntryHandler {
    pub fn new(repository: Arc<dyn TimeEntryRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: StopTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let time_entry_id = require_id("time_entry_id", &command.time_entry_id)?;
        let current = load_time_entry(&*self.repository, time_entry_id).await?;

        match decide_stop(&current, command.occurred_at) {
            Decision::Accepted { entry } => {
                match self.repository.update(&entry, current.version).await {
                    Ok(stored) => {
                        info!(
                            time_entry_id = %stored.time_entry_id,
                            duration_ms = stored.duration_ms(command.occurred_at),
                            "time entry stopped"
                        );
                        Ok(stored)
                    }
                    Err(error) => {
                        warn!(%error, "stop rejected by the store");
                        Err(error.into())
                    }
                }
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "stop rejected");
                Err(reason.into())
            }
        }
    }
}
