use crate::modules::time_entries::core::decision::Decision;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::lookups::load_time_entry;
use crate::modules::time_entries::use_cases::resume_time_entry::command::ResumeTimeEntry;
use crate::modules::time_entries::use_cases::resume_time_entry::decide::decide_resume;
use crate::shared::core::primitives::require_id;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ResumeTimeEntryHandler {
    repository: Arc<dyn TimeEntryRepository>,
}

impl ResumeTimeEntryHandler {
    pub fn new(repository: Arc<dyn TimeEntryRepository>) -> Self {
        Self { repository }
    }

    /// Another running entry of the same user makes the store reject the write,
    /// which surfaces as `ConflictingActiveSession`.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: ResumeTimeEntry) -> Result<TimeEntry, ApplicationError> {
        let time_entry_id = require_id("time_entry_id", &command.time_entry_id)?;
        let current = load_time_entry(&*self.repository, time_entry_id).await?;

        match decide_resume(&current, command) {
            Decision::Accepted { entry } => {
                match self.repository.update(&entry, current.version).await {
                    Ok(stored) => {
                        info!(time_entry_id = %stored.time_entry_id, "time entry resumed");
                        Ok(stored)
                    }
                    Err(error) => {
                        warn!(%error, "resume rejected by the store");
                        Err(error.into())
                    }
                }
            }
            Decision::Rejected { reason } => {
                warn!(%reason, "resume rejected");
                Err(reason.into())
            }
        }
    }
}
