use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::lookups::load_time_entry;
use crate::shared::core::primitives::require_id;
use std::sync::Arc;
use tracing::info;

/// Soft delete. Any state may be deleted; the row is kept with
/// `is_deleted = true` and disappears from every read.
pub struct DeleteTimeEntryHandler {
    repository: Arc<dyn TimeEntryRepository>,
}

impl DeleteTimeEntryHandler {
    pub fn new(repository: Arc<dyn TimeEntryRepository>) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: DeleteTimeEntry) -> Result<(), ApplicationError> {
        let time_entry_id = require_id("time_entry_id", &command.time_entry_id)?;
        let current = load_time_entry(&*self.repository, time_entry_id).await?;
        self.repository
            .soft_delete(&current.time_entry_id, current.version, command.occurred_at)
            .await?;
        info!(time_entry_id = %current.time_entry_id, "time entry deleted");
        Ok(())
    }
}
