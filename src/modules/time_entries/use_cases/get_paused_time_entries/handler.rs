use crate::modules::time_entries::core::ports::{TimeEntryRepository, UserDirectory};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::lookups::ensure_user;
use crate::shared::core::primitives::require_id;
use std::sync::Arc;

pub struct GetPausedTimeEntriesHandler {
    repository: Arc<dyn TimeEntryRepository>,
    users: Arc<dyn UserDirectory>,
}

impl GetPausedTimeEntriesHandler {
    pub fn new(repository: Arc<dyn TimeEntryRepository>, users: Arc<dyn UserDirectory>) -> Self {
        Self { repository, users }
    }

    /// Paused entries, oldest start first.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, user_id: &str) -> Result<Vec<TimeEntry>, ApplicationError> {
        let user_id = require_id("user_id", user_id)?;
        ensure_user(&*self.users, user_id).await?;
        Ok(self.repository.find_paused_by_user(user_id).await?)
    }
}
