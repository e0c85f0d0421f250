use crate::modules::time_entries::core::ports::{TimeEntryRepository, UserDirectory};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::lookups::ensure_user;
use crate::shared::core::primitives::require_id;
use std::sync::Arc;

pub struct GetCurrentTimeEntryHandler {
    repository: Arc<dyn TimeEntryRepository>,
    users: Arc<dyn UserDirectory>,
}

impl GetCurrentTimeEntryHandler {
    pub fn new(repository: Arc<dyn TimeEntryRepository>, users: Arc<dyn UserDirectory>) -> Self {
        Self { repository, users }
    }

    /// The user's running entry, or `None` when nothing is running.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, user_id: &str) -> Result<Option<TimeEntry>, ApplicationError> {
        let user_id = require_id("user_id", user_id)?;
        ensure_user(&*self.users, user_id).await?;
        Ok(self.repository.find_running_by_user(user_id).await?)
    }
}
