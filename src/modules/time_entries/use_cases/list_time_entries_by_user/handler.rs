use crate::modules::time_entries::core::ports::{TimeEntryRepository, UserDirectory};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::query::ListTimeEntriesByUser;
use crate::modules::time_entries::use_cases::lookups::ensure_user;
use crate::shared::core::primitives::require_id;
use std::sync::Arc;

pub struct ListTimeEntriesByUserHandler {
    repository: Arc<dyn TimeEntryRepository>,
    users: Arc<dyn UserDirectory>,
}

impl ListTimeEntriesByUserHandler {
    pub fn new(repository: Arc<dyn TimeEntryRepository>, users: Arc<dyn UserDirectory>) -> Self {
        Self { repository, users }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        query: ListTimeEntriesByUser,
    ) -> Result<Vec<TimeEntry>, ApplicationError> {
        let user_id = require_id("user_id", &query.user_id)?;
        ensure_user(&*self.users, user_id).await?;
        Ok(self
            .repository
            .list_by_user(user_id, query.offset, query.limit, query.sort_desc)
            .await?)
    }
}

#[cfg(test)]
mod list_time_entries_by_user_handler_tests {
    use super::*;
    use crate::modules::time_entries::adapters::outbound::time_entries_in_memory::InMemoryTimeEntryStore;
    use crate::tests::fixtures::directory::{USER_ID, seeded_directory};
    use crate::tests::fixtures::time_entries::TimeEntryBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    async fn handler() -> ListTimeEntriesByUserHandler {
        let store = InMemoryTimeEntryStore::new();
        for (id, start) in [("te-a", 1_000), ("te-b", 2_000), ("te-c", 3_000)] {
            store
                .insert(
                    &TimeEntryBuilder::new()
                        .time_entry_id(id)
                        .start(start)
                        .completed_at(start + 100)
                        .build(),
                )
                .await
                .unwrap();
        }
        store.soft_delete("te-b", 0, 9_000).await.unwrap();
        ListTimeEntriesByUserHandler::new(Arc::new(store), Arc::new(seeded_directory()))
    }

    fn ids(entries: &[TimeEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.time_entry_id.as_str()).collect()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_newest_first_without_deleted_entries(
        #[future] handler: ListTimeEntriesByUserHandler,
    ) {
        let entries = handler
            .await
            .handle(ListTimeEntriesByUser::first_page(USER_ID))
            .await
            .unwrap();
        assert_eq!(ids(&entries), vec!["te-c", "te-a"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_page_in_ascending_order(#[future] handler: ListTimeEntriesByUserHandler) {
        let query = ListTimeEntriesByUser {
            user_id: USER_ID.into(),
            offset: 1,
            limit: 5,
            sort_desc: false,
        };
        let entries = handler.await.handle(query).await.unwrap();
        assert_eq!(ids(&entries), vec!["te-c"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_user_does_not_exist(
        #[future] handler: ListTimeEntriesByUserHandler,
    ) {
        let result = handler
            .await
            .handle(ListTimeEntriesByUser::first_page("user-404"))
            .await;
        assert_eq!(result, Err(ApplicationError::not_found("user", "user-404")));
    }
}
