use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql::{GqlTimeEntry, gql_error};
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::query::{
    DEFAULT_LIMIT, ListTimeEntriesByUser,
};
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ListTimeEntriesByUserQuery;

#[Object]
impl ListTimeEntriesByUserQuery {
    async fn list_time_entries_by_user_id(
        &self,
        context: &Context<'_>,
        user_id: String,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_desc: Option<bool>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let query = ListTimeEntriesByUser {
            user_id,
            offset: offset.unwrap_or(0).max(0) as u64,
            limit: limit.map_or(DEFAULT_LIMIT, |l| l.max(0) as u64),
            sort_desc: sort_desc.unwrap_or(true),
        };
        let entries = state
            .list_time_entries_by_user
            .handle(query)
            .await
            .map_err(gql_error)?;
        let now = now_millis();
        Ok(entries
            .into_iter()
            .map(|e| TimeEntryView::at(e, now).into())
            .collect())
    }
}
