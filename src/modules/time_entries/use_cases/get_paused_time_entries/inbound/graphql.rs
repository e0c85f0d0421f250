use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql::{GqlTimeEntry, gql_error};
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetPausedTimeEntriesQuery;

#[Object]
impl GetPausedTimeEntriesQuery {
    async fn paused_time_entries(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entries = state
            .get_paused_time_entries
            .handle(&user_id)
            .await
            .map_err(gql_error)?;
        let now = now_millis();
        Ok(entries
            .into_iter()
            .map(|e| TimeEntryView::at(e, now).into())
            .collect())
    }
}
