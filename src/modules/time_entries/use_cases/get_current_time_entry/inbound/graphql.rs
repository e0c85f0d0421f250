use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql::{GqlTimeEntry, gql_error};
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct GetCurrentTimeEntryQuery;

#[Object]
impl GetCurrentTimeEntryQuery {
    async fn current_time_entry(
        &self,
        context: &Context<'_>,
        user_id: String,
    ) -> GqlResult<Option<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .get_current_time_entry
            .handle(&user_id)
            .await
            .map_err(gql_error)?;
        let now = now_millis();
        Ok(entry.map(|e| TimeEntryView::at(e, now).into()))
    }
}
