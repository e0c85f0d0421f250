use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql::{GqlTimeEntry, gql_error};
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::modules::time_entries::use_cases::start_time_entry::command::StartTimeEntry;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StartTimeEntryMutation;

#[Object]
impl StartTimeEntryMutation {
    async fn start_time_entry(
        &self,
        context: &Context<'_>,
        task_id: String,
        user_id: String,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = StartTimeEntry {
            time_entry_id: new_id(),
            user_id,
            task_id,
            occurred_at: now_millis(),
        };
        let entry = state
            .start_time_entry
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(TimeEntryView::at(entry, now_millis()).into())
    }
}
