use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql::{GqlTimeEntry, gql_error};
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::modules::time_entries::use_cases::pause_time_entry::command::PauseTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct PauseTimeEntryMutation;

#[Object]
impl PauseTimeEntryMutation {
    async fn pause_time_entry(&self, context: &Context<'_>, time_entry_id: String) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let command = PauseTimeEntry {
            time_entry_id,
            occurred_at: now_millis(),
        };
        let entry = state.pause_time_entry.handle(command).await.map_err(gql_error)?;
        Ok(TimeEntryView::at(entry, now_millis()).into())
    }
}
