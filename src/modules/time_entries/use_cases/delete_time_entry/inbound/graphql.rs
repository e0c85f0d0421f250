use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_entries::adapters::inbound::graphql::gql_error;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeEntryMutation;

#[Object]
impl DeleteTimeEntryMutation {
    /// Returns the id of the deleted entry.
    async fn delete_time_entry(&self, context: &Context<'_>, time_entry_id: String) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let command = DeleteTimeEntry {
            time_entry_id: time_entry_id.clone(),
            occurred_at: now_millis(),
        };
        state
            .delete_time_entry
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(ID(time_entry_id))
    }
}
