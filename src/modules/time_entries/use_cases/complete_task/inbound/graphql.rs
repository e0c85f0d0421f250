use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_entries::adapters::inbound::graphql::{GqlTimeEntry, gql_error};
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::modules::time_entries::use_cases::complete_task::command::CompleteTask;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlCompletedTask {
    pub task_id: String,
    pub stopped_time_entry: Option<GqlTimeEntry>,
}

#[derive(Default)]
pub struct CompleteTaskMutation;

#[Object]
impl CompleteTaskMutation {
    async fn complete_task(
        &self,
        context: &Context<'_>,
        task_id: String,
        user_id: String,
    ) -> GqlResult<GqlCompletedTask> {
        let state = context.data_unchecked::<AppState>();
        let command = CompleteTask {
            task_id,
            user_id,
            occurred_at: now_millis(),
        };
        let outcome = state
            .complete_task
            .handle(command)
            .await
            .map_err(gql_error)?;
        let now = now_millis();
        Ok(GqlCompletedTask {
            task_id: outcome.task_id,
            stopped_time_entry: outcome
                .stopped_time_entry
                .map(|entry| TimeEntryView::at(entry, now).into()),
        })
    }
}
