use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::time_entries::use_cases::complete_task::inbound::graphql::CompleteTaskMutation;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::graphql::DeleteTimeEntryMutation;
use crate::modules::time_entries::use_cases::get_current_time_entry::inbound::graphql::GetCurrentTimeEntryQuery;
use crate::modules::time_entries::use_cases::get_paused_time_entries::inbound::graphql::GetPausedTimeEntriesQuery;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::graphql::ListTimeEntriesByUserQuery;
use crate::modules::time_entries::use_cases::pause_time_entry::inbound::graphql::PauseTimeEntryMutation;
use crate::modules::time_entries::use_cases::resume_time_entry::inbound::graphql::ResumeTimeEntryMutation;
use crate::modules::time_entries::use_cases::start_time_entry::inbound::graphql::StartTimeEntryMutation;
use crate::modules::time_entries::use_cases::stop_time_entry::inbound::graphql::StopTimeEntryMutation;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    GetCurrentTimeEntryQuery,
    GetPausedTimeEntriesQuery,
    ListTimeEntriesByUserQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    StartTimeEntryMutation,
    PauseTimeEntryMutation,
    ResumeTimeEntryMutation,
    StopTimeEntryMutation,
    DeleteTimeEntryMutation,
    CompleteTaskMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
