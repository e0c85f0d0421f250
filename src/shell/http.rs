use axum::{
    Extension, Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::time_entries::use_cases::complete_task::inbound::http as complete_task_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::get_current_time_entry::inbound::http as current_http;
use crate::modules::time_entries::use_cases::get_paused_time_entries::inbound::http as paused_http;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::http as list_http;
use crate::modules::time_entries::use_cases::pause_time_entry::inbound::http as pause_http;
use crate::modules::time_entries::use_cases::resume_time_entry::inbound::http as resume_http;
use crate::modules::time_entries::use_cases::start_time_entry::inbound::http as start_http;
use crate::modules::time_entries::use_cases::stop_time_entry::inbound::http as stop_http;
use crate::shell::graphql::{graphiql, graphql, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = schema(state.clone());
    Router::new()
        .route("/start-time-entry", post(start_http::handle))
        .route("/pause-time-entry", post(pause_http::handle))
        .route("/resume-time-entry", post(resume_http::handle))
        .route("/stop-time-entry", post(stop_http::handle))
        .route("/delete-time-entry", post(delete_http::handle))
        .route("/complete-task", post(complete_task_http::handle))
        .route("/current-time-entry", get(current_http::handle))
        .route("/paused-time-entries", get(paused_http::handle))
        .route("/list-time-entries", get(list_http::handle))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
