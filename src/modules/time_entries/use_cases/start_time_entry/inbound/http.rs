use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::json_rejection;
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::modules::time_entries::use_cases::start_time_entry::command::StartTimeEntry;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartTimeEntryBody {
    pub task_id: String,
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<StartTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };

    let command = StartTimeEntry {
        time_entry_id: new_id(),
        user_id: body.user_id,
        task_id: body.task_id,
        occurred_at: now_millis(),
    };

    match state.start_time_entry.handle(command).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(TimeEntryView::at(entry, now_millis())),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
