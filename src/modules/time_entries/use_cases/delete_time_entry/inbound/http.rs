use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::json_rejection;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteTimeEntryBody {
    pub time_entry_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };

    let command = DeleteTimeEntry {
        time_entry_id: body.time_entry_id,
        occurred_at: now_millis(),
    };

    match state.delete_time_entry.handle(command).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error.into_response(),
    }
}
