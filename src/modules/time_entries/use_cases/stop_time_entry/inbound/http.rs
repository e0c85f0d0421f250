use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::json_rejection;
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::modules::time_entries::use_cases::stop_time_entry::command::StopTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StopTimeEntryBody {
    pub time_entry_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<StopTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };

    let command = StopTimeEntry {
        time_entry_id: body.time_entry_id,
        occurred_at: now_millis(),
    };

    match state.stop_time_entry.handle(command).await {
        Ok(entry) => Json(TimeEntryView::at(entry, now_millis())).into_response(),
        Err(error) => error.into_response(),
    }
}
