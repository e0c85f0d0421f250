use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::time_entries::adapters::inbound::http::json_rejection;
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::modules::time_entries::use_cases::complete_task::command::CompleteTask;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CompleteTaskBody {
    pub task_id: String,
    pub user_id: String,
}

#[derive(Serialize)]
pub struct CompleteTaskResponse {
    pub task_id: String,
    pub stopped_time_entry: Option<TimeEntryView>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CompleteTaskBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return json_rejection(rejection),
    };

    let command = CompleteTask {
        task_id: body.task_id,
        user_id: body.user_id,
        occurred_at: now_millis(),
    };

    match state.complete_task.handle(command).await {
        Ok(outcome) => {
            let now = now_millis();
            Json(CompleteTaskResponse {
                task_id: outcome.task_id,
                stopped_time_entry: outcome
                    .stopped_time_entry
                    .map(|entry| TimeEntryView::at(entry, now)),
            })
            .into_response()
        }
        Err(error) => error.into_response(),
    }
}
