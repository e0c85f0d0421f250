use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::query_rejection;
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PausedTimeEntriesParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<PausedTimeEntriesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejection(rejection),
    };

    match state.get_paused_time_entries.handle(&params.user_id).await {
        Ok(entries) => {
            let now = now_millis();
            let views: Vec<TimeEntryView> = entries
                .into_iter()
                .map(|e| TimeEntryView::at(e, now))
                .collect();
            Json(views).into_response()
        }
        Err(error) => error.into_response(),
    }
}
