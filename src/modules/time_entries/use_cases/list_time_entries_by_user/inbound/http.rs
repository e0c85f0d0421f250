use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::http::query_rejection;
use crate::modules::time_entries::core::view::TimeEntryView;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::query::{
    DEFAULT_LIMIT, ListTimeEntriesByUser,
};
use crate::shared::core::primitives::now_millis;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTimeEntriesParams {
    pub user_id: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListTimeEntriesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejection(rejection),
    };

    let query = ListTimeEntriesByUser {
        user_id: params.user_id,
        offset: params.offset.unwrap_or(0),
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        sort_desc: params.sort_desc.unwrap_or(true),
    };

    match state.list_time_entries_by_user.handle(query).await {
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
