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
pub struct CurrentTimeEntryParams {
    pub user_id: String,
}

/// 200 with the running entry, or 200 with `null` when nothing runs.
pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<CurrentTimeEntryParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return query_rejection(rejection),
    };

    match state.get_current_time_entry.handle(&params.user_id).await {
        Ok(entry) => {
            let now = now_millis();
            Json(entry.map(|e| TimeEntryView::at(e, now))).into_response()
        }
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod get_current_time_entry_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::time_entries::core::ports::TimeEntryRepository;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::in_memory_state;
    use crate::tests::fixtures::time_entries::TimeEntryBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/current-time-entry", get(handle))
            .with_state(state)
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_return_null_when_nothing_is_running() {
        let (state, _store) = in_memory_state();
        let (status, json) = get_json(state, "/current-time-entry?user_id=user-fixed-0001").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn it_should_return_the_running_entry() {
        let (state, store) = in_memory_state();
        store.insert(&TimeEntryBuilder::new().build()).await.unwrap();
        let (status, json) = get_json(state, "/current-time-entry?user_id=user-fixed-0001").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["time_entry_id"], "te-fixed-0001");
    }

    #[tokio::test]
    async fn it_should_return_400_when_user_id_is_missing() {
        let (state, _store) = in_memory_state();
        let (status, json) = get_json(state, "/current-time-entry").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "validation_error");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_user() {
        let (state, _store) = in_memory_state();
        let (status, _json) = get_json(state, "/current-time-entry?user_id=user-404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
