use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use timer_sessions::modules::time_entries::adapters::outbound::sqlite::SqliteStore;
use timer_sessions::shell::http::router;
use timer_sessions::shell::seed::SeedData;
use timer_sessions::shell::state::AppState;
use tower::ServiceExt;

async fn app() -> Router {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    SeedData::from_json(
        r#"{"users":[{"user_id":"u-1"}],"tasks":[{"task_id":"t-1"},{"task_id":"t-2"}]}"#,
    )
    .unwrap()
    .apply(&*store, &*store)
    .await
    .unwrap();
    router(AppState::new(store.clone(), store.clone(), store))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn it_should_run_a_full_timer_session_over_http() {
    let app = app().await;

    let (status, started) = send(
        &app,
        post("/start-time-entry", json!({"task_id": "t-1", "user_id": "u-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = started["time_entry_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        post("/start-time-entry", json!({"task_id": "t-2", "user_id": "u-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflicting_active_session");

    let (status, paused) = send(&app, post("/pause-time-entry", json!({"time_entry_id": id}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paused["state"], "Paused");

    let (status, listed) = send(&app, get("/paused-time-entries?user_id=u-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["time_entry_id"], id.as_str());

    let (status, _) = send(&app, post("/resume-time-entry", json!({"time_entry_id": id}))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, current) = send(&app, get("/current-time-entry?user_id=u-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["state"], "Running");

    let (status, stopped) = send(&app, post("/stop-time-entry", json!({"time_entry_id": id}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stopped["state"], "Completed");

    let (status, _) = send(&app, post("/stop-time-entry", json!({"time_entry_id": id}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, current) = send(&app, get("/current-time-entry?user_id=u-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current, Value::Null);

    let (status, _) = send(&app, post("/delete-time-entry", json!({"time_entry_id": id}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, listed) = send(&app, get("/list-time-entries?user_id=u-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn it_should_stop_the_timer_when_its_task_is_completed() {
    let app = app().await;
    let (_, started) = send(
        &app,
        post("/start-time-entry", json!({"task_id": "t-1", "user_id": "u-1"})),
    )
    .await;

    let (status, body) = send(
        &app,
        post("/complete-task", json!({"task_id": "t-1", "user_id": "u-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["stopped_time_entry"]["time_entry_id"],
        started["time_entry_id"]
    );

    let (status, body) = send(
        &app,
        post("/start-time-entry", json!({"task_id": "t-1", "user_id": "u-1"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "invalid_transition");
}

#[tokio::test]
async fn it_should_serve_graphql_on_the_same_router() {
    let app = app().await;
    let (status, body) = send(
        &app,
        post(
            "/gql",
            json!({"query": r#"mutation { startTimeEntry(taskId: "t-1", userId: "u-1") { state durationMs } }"#}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["startTimeEntry"]["state"], "RUNNING");

    let (_, body) = send(
        &app,
        post(
            "/gql",
            json!({"query": r#"{ currentTimeEntry(userId: "u-404") { timeEntryId } }"#}),
        ),
    )
    .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "not_found");
}
