use crate::modules::time_entries::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::time_entries::adapters::outbound::sqlite::SqliteStore;
use crate::modules::time_entries::adapters::outbound::time_entries_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::application_error::ApplicationError;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::query::ListTimeEntriesByUser;
use crate::modules::time_entries::use_cases::pause_time_entry::command::PauseTimeEntry;
use crate::modules::time_entries::use_cases::resume_time_entry::command::ResumeTimeEntry;
use crate::modules::time_entries::use_cases::start_time_entry::command::StartTimeEntry;
use crate::modules::time_entries::use_cases::stop_time_entry::command::StopTimeEntry;
use crate::shell::seed::SeedData;
use crate::shell::state::AppState;
use rstest::rstest;
use std::sync::Arc;

const T0: i64 = 1_700_000_000_000;
const SEED: &str = r#"{
    "users": [{ "user_id": "U1" }],
    "tasks": [{ "task_id": "T1" }, { "task_id": "T2" }]
}"#;

#[derive(Debug, Clone, Copy)]
enum Backend {
    InMemory,
    Sqlite,
}

async fn state_for(backend: Backend) -> AppState {
    match backend {
        Backend::InMemory => {
            let directory = Arc::new(InMemoryDirectory::new());
            SeedData::from_json(SEED)
                .unwrap()
                .apply(&*directory, &*directory)
                .await
                .unwrap();
            AppState::new(
                Arc::new(InMemoryTimeEntryStore::new()),
                directory.clone(),
                directory,
            )
        }
        Backend::Sqlite => {
            let store = Arc::new(SqliteStore::open_in_memory().unwrap());
            SeedData::from_json(SEED)
                .unwrap()
                .apply(&*store, &*store)
                .await
                .unwrap();
            AppState::new(store.clone(), store.clone(), store)
        }
    }
}

async fn start(state: &AppState, id: &str, task_id: &str, at: i64) -> Result<String, ApplicationError> {
    state
        .start_time_entry
        .handle(StartTimeEntry {
            time_entry_id: id.into(),
            user_id: "U1".into(),
            task_id: task_id.into(),
            occurred_at: at,
        })
        .await
        .map(|entry| entry.time_entry_id)
}

fn pause(id: &str, at: i64) -> PauseTimeEntry {
    PauseTimeEntry {
        time_entry_id: id.into(),
        occurred_at: at,
    }
}

fn resume(id: &str, at: i64) -> ResumeTimeEntry {
    ResumeTimeEntry {
        time_entry_id: id.into(),
        occurred_at: at,
    }
}

fn stop(id: &str, at: i64) -> StopTimeEntry {
    StopTimeEntry {
        time_entry_id: id.into(),
        occurred_at: at,
    }
}

#[rstest]
#[case(Backend::InMemory)]
#[case(Backend::Sqlite)]
#[tokio::test]
async fn starting_a_second_timer_conflicts_with_the_running_one(#[case] backend: Backend) {
    let state = state_for(backend).await;
    let e1 = start(&state, "E1", "T1", T0).await.unwrap();

    let second = start(&state, "E2", "T2", T0 + 1_000).await;

    assert!(matches!(
        second,
        Err(ApplicationError::ConflictingActiveSession { .. })
    ));
    let current = state.get_current_time_entry.handle("U1").await.unwrap().unwrap();
    assert_eq!(current.time_entry_id, e1);
    assert_eq!(current.end, None);
}

#[rstest]
#[case(Backend::InMemory)]
#[case(Backend::Sqlite)]
#[tokio::test]
async fn pausing_and_resuming_accumulates_the_paused_interval(#[case] backend: Backend) {
    let state = state_for(backend).await;
    start(&state, "E1", "T1", T0).await.unwrap();

    let paused = state.pause_time_entry.handle(pause("E1", T0 + 10_000)).await.unwrap();
    assert_eq!(paused.state, TimeEntryState::Paused);
    assert_eq!(paused.last_paused_at, Some(T0 + 10_000));

    let resumed = state
        .resume_time_entry
        .handle(resume("E1", T0 + 25_000))
        .await
        .unwrap();
    assert_eq!(resumed.state, TimeEntryState::Running);
    assert_eq!(resumed.total_paused_ms, paused.total_paused_ms + 15_000);
    assert_eq!(resumed.last_paused_at, None);
}

#[rstest]
#[case(Backend::InMemory)]
#[case(Backend::Sqlite)]
#[tokio::test]
async fn a_stopped_entry_reports_wall_time_minus_paused_time(#[case] backend: Backend) {
    let state = state_for(backend).await;
    start(&state, "E1", "T1", T0).await.unwrap();
    state.pause_time_entry.handle(pause("E1", T0 + 60_000)).await.unwrap();
    state.resume_time_entry.handle(resume("E1", T0 + 90_000)).await.unwrap();

    let stopped = state.stop_time_entry.handle(stop("E1", T0 + 150_000)).await.unwrap();

    assert_eq!(stopped.state, TimeEntryState::Completed);
    assert_eq!(stopped.end, Some(T0 + 150_000));
    assert_eq!(stopped.duration_ms(T0 + 999_000), 120_000);
}

#[rstest]
#[case(Backend::InMemory)]
#[case(Backend::Sqlite)]
#[tokio::test]
async fn pausing_a_paused_entry_is_an_invalid_transition(#[case] backend: Backend) {
    let state = state_for(backend).await;
    start(&state, "E1", "T1", T0).await.unwrap();
    state.pause_time_entry.handle(pause("E1", T0 + 1_000)).await.unwrap();

    let result = state.pause_time_entry.handle(pause("E1", T0 + 2_000)).await;

    assert!(matches!(result, Err(ApplicationError::InvalidTransition(_))));
    let paused = state.get_paused_time_entries.handle("U1").await.unwrap();
    assert_eq!(paused[0].last_paused_at, Some(T0 + 1_000));
}

#[rstest]
#[case(Backend::InMemory)]
#[case(Backend::Sqlite)]
#[tokio::test]
async fn nothing_is_current_once_every_entry_is_stopped(#[case] backend: Backend) {
    let state = state_for(backend).await;
    start(&state, "E1", "T1", T0).await.unwrap();
    state.pause_time_entry.handle(pause("E1", T0 + 1_000)).await.unwrap();
    start(&state, "E2", "T2", T0 + 2_000).await.unwrap();

    state.stop_time_entry.handle(stop("E1", T0 + 3_000)).await.unwrap();
    state.stop_time_entry.handle(stop("E2", T0 + 4_000)).await.unwrap();

    assert_eq!(state.get_current_time_entry.handle("U1").await.unwrap(), None);
    assert!(state.get_paused_time_entries.handle("U1").await.unwrap().is_empty());
}

#[rstest]
#[case(Backend::InMemory)]
#[case(Backend::Sqlite)]
#[tokio::test]
async fn a_completed_entry_cannot_be_resurrected(#[case] backend: Backend) {
    let state = state_for(backend).await;
    start(&state, "E1", "T1", T0).await.unwrap();
    state.stop_time_entry.handle(stop("E1", T0 + 1_000)).await.unwrap();

    let paused = state.pause_time_entry.handle(pause("E1", T0 + 2_000)).await;
    let resumed = state.resume_time_entry.handle(resume("E1", T0 + 2_000)).await;
    let stopped = state.stop_time_entry.handle(stop("E1", T0 + 2_000)).await;

    for result in [paused, resumed, stopped] {
        assert!(matches!(result, Err(ApplicationError::InvalidTransition(_))));
    }
    let listed = state
        .list_time_entries_by_user
        .handle(ListTimeEntriesByUser::first_page("U1"))
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].state, TimeEntryState::Completed);
    assert_eq!(listed[0].end, Some(T0 + 1_000));
    assert_eq!(listed[0].last_paused_at, None);
}
