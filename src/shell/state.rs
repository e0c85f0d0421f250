use crate::modules::time_entries::core::ports::{TaskDirectory, TimeEntryRepository, UserDirectory};
use crate::modules::time_entries::use_cases::complete_task::handler::CompleteTaskHandler;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::get_current_time_entry::handler::GetCurrentTimeEntryHandler;
use crate::modules::time_entries::use_cases::get_paused_time_entries::handler::GetPausedTimeEntriesHandler;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::ListTimeEntriesByUserHandler;
use crate::modules::time_entries::use_cases::pause_time_entry::handler::PauseTimeEntryHandler;
use crate::modules::time_entries::use_cases::resume_time_entry::handler::ResumeTimeEntryHandler;
use crate::modules::time_entries::use_cases::start_time_entry::handler::StartTimeEntryHandler;
use crate::modules::time_entries::use_cases::stop_time_entry::handler::StopTimeEntryHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub start_time_entry: Arc<StartTimeEntryHandler>,
    pub pause_time_entry: Arc<PauseTimeEntryHandler>,
    pub resume_time_entry: Arc<ResumeTimeEntryHandler>,
    pub stop_time_entry: Arc<StopTimeEntryHandler>,
    pub delete_time_entry: Arc<DeleteTimeEntryHandler>,
    pub complete_task: Arc<CompleteTaskHandler>,
    pub get_current_time_entry: Arc<GetCurrentTimeEntryHandler>,
    pub get_paused_time_entries: Arc<GetPausedTimeEntriesHandler>,
    pub list_time_entries_by_user: Arc<ListTimeEntriesByUserHandler>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn TimeEntryRepository>,
        tasks: Arc<dyn TaskDirectory>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            start_time_entry: Arc::new(StartTimeEntryHandler::new(
                repository.clone(),
                tasks.clone(),
                users.clone(),
            )),
            pause_time_entry: Arc::new(PauseTimeEntryHandler::new(repository.clone())),
            resume_time_entry: Arc::new(ResumeTimeEntryHandler::new(repository.clone())),
            stop_time_entry: Arc::new(StopTimeEntryHandler::new(repository.clone())),
            delete_time_entry: Arc::new(DeleteTimeEntryHandler::new(repository.clone())),
            complete_task: Arc::new(CompleteTaskHandler::new(
                repository.clone(),
                tasks,
                users.clone(),
            )),
            get_current_time_entry: Arc::new(GetCurrentTimeEntryHandler::new(
                repository.clone(),
                users.clone(),
            )),
            get_paused_time_entries: Arc::new(GetPausedTimeEntriesHandler::new(
                repository.clone(),
                users.clone(),
            )),
            list_time_entries_by_user: Arc::new(ListTimeEntriesByUserHandler::new(
                repository, users,
            )),
        }
    }
}
