// AppState wired over in-memory stores seeded with the fixture directory.

use crate::modules::time_entries::adapters::outbound::time_entries_in_memory::InMemoryTimeEntryStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::directory::seeded_directory;
use std::sync::Arc;

pub fn in_memory_state() -> (AppState, Arc<InMemoryTimeEntryStore>) {
    let store = Arc::new(InMemoryTimeEntryStore::new());
    let directory = Arc::new(seeded_directory());
    let state = AppState::new(store.clone(), directory.clone(), directory);
    (state, store)
}

pub fn offline_state() -> AppState {
    let mut store = InMemoryTimeEntryStore::new();
    store.toggle_offline();
    let directory = Arc::new(seeded_directory());
    AppState::new(Arc::new(store), directory.clone(), directory)
}
