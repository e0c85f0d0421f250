// Composition root for the time_entries bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory or SQLite stores.
// - Wire stores into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;

use std::sync::Arc;

use crate::modules::time_entries::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::time_entries::adapters::outbound::sqlite::SqliteStore;
use crate::modules::time_entries::adapters::outbound::time_entries_in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::core::ports::{TaskDirectory, TimeEntryRepository, UserDirectory};
use crate::shell::config::{AppConfig, StorageConfig};
use crate::shell::seed::SeedData;
use crate::shell::state::AppState;
use anyhow::Context;

struct Stores {
    repository: Arc<dyn TimeEntryRepository>,
    tasks: Arc<dyn TaskDirectory>,
    users: Arc<dyn UserDirectory>,
}

fn open_stores(storage: &StorageConfig) -> anyhow::Result<Stores> {
    match storage {
        StorageConfig::InMemory => {
            let directory = Arc::new(InMemoryDirectory::new());
            Ok(Stores {
                repository: Arc::new(InMemoryTimeEntryStore::new()),
                tasks: directory.clone(),
                users: directory,
            })
        }
        StorageConfig::Sqlite { path } => {
            let store = Arc::new(SqliteStore::open(path).context("failed to open SQLite store")?);
            Ok(Stores {
                repository: store.clone(),
                tasks: store.clone(),
                users: store,
            })
        }
    }
}

/// Opens the configured stores, applies the seed file and builds the state.
pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let stores = open_stores(&config.storage)?;
    if let Some(path) = &config.seed_file {
        SeedData::from_file(path)?
            .apply(&*stores.users, &*stores.tasks)
            .await?;
    }
    Ok(AppState::new(stores.repository, stores.tasks, stores.users))
}
