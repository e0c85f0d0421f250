// Loads users and tasks into the directories at startup.
//
// File shape: { "users": [{ "user_id": .. }], "tasks": [{ "task_id": .., "is_completed": .. }] }

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

use crate::modules::time_entries::core::ports::{TaskDirectory, TaskRef, UserDirectory, UserRef};

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<UserRef>,
    #[serde(default)]
    pub tasks: Vec<TaskRef>,
}

impl SeedData {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid seed file")
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        Self::from_json(&json)
    }

    pub async fn apply(
        self,
        users: &dyn UserDirectory,
        tasks: &dyn TaskDirectory,
    ) -> anyhow::Result<()> {
        let (user_count, task_count) = (self.users.len(), self.tasks.len());
        for user in self.users {
            let user_id = user.user_id.clone();
            users
                .upsert_user(user)
                .await
                .with_context(|| format!("failed to seed user {user_id}"))?;
        }
        for task in self.tasks {
            let task_id = task.task_id.clone();
            tasks
                .upsert_task(task)
                .await
                .with_context(|| format!("failed to seed task {task_id}"))?;
        }
        tracing::info!(users = user_count, tasks = task_count, "seeded directories");
        Ok(())
    }
}
