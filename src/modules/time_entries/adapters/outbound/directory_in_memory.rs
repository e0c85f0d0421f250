// In memory user and task directory.
//
// Purpose
// - Answer "does this user exist" and "is this task completed" in tests and
//   local development, seeded from fixtures.

use crate::modules::time_entries::core::ports::{
    RepositoryError, TaskDirectory, TaskRef, UserDirectory, UserRef,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDirectory {
    users: RwLock<HashMap<String, UserRef>>,
    tasks: RwLock<HashMap<String, TaskRef>>,
    is_offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(users: Vec<UserRef>, tasks: Vec<TaskRef>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.user_id.clone(), u)).collect()),
            tasks: RwLock::new(tasks.into_iter().map(|t| (t.task_id.clone(), t)).collect()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Directory offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TaskDirectory for InMemoryDirectory {
    async fn find_task(&self, task_id: &str) -> Result<Option<TaskRef>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.tasks.read().await.get(task_id).cloned())
    }

    async fn complete_task(&self, task_id: &str, _at: i64) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.tasks.write().await;
        let task = guard
            .get_mut(task_id)
            .ok_or_else(|| RepositoryError::NotFound(task_id.to_string()))?;
        if task.is_completed {
            return Err(RepositoryError::TaskAlreadyCompleted(task_id.to_string()));
        }
        task.is_completed = true;
        Ok(())
    }

    async fn reopen_task(&self, task_id: &str) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.tasks.write().await;
        let task = guard
            .get_mut(task_id)
            .ok_or_else(|| RepositoryError::NotFound(task_id.to_string()))?;
        task.is_completed = false;
        Ok(())
    }

    async fn upsert_task(&self, task: TaskRef) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.tasks.write().await;
        let stored = guard.entry(task.task_id.clone()).or_insert_with(|| task.clone());
        stored.is_completed |= task.is_completed;
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRef>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn upsert_user(&self, user: UserRef) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.users
            .write()
            .await
            .insert(user.user_id.clone(), user);
        Ok(())
    }
}
