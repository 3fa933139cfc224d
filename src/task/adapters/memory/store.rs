//! In-memory store for task record tests and lightweight deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, HashMap<TaskId, Task>>> {
        self.state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, HashMap<TaskId, Task>>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn save(&self, task: &Task) -> TaskStoreResult<Task> {
        let mut tasks = self.write()?;
        let (id, persisted) = match task.id() {
            Some(existing) => {
                if !tasks.contains_key(&existing) {
                    return Err(TaskStoreError::MissingRecord(existing));
                }
                (existing, task.clone())
            }
            None => {
                let assigned = TaskId::new();
                (assigned, task.clone().with_id(assigned))
            }
        };
        tasks.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let tasks = self.read()?;
        Ok(tasks.get(&id).cloned())
    }

    async fn find_all(&self) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.read()?;
        Ok(tasks.values().cloned().collect())
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.read()?;
        Ok(tasks
            .values()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskStoreResult<bool> {
        let tasks = self.read()?;
        Ok(tasks.contains_key(&id))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut tasks = self.write()?;
        tasks.remove(&id);
        Ok(())
    }
}
