//! Service layer orchestrating task creation, mutation, and lookup.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The addressed task identifier is absent from the store.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Store operation failed; passed through unmodified.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task tracking orchestration service.
///
/// Each operation is a self-contained load, mutate, save sequence against
/// the store; the service holds no state between calls and caches nothing.
/// A read-modify-write is not protected against a concurrent write to the
/// same identifier; the store's own consistency guarantees apply.
pub struct TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

// Manual impl: a derive would demand S: Clone and C: Clone even though
// only the Arcs are cloned.
impl<S, C> Clone for TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> TaskService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates and persists a new task.
    ///
    /// Returns the persisted task including its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the name violates its
    /// invariants, in which case nothing is persisted, or
    /// [`TaskServiceError::Store`] when persistence fails.
    pub async fn create(
        &self,
        name: impl Into<String> + Send,
        description: impl Into<String> + Send,
    ) -> TaskServiceResult<Task> {
        let task = Task::new(name, description, &*self.clock)?;
        Ok(self.store.save(&task).await?)
    }

    /// Returns all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store lookup fails.
    pub async fn find_all(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.store.find_all().await?)
    }

    /// Returns all tasks with exactly the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the store lookup fails.
    pub async fn find_by_status(&self, status: TaskStatus) -> TaskServiceResult<Vec<Task>> {
        Ok(self.store.find_by_status(status).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record matches the
    /// identifier, or [`TaskServiceError::Store`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    /// Marks a task as done and persists it.
    ///
    /// Idempotent beyond the re-save: marking an already-done task has no
    /// observable effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record matches the
    /// identifier, or [`TaskServiceError::Store`] when persistence fails.
    pub async fn mark_as_done(&self, id: TaskId) -> TaskServiceResult<()> {
        let mut task = self.find_by_id(id).await?;
        task.mark_done();
        self.store.save(&task).await?;
        Ok(())
    }

    /// Replaces a task's description and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record matches the
    /// identifier, [`TaskServiceError::Domain`] when the replacement is
    /// blank, or [`TaskServiceError::Store`] when persistence fails.
    pub async fn update_description(
        &self,
        id: TaskId,
        description: impl Into<String> + Send,
    ) -> TaskServiceResult<()> {
        let mut task = self.find_by_id(id).await?;
        task.update_description(description)?;
        self.store.save(&task).await?;
        Ok(())
    }

    /// Deletes a task record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no record matches the
    /// identifier, or [`TaskServiceError::Store`] when the store fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(TaskServiceError::NotFound(id));
        }
        Ok(self.store.delete_by_id(id).await?)
    }
}
