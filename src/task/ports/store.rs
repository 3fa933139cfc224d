//! Store port for task persistence, lookup, and deletion.

use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// The store owns the canonical copy of each task keyed by its identifier.
/// A save either fully replaces the record or fails; partial writes do not
/// occur.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persists a task.
    ///
    /// Inserts when the task carries no identifier, assigning a fresh one;
    /// otherwise overwrites the record matching the identifier. Returns the
    /// persisted task including its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::MissingRecord`] when the task carries an
    /// identifier the store has never seen.
    async fn save(&self, task: &Task) -> TaskStoreResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Returns all task records. Order is not significant.
    async fn find_all(&self) -> TaskStoreResult<Vec<Task>>;

    /// Returns all task records with exactly the given status.
    async fn find_by_status(&self, status: TaskStatus) -> TaskStoreResult<Vec<Task>>;

    /// Reports whether a record with the given identifier exists.
    async fn exists_by_id(&self, id: TaskId) -> TaskStoreResult<bool>;

    /// Removes the record if present; idempotent no-op when absent.
    ///
    /// Surfacing "not found" on delete is the service's responsibility,
    /// not the store's.
    async fn delete_by_id(&self, id: TaskId) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// An overwrite addressed an identifier the store has never seen.
    #[error("no stored record for task: {0}")]
    MissingRecord(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
