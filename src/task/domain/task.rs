//! Task entity and stored-data reconstruction.

use super::{TaskDomainError, TaskId, TaskName, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task entity: one unit of trackable work.
///
/// The entity enforces its field-level invariants independent of
/// persistence: the name is always non-blank and within length, the status
/// is always one of the enumerated values, and the creation timestamp is
/// always set. The identifier is set if and only if the task has been
/// persisted; the store owns the canonical copy keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    name: TaskName,
    description: String,
    status: TaskStatus,
    created: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created: DateTime<Utc>,
}

impl Task {
    /// Creates a new unpersisted task.
    ///
    /// The description may be empty at creation. The status starts at
    /// [`TaskStatus::Todo`] and the creation timestamp is taken from the
    /// clock once, never to change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankName`] or
    /// [`TaskDomainError::NameTooLong`] when the name violates its
    /// invariants.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            id: None,
            name: TaskName::new(name)?,
            description: description.into(),
            status: TaskStatus::Todo,
            created: clock.utc(),
        })
    }

    /// Reconstructs a task from persisted storage without validation.
    #[must_use]
    pub fn from_stored(data: StoredTaskData) -> Self {
        Self {
            id: Some(data.id),
            name: data.name,
            description: data.description,
            status: data.status,
            created: data.created,
        }
    }

    /// Returns the task identifier, or `None` when never persisted.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Marks the task as done.
    ///
    /// Idempotent: reapplying the done status is harmless, not an error.
    pub fn mark_done(&mut self) {
        self.status = TaskStatus::Done;
    }

    /// Replaces the description.
    ///
    /// The name, status, identifier, and creation timestamp are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankDescription`] when the replacement is
    /// empty or whitespace-only; the current description is left unchanged.
    pub fn update_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<(), TaskDomainError> {
        let replacement = description.into();
        if replacement.trim().is_empty() {
            return Err(TaskDomainError::BlankDescription);
        }
        self.description = replacement;
        Ok(())
    }

    /// Attaches the store-assigned identifier to a newly inserted task.
    ///
    /// Called by store adapters when persisting a task for the first time;
    /// the identifier is immutable thereafter.
    pub(crate) fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }
}
