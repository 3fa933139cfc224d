//! Domain model for task record keeping.
//!
//! The task domain models validated task creation, the status lifecycle, and
//! description updates while keeping all infrastructure concerns outside of
//! the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskId, TaskName};
pub use status::TaskStatus;
pub use task::{StoredTaskData, Task};
