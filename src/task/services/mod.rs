//! Application services for task record orchestration.

mod tracking;

pub use tracking::{TaskService, TaskServiceError, TaskServiceResult};
