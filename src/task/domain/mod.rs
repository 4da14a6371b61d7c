//! Domain model for the task-tracking core.
//!
//! The task domain models validated task creation and priority
//! classification while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskPriorityError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{Task, TaskPriority};
