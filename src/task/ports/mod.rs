//! Port contracts for the task-tracking core.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod notifier;
pub mod repository;

pub use notifier::{NotificationSender, NotifierError, NotifierResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
