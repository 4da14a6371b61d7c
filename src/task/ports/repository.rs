//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations maintain tasks in insertion order: `get_all` returns
/// tasks in the order their `save` calls completed.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Appends a task to the end of the stored sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::IdentifierCollision`] when a task with
    /// the same identifier is already stored. Identifiers are generated
    /// randomly at construction, so a collision means the uniqueness
    /// invariant has been violated upstream; callers treat it as
    /// unrecoverable.
    async fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Returns all stored tasks in insertion order.
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when no stored task carries the identifier.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Removes all tasks matching the identifier (at most one, given the
    /// uniqueness invariant).
    ///
    /// Returns `true` when the stored sequence shrank. Exposed as a store
    /// capability; the lifecycle service does not currently invoke it.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("task identifier collision: {0}")]
    IdentifierCollision(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
