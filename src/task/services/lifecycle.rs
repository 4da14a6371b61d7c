//! Service layer for task creation and retrieval.

use crate::task::{
    domain::{Task, TaskDomainError, TaskPriority, TaskTitle},
    ports::{NotificationSender, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    priority: TaskPriority,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: TaskPriority) -> Self {
        Self {
            title: title.into(),
            priority,
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed; recoverable by the caller.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// One instance owns its repository and notification sender for its
/// lifetime and is injected into the transport adapter at startup; there is
/// no process-wide shared manager.
#[derive(Clone)]
pub struct TaskLifecycleService<R, N, C>
where
    R: TaskRepository,
    N: NotificationSender,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    notifier: Arc<N>,
    clock: Arc<C>,
}

impl<R, N, C> TaskLifecycleService<R, N, C>
where
    R: TaskRepository,
    N: NotificationSender,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            repository,
            notifier,
            clock,
        }
    }

    /// Creates a task: validate, persist, then notify on high or critical
    /// priority.
    ///
    /// The notification is fire-and-forget. By the time it is attempted the
    /// task is already saved, so a notifier failure never rolls the task
    /// back and never surfaces to the caller; it is logged at debug level
    /// and discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the title is invalid
    /// and [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = request.description.unwrap_or_default();
        let task = Task::new(title, description, request.priority, &*self.clock);
        self.repository.save(&task).await?;

        if task.priority().is_important() {
            let message = format!("Important Task: {}", task.title());
            if let Err(err) = self.notifier.send_notification(&message).await {
                tracing::debug!(error = %err, "notification dispatch failed, task already saved");
            }
        }

        Ok(task)
    }

    /// Returns all tasks in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the store cannot be
    /// read.
    pub async fn get_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.get_all().await?)
    }
}
