//! Task aggregate root and priority classification.

use super::{ParseTaskPriorityError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Ordinal task priority.
///
/// Priorities order from least to most urgent; [`TaskPriority::High`] and
/// [`TaskPriority::Critical`] trigger a notification attempt on creation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Routine work, no urgency.
    #[default]
    Low,
    /// Ordinary scheduled work.
    Medium,
    /// Urgent work; triggers a notification.
    High,
    /// Highest urgency; triggers a notification.
    Critical,
}

impl TaskPriority {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Returns `true` when creating a task at this priority must attempt a
    /// notification.
    #[must_use]
    pub const fn is_important(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Task aggregate root.
///
/// Constructed exactly once at creation time and never mutated afterwards;
/// the store hands out clones rather than exposing mutable access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: String,
    priority: TaskPriority,
    is_completed: bool,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh identifier and creation timestamp.
    #[must_use]
    pub fn new(
        title: TaskTitle,
        description: String,
        priority: TaskPriority,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
            priority,
            // No operation in this core completes a task; the flag exists
            // for the transport wire shape and future lifecycle work.
            is_completed: false,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
