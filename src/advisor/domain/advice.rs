//! Value objects exchanged with the advice service.

use super::AdvisorError;
use crate::task::domain::{Task, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's advice request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceQuery {
    query: String,
    context: Option<String>,
}

impl AdviceQuery {
    /// Creates a validated advice query.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::EmptyQuery`] if the query is empty after
    /// trimming.
    pub fn new(query: impl Into<String>) -> Result<Self, AdvisorError> {
        let raw = query.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(AdvisorError::EmptyQuery);
        }
        Ok(Self {
            query: normalized.to_owned(),
            context: None,
        })
    }

    /// Attaches free-text context to the query.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let value = context.into();
        let normalized = value.trim();
        self.context = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Returns the query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the attached context, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

/// Generated advice returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    /// Advice text as produced by the generative capability.
    pub text: String,
    /// Whether any recent tasks informed the prompt.
    pub context_used: bool,
}

/// Compact task view handed to the generative model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDigest {
    /// Task title.
    pub title: String,
    /// Lifecycle status.
    pub status: TaskStatus,
    /// Priority level.
    pub priority: TaskPriority,
    /// Due date, if any.
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDigest {
    /// Builds a digest of a single task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title().to_owned(),
            status: task.status(),
            priority: task.priority(),
            due_date: task.due_date(),
        }
    }
}

/// Aggregate productivity figures handed to the insight prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductivityDigest {
    /// All tasks, regardless of status.
    pub total_tasks: usize,
    /// Tasks with completed status.
    pub completed_tasks: usize,
    /// Completion rate in percent; zero for an empty task set.
    pub completion_rate_percent: f64,
    /// Mean effort estimate over all tasks; zero for an empty task set.
    pub avg_estimated_hours: f64,
}

impl ProductivityDigest {
    /// Summarises a task set for the insight prompt.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "rates and averages over task counts are inherently floating point"
    )]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total_tasks = tasks.len();
        let completed_tasks = tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Completed)
            .count();
        let completion_rate_percent = if total_tasks == 0 {
            0.0
        } else {
            completed_tasks as f64 / total_tasks as f64 * 100.0
        };
        let avg_estimated_hours = if total_tasks == 0 {
            0.0
        } else {
            tasks
                .iter()
                .map(|task| task.estimated_hours().value())
                .sum::<f64>()
                / total_tasks as f64
        };

        Self {
            total_tasks,
            completed_tasks,
            completion_rate_percent,
            avg_estimated_hours,
        }
    }
}
