//! Task aggregate root and related task lifecycle types.

use super::{
    ActualHours, EstimatedHours, OwnerId, ParseTaskPriorityError, ParseTaskStatusError,
    ResolvedPatch, Tag, TaskDomainError, TaskId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Task lifecycle status.
///
/// Any status may transition to any other; stamping and clearing
/// `completed_at` is the only transition-sensitive behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task work has finished.
    Completed,
    /// Task has passed its due date without completion.
    Overdue,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal scheduling.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl TaskPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
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
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Validated payload for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    title: String,
    description: Option<String>,
    priority: TaskPriority,
    due_date: Option<DateTime<Utc>>,
    estimated_hours: EstimatedHours,
    tags: BTreeSet<Tag>,
}

impl NewTask {
    /// Creates a new task payload with the required title.
    ///
    /// Priority defaults to medium and the effort estimate to one hour.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            description: None,
            priority: TaskPriority::default(),
            due_date: None,
            estimated_hours: EstimatedHours::default(),
            tags: BTreeSet::new(),
        })
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the task priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the effort estimate.
    #[must_use]
    pub const fn with_estimated_hours(mut self, estimated_hours: EstimatedHours) -> Self {
        self.estimated_hours = estimated_hours;
        self
    }

    /// Sets the task tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: OwnerId,
    title: String,
    description: Option<String>,
    priority: TaskPriority,
    status: TaskStatus,
    due_date: Option<DateTime<Utc>>,
    estimated_hours: EstimatedHours,
    actual_hours: ActualHours,
    tags: BTreeSet<Tag>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning principal.
    pub owner_id: OwnerId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted effort estimate.
    pub estimated_hours: EstimatedHours,
    /// Persisted recorded effort.
    pub actual_hours: ActualHours,
    /// Persisted tags.
    pub tags: BTreeSet<Tag>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new pending task for the given owner.
    #[must_use]
    pub fn create(owner_id: OwnerId, new_task: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner_id,
            title: new_task.title,
            description: new_task.description,
            priority: new_task.priority,
            status: TaskStatus::Pending,
            due_date: new_task.due_date,
            estimated_hours: new_task.estimated_hours,
            actual_hours: ActualHours::default(),
            tags: new_task.tags,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            due_date: data.due_date,
            estimated_hours: data.estimated_hours,
            actual_hours: data.actual_hours,
            tags: data.tags,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning principal.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the effort estimate.
    #[must_use]
    pub const fn estimated_hours(&self) -> EstimatedHours {
        self.estimated_hours
    }

    /// Returns the recorded effort.
    #[must_use]
    pub const fn actual_hours(&self) -> ActualHours {
        self.actual_hours
    }

    /// Returns the task tags.
    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp.
    ///
    /// Present exactly while the status is [`TaskStatus::Completed`].
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Applies a resolved patch to this aggregate.
    ///
    /// Stores that cannot express the patch as a single atomic row update
    /// use this to materialise the patched task.
    pub fn apply_resolved(&mut self, patch: &ResolvedPatch) {
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(estimated_hours) = patch.estimated_hours {
            self.estimated_hours = estimated_hours;
        }
        if let Some(actual_hours) = patch.actual_hours {
            self.actual_hours = actual_hours;
        }
        if let Some(tags) = &patch.tags {
            self.tags.clone_from(tags);
        }
        if let Some(completed_at) = patch.completed_at {
            self.completed_at = completed_at;
        }
        self.updated_at = patch.updated_at;
    }
}
