//! Service layer for task creation, mutation, and analytics.

use crate::task::{
    domain::{
        AnalyticsSnapshot, EstimatedHours, NewTask, OwnerId, ResolvedPatch, Tag, Task,
        TaskDomainError, TaskId, TaskPatch, TaskPriority,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
///
/// Holds raw external input; validation happens when the service converts
/// it into domain values.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Option<String>,
    due_date: Option<DateTime<Utc>>,
    estimated_hours: Option<f64>,
    tags: Vec<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
            due_date: None,
            estimated_hours: None,
            tags: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority from its canonical string form.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the effort estimate in hours.
    #[must_use]
    pub const fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    /// Sets the task tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// No task matches the identifier under the requesting owner.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new pending task for the given owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError`] when input validation fails or the
    /// repository rejects persistence.
    pub async fn create_task(
        &self,
        owner_id: OwnerId,
        request: CreateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let mut new_task = NewTask::new(request.title)?;
        if let Some(description) = request.description {
            new_task = new_task.with_description(description);
        }
        if let Some(priority) = request.priority {
            let parsed = TaskPriority::try_from(priority.as_str())
                .map_err(TaskDomainError::from)?;
            new_task = new_task.with_priority(parsed);
        }
        if let Some(due_date) = request.due_date {
            new_task = new_task.with_due_date(due_date);
        }
        if let Some(hours) = request.estimated_hours {
            new_task = new_task.with_estimated_hours(EstimatedHours::new(hours)?);
        }
        let tags = request
            .tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<Vec<_>, _>>()?;
        new_task = new_task.with_tags(tags);

        let task = Task::create(owner_id, new_task, &*self.clock);
        self.repository.insert(&task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Applies a partial update to an owned task and returns the updated
    /// task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches the
    /// identifier under the owner, [`TaskLifecycleError::Domain`] when the
    /// patch is empty, and [`TaskLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn update_task(
        &self,
        owner_id: OwnerId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> TaskLifecycleResult<Task> {
        let task = self
            .repository
            .find_by_id(task_id, owner_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))?;

        let resolved = ResolvedPatch::resolve(&task, &patch, &*self.clock)?;
        let updated = self
            .repository
            .apply_patch(task_id, owner_id, &resolved)
            .await
            .map_err(|err| match err {
                TaskRepositoryError::NotFound(id) => TaskLifecycleError::NotFound(id),
                other => TaskLifecycleError::Repository(other),
            })?;
        debug!(task_id = %task_id, "task updated");
        Ok(updated)
    }

    /// Hard-deletes an owned task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task matches the
    /// identifier under the owner.
    pub async fn delete_task(&self, owner_id: OwnerId, task_id: TaskId) -> TaskLifecycleResult<()> {
        let removed = self.repository.delete(task_id, owner_id).await?;
        if !removed {
            return Err(TaskLifecycleError::NotFound(task_id));
        }
        info!(task_id = %task_id, "task deleted");
        Ok(())
    }

    /// Returns all tasks of the owner, newest creation first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_tasks(&self, owner_id: OwnerId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list_by_owner(owner_id).await?)
    }

    /// Retrieves an owned task by identifier.
    ///
    /// Returns `Ok(None)` when no task matches under the owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_task(
        &self,
        owner_id: OwnerId,
        task_id: TaskId,
    ) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id, owner_id).await?)
    }

    /// Computes the owner's productivity snapshot as of the current day.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when persistence lookup
    /// fails.
    pub async fn analytics(&self, owner_id: OwnerId) -> TaskLifecycleResult<AnalyticsSnapshot> {
        let tasks = self.repository.list_by_owner(owner_id).await?;
        let today = self.clock.utc().date_naive();
        Ok(AnalyticsSnapshot::compute(&tasks, today))
    }
}
