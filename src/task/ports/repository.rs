//! Repository port for owner-scoped task persistence.

use crate::task::domain::{OwnerId, ResolvedPatch, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Every operation is scoped to an owning principal: a lookup or mutation
/// under the wrong owner behaves exactly like one against a missing task,
/// so ownership is never leaked through error shapes.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Conflict`] when a task with the same
    /// identifier already exists.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier under the given owner.
    ///
    /// Returns `None` when no task matches both identifier and owner.
    async fn find_by_id(&self, id: TaskId, owner_id: OwnerId)
    -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks of the given owner, newest creation first.
    async fn list_by_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>>;

    /// Atomically applies a resolved patch to the matching row and returns
    /// the updated task.
    ///
    /// The match on identifier and owner happens inside the same update, so
    /// there is no window between an existence check and the mutation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no row matches both
    /// identifier and owner.
    async fn apply_patch(
        &self,
        id: TaskId,
        owner_id: OwnerId,
        patch: &ResolvedPatch,
    ) -> TaskRepositoryResult<Task>;

    /// Removes the matching row.
    ///
    /// Returns `true` when a row was removed and `false` when nothing
    /// matched; the caller maps `false` to its not-found shape.
    async fn delete(&self, id: TaskId, owner_id: OwnerId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No task matches the identifier under the requesting owner.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The mutation conflicts with existing state. Currently raised only
    /// for identifier collisions on insert; reserved for concurrent-update
    /// detection.
    #[error("conflicting update for task: {0}")]
    Conflict(TaskId),

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
