//! In-memory repository for task lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{OwnerId, ResolvedPatch, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.contains_key(&task.id()) {
            return Err(TaskRepositoryError::Conflict(task.id()));
        }
        state.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .get(&id)
            .filter(|task| task.owner_id() == owner_id)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tasks: Vec<Task> = state
            .values()
            .filter(|task| task.owner_id() == owner_id)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(tasks)
    }

    async fn apply_patch(
        &self,
        id: TaskId,
        owner_id: OwnerId,
        patch: &ResolvedPatch,
    ) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        let task = state
            .get_mut(&id)
            .filter(|task| task.owner_id() == owner_id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.apply_resolved(patch);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId, owner_id: OwnerId) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_error)?;
        let owned = state
            .get(&id)
            .is_some_and(|task| task.owner_id() == owner_id);
        if owned {
            state.remove(&id);
        }
        Ok(owned)
    }
}
