//! Shared world state for task completion BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use steward::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{OwnerId, Task, TaskDomainError},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task completion behaviour tests.
pub struct TaskCompletionWorld {
    pub service: TestTaskService,
    pub owner_id: OwnerId,
    pub last_created_task: Option<Task>,
    pub last_update_result: Option<Result<Task, TaskLifecycleError>>,
    pub last_patch_error: Option<TaskDomainError>,
}

impl TaskCompletionWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            owner_id: OwnerId::new(),
            last_created_task: None,
            last_update_result: None,
            last_patch_error: None,
        }
    }
}

impl Default for TaskCompletionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskCompletionWorld {
    TaskCompletionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
