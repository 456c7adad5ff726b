//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use steward::task::{
    adapters::memory::InMemoryTaskRepository, domain::OwnerId, services::TaskLifecycleService,
};

/// Task service type used by the in-memory suites.
pub type TestTaskService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Creates a task service over a fresh in-memory repository.
#[must_use]
pub fn task_service() -> TestTaskService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Creates a fresh owner identity.
#[must_use]
pub fn owner() -> OwnerId {
    OwnerId::new()
}
