//! In-memory integration tests for task lifecycle operations.

use super::helpers::{TestTaskService, owner, task_service};
use rstest::{fixture, rstest};
use steward::task::{
    domain::{TaskDomainError, TaskId, TaskPatch, TaskStatus},
    services::{CreateTaskRequest, TaskLifecycleError},
};

#[fixture]
fn service() -> TestTaskService {
    task_service()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_flows_through_completion_and_deletion(service: TestTaskService) {
    let owner_id = owner();

    let created = service
        .create_task(
            owner_id,
            CreateTaskRequest::new("Draft report").with_priority("high"),
        )
        .await
        .expect("task creation should succeed");
    assert_eq!(created.status(), TaskStatus::Pending);
    assert_eq!(created.estimated_hours().value(), 1.0);

    let patch = TaskPatch::new()
        .with_status("completed")
        .expect("valid status")
        .with_actual_hours(2.5)
        .expect("valid effort");
    let completed = service
        .update_task(owner_id, created.id(), patch)
        .await
        .expect("update should succeed");
    assert_eq!(completed.status(), TaskStatus::Completed);
    assert!(completed.completed_at().is_some());
    assert_eq!(completed.actual_hours().value(), 2.5);

    service
        .delete_task(owner_id, created.id())
        .await
        .expect("delete should succeed");
    let listed = service
        .list_tasks(owner_id)
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owners_never_see_each_others_tasks(service: TestTaskService) {
    let first_owner = owner();
    let second_owner = owner();

    let task = service
        .create_task(first_owner, CreateTaskRequest::new("Private task"))
        .await
        .expect("task creation should succeed");

    let foreign_list = service
        .list_tasks(second_owner)
        .await
        .expect("listing should succeed");
    assert!(foreign_list.is_empty());

    let foreign_delete = service.delete_task(second_owner, task.id()).await;
    assert!(matches!(
        foreign_delete,
        Err(TaskLifecycleError::NotFound(_))
    ));

    let own_list = service
        .list_tasks(first_owner)
        .await
        .expect("listing should succeed");
    assert_eq!(own_list.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn title_and_timestamp_invariants_hold_across_updates(service: TestTaskService) {
    let owner_id = owner();
    let created = service
        .create_task(owner_id, CreateTaskRequest::new("Draft report"))
        .await
        .expect("task creation should succeed");
    assert!(created.created_at() <= created.updated_at());

    let patch = TaskPatch::new()
        .with_title("Draft final report")
        .expect("valid title");
    let updated = service
        .update_task(owner_id, created.id(), patch)
        .await
        .expect("update should succeed");

    assert_eq!(updated.title(), "Draft final report");
    assert!(updated.created_at() <= updated.updated_at());
    assert_eq!(updated.created_at(), created.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_patch_values_never_reach_the_store(service: TestTaskService) {
    let owner_id = owner();
    let created = service
        .create_task(owner_id, CreateTaskRequest::new("Draft report"))
        .await
        .expect("task creation should succeed");

    let invalid_patch = TaskPatch::new().with_priority("urgent");
    assert!(matches!(
        invalid_patch,
        Err(TaskDomainError::InvalidPriority(_))
    ));

    let fetched = service
        .find_task(owner_id, created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_tasks_are_reported_as_not_found(service: TestTaskService) {
    let owner_id = owner();
    let absent = TaskId::new();

    let patch = TaskPatch::new()
        .with_status("completed")
        .expect("valid status");
    let update = service.update_task(owner_id, absent, patch).await;
    assert!(matches!(update, Err(TaskLifecycleError::NotFound(_))));

    let delete = service.delete_task(owner_id, absent).await;
    assert!(matches!(delete, Err(TaskLifecycleError::NotFound(_))));
}
