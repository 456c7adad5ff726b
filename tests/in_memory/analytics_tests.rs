//! In-memory integration tests for productivity analytics.

use super::helpers::{TestTaskService, owner, task_service};
use rstest::{fixture, rstest};
use steward::task::{
    domain::{TREND_WINDOW_DAYS, TaskPatch},
    services::CreateTaskRequest,
};

#[fixture]
fn service() -> TestTaskService {
    task_service()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_owner_gets_null_safe_defaults(service: TestTaskService) {
    let snapshot = service
        .analytics(owner())
        .await
        .expect("analytics should succeed");

    assert_eq!(snapshot.stats.total, 0);
    assert_eq!(snapshot.stats.completed, 0);
    assert_eq!(snapshot.stats.avg_completion_hours, None);
    assert_eq!(snapshot.productivity_score, 0.0);
    assert_eq!(snapshot.trends.len(), TREND_WINDOW_DAYS);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn half_completed_set_scores_as_expected(service: TestTaskService) {
    let owner_id = owner();

    let completed = service
        .create_task(owner_id, CreateTaskRequest::new("Finished work"))
        .await
        .expect("task creation should succeed");
    let patch = TaskPatch::new()
        .with_status("completed")
        .expect("valid status")
        .with_actual_hours(4.0)
        .expect("valid effort");
    service
        .update_task(owner_id, completed.id(), patch)
        .await
        .expect("update should succeed");

    service
        .create_task(owner_id, CreateTaskRequest::new("Open work"))
        .await
        .expect("task creation should succeed");

    let snapshot = service
        .analytics(owner_id)
        .await
        .expect("analytics should succeed");

    assert_eq!(snapshot.stats.total, 2);
    assert_eq!(snapshot.stats.completed, 1);
    assert_eq!(snapshot.stats.pending, 1);
    assert_eq!(snapshot.stats.avg_completion_hours, Some(4.0));
    // Both tasks were created today: 50% completion plus one active day.
    assert_eq!(snapshot.productivity_score, 55.0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn todays_activity_lands_in_the_last_trend_entry(service: TestTaskService) {
    let owner_id = owner();
    let created = service
        .create_task(owner_id, CreateTaskRequest::new("Draft report"))
        .await
        .expect("task creation should succeed");
    let patch = TaskPatch::new()
        .with_status("completed")
        .expect("valid status");
    service
        .update_task(owner_id, created.id(), patch)
        .await
        .expect("update should succeed");

    let snapshot = service
        .analytics(owner_id)
        .await
        .expect("analytics should succeed");

    let today = snapshot.trends.last().expect("trend entries present");
    assert_eq!(today.tasks_created, 1);
    assert_eq!(today.tasks_completed, 1);
    assert!(
        snapshot
            .trends
            .iter()
            .rev()
            .skip(1)
            .all(|entry| entry.tasks_created == 0)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn analytics_is_scoped_to_the_requesting_owner(service: TestTaskService) {
    let busy_owner = owner();
    let idle_owner = owner();

    service
        .create_task(busy_owner, CreateTaskRequest::new("Busy work"))
        .await
        .expect("task creation should succeed");

    let idle_snapshot = service
        .analytics(idle_owner)
        .await
        .expect("analytics should succeed");
    assert_eq!(idle_snapshot.stats.total, 0);
}
