//! In-memory integration tests wiring the advisor over the task service.

use std::sync::Arc;

use super::helpers::{TestTaskService, owner, task_service};
use rstest::{fixture, rstest};
use steward::advisor::{
    adapters::memory::ScriptedGenerativeClient,
    domain::{AdviceQuery, ProductivityDigest},
    services::{AdvisorService, FALLBACK_INSIGHTS},
};
use steward::task::services::CreateTaskRequest;

#[fixture]
fn service() -> TestTaskService {
    task_service()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn advice_prompt_reflects_the_owners_current_tasks(service: TestTaskService) {
    let owner_id = owner();
    service
        .create_task(
            owner_id,
            CreateTaskRequest::new("Prepare quarterly review").with_priority("high"),
        )
        .await
        .expect("task creation should succeed");

    let client = ScriptedGenerativeClient::new();
    client.push_response("Schedule the review preparation first thing tomorrow.");
    let advisor = AdvisorService::new(Arc::new(client.clone()));

    let tasks = service
        .list_tasks(owner_id)
        .await
        .expect("listing should succeed");
    let query = AdviceQuery::new("What should I focus on?").expect("valid query");
    let advice = advisor
        .advise(&query, &tasks)
        .await
        .expect("advice should succeed");

    assert!(advice.context_used);
    let prompts = client.prompts();
    let prompt = prompts.first().expect("one prompt sent");
    assert!(prompt.contains("Prepare quarterly review"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insights_survive_a_failing_capability(service: TestTaskService) {
    let owner_id = owner();
    service
        .create_task(owner_id, CreateTaskRequest::new("Draft report"))
        .await
        .expect("task creation should succeed");

    let advisor = AdvisorService::new(Arc::new(ScriptedGenerativeClient::new()));
    let tasks = service
        .list_tasks(owner_id)
        .await
        .expect("listing should succeed");
    let digest = ProductivityDigest::from_tasks(&tasks);

    let insights = advisor
        .insights(&digest)
        .await
        .expect("insights should fall back rather than fail");

    assert_eq!(insights.len(), FALLBACK_INSIGHTS.len());
}
