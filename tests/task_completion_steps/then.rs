//! Then steps for task completion BDD scenarios.

use super::world::TaskCompletionWorld;
use rstest_bdd_macros::then;
use steward::task::{
    domain::{TaskDomainError, TaskStatus},
    services::TaskLifecycleError,
};

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskCompletionWorld, status: String) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.status() != expected_status {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected_status.as_str(),
            task.status().as_str()
        ));
    }

    Ok(())
}

#[then("the task has a completion timestamp")]
fn task_has_completion_timestamp(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.completed_at().is_none() {
        return Err(eyre::eyre!("expected a completion timestamp, found none"));
    }
    Ok(())
}

#[then("the task has no completion timestamp")]
fn task_has_no_completion_timestamp(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.completed_at().is_some() {
        return Err(eyre::eyre!("expected no completion timestamp"));
    }
    Ok(())
}

#[then("the patch is rejected as invalid")]
fn patch_is_rejected(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    if !matches!(
        world.last_patch_error,
        Some(TaskDomainError::InvalidPriority(_))
    ) {
        return Err(eyre::eyre!(
            "expected InvalidPriority error, got {:?}",
            world.last_patch_error
        ));
    }
    Ok(())
}

#[then("the update fails because there are no fields to update")]
fn update_fails_with_empty_patch(world: &TaskCompletionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    if !matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::EmptyPatch))
    ) {
        return Err(eyre::eyre!("expected EmptyPatch error, got {result:?}"));
    }
    Ok(())
}
