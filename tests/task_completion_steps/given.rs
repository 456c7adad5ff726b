//! Given steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use steward::task::{domain::TaskPatch, services::CreateTaskRequest};

#[given(r#"a task titled "{title}""#)]
fn task_titled(world: &mut TaskCompletionWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create_task(world.owner_id, CreateTaskRequest::new(title)),
    )
    .wrap_err("create task for completion scenario")?;
    world.last_created_task = Some(created);
    Ok(())
}

#[given(r#"the task status has been changed to "{status}""#)]
fn task_status_has_been_changed(
    world: &mut TaskCompletionWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let patch = TaskPatch::new()
        .with_status(&status)
        .wrap_err("build status patch in scenario setup")?;
    let updated = run_async(world.service.update_task(world.owner_id, task.id(), patch))
        .wrap_err("apply status patch in scenario setup")?;

    world.last_created_task = Some(updated);
    Ok(())
}
