//! When steps for task completion BDD scenarios.

use super::world::{TaskCompletionWorld, run_async};
use rstest_bdd_macros::when;
use steward::task::domain::TaskPatch;

#[when(r#"the task status is changed to "{status}""#)]
fn task_status_is_changed(
    world: &mut TaskCompletionWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let patch = match TaskPatch::new().with_status(&status) {
        Ok(patch) => patch,
        Err(error) => {
            world.last_patch_error = Some(error);
            return Ok(());
        }
    };

    let result = run_async(world.service.update_task(world.owner_id, task.id(), patch));
    if let Ok(ref updated) = result {
        world.last_created_task = Some(updated.clone());
    }
    world.last_update_result = Some(result);
    Ok(())
}

#[when(r#"a patch with priority "{priority}" is prepared"#)]
fn patch_with_priority_is_prepared(world: &mut TaskCompletionWorld, priority: String) {
    world.last_patch_error = TaskPatch::new().with_priority(&priority).err();
}

#[when("an empty patch is applied")]
fn empty_patch_is_applied(world: &mut TaskCompletionWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let result = run_async(
        world
            .service
            .update_task(world.owner_id, task.id(), TaskPatch::new()),
    );
    world.last_update_result = Some(result);
    Ok(())
}
