//! When steps for task tracking BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;
use taskledger::task::domain::{TaskId, TaskStatus};

#[when("the task is created")]
fn create_pending_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let name = world
        .pending_name
        .take()
        .ok_or_else(|| eyre::eyre!("missing pending task name in scenario world"))?;
    let description = world.pending_description.take().unwrap_or_default();

    world.last_create_result = Some(run_async(world.service.create(name, description)));
    Ok(())
}

#[when(r#"tasks are filtered by status "{status}""#)]
fn filter_tasks_by_status(world: &mut TaskWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("unparseable scenario status: {err}"))?;
    let filtered = run_async(world.service.find_by_status(parsed))
        .map_err(|err| eyre::eyre!("filtered listing failed: {err}"))?;
    world.last_filtered = Some(filtered);
    Ok(())
}

#[when(r#"the stored task named "{name}" is deleted"#)]
fn delete_stored_task(world: &mut TaskWorld, name: String) -> Result<(), eyre::Report> {
    let id = world.stored_task_id(&name)?;
    world.last_delete_result = Some(run_async(world.service.delete(id)));
    Ok(())
}

#[when("a task with an unknown identifier is deleted")]
fn delete_unknown_task(world: &mut TaskWorld) {
    world.last_delete_result = Some(run_async(world.service.delete(TaskId::new())));
}
