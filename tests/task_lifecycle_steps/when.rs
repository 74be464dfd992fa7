//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use rstest_bdd_macros::when;

#[when("the task is engaged")]
fn engage_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world.task()?.clone();
    let result = run_async(world.service.engage(&task));
    if let Ok(ref engaged) = result {
        world.current_task = Some(engaged.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when("the task is completed")]
fn complete_task(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world.task()?.clone();
    let result = run_async(world.service.complete(&task));
    if let Ok(ref completed) = result {
        world.current_task = Some(completed.clone());
    }
    world.last_result = Some(result);
    Ok(())
}
