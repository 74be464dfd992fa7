//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use cleanup_tracker::task::{
    domain::{GeoPoint, PersistedTaskData, Task, TaskId, TaskStatus, UserProfile},
    ports::{DocumentStore, TaskCollection},
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an active task "{id}" at "{address}" located at {latitude:f64}, {longitude:f64}"#)]
fn active_task(
    world: &mut TaskLifecycleWorld,
    id: String,
    address: String,
    latitude: f64,
    longitude: f64,
) -> Result<(), eyre::Report> {
    let task = Task::from_persisted(
        PersistedTaskData::new(TaskId::new(id)?, address, TaskStatus::Active)
            .with_location(GeoPoint::new(latitude, longitude)),
    );
    run_async(world.store.set(TaskCollection::Active, task.id(), &task))
        .wrap_err("seed active task")?;
    world.current_task = Some(task);
    Ok(())
}

#[given(r#"the signed-in user is "{name}""#)]
fn signed_in_user(world: &mut TaskLifecycleWorld, name: String) {
    world
        .identity
        .sign_in(UserProfile::new().with_display_name(name));
}

#[given("nobody is signed in")]
fn nobody_signed_in(world: &mut TaskLifecycleWorld) {
    world.identity.sign_out();
}

#[given("the task has been engaged")]
fn task_has_been_engaged(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world.task()?.clone();
    let engaged = run_async(world.service.engage(&task)).wrap_err("engage task in setup")?;
    world.current_task = Some(engaged);
    Ok(())
}
