//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use cleanup_tracker::task::{
    domain::{GeoPoint, TaskId, TaskStatus},
    ports::{DocumentStore, TaskCollection},
};
use rstest_bdd_macros::then;

fn collection_named(stage: &str) -> Result<TaskCollection, eyre::Report> {
    let status = TaskStatus::try_from(stage)
        .map_err(|err| eyre::eyre!("invalid stage in scenario: {err}"))?;
    Ok(TaskCollection::for_status(status))
}

#[then(r#"the "{stage}" collection holds "{id}" assigned to "{assignee}""#)]
fn collection_holds_assigned(
    world: &TaskLifecycleWorld,
    stage: String,
    id: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let collection = collection_named(&stage)?;
    let tasks = run_async(world.store.list(collection))?;
    let task = tasks
        .iter()
        .find(|task| task.id().as_str() == id)
        .ok_or_else(|| eyre::eyre!("{collection} does not hold {id}"))?;

    if task.status() != collection.status() {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            collection.status(),
            task.status()
        ));
    }
    if task.assigned_to() != Some(assignee.as_str()) {
        return Err(eyre::eyre!(
            "expected assignee {assignee}, found {:?}",
            task.assigned_to()
        ));
    }
    Ok(())
}

#[then(r#"the "{stage}" collection still holds "{id}""#)]
fn collection_holds(
    world: &TaskLifecycleWorld,
    stage: String,
    id: String,
) -> Result<(), eyre::Report> {
    let collection = collection_named(&stage)?;
    if !world.store.contains(collection, &TaskId::new(id.as_str())?) {
        return Err(eyre::eyre!("{collection} does not hold {id}"));
    }
    Ok(())
}

#[then(r#"the "{stage}" collection does not hold "{id}""#)]
fn collection_does_not_hold(
    world: &TaskLifecycleWorld,
    stage: String,
    id: String,
) -> Result<(), eyre::Report> {
    let collection = collection_named(&stage)?;
    if world.store.contains(collection, &TaskId::new(id.as_str())?) {
        return Err(eyre::eyre!("{collection} still holds {id}"));
    }
    Ok(())
}

#[then("the task location is {latitude:f64}, {longitude:f64}")]
fn task_location_is(
    world: &TaskLifecycleWorld,
    latitude: f64,
    longitude: f64,
) -> Result<(), eyre::Report> {
    let location = world.task()?.location();
    if location != GeoPoint::new(latitude, longitude) {
        return Err(eyre::eyre!("unexpected task location {location}"));
    }
    Ok(())
}

#[then(r#"the transition fails with "{reason}""#)]
fn transition_fails_with(world: &TaskLifecycleWorld, reason: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;

    match result {
        Err(err) if err.to_string() == reason => Ok(()),
        other => Err(eyre::eyre!("expected failure '{reason}', got {other:?}")),
    }
}
