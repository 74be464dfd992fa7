//! `PostgreSQL` integration tests for task documents and lifecycle moves.

use std::sync::Arc;

use cleanup_tracker::task::{
    adapters::memory::StaticIdentityProvider,
    domain::{GeoPoint, PersistedTaskData, Task, TaskId, TaskStatus, UserProfile},
    ports::{DocumentStore, TaskCollection},
    services::TaskLifecycleService,
};
use rstest::rstest;

use crate::postgres::helpers::{BoxError, connect};

fn fresh_task(status: TaskStatus) -> Task {
    Task::from_persisted(
        PersistedTaskData::new(TaskId::generate(), "21 Harbour Rd", status)
            .with_location(GeoPoint::new(12.9, 77.6)),
    )
}

async fn find(
    store: &impl DocumentStore,
    collection: TaskCollection,
    id: &TaskId,
) -> Result<Option<Task>, BoxError> {
    let tasks = store.list(collection).await?;
    Ok(tasks.into_iter().find(|task| task.id() == id))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_set_overwrites_and_delete_removes() -> Result<(), BoxError> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let task = fresh_task(TaskStatus::Active);
    let updated = task.clone().with_image_url("images/harbour.jpg");

    store.set(TaskCollection::Active, task.id(), &task).await?;
    store.set(TaskCollection::Active, task.id(), &updated).await?;
    let found = find(&store, TaskCollection::Active, task.id()).await?;
    assert_eq!(found, Some(updated));

    store.delete(TaskCollection::Active, task.id()).await?;
    store.delete(TaskCollection::Active, task.id()).await?;
    let gone = find(&store, TaskCollection::Active, task.id()).await?;
    assert_eq!(gone, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn postgres_engage_and_complete_move_documents() -> Result<(), BoxError> {
    let Some(store) = connect().await? else {
        return Ok(());
    };
    let store = Arc::new(store);
    let identity = StaticIdentityProvider::signed_in(UserProfile::new().with_display_name("alice"));
    let service = TaskLifecycleService::new(store.clone(), Arc::new(identity));
    let task = fresh_task(TaskStatus::Active);
    store.set(TaskCollection::Active, task.id(), &task).await?;

    let engaged = service.engage(&task).await?;
    assert_eq!(find(&*store, TaskCollection::Active, task.id()).await?, None);
    assert_eq!(
        find(&*store, TaskCollection::Ongoing, task.id()).await?,
        Some(engaged.clone())
    );

    let completed = service.complete(&engaged).await?;
    assert_eq!(find(&*store, TaskCollection::Ongoing, task.id()).await?, None);
    let stored = find(&*store, TaskCollection::Completed, task.id()).await?;
    assert_eq!(stored.as_ref().and_then(Task::assigned_to), Some("alice"));
    assert_eq!(stored, Some(completed));

    store.delete(TaskCollection::Completed, task.id()).await?;
    Ok(())
}
