//! `PostgreSQL` document store implementation.

use super::{
    models::{NewTaskDocumentRow, TaskDocumentRow},
    schema::task_documents,
};
use crate::task::{
    domain::{Task, TaskDocument, TaskId},
    ports::{DocumentStore, DocumentStoreError, DocumentStoreResult, TaskCollection},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::upsert::excluded;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

/// `PostgreSQL` connection pool type used by the task document store.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed document store.
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    pool: TaskPgPool,
    clock: Arc<C>,
}

impl<C> PostgresDocumentStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates a new store from a `PostgreSQL` connection pool.
    ///
    /// `clock` stamps the `updated_at` column on every write.
    #[must_use]
    pub const fn new(pool: TaskPgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DocumentStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DocumentStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DocumentStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DocumentStoreError::persistence)?
    }
}

#[async_trait]
impl<C> DocumentStore for PostgresDocumentStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn list(&self, collection: TaskCollection) -> DocumentStoreResult<Vec<Task>> {
        let tasks = self
            .run_blocking(move |connection| {
                let rows = task_documents::table
                    .filter(task_documents::collection.eq(collection.name()))
                    .order(task_documents::id.asc())
                    .select(TaskDocumentRow::as_select())
                    .load::<TaskDocumentRow>(connection)
                    .map_err(DocumentStoreError::persistence)?;
                rows.into_iter()
                    .map(|row| row_to_task(row, collection))
                    .collect::<DocumentStoreResult<Vec<_>>>()
            })
            .await?;
        debug!(%collection, count = tasks.len(), "listed task documents");
        Ok(tasks)
    }

    async fn set(
        &self,
        collection: TaskCollection,
        id: &TaskId,
        task: &Task,
    ) -> DocumentStoreResult<()> {
        let new_row = to_new_row(collection, id, task, self.clock.utc())?;
        self.run_blocking(move |connection| {
            diesel::insert_into(task_documents::table)
                .values(&new_row)
                .on_conflict((task_documents::collection, task_documents::id))
                .do_update()
                .set((
                    task_documents::body.eq(excluded(task_documents::body)),
                    task_documents::updated_at.eq(excluded(task_documents::updated_at)),
                ))
                .execute(connection)
                .map_err(DocumentStoreError::persistence)?;
            Ok(())
        })
        .await?;
        debug!(%collection, task_id = %id, "wrote task document");
        Ok(())
    }

    async fn delete(&self, collection: TaskCollection, id: &TaskId) -> DocumentStoreResult<()> {
        let key = id.as_str().to_owned();
        let deleted = self
            .run_blocking(move |connection| {
                diesel::delete(
                    task_documents::table
                        .filter(task_documents::collection.eq(collection.name()))
                        .filter(task_documents::id.eq(key)),
                )
                .execute(connection)
                .map_err(DocumentStoreError::persistence)
            })
            .await?;
        debug!(%collection, task_id = %id, deleted, "deleted task document");
        Ok(())
    }
}

fn to_new_row(
    collection: TaskCollection,
    id: &TaskId,
    task: &Task,
    written_at: chrono::DateTime<chrono::Utc>,
) -> DocumentStoreResult<NewTaskDocumentRow> {
    let body = serde_json::to_value(TaskDocument::from_task(task))
        .map_err(DocumentStoreError::persistence)?;

    Ok(NewTaskDocumentRow {
        collection: collection.name().to_owned(),
        id: id.as_str().to_owned(),
        body,
        updated_at: written_at,
    })
}

fn row_to_task(row: TaskDocumentRow, collection: TaskCollection) -> DocumentStoreResult<Task> {
    let TaskDocumentRow {
        collection: stored_collection,
        id: raw_id,
        body,
        ..
    } = row;

    debug_assert_eq!(stored_collection, collection.name());

    let invalid = |reason: String| DocumentStoreError::InvalidDocument {
        collection,
        id: raw_id.clone(),
        reason,
    };
    let id = TaskId::new(raw_id.as_str()).map_err(|err| invalid(err.to_string()))?;
    let document = serde_json::from_value::<TaskDocument>(body)
        .map_err(|err| invalid(err.to_string()))?;

    if !document.status_matches(collection.status()) {
        warn!(%collection, task_id = %id, "document status disagrees with collection");
    }
    Ok(document.into_task(id, collection.status()))
}
