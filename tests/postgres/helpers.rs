//! Shared helpers for `PostgreSQL` document store tests.

use std::sync::Arc;

use cleanup_tracker::task::adapters::postgres::{
    PostgresDocumentStore, PostgresStoreConfig, StoreConfigError,
};
use diesel::connection::SimpleConnection;
use mockable::DefaultClock;

/// Boxed error type for fallible test setup.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

const CREATE_SCHEMA: &str =
    include_str!("../../migrations/2026-10-01-000000_create_task_documents/up.sql");

/// Connects to the configured database and applies the schema.
///
/// Returns `Ok(None)` when `TASK_DATABASE_URL` is not set.
///
/// # Errors
///
/// Returns an error when the configuration is malformed, the pool cannot
/// connect or the schema cannot be applied.
pub async fn connect() -> Result<Option<PostgresDocumentStore<DefaultClock>>, BoxError> {
    let config = match PostgresStoreConfig::from_env() {
        Ok(config) => config.with_max_pool_size(2),
        Err(StoreConfigError::MissingVariable(name)) => {
            eprintln!("skipping PostgreSQL test: {name} is not set");
            return Ok(None);
        }
        Err(err) => return Err(Box::new(err)),
    };

    let pool = tokio::task::spawn_blocking(move || config.build_pool()).await??;
    let schema_pool = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<(), BoxError> {
        let mut connection = schema_pool.get()?;
        connection.batch_execute(CREATE_SCHEMA)?;
        Ok(())
    })
    .await??;

    Ok(Some(PostgresDocumentStore::new(pool, Arc::new(DefaultClock))))
}
