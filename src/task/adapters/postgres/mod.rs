//! `PostgreSQL` adapter for task document storage.
//!
//! All three collections share one `task_documents` table keyed by
//! `(collection, id)`; see `migrations/` for the schema.

mod config;
mod models;
mod schema;
mod store;

pub use config::{PostgresStoreConfig, StoreConfigError};
pub use store::{PostgresDocumentStore, TaskPgPool};
