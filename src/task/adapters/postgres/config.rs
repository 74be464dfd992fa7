//! Connection settings for the `PostgreSQL` document store.

use super::store::TaskPgPool;
use crate::task::ports::DocumentStoreError;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use thiserror::Error;

/// Errors raised while reading store configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable {0}")]
    MissingVariable(&'static str),

    /// The pool size is not a positive integer.
    #[error("invalid pool size '{0}', expected a positive integer")]
    InvalidPoolSize(String),
}

/// Connection settings for [`PostgresDocumentStore`](super::PostgresDocumentStore).
///
/// # Examples
///
/// ```
/// use cleanup_tracker::task::adapters::postgres::PostgresStoreConfig;
///
/// let config = PostgresStoreConfig::new("postgres://localhost/tasks");
/// assert_eq!(config.max_pool_size, PostgresStoreConfig::DEFAULT_POOL_SIZE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresStoreConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub max_pool_size: u32,
}

impl PostgresStoreConfig {
    /// Environment variable holding the connection URL.
    pub const DATABASE_URL_ENV: &'static str = "TASK_DATABASE_URL";
    /// Environment variable holding the pool size.
    pub const POOL_SIZE_ENV: &'static str = "TASK_DATABASE_POOL_SIZE";
    /// Pool size used when none is configured.
    pub const DEFAULT_POOL_SIZE: u32 = 4;

    /// Creates a configuration with the default pool size.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_pool_size: Self::DEFAULT_POOL_SIZE,
        }
    }

    /// Sets the maximum pool size.
    #[must_use]
    pub const fn with_max_pool_size(mut self, max_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError`] when the URL is missing or the pool
    /// size is malformed.
    pub fn from_env() -> Result<Self, StoreConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable
    /// name to its value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConfigError`] when the URL is missing or the pool
    /// size is malformed.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, StoreConfigError> {
        let database_url = lookup(Self::DATABASE_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .ok_or(StoreConfigError::MissingVariable(Self::DATABASE_URL_ENV))?;

        let max_pool_size = match lookup(Self::POOL_SIZE_ENV) {
            None => Self::DEFAULT_POOL_SIZE,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(StoreConfigError::InvalidPoolSize(raw))?,
        };

        Ok(Self {
            database_url,
            max_pool_size,
        })
    }

    /// Builds a connection pool from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Persistence`] when the pool cannot
    /// establish its connections.
    pub fn build_pool(&self) -> Result<TaskPgPool, DocumentStoreError> {
        let manager = ConnectionManager::<PgConnection>::new(self.database_url.clone());
        Pool::builder()
            .max_size(self.max_pool_size)
            .build(manager)
            .map_err(DocumentStoreError::persistence)
    }
}
