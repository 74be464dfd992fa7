//! Document store port holding task documents in per-stage collections.

use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for document store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

/// One of the three fixed task collections.
///
/// Membership in a collection is the task's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskCollection {
    /// `activeTasks`
    Active,
    /// `ongoingTasks`
    Ongoing,
    /// `completedTasks`
    Completed,
}

impl TaskCollection {
    /// Every collection in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Ongoing, Self::Completed];

    /// Returns the collection name used by the store.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "activeTasks",
            Self::Ongoing => "ongoingTasks",
            Self::Completed => "completedTasks",
        }
    }

    /// Returns the status held by tasks stored in this collection.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        match self {
            Self::Active => TaskStatus::Active,
            Self::Ongoing => TaskStatus::Ongoing,
            Self::Completed => TaskStatus::Completed,
        }
    }

    /// Returns the collection that holds tasks with `status`.
    #[must_use]
    pub const fn for_status(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Active => Self::Active,
            TaskStatus::Ongoing => Self::Ongoing,
            TaskStatus::Completed => Self::Completed,
        }
    }
}

impl From<TaskStatus> for TaskCollection {
    fn from(status: TaskStatus) -> Self {
        Self::for_status(status)
    }
}

impl fmt::Display for TaskCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Task document persistence contract.
///
/// Writes are last-write-wins per document. No operation spans more than
/// one document, so moving a task between collections is never atomic.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every task stored in `collection`.
    ///
    /// Each returned task carries the status of `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError`] when the collection cannot be read or
    /// a document cannot be decoded.
    async fn list(&self, collection: TaskCollection) -> DocumentStoreResult<Vec<Task>>;

    /// Creates or overwrites the document `id` in `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Persistence`] when the write fails.
    async fn set(
        &self,
        collection: TaskCollection,
        id: &TaskId,
        task: &Task,
    ) -> DocumentStoreResult<()>;

    /// Deletes the document `id` from `collection`.
    ///
    /// Deleting a document that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Persistence`] when the delete fails.
    async fn delete(&self, collection: TaskCollection, id: &TaskId) -> DocumentStoreResult<()>;
}

/// Errors returned by document store implementations.
#[derive(Debug, Clone, Error)]
pub enum DocumentStoreError {
    /// A stored document could not be decoded into a task.
    #[error("invalid document '{id}' in {collection}: {reason}")]
    InvalidDocument {
        /// Collection holding the document.
        collection: TaskCollection,
        /// Raw document key.
        id: String,
        /// Decoding failure description.
        reason: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DocumentStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
