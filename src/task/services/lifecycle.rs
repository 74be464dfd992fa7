//! Service layer moving tasks between the active, ongoing and completed
//! collections.

use crate::task::{
    domain::{Assignee, Task, TaskDomainError, TaskStatus},
    ports::{DocumentStore, DocumentStoreError, IdentityProvider, TaskCollection},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for task lifecycle operations.
///
/// The display text of every variant is suitable for showing to the user.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// No user is signed in.
    #[error("User not authenticated")]
    NotAuthenticated,
    /// The task is not in the stage the operation starts from.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The document store rejected a read, write or delete.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Each transition writes the moved copy into the destination collection
/// first and deletes the source document second. The two writes are not
/// atomic: a failure between them leaves the task visible in both
/// collections, and calling the same transition again converges.
#[derive(Clone)]
pub struct TaskLifecycleService<S, I>
where
    S: DocumentStore,
    I: IdentityProvider,
{
    store: Arc<S>,
    identity: Arc<I>,
}

impl<S, I> TaskLifecycleService<S, I>
where
    S: DocumentStore,
    I: IdentityProvider,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, identity: Arc<I>) -> Self {
        Self { store, identity }
    }

    /// Returns the document store used by this service.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Lists every task currently in the stage `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the collection cannot be
    /// read.
    pub async fn list(&self, status: TaskStatus) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.store.list(TaskCollection::for_status(status)).await?;
        Ok(tasks)
    }

    /// Claims an active task for the signed-in user and moves it to the
    /// ongoing collection.
    ///
    /// Returns the copy now stored in `ongoingTasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotAuthenticated`] when nobody is
    /// signed in, [`TaskLifecycleError::Domain`] when `task` is not
    /// active, and [`TaskLifecycleError::Store`] when either document
    /// operation fails. Nothing is written in the first two cases.
    pub async fn engage(&self, task: &Task) -> TaskLifecycleResult<Task> {
        let user = self
            .identity
            .current_user()
            .ok_or(TaskLifecycleError::NotAuthenticated)?;
        let assignee = Assignee::resolve(&user);
        let engaged = task.engaged_by(&assignee)?;

        self.move_document(TaskCollection::Active, TaskCollection::Ongoing, &engaged)
            .await?;
        info!(task_id = %engaged.id(), %assignee, "task engaged");
        Ok(engaged)
    }

    /// Marks an ongoing task as done and moves it to the completed
    /// collection, keeping its assignee.
    ///
    /// Returns the copy now stored in `completedTasks`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when `task` is not ongoing
    /// (nothing is written) and [`TaskLifecycleError::Store`] when either
    /// document operation fails.
    pub async fn complete(&self, task: &Task) -> TaskLifecycleResult<Task> {
        let completed = task.completed()?;

        self.move_document(TaskCollection::Ongoing, TaskCollection::Completed, &completed)
            .await?;
        info!(task_id = %completed.id(), "task completed");
        Ok(completed)
    }

    async fn move_document(
        &self,
        from: TaskCollection,
        to: TaskCollection,
        moved: &Task,
    ) -> TaskLifecycleResult<()> {
        let id = moved.id();
        if let Err(err) = self.store.set(to, id, moved).await {
            warn!(task_id = %id, collection = %to, error = %err, "failed to write moved task");
            return Err(err.into());
        }
        if let Err(err) = self.store.delete(from, id).await {
            warn!(
                task_id = %id,
                collection = %from,
                error = %err,
                "failed to delete source document; task is now present in {from} and {to}"
            );
            return Err(err.into());
        }
        Ok(())
    }
}
