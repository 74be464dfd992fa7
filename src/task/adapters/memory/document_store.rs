//! In-memory document store.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

use crate::task::{
    domain::{Task, TaskDocument, TaskId},
    ports::{DocumentStore, DocumentStoreError, DocumentStoreResult, TaskCollection},
};

/// Thread-safe in-memory document store.
///
/// Documents are kept in their stored shape and decoded on every read, so
/// status normalisation matches the persistent adapters. Listings are
/// ordered by document id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<InMemoryDocumentState>>,
}

#[derive(Debug, Default)]
struct InMemoryDocumentState {
    collections: HashMap<TaskCollection, BTreeMap<TaskId, TaskDocument>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `tasks`, each placed in the collection
    /// matching its status.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn with_tasks<'a>(
        tasks: impl IntoIterator<Item = &'a Task>,
    ) -> DocumentStoreResult<Self> {
        let store = Self::new();
        {
            let mut state = store.write_state()?;
            for task in tasks {
                let collection = TaskCollection::for_status(task.status());
                state
                    .collections
                    .entry(collection)
                    .or_default()
                    .insert(task.id().clone(), TaskDocument::from_task(task));
            }
        }
        Ok(store)
    }

    /// Stores a raw document body, bypassing task encoding.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::Persistence`] if the state lock is
    /// poisoned.
    pub fn insert_document(
        &self,
        collection: TaskCollection,
        id: TaskId,
        document: TaskDocument,
    ) -> DocumentStoreResult<()> {
        let mut state = self.write_state()?;
        state
            .collections
            .entry(collection)
            .or_default()
            .insert(id, document);
        Ok(())
    }

    /// Returns `true` when `collection` holds the document `id`.
    #[must_use]
    pub fn contains(&self, collection: TaskCollection, id: &TaskId) -> bool {
        self.state
            .read()
            .map(|state| {
                state
                    .collections
                    .get(&collection)
                    .is_some_and(|documents| documents.contains_key(id))
            })
            .unwrap_or(false)
    }

    /// Returns the number of documents in `collection`.
    #[must_use]
    pub fn len(&self, collection: TaskCollection) -> usize {
        self.state
            .read()
            .map(|state| {
                state
                    .collections
                    .get(&collection)
                    .map_or(0, BTreeMap::len)
            })
            .unwrap_or(0)
    }

    /// Returns `true` if `collection` holds no documents.
    #[must_use]
    pub fn is_empty(&self, collection: TaskCollection) -> bool {
        self.len(collection) == 0
    }

    fn write_state(
        &self,
    ) -> DocumentStoreResult<std::sync::RwLockWriteGuard<'_, InMemoryDocumentState>> {
        self.state.write().map_err(|err| {
            DocumentStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list(&self, collection: TaskCollection) -> DocumentStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            DocumentStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let Some(documents) = state.collections.get(&collection) else {
            return Ok(Vec::new());
        };

        let tasks = documents
            .iter()
            .map(|(id, document)| {
                if !document.status_matches(collection.status()) {
                    warn!(%collection, task_id = %id, "document status disagrees with collection");
                }
                document.clone().into_task(id.clone(), collection.status())
            })
            .collect::<Vec<_>>();
        debug!(%collection, count = tasks.len(), "listed task documents");
        Ok(tasks)
    }

    async fn set(
        &self,
        collection: TaskCollection,
        id: &TaskId,
        task: &Task,
    ) -> DocumentStoreResult<()> {
        let mut state = self.write_state()?;
        state
            .collections
            .entry(collection)
            .or_default()
            .insert(id.clone(), TaskDocument::from_task(task));
        debug!(%collection, task_id = %id, "wrote task document");
        Ok(())
    }

    async fn delete(&self, collection: TaskCollection, id: &TaskId) -> DocumentStoreResult<()> {
        let mut state = self.write_state()?;
        let removed = state
            .collections
            .get_mut(&collection)
            .and_then(|documents| documents.remove(id))
            .is_some();
        debug!(%collection, task_id = %id, removed, "deleted task document");
        Ok(())
    }
}
