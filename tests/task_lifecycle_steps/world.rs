//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use cleanup_tracker::task::{
    adapters::memory::{InMemoryDocumentStore, StaticIdentityProvider},
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<InMemoryDocumentStore, StaticIdentityProvider>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub store: InMemoryDocumentStore,
    pub identity: StaticIdentityProvider,
    pub service: TestTaskService,
    pub current_task: Option<Task>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world with an empty store and nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryDocumentStore::new();
        let identity = StaticIdentityProvider::signed_out();
        let service =
            TaskLifecycleService::new(Arc::new(store.clone()), Arc::new(identity.clone()));

        Self {
            store,
            identity,
            service,
            current_task: None,
            last_result: None,
        }
    }

    /// Returns the task the scenario is acting on.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.current_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
