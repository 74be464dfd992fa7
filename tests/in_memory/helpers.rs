//! Shared fixtures for in-memory task lifecycle integration tests.

use std::sync::Arc;

use cleanup_tracker::task::{
    adapters::memory::{InMemoryDocumentStore, StaticIdentityProvider},
    domain::{GeoPoint, PersistedTaskData, Task, TaskDomainError, TaskId, TaskStatus, UserProfile},
    services::TaskLifecycleService,
};
use rstest::fixture;

/// Service type wired to in-memory adapters.
pub type TestService = TaskLifecycleService<InMemoryDocumentStore, StaticIdentityProvider>;

/// Store, identity and service sharing the same state.
pub struct Harness {
    pub store: InMemoryDocumentStore,
    pub identity: StaticIdentityProvider,
    pub service: TestService,
}

impl Harness {
    /// Builds a harness seeded with `tasks` and `identity`.
    pub fn seeded(
        tasks: &[Task],
        identity: StaticIdentityProvider,
    ) -> Result<Self, cleanup_tracker::task::ports::DocumentStoreError> {
        let store = InMemoryDocumentStore::with_tasks(tasks)?;
        let service =
            TaskLifecycleService::new(Arc::new(store.clone()), Arc::new(identity.clone()));
        Ok(Self {
            store,
            identity,
            service,
        })
    }
}

/// The reported task used across lifecycle scenarios.
///
/// # Errors
///
/// Returns an error if the fixed identifier is rejected.
#[fixture]
pub fn oak_street_task() -> Result<Task, TaskDomainError> {
    Ok(Task::from_persisted(
        PersistedTaskData::new(TaskId::new("T1")?, "12 Oak St", TaskStatus::Active)
            .with_location(GeoPoint::new(12.9, 77.6)),
    ))
}

/// Identity provider with "alice" signed in.
#[fixture]
pub fn alice() -> StaticIdentityProvider {
    StaticIdentityProvider::signed_in(
        UserProfile::new()
            .with_display_name("alice")
            .with_email("alice@crew.example"),
    )
}
