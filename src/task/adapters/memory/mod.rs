//! In-memory adapters for tests and local wiring.

mod document_store;
mod identity;

pub use document_store::InMemoryDocumentStore;
pub use identity::StaticIdentityProvider;
