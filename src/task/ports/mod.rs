//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod document_store;
pub mod identity;

pub use document_store::{
    DocumentStore, DocumentStoreError, DocumentStoreResult, TaskCollection,
};
pub use identity::IdentityProvider;
