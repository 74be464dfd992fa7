//! Task lifecycle management.
//!
//! A task lives in exactly one of three document collections
//! (`activeTasks`, `ongoingTasks`, `completedTasks`) and moves forward
//! through them by copying the document into the next collection and then
//! deleting it from the previous one. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
