//! Cleanup tracker: task lifecycle core for a cleanup crew workflow.
//!
//! Tasks describe a reported cleanup site. Crew members claim ("engage")
//! an active task, which moves it to the ongoing stage under their name,
//! and later mark it as done, which moves it to the completed stage. The
//! stage a task is in is the document collection it is stored in.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the document store and the
//!   identity provider
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//! - **Services**: Lifecycle transitions, map overview and per-screen state
//!
//! # Modules
//!
//! - [`task`]: Task model, collection moves, map overview and board state

pub mod task;
