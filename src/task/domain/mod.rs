//! Domain model for task lifecycle management.
//!
//! The task domain models the cleanup task record, its three-stage status,
//! the stored document shape and the identity attributed to an engaged
//! task, while keeping all infrastructure concerns outside of the domain
//! boundary.

mod assignee;
mod document;
mod error;
mod ids;
mod location;
mod task;

pub use assignee::{Assignee, UserProfile};
pub use document::TaskDocument;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use location::GeoPoint;
pub use task::{PersistedTaskData, Task, TaskStatus};
