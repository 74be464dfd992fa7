//! Application services for task lifecycle orchestration.

mod board;
mod lifecycle;
mod map;

pub use board::{BoardAction, Notice, TaskBoard};
pub use lifecycle::{TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService};
pub use map::{CameraPosition, MapOverview, MapViewConfig, TaskMapService, TaskMarker};
