//! Task record and its three-stage status.

use super::{Assignee, GeoPoint, ParseTaskStatusError, TaskDomainError, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle stage of a task.
///
/// The status always matches the collection the task document is stored
/// in; the collection is the authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Reported and waiting for a crew member.
    Active,
    /// Engaged by a crew member and being worked on.
    Ongoing,
    /// Cleaned up.
    Completed,
}

impl TaskStatus {
    /// Every status in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Active, Self::Ongoing, Self::Completed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    /// Returns the only status this one may move to, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Active => Some(Self::Ongoing),
            Self::Ongoing => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// Returns `true` when `target` is the next lifecycle stage.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }

    /// Returns `true` for the final stage.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of cleanup work.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    address: String,
    assigned_to: Option<String>,
    image_url: Option<String>,
    location: GeoPoint,
    status: TaskStatus,
    timestamp: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Document identifier.
    pub id: TaskId,
    /// Human-readable site address.
    pub address: String,
    /// Crew member responsible for the task, if engaged.
    pub assigned_to: Option<String>,
    /// Reference to the site photograph, if any.
    pub image_url: Option<String>,
    /// Site coordinates; unset when unknown.
    pub location: GeoPoint,
    /// Lifecycle stage.
    pub status: TaskStatus,
    /// Creation or last update time, if recorded.
    pub timestamp: Option<DateTime<Utc>>,
}

impl PersistedTaskData {
    /// Creates data for an unassigned task with no photograph or
    /// timestamp.
    #[must_use]
    pub fn new(id: TaskId, address: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            id,
            address: address.into(),
            assigned_to: None,
            image_url: None,
            location: GeoPoint::UNSET,
            status,
            timestamp: None,
        }
    }

    /// Sets the site coordinates.
    #[must_use]
    pub const fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = location;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Sets the photograph reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Sets the timestamp.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

impl Task {
    /// Creates a newly reported task in the active stage.
    ///
    /// The identifier is generated and the timestamp is read from `clock`.
    #[must_use]
    pub fn new_active(address: impl Into<String>, location: GeoPoint, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::generate(),
            address: address.into(),
            assigned_to: None,
            image_url: None,
            location,
            status: TaskStatus::Active,
            timestamp: Some(clock.utc()),
        }
    }

    /// Reconstructs a task from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            address: data.address,
            assigned_to: data.assigned_to,
            image_url: data.image_url,
            location: data.location,
            status: data.status,
            timestamp: data.timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the site address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the crew member responsible for the task, if engaged.
    #[must_use]
    pub fn assigned_to(&self) -> Option<&str> {
        self.assigned_to.as_deref()
    }

    /// Returns the photograph reference, if any.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Returns the site coordinates.
    #[must_use]
    pub const fn location(&self) -> GeoPoint {
        self.location
    }

    /// Returns the lifecycle stage.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the recorded timestamp, if any.
    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Sets the photograph reference.
    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Returns the copy written to the ongoing stage when `assignee`
    /// engages this task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] unless the task
    /// is active.
    pub fn engaged_by(&self, assignee: &Assignee) -> Result<Self, TaskDomainError> {
        let mut engaged = self.moved_to(TaskStatus::Ongoing)?;
        engaged.assigned_to = Some(assignee.as_str().to_owned());
        Ok(engaged)
    }

    /// Returns the copy written to the completed stage. The assignee is
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] unless the task
    /// is ongoing.
    pub fn completed(&self) -> Result<Self, TaskDomainError> {
        self.moved_to(TaskStatus::Completed)
    }

    fn moved_to(&self, target: TaskStatus) -> Result<Self, TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id.clone(),
                from: self.status,
                to: target,
            });
        }
        Ok(Self {
            status: target,
            ..self.clone()
        })
    }
}
