//! Stored document shape of a task.
//!
//! Documents are keyed by task identifier inside a collection; the id is
//! not repeated in the body. Every field is optional on read so that
//! partially written documents still load.

use super::{GeoPoint, PersistedTaskData, Task, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a task document as persisted in a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskDocument {
    /// Site address; read as empty when missing.
    pub address: Option<String>,
    /// Crew member responsible for the task.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Photograph reference; an empty string counts as missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Site coordinates; read as unset when missing.
    pub location: Option<GeoPoint>,
    /// Status recorded in the body.
    pub status: Option<String>,
    /// Creation or last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl TaskDocument {
    /// Builds the document body for a task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            address: Some(task.address().to_owned()),
            assigned_to: task.assigned_to().map(str::to_owned),
            image_url: task.image_url().map(str::to_owned),
            location: Some(task.location()),
            status: Some(task.status().as_str().to_owned()),
            timestamp: task.timestamp(),
        }
    }

    /// Returns `true` when the body status names `stored_in`.
    #[must_use]
    pub fn status_matches(&self, stored_in: TaskStatus) -> bool {
        self.status
            .as_deref()
            .and_then(|raw| TaskStatus::try_from(raw).ok())
            == Some(stored_in)
    }

    /// Converts the document read from the `stored_in` collection into a
    /// task.
    ///
    /// The status is taken from the collection, not from the body.
    #[must_use]
    pub fn into_task(self, id: TaskId, stored_in: TaskStatus) -> Task {
        let mut data = PersistedTaskData::new(id, self.address.unwrap_or_default(), stored_in)
            .with_location(self.location.unwrap_or_default());
        data.assigned_to = self.assigned_to;
        data.image_url = self.image_url.filter(|url| !url.is_empty());
        data.timestamp = self.timestamp;
        Task::from_persisted(data)
    }
}

impl From<&Task> for TaskDocument {
    fn from(task: &Task) -> Self {
        Self::from_task(task)
    }
}
