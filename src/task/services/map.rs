//! Map overview of every task with a known location.

use crate::task::{
    domain::{GeoPoint, Task, TaskStatus},
    ports::{DocumentStore, DocumentStoreResult, TaskCollection},
};
use std::sync::Arc;
use tracing::debug;

/// Camera zoom levels used when placing the map.
///
/// # Examples
///
/// ```
/// use cleanup_tracker::task::services::MapViewConfig;
///
/// let config = MapViewConfig::default();
/// assert!(config.focus_zoom > config.overview_zoom);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewConfig {
    /// Zoom applied when the map is opened on a single task.
    pub focus_zoom: f32,
    /// Zoom applied when the map is centred on all markers.
    pub overview_zoom: f32,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            focus_zoom: 16.0,
            overview_zoom: 10.0,
        }
    }
}

/// A task placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskMarker {
    task: Task,
}

impl TaskMarker {
    /// Returns the plotted task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the stage used to colour the marker.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.task.status()
    }

    /// Returns the marker position.
    #[must_use]
    pub const fn position(&self) -> GeoPoint {
        self.task.location()
    }
}

/// Where the map camera should be moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPosition {
    /// Point at the centre of the view.
    pub center: GeoPoint,
    /// Zoom level.
    pub zoom: f32,
}

/// Markers and camera placement for the map screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapOverview {
    /// Markers for active, then ongoing, then completed tasks.
    pub markers: Vec<TaskMarker>,
    /// Camera move to apply, or `None` to leave the camera where it is.
    pub camera: Option<CameraPosition>,
}

/// Builds the map overview from all three collections.
#[derive(Clone)]
pub struct TaskMapService<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
    config: MapViewConfig,
}

impl<S> TaskMapService<S>
where
    S: DocumentStore,
{
    /// Creates a map service.
    #[must_use]
    pub const fn new(store: Arc<S>, config: MapViewConfig) -> Self {
        Self { store, config }
    }

    /// Loads every task with a known location.
    ///
    /// With `focus` set the camera is centred on it at the focus zoom;
    /// otherwise it is centred on the mean marker position at the
    /// overview zoom, or left alone when there are no markers.
    ///
    /// # Errors
    ///
    /// Returns the first [`DocumentStoreError`](crate::task::ports::DocumentStoreError)
    /// raised while reading a collection.
    pub async fn overview(&self, focus: Option<GeoPoint>) -> DocumentStoreResult<MapOverview> {
        let mut markers = Vec::new();
        for collection in TaskCollection::ALL {
            let tasks = self.store.list(collection).await?;
            markers.extend(
                tasks
                    .into_iter()
                    .filter(|task| !task.location().is_unset())
                    .map(|task| TaskMarker { task }),
            );
        }

        let camera = match focus {
            Some(center) => Some(CameraPosition {
                center,
                zoom: self.config.focus_zoom,
            }),
            None => centroid(markers.iter().map(TaskMarker::position)).map(|center| {
                CameraPosition {
                    center,
                    zoom: self.config.overview_zoom,
                }
            }),
        };
        debug!(markers = markers.len(), "built map overview");

        Ok(MapOverview { markers, camera })
    }
}

/// Returns the arithmetic mean of `points`, or `None` when empty.
#[expect(
    clippy::float_arithmetic,
    reason = "averaging coordinates requires floating-point division"
)]
fn centroid(points: impl Iterator<Item = GeoPoint>) -> Option<GeoPoint> {
    let (count, latitude_sum, longitude_sum) = points.fold(
        (0_u32, 0.0_f64, 0.0_f64),
        |(count, latitude_sum, longitude_sum), point| {
            (
                count.saturating_add(1),
                latitude_sum + point.latitude(),
                longitude_sum + point.longitude(),
            )
        },
    );
    if count == 0 {
        return None;
    }
    let divisor = f64::from(count);
    Some(GeoPoint::new(
        latitude_sum / divisor,
        longitude_sum / divisor,
    ))
}
