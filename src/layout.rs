//! Descriptions of the tracks, as read from disk.

use points::ControlPoints;

/// Everything needed to build one track.
#[derive(Debug, Clone)]
pub struct TrackLayout {
    /// Taken from the name of the directory the layout was loaded from.
    pub name: String,
    pub control_points: ControlPoints,
    pub config: Config,
}

/// Configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Config {
    /// How many evenly spaced points to resample the centreline into.
    pub samples: usize,
    /// Distance between the left and right edges of the road.
    pub width: f32,
}

/// One row of a control point file. The up vector columns are either all
/// filled in or all left empty.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct PointRow {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub up_x: Option<f32>,
    pub up_y: Option<f32>,
    pub up_z: Option<f32>,
}
