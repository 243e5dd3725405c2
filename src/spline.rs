//! A closed spline through any number of points, addressed by distance.
//!
//! Implemented with the uniform Catmull-Rom algorithm. Distances are
//! measured along the control polygon, not along the curve itself.

use arclength::ArcLengthTable;
use catmullrom::interpolate;
use error::TrackError;
use points::ControlPoints;
use util::{try_normalize, world_up, P3, V3};

/// A closed spline, passing through each of its control points.
#[derive(Debug, Clone)]
pub struct ClosedSpline {
    control: ControlPoints,
    table: ArcLengthTable,
}

/// A point on the spline, with the interpolated up vector if the control
/// points carry any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: P3,
    pub up: Option<V3>,
}

impl ClosedSpline {
    pub fn new(control: ControlPoints) -> ClosedSpline {
        let table = ArcLengthTable::new(control.points());
        ClosedSpline { control, table }
    }

    pub fn control_points(&self) -> &ControlPoints {
        &self.control
    }

    pub fn table(&self) -> &ArcLengthTable {
        &self.table
    }

    /// The length of one lap of the control polygon.
    pub fn total_length(&self) -> f32 {
        self.table.total_length()
    }

    /// Get the point at a given distance along the loop from its first
    /// control point. Distances beyond one lap go round again.
    pub fn sample(&self, d: f32) -> Result<Sample, TrackError> {
        if d < 0.0 {
            return Err(TrackError::InvalidDistance(d));
        }
        if self.control.is_empty() {
            return Err(TrackError::EmptyTrack);
        }
        let length = self.table.wrap(d)?;
        let segment = self.table.locate(length)?;

        let m = self.control.len();
        let j = segment.index;
        let indices = [(j + m - 1) % m, j, (j + 1) % m, (j + 2) % m];

        let points = self.control.points();
        let position = P3::from(around(&indices, segment.t, |i| {
            points[i].coords
        }));

        let up = self.control.up_vectors().map(|ups| {
            let up = around(&indices, segment.t, |i| ups[i]);
            try_normalize(&up).unwrap_or_else(|| {
                debug!("Up vector vanished at distance {}, using world up", d);
                world_up()
            })
        });

        Ok(Sample { position, up })
    }
}

// Interpolate the four values at `indices`.
fn around<F>(indices: &[usize; 4], t: f32, value: F) -> V3
where
    F: Fn(usize) -> V3,
{
    interpolate(
        value(indices[0]),
        value(indices[1]),
        value(indices[2]),
        value(indices[3]),
        t,
    )
}
