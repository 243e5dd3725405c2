//! The edges of the road, either side of the centreline.

use error::TrackError;
use frame::Frame;
use points::ControlPoints;
use util::{practically_zero, world_up, P3, V3};

/// Left and right edges, one point per centreline sample.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetCurves {
    pub left: Vec<P3>,
    pub right: Vec<P3>,
}

impl OffsetCurves {
    /// Offset the closed centreline by half of `width` to either side.
    ///
    /// Each sample's frame heads towards the next distinct sample. Without up
    /// vectors, world up is used.
    pub fn new(
        centreline: &ControlPoints,
        width: f32,
    ) -> Result<OffsetCurves, TrackError> {
        let points = centreline.points();
        let n = points.len();
        if n == 0 {
            return Err(TrackError::EmptyTrack);
        }
        let half = width / 2.;
        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        for i in 0..n {
            let p = points[i];
            let up = centreline
                .up_vectors()
                .map(|ups| ups[i])
                .unwrap_or_else(world_up);
            let frame = Frame::new(heading(points, i)?, up)?;
            left.push(p - half * frame.normal);
            right.push(p + half * frame.normal);
        }
        Ok(OffsetCurves { left, right })
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// The distance across the road at each sample.
    pub fn widths(&self) -> Vec<f32> {
        self.left
            .iter()
            .zip(&self.right)
            .map(|(l, r)| (r - l).norm())
            .collect()
    }
}

// Direction from point `i` to the next point that isn't on top of it.
fn heading(points: &[P3], i: usize) -> Result<V3, TrackError> {
    let n = points.len();
    (1..n)
        .map(|k| points[(i + k) % n] - points[i])
        .find(|v| !practically_zero(v.norm()))
        .ok_or(TrackError::DegenerateLoop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use resample::resample;

    fn circle(count: usize) -> Vec<P3> {
        (0..count)
            .map(|i| {
                let a = i as f32 / count as f32 * 2. * ::std::f32::consts::PI;
                P3::new(50. * a.cos(), 0., 50. * a.sin())
            })
            .collect()
    }

    #[test]
    fn test_constant_width() {
        let raw = ControlPoints::with_up_vectors(
            circle(12),
            vec![V3::new(0., 1., 0.2); 12],
        ).unwrap();
        let centreline = resample(&raw, 300).unwrap().centreline;
        let curves = OffsetCurves::new(&centreline, 8.).unwrap();
        assert_eq!(curves.len(), 300);
        assert_eq!(curves.right.len(), 300);
        for width in curves.widths() {
            assert!((width - 8.).abs() < 1e-3);
        }
    }

    #[test]
    fn test_sides() {
        let centreline = ControlPoints::new(circle(64));
        let curves = OffsetCurves::new(&centreline, 10.).unwrap();
        let p = centreline.points()[0];
        // Heading along +z at (50, 0, 0) with up along +y, the normal is -x.
        assert!(curves.left[0].x > p.x);
        assert!(curves.right[0].x < p.x);
        assert!((curves.left[0].y - p.y).abs() < 1e-6);
    }

    #[test]
    fn test_skips_repeated_points() {
        let mut points = circle(8);
        let first = points[0];
        points.insert(1, first);
        let curves =
            OffsetCurves::new(&ControlPoints::new(points), 2.).unwrap();
        assert_eq!(curves.left[0], curves.left[1]);
        assert!(curves.widths().iter().all(|w| (w - 2.).abs() < 1e-4));
    }

    #[test]
    fn test_degenerate_centreline() {
        let points = ControlPoints::new(vec![P3::new(1., 2., 3.); 3]);
        match OffsetCurves::new(&points, 2.) {
            Err(TrackError::DegenerateLoop) => (),
            other => panic!("expected a degenerate loop, got {:?}", other),
        }
        match OffsetCurves::new(&ControlPoints::new(vec![]), 2.) {
            Err(TrackError::EmptyTrack) => (),
            other => panic!("expected an empty track, got {:?}", other),
        }
    }
}
