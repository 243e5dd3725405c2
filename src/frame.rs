//! A moving frame along the track, for cameras and vehicles.

use nalgebra::Matrix3;

use error::TrackError;
use util::{try_normalize, world_up, P3, V3};

/// An orthonormal basis at a point on the track.
///
/// `tangent` points along the direction of travel, `normal` points to the
/// right-hand side of the road, and `binormal` points up out of the road.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub tangent: V3,
    pub normal: V3,
    pub binormal: V3,
}

/// How far to move from a point on the track, in the track's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub forward: f32,
    pub vertical: f32,
    pub lateral: f32,
}

/// Where to put something, and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: P3,
    /// Columns are the tangent, binormal and normal.
    pub orientation: Matrix3<f32>,
}

impl Frame {
    /// Build a frame from a direction of travel and a rough up direction.
    ///
    /// If the direction of travel is parallel to `up`, world up is used
    /// instead, and failing that the world x axis.
    pub fn new(tangent: V3, up: V3) -> Result<Frame, TrackError> {
        let tangent =
            try_normalize(&tangent).ok_or(TrackError::DegenerateFrame)?;
        let normal = match side(&tangent, &up) {
            Some(normal) => normal,
            None => {
                warn!(
                    "Tangent {:?} is parallel to up {:?}, using a world axis",
                    tangent, up
                );
                side(&tangent, &world_up())
                    .or_else(|| side(&tangent, &V3::x()))
                    .ok_or(TrackError::DegenerateFrame)?
            }
        };
        let binormal = normal.cross(&tangent).normalize();
        Ok(Frame {
            tangent,
            normal,
            binormal,
        })
    }

    /// The frame at `from`, heading towards `to`.
    pub fn between(from: P3, to: P3, up: V3) -> Result<Frame, TrackError> {
        Frame::new(to - from, up)
    }

    pub fn orientation(&self) -> Matrix3<f32> {
        Matrix3::from_columns(&[self.tangent, self.binormal, self.normal])
    }

    pub fn offset(&self, origin: P3, offset: Offset) -> P3 {
        origin
            + offset.forward * self.tangent
            + offset.vertical * self.binormal
            + offset.lateral * self.normal
    }

    pub fn place(&self, origin: P3, offset: Offset) -> Placement {
        Placement {
            position: self.offset(origin, offset),
            orientation: self.orientation(),
        }
    }
}

impl Offset {
    pub fn new(forward: f32, vertical: f32, lateral: f32) -> Offset {
        Offset {
            forward,
            vertical,
            lateral,
        }
    }
}

fn side(tangent: &V3, up: &V3) -> Option<V3> {
    try_normalize(&tangent.cross(up))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(frame: &Frame) {
        for v in &[frame.tangent, frame.normal, frame.binormal] {
            assert!((v.norm() - 1.).abs() < 1e-5);
        }
        assert!(frame.tangent.dot(&frame.normal).abs() < 1e-5);
        assert!(frame.tangent.dot(&frame.binormal).abs() < 1e-5);
        assert!(frame.normal.dot(&frame.binormal).abs() < 1e-5);
    }

    #[test]
    fn test_level_road() {
        let frame = Frame::new(V3::new(2., 0., 0.), V3::y()).unwrap();
        assert_eq!(frame.tangent, V3::x());
        assert_eq!(frame.normal, V3::z());
        assert_eq!(frame.binormal, V3::y());
        assert_orthonormal(&frame);
    }

    #[test]
    fn test_tilted_up_is_straightened() {
        let frame = Frame::new(V3::new(0., 0., 1.), V3::new(0.3, 1., 0.5))
            .unwrap();
        assert_orthonormal(&frame);
        assert!(frame.binormal.y > 0.9);
    }

    #[test]
    fn test_parallel_up_falls_back() {
        let frame = Frame::new(V3::new(1., 0., 0.), V3::new(3., 0., 0.))
            .unwrap();
        assert_eq!(frame, Frame::new(V3::x(), V3::y()).unwrap());

        let climbing = Frame::new(V3::y(), V3::y()).unwrap();
        assert_orthonormal(&climbing);
    }

    #[test]
    fn test_no_tangent() {
        match Frame::new(V3::zeros(), V3::y()) {
            Err(TrackError::DegenerateFrame) => (),
            other => panic!("expected a degenerate frame, got {:?}", other),
        }
    }

    #[test]
    fn test_place() {
        let frame = Frame::new(V3::x(), V3::y()).unwrap();
        let placement =
            frame.place(P3::new(1., 1., 1.), Offset::new(2., 3., -4.));
        assert_eq!(placement.position, P3::new(3., 4., -3.));
        assert_eq!(placement.orientation, Matrix3::identity());
    }
}
