//! The hand-placed points that shape a closed loop.

use error::TrackError;
use util::{P3, V3};

/// An ordered, closed loop of control points, with optional up vectors.
///
/// Once built, the points never change. When up vectors are given there is
/// exactly one per point; they need not be normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints {
    points: Vec<P3>,
    up_vectors: Option<Vec<V3>>,
}

impl ControlPoints {
    pub fn new(points: Vec<P3>) -> ControlPoints {
        ControlPoints {
            points,
            up_vectors: None,
        }
    }

    pub fn with_up_vectors(
        points: Vec<P3>,
        up_vectors: Vec<V3>,
    ) -> Result<ControlPoints, TrackError> {
        if points.len() != up_vectors.len() {
            return Err(TrackError::MismatchedUpVectors {
                points: points.len(),
                up_vectors: up_vectors.len(),
            });
        }
        Ok(ControlPoints {
            points,
            up_vectors: Some(up_vectors),
        })
    }

    pub fn points(&self) -> &[P3] {
        &self.points
    }

    pub fn up_vectors(&self) -> Option<&[V3]> {
        self.up_vectors.as_ref().map(|ups| ups.as_slice())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[test]
fn test_up_vector_count_must_match() {
    let points = vec![P3::origin(), P3::new(1., 0., 0.)];
    match ControlPoints::with_up_vectors(points.clone(), vec![V3::y()]) {
        Err(TrackError::MismatchedUpVectors {
            points: 2,
            up_vectors: 1,
        }) => (),
        other => panic!("expected a count mismatch, got {:?}", other),
    }
    let ok = ControlPoints::with_up_vectors(points, vec![V3::y(), V3::y()])
        .unwrap();
    assert_eq!(ok.len(), 2);
    assert_eq!(ok.up_vectors().map(|ups| ups.len()), Some(2));
}
