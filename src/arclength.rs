//! Cumulative lengths around a closed control polygon.

use nalgebra::distance;

use error::TrackError;
use util::{practically_zero, P3};

/// Distances along a closed polygon, measured from its first point.
///
/// For `M` points there are `M + 1` entries: `distances[0]` is zero and
/// `distances[M]` is the whole perimeter, including the closing edge from
/// the last point back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    distances: Vec<f32>,
}

/// Where a length falls on the polygon: the edge that starts at point
/// `index`, and how far along that edge, from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPosition {
    pub index: usize,
    pub t: f32,
}

impl ArcLengthTable {
    pub fn new(points: &[P3]) -> ArcLengthTable {
        let mut distances = Vec::with_capacity(points.len() + 1);
        let mut length = 0.0;
        distances.push(length);
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            for pair in points.windows(2) {
                length += distance(&pair[0], &pair[1]);
                distances.push(length);
            }
            // Close the loop.
            length += distance(last, first);
            distances.push(length);
        }
        ArcLengthTable { distances }
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    /// The number of edges in the closed polygon (equal to its point count).
    pub fn segment_count(&self) -> usize {
        self.distances.len() - 1
    }

    /// The perimeter of the closed polygon.
    pub fn total_length(&self) -> f32 {
        *self.distances.last().unwrap_or(&0.0)
    }

    pub fn is_degenerate(&self) -> bool {
        practically_zero(self.total_length())
    }

    /// Map any distance onto `[0, total_length)` by going round the loop.
    pub fn wrap(&self, d: f32) -> Result<f32, TrackError> {
        if self.is_degenerate() {
            return Err(TrackError::DegenerateLoop);
        }
        let total = self.total_length();
        let mut length = d - (d / total).floor() * total;
        // Rounding can land just outside one lap, on either side.
        if length < 0.0 {
            length += total;
        }
        if length >= total {
            length = 0.0;
        }
        Ok(length)
    }

    /// Find the edge containing `length`, which should already be wrapped.
    ///
    /// Edges are half-open, `distances[j] <= length < distances[j + 1]`, so
    /// zero-length edges never match. A length at or beyond the end of the
    /// table belongs to the end of the last edge that has any length, and a
    /// negative length to the start of the first.
    pub fn locate(&self, length: f32) -> Result<SegmentPosition, TrackError> {
        if !length.is_finite() {
            return Err(TrackError::SegmentNotFound(length));
        }
        let found = self
            .distances
            .windows(2)
            .position(|pair| pair[0] <= length && length < pair[1]);
        match found {
            Some(index) => Ok(SegmentPosition {
                index,
                t: self.fraction(index, length),
            }),
            None if length >= self.total_length() => {
                let index = self
                    .distances
                    .windows(2)
                    .rposition(|pair| pair[0] < pair[1])
                    .ok_or(TrackError::DegenerateLoop)?;
                warn!(
                    "Length {} is at the end of the loop, using the end of segment {}",
                    length, index
                );
                Ok(SegmentPosition { index, t: 1.0 })
            }
            None if length < 0.0 => {
                let index = self
                    .distances
                    .windows(2)
                    .position(|pair| pair[0] < pair[1])
                    .ok_or(TrackError::DegenerateLoop)?;
                warn!(
                    "Length {} is before the start of the loop, using the start of segment {}",
                    length, index
                );
                Ok(SegmentPosition { index, t: 0.0 })
            }
            None => Err(TrackError::SegmentNotFound(length)),
        }
    }

    fn fraction(&self, index: usize, length: f32) -> f32 {
        let start = self.distances[index];
        let end = self.distances[index + 1];
        (length - start) / (end - start)
    }
}
