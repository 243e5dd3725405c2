//! Compute [uniform cubic Catmull-Rom splines](https://en.wikipedia.org/wiki/Cubic_Hermite_spline#Catmull%E2%80%93Rom_spline).

use util::V3;

/// A cubic interpolation between the middle two of four points.
///
/// The same basis is used for positions and for up vectors, so it works on
/// plain vectors. Positions go in as their coordinates.
#[derive(Debug, Clone, Copy)]
pub struct CatmullRom {
    // Polynomial coefficients, lowest power first.
    coefficients: [V3; 4],
}

impl CatmullRom {
    pub fn new(points: [V3; 4]) -> CatmullRom {
        let [p0, p1, p2, p3] = points;
        CatmullRom {
            coefficients: [
                p1,
                0.5 * (p2 - p0),
                0.5 * (2. * p0 - 5. * p1 + 4. * p2 - p3),
                0.5 * (-p0 + 3. * p1 - 3. * p2 + p3),
            ],
        }
    }

    /// Evaluate the segment from `p1` (at `t = 0`) to `p2` (at `t = 1`).
    pub fn at(&self, t: f32) -> V3 {
        let [a, b, c, d] = self.coefficients;
        a + b * t + c * (t * t) + d * (t * t * t)
    }
}

/// Interpolate between `p1` and `p2`, shaped by their neighbours `p0` and `p3`.
pub fn interpolate(p0: V3, p1: V3, p2: V3, p3: V3, t: f32) -> V3 {
    CatmullRom::new([p0, p1, p2, p3]).at(t)
}
