use failure::Error;
use nalgebra::{Point2, Point3, Vector2, Vector3};

pub type P2 = Point2<f32>;
pub type P3 = Point3<f32>;
pub type V2 = Vector2<f32>;
pub type V3 = Vector3<f32>;

// Lengths shorter than this, in world units, are treated as zero.
pub const LENGTH_THRESHOLD: f32 = 1e-6;

pub fn practically_zero(x: f32) -> bool {
    f32::abs(x) < LENGTH_THRESHOLD
}

pub fn world_up() -> V3 {
    V3::new(0., 1., 0.)
}

/// Normalize, or `None` if the vector is too short to have a direction.
pub fn try_normalize(v: &V3) -> Option<V3> {
    v.try_normalize(LENGTH_THRESHOLD)
}

/// Look down on the world from above: keep x and z.
pub fn project(point: P3) -> P2 {
    P2::new(point.x, point.z)
}

pub fn project_points(points: &[P3]) -> Vec<P2> {
    points.iter().map(|&p| project(p)).collect()
}

/// Mean and standard deviation of the gaps between consecutive points,
/// including the gap from the last point back to the first.
pub fn spacing_stats(points: &[P3]) -> (f32, f32) {
    let n = points.len();
    if n < 2 {
        return (0., 0.);
    }
    let gaps: Vec<f32> = (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .collect();
    let mean = gaps.iter().sum::<f32>() / n as f32;
    let variance =
        gaps.iter().map(|g| (g - mean).powi(2)).sum::<f32>() / n as f32;
    (mean, variance.sqrt())
}

pub fn print_error(error: Error) {
    let mut causes = error.iter_chain();
    if let Some(first) = causes.next() {
        println!("\nError: {}", first);
    }
    for cause in causes {
        println!("Cause: {}", cause);
    }
}
