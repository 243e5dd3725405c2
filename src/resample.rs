//! Resample a loop so that its points are evenly spaced along it.
//!
//! Sampling at even distances along the control polygon only roughly evens
//! out the spacing, because the curve is not as long as the polygon in the
//! same places. Fitting a second spline through the first pass and
//! sampling that one again brings the spacing very close to uniform.

use error::TrackError;
use points::ControlPoints;
use spline::ClosedSpline;
use util::spacing_stats;

/// The output of both passes.
#[derive(Debug, Clone)]
pub struct Resampled {
    /// Samples at even polygon distances along the raw control points.
    pub first_pass: ControlPoints,
    /// The spline through the first pass. Later distance queries use this.
    pub spline: ClosedSpline,
    /// Samples at even polygon distances along `spline`.
    pub centreline: ControlPoints,
}

/// Take `count` samples at even distances along the control polygon.
pub fn sample_evenly(
    spline: &ClosedSpline,
    count: usize,
) -> Result<ControlPoints, TrackError> {
    if spline.table().is_degenerate() {
        return Err(TrackError::DegenerateLoop);
    }
    let spacing = spline.total_length() / count as f32;
    let mut points = Vec::with_capacity(count);
    let mut ups = Vec::with_capacity(count);
    for i in 0..count {
        let sample = spline.sample(i as f32 * spacing)?;
        points.push(sample.position);
        if let Some(up) = sample.up {
            ups.push(up);
        }
    }
    if spline.control_points().up_vectors().is_some() {
        ControlPoints::with_up_vectors(points, ups)
    } else {
        Ok(ControlPoints::new(points))
    }
}

/// Resample the raw control points into `count` nearly evenly spaced ones.
pub fn resample(
    raw: &ControlPoints,
    count: usize,
) -> Result<Resampled, TrackError> {
    if raw.is_empty() {
        return Err(TrackError::EmptyTrack);
    }
    if count == 0 {
        return Err(TrackError::NoSamples);
    }
    let raw_spline = ClosedSpline::new(raw.clone());
    let first_pass = sample_evenly(&raw_spline, count)?;
    log_spacing("first pass", &first_pass);

    let spline = ClosedSpline::new(first_pass.clone());
    let centreline = sample_evenly(&spline, count)?;
    log_spacing("second pass", &centreline);

    Ok(Resampled {
        first_pass,
        spline,
        centreline,
    })
}

fn log_spacing(pass: &str, points: &ControlPoints) {
    let (mean, deviation) = spacing_stats(points.points());
    debug!(
        "Resampled {} points ({}): mean spacing {:.3}, deviation {:.3}",
        points.len(),
        pass,
        mean,
        deviation
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use util::{P3, V3};

    // Points round a circle, bunched on one side and sparse on the other.
    fn lopsided() -> ControlPoints {
        let degrees = [0., 20., 40., 60., 120., 180., 240., 300.];
        ControlPoints::new(
            degrees
                .iter()
                .map(|a: &f32| {
                    let a = a.to_radians();
                    P3::new(20. * a.cos(), 0., 20. * a.sin())
                })
                .collect(),
        )
    }

    #[test]
    fn test_counts() {
        let result = resample(&lopsided(), 200).unwrap();
        assert_eq!(result.first_pass.len(), 200);
        assert_eq!(result.centreline.len(), 200);
        assert_eq!(result.spline.control_points(), &result.first_pass);
        assert!(result.centreline.up_vectors().is_none());
    }

    #[test]
    fn test_second_pass_is_more_uniform() {
        let result = resample(&lopsided(), 300).unwrap();
        let (mean1, dev1) = spacing_stats(result.first_pass.points());
        let (mean2, dev2) = spacing_stats(result.centreline.points());
        assert!(dev2 <= dev1);
        assert!(dev2 / mean2 < 0.05, "spread {}", dev2 / mean2);
        assert!(dev1 / mean1 > dev2 / mean2);
    }

    #[test]
    fn test_square_spacing() {
        let square = ControlPoints::new(vec![
            P3::new(0., 0., 0.),
            P3::new(10., 0., 0.),
            P3::new(10., 0., 10.),
            P3::new(0., 0., 10.),
        ]);
        let result = resample(&square, 400).unwrap();
        let (mean, deviation) = spacing_stats(result.centreline.points());
        assert!(deviation / mean < 0.05);
        // The curve bulges outwards between corners, so it is longer than the square.
        assert!(result.spline.total_length() > 40.);
    }

    #[test]
    fn test_keeps_up_vectors() {
        let control = ControlPoints::with_up_vectors(
            vec![
                P3::new(0., 0., 0.),
                P3::new(10., 0., 0.),
                P3::new(10., 0., 10.),
                P3::new(0., 0., 10.),
            ],
            vec![V3::y(); 4],
        ).unwrap();
        let result = resample(&control, 50).unwrap();
        let ups = result.centreline.up_vectors().unwrap();
        assert_eq!(ups.len(), 50);
        assert!(ups.iter().all(|up| (up - V3::y()).norm() < 1e-5));
    }

    #[test]
    fn test_degenerate_input() {
        let same = ControlPoints::new(vec![P3::new(1., 1., 1.); 5]);
        match resample(&same, 10) {
            Err(TrackError::DegenerateLoop) => (),
            other => panic!("expected a degenerate loop, got {:?}", other),
        }
        match resample(&ControlPoints::new(vec![]), 10) {
            Err(TrackError::EmptyTrack) => (),
            other => panic!("expected an empty track, got {:?}", other),
        }
        match resample(&lopsided(), 0) {
            Err(TrackError::NoSamples) => (),
            other => panic!("expected no samples, got {:?}", other),
        }
    }
}
