//! A closed racetrack: a smooth, evenly sampled loop with a road either side.

use error::{ResultExt, TrackError};
use frame::{Frame, Offset, Placement};
use lap::LapCounter;
use layout::{Config, TrackLayout};
use offset::OffsetCurves;
use points::ControlPoints;
use resample::resample;
use spline::{ClosedSpline, Sample};
use strip::{road_strip, StripVertex};
use util::{spacing_stats, world_up};

/// How far ahead to look, along the track, to find the direction of travel.
pub const FRAME_LOOKAHEAD: f32 = 1.0;

/// How far from the centreline a vehicle may stray, as a fraction of the
/// road width.
pub const LATERAL_LIMIT: f32 = 0.4;

/// A track, built once from its layout and never changed afterwards.
#[derive(Debug, Clone)]
pub struct Track {
    name: String,
    width: f32,
    control_points: ControlPoints,
    spline: ClosedSpline,
    centreline: ControlPoints,
    offsets: OffsetCurves,
    laps: LapCounter,
}

/// A point on the track, with the frame there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub sample: Sample,
    pub frame: Frame,
}

impl Track {
    pub fn new(layout: &TrackLayout) -> Result<Track, TrackError> {
        Track::build(
            &layout.name,
            layout.control_points.clone(),
            layout.config,
        ).with_context(|| format!("Could not build track '{}'.", layout.name))
    }

    pub fn build(
        name: &str,
        control_points: ControlPoints,
        config: Config,
    ) -> Result<Track, TrackError> {
        let resampled = resample(&control_points, config.samples)?;
        let offsets = OffsetCurves::new(&resampled.centreline, config.width)?;
        let laps = LapCounter::new(resampled.spline.total_length())?;
        let (spacing, deviation) =
            spacing_stats(resampled.centreline.points());
        info!(
            "Built track '{}' from {} control points: {} samples, length {:.1}, spacing {:.3} +/- {:.3}",
            name,
            control_points.len(),
            resampled.centreline.len(),
            laps.lap_length(),
            spacing,
            deviation
        );
        Ok(Track {
            name: name.to_owned(),
            width: config.width,
            control_points,
            spline: resampled.spline,
            centreline: resampled.centreline,
            offsets,
            laps,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// The hand-placed points the track was built from.
    pub fn control_points(&self) -> &ControlPoints {
        &self.control_points
    }

    /// Evenly spaced points down the middle of the road.
    pub fn centreline(&self) -> &ControlPoints {
        &self.centreline
    }

    pub fn offsets(&self) -> &OffsetCurves {
        &self.offsets
    }

    /// The length of one lap.
    pub fn total_length(&self) -> f32 {
        self.laps.lap_length()
    }

    /// The point at distance `d` along the track, going round as often as
    /// needed.
    pub fn sample(&self, d: f32) -> Result<Sample, TrackError> {
        self.spline.sample(d)
    }

    /// The point at distance `d`, and the frame there, facing the direction
    /// of travel.
    pub fn frame_at(&self, d: f32) -> Result<TrackPoint, TrackError> {
        let here = self.spline.sample(d)?;
        let ahead = self.spline.sample(d + FRAME_LOOKAHEAD)?;
        let up = here.up.unwrap_or_else(world_up);
        let frame = Frame::between(here.position, ahead.position, up)?;
        Ok(TrackPoint {
            sample: here,
            frame,
        })
    }

    /// Where something sits when it is `offset` away from the point at `d`.
    pub fn place(
        &self,
        d: f32,
        offset: Offset,
    ) -> Result<Placement, TrackError> {
        let point = self.frame_at(d)?;
        Ok(point.frame.place(point.sample.position, offset))
    }

    pub fn current_lap(&self, d: f32) -> i64 {
        self.laps.current_lap(d)
    }

    /// Keep a sideways offset on the road.
    pub fn clamp_lateral(&self, lateral: f32) -> f32 {
        let limit = LATERAL_LIMIT * self.width;
        lateral.max(-limit).min(limit)
    }

    pub fn road_strip(&self) -> Vec<StripVertex> {
        road_strip(&self.offsets)
    }
}
