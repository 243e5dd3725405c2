extern crate csv;
extern crate failure;
#[macro_use]
extern crate log;
extern crate nalgebra;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate svg;

mod util;
mod error;
mod catmullrom;
mod arclength;
mod points;
mod spline;
mod resample;
mod frame;
mod offset;
mod lap;
mod strip;
mod layout;
mod load;
mod track;
mod draw;
pub mod render_2d;

pub use arclength::{ArcLengthTable, SegmentPosition};
pub use catmullrom::{interpolate, CatmullRom};
pub use error::{ResultExt, TrackError};
pub use frame::{Frame, Offset, Placement};
pub use lap::LapCounter;
pub use layout::{Config, TrackLayout};
pub use offset::OffsetCurves;
pub use points::ControlPoints;
pub use resample::{resample, sample_evenly, Resampled};
pub use spline::{ClosedSpline, Sample};
pub use strip::{interleave, road_strip, StripVertex};
pub use track::{Track, TrackPoint, FRAME_LOOKAHEAD, LATERAL_LIMIT};
pub use util::{spacing_stats, world_up, P2, P3, V2, V3};

use std::path::Path;
use std::process;

use failure::Error;
use util::print_error;

/// Load the layout in the given directory and build a track from it.
pub fn load_track<P: AsRef<Path>>(directory: P) -> Result<Track, Error> {
    let directory = directory.as_ref();
    let layout = TrackLayout::load_from(directory)
        .with_context(|| format!("Could not load layout from {:?}.", directory))?;
    Ok(Track::new(&layout)?)
}

/// Run the closure, and if it fails print the chain of causes and exit.
pub fn run<F>(run: F)
where
    F: Fn() -> Result<(), Error>,
{
    if let Err(e) = run() {
        print_error(e);
        process::exit(1);
    }
    println!("Done.");
}
