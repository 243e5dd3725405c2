//! Read track layouts from csv files.

use std::fs;
use std::io;
use std::path::Path;

use csv;

use error::{ResultExt, TrackError};
use layout::{Config, PointRow, TrackLayout};
use points::ControlPoints;
use util::{P3, V3};

impl TrackLayout {
    /// Read the two layout files from a given directory.
    /// control_points.csv lists the points the track passes through.
    /// config.csv has various configuration options.
    pub fn load_from(directory: &Path) -> Result<TrackLayout, TrackError> {
        let path_to = |filename: &str| directory.join(filename);

        let control_points =
            ControlPoints::load_from(&path_to("control_points.csv"))
                .context("failed to load control points")?;

        let config = Config::load_from(&path_to("config.csv"))
            .context("failed to load config sheet")?;

        let name = directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "track".to_owned());

        Ok(TrackLayout {
            name,
            control_points,
            config,
        })
    }
}

impl ControlPoints {
    fn load_from(file: &Path) -> Result<ControlPoints, TrackError> {
        ControlPoints::from_reader(open_csv_file(file)?)
    }

    /// Read points from csv text with the header `x,y,z,up_x,up_y,up_z`.
    /// The up columns may be left out, or left empty on every row.
    pub fn from_reader<R: io::Read>(
        reader: R,
    ) -> Result<ControlPoints, TrackError> {
        let mut csv = reader_for(reader);
        let mut points = vec![];
        let mut ups = vec![];
        for (i, row) in csv.deserialize::<PointRow>().enumerate() {
            let row =
                row.with_context(|| format!("Could not read point {}.", i))?;
            points.push(P3::new(row.x, row.y, row.z));
            match (row.up_x, row.up_y, row.up_z) {
                (Some(x), Some(y), Some(z)) => ups.push(V3::new(x, y, z)),
                (None, None, None) => (),
                _ => {
                    return Err(TrackError::Load(format!(
                        "Point {} has an incomplete up vector.",
                        i
                    )))
                }
            }
        }
        if points.is_empty() {
            return Err(TrackError::load("Found no control points."));
        }
        if ups.is_empty() {
            Ok(ControlPoints::new(points))
        } else {
            ControlPoints::with_up_vectors(points, ups)
        }
    }
}

impl Config {
    fn load_from(file: &Path) -> Result<Config, TrackError> {
        Config::from_reader(open_csv_file(file)?)
    }

    /// Read the first row of csv text with the header `samples,width`.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Config, TrackError> {
        let mut csv = reader_for(reader);
        let config = match csv.deserialize::<Config>().next() {
            None => {
                return Err(TrackError::load("Found no rows in config file."))
            }
            Some(row) => row?,
        };
        if config.samples == 0 {
            return Err(TrackError::load("Config must ask for at least 1 sample."));
        }
        if !(config.width > 0.) {
            return Err(TrackError::Load(format!(
                "Track width must be positive. Read width {}.",
                config.width
            )));
        }
        Ok(config)
    }
}

fn reader_for<R: io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn open_csv_file(path: &Path) -> Result<fs::File, TrackError> {
    info!("Loading file: '{:?}'.", path);
    fs::File::open(path)
        .with_context(|| format!("Could not read csv file: '{:?}'.", path))
}
