use std::error::Error;
use std::fmt;
use std::io;

use csv;

#[derive(Debug)]
pub enum TrackError {
    /// A distance along the track was negative.
    InvalidDistance(f32),
    /// There were no control points.
    EmptyTrack,
    /// The loop has no length, so distances along it mean nothing.
    DegenerateLoop,
    /// A loop was to be resampled into no points at all.
    NoSamples,
    /// No segment of the loop contains the (wrapped) distance.
    SegmentNotFound(f32),
    /// The tangent has no direction, so no frame can be built.
    DegenerateFrame,
    MismatchedUpVectors {
        points: usize,
        up_vectors: usize,
    },
    Load(String),
    Io(io::Error),
    Csv(csv::Error),
    Context {
        message: String,
        cause: Box<TrackError>,
    },
}

pub trait ResultExt<T> {
    /// Convert the error type to a TrackError, and add the context message around it.
    fn context(self, message: &str) -> Result<T, TrackError>;

    /// Like `context()` but take a closure containing a potentionally costly
    /// operation that will only be executed if there was an error.
    fn with_context<F>(self, message_creator: F) -> Result<T, TrackError>
    where
        F: Fn() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    TrackError: From<E>,
{
    fn context(self, message: &str) -> Result<T, TrackError> {
        self.map_err(|err| TrackError::from(err).context(message))
    }

    fn with_context<F>(self, message_creator: F) -> Result<T, TrackError>
    where
        F: Fn() -> String,
    {
        self.map_err(|err| TrackError::from(err).context(&message_creator()))
    }
}

impl TrackError {
    pub fn load(message: &str) -> Self {
        TrackError::Load(message.to_owned())
    }

    /// Wrap the error with a message providing more context about what went wrong.
    pub fn context(self, message: &str) -> Self {
        TrackError::Context {
            message: message.to_owned(),
            cause: Box::new(self),
        }
    }

    /// The innermost error, with all context stripped off.
    pub fn root(&self) -> &TrackError {
        match self {
            TrackError::Context { cause, .. } => cause.root(),
            other => other,
        }
    }
}

impl Error for TrackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrackError::Context { ref cause, .. } => Some(cause.as_ref()),
            TrackError::Io(ref cause) => Some(cause),
            TrackError::Csv(ref cause) => Some(cause),
            _ => None,
        }
    }
}

impl From<io::Error> for TrackError {
    fn from(io_err: io::Error) -> TrackError {
        TrackError::Io(io_err)
    }
}

impl From<csv::Error> for TrackError {
    fn from(csv_err: csv::Error) -> TrackError {
        TrackError::Csv(csv_err)
    }
}

impl fmt::Display for TrackError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TrackError::InvalidDistance(d) => {
                write!(f, "Distance along the track must not be negative, got {}", d)
            }
            TrackError::EmptyTrack => write!(f, "Track has no control points"),
            TrackError::DegenerateLoop => {
                write!(f, "Track loop has zero length")
            }
            TrackError::NoSamples => {
                write!(f, "Cannot resample a track into 0 points")
            }
            TrackError::SegmentNotFound(length) => write!(
                f,
                "Could not find the track segment containing length {}",
                length
            ),
            TrackError::DegenerateFrame => {
                write!(f, "Could not build a frame: the tangent has no direction")
            }
            TrackError::MismatchedUpVectors { points, up_vectors } => write!(
                f,
                "Found {} up vectors for {} control points",
                up_vectors, points
            ),
            TrackError::Load(message) => {
                write!(f, "Failed to load track layout: {}", message)
            }
            TrackError::Io(err) => write!(f, "Input/output error: {}", err),
            TrackError::Csv(err) => write!(f, "CSV file error: {}", err),
            TrackError::Context { message, cause } => {
                write!(f, "{}\n  caused by: {}", message, cause)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_chain() {
        let result: Result<(), TrackError> = Err(TrackError::DegenerateLoop);
        let err = result.context("building the environment track").unwrap_err();
        match err.root() {
            TrackError::DegenerateLoop => (),
            other => panic!("unexpected root error {:?}", other),
        }
        let text = err.to_string();
        assert!(text.starts_with("building the environment track"));
        assert!(text.contains("zero length"));
        assert!(err.source().is_some());
    }
}
