//! Error types for replay loading and recording.

use std::fmt;
use std::io;

/// Errors that can occur loading or persisting a replay.
#[derive(Debug)]
pub enum ReplayError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The document is not valid JSON or does not match the replay layout.
    Json(serde_json::Error),
    /// The replay contains no turns; minimum length is 1 (the initial
    /// state).
    NoTurns,
    /// The surface polyline needs at least two points.
    SurfaceTooShort {
        /// Number of points found.
        count: usize,
    },
    /// The safe-area span is empty or indexes past the surface points.
    BadSafeArea {
        /// Span start index.
        start: usize,
        /// Span end index (exclusive).
        end: usize,
        /// Number of surface points.
        points: usize,
    },
    /// A turn field is outside its simulation limits.
    TurnOutOfRange {
        /// Index of the offending turn.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i32,
    },
    /// A turn's velocity has a NaN or infinite component.
    NonFiniteVelocity {
        /// Index of the offending turn.
        index: usize,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "malformed replay document: {e}"),
            Self::NoTurns => write!(f, "replay has no turns"),
            Self::SurfaceTooShort { count } => {
                write!(f, "surface has {count} point(s), need at least 2")
            }
            Self::BadSafeArea { start, end, points } => {
                write!(
                    f,
                    "safe area [{start}, {end}) is not a valid span over {points} surface point(s)"
                )
            }
            Self::TurnOutOfRange {
                index,
                field,
                value,
            } => {
                write!(f, "turn {index}: {field} = {value} is out of range")
            }
            Self::NonFiniteVelocity { index } => {
                write!(f, "turn {index}: velocity is not finite")
            }
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReplayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
