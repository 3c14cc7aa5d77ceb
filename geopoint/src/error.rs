//! Error types used by the crate.

use geopoint_types::GeoPointError;
use thiserror::Error;

/// Error type of the point collections.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoPointsError {
    /// Error from a single point operation.
    #[error(transparent)]
    Point(#[from] GeoPointError),
    /// Leg operations need at least two points.
    #[error("more than one location is required, got {0}")]
    InsufficientPoints(usize),
    /// Key given in the processing order is not in the collection.
    #[error("unknown key {0:?}")]
    UnknownKey(String),
    /// Text looks like a location but one of its numbers cannot be read.
    #[error("failed to parse location {0:?}")]
    UnparsableLocation(String),
    /// Two consecutive timed points have the same time, the leg has no speed.
    #[error("no time elapsed on leg {0}")]
    ZeroDuration(usize),
    /// Timezone name is not in the IANA database.
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
}
