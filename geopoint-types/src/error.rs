//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Every variant is returned to the caller as is, nothing in the crate retries or recovers from these. Note that a
/// solar event not happening on a given day is not an error, see [`sun_rise_set`](crate::solar::sun_rise_set).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoPointError {
    /// Angle mode token is not `degrees` or `radians`, or the input cannot be used in the selected mode.
    #[error("unknown angle type {0:?}")]
    InvalidAngleMode(String),
    /// Latitude outside of `[-90, 90]` degrees.
    #[error("invalid latitude value {0}")]
    InvalidLatitude(f64),
    /// Longitude outside of `[-180, 180]` degrees.
    #[error("invalid longitude value {0}")]
    InvalidLongitude(f64),
    /// Distance unit token is not recognized.
    #[error("unknown units type {0:?}")]
    UnknownUnit(String),
    /// Distance calculation method token is not recognized.
    #[error("unknown method type {0:?}")]
    UnknownMethod(String),
    /// Output format token is not recognized.
    #[error("unknown format type {0:?}")]
    UnknownFormat(String),
    /// Compass can only be split into 4, 8 or 16 segments.
    #[error("segments parameter must be 4, 8 or 16 not {0}")]
    UnsupportedSegmentCount(u32),
    /// Maidenhead precision token is not recognized.
    #[error("unsupported precision value {0:?}")]
    UnknownPrecision(String),
    /// Maidenhead locator is not 4, 6 or 8 characters long.
    #[error("locator must be 4, 6 or 8 characters long {0:?}")]
    InvalidLocatorLength(String),
    /// Maidenhead locator contains a character outside of the range of its position.
    #[error("invalid values in locator {0:?}")]
    InvalidLocatorValue(String),
    /// String does not look like an ISO 6709 coordinate at all.
    #[error("incorrect format for string {0:?}")]
    MalformedInput(String),
    /// One of the ISO 6709 fields has a wrong number of digits or is not a number.
    #[error("incorrect format for {axis} {value:?}")]
    MalformedComponent {
        /// Name of the field (`latitude`, `longitude` or `altitude`).
        axis: &'static str,
        /// Text of the field.
        value: String,
    },
    /// Sexagesimal style token is not `dm` or `dms`.
    #[error("unknown style type {0:?}")]
    UnknownStyle(String),
    /// Solar event token is not `rise` or `set`.
    #[error("unknown mode value {0:?}")]
    UnknownEvent(String),
    /// Zenith token is not one of the known twilight definitions.
    #[error("unknown zenith value {0:?}")]
    UnknownZenith(String),
    /// Local time of a solar event is still outside of a day after the wraparound correction.
    #[error("solar event time {0} cannot be represented as a time of day")]
    UnrepresentableTime(f64),
}
