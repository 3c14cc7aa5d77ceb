//! Collections of [`Point`](geopoint_types::Point)s and helpers for building them from user input.
//!
//! * [`Points`] - ordered points with leg-by-leg distances, bearings and midpoints,
//! * [`KeyedPoints`] - named points, with legs along a given order of names,
//! * [`TimedPoints`] - points with timestamps and leg speeds,
//! * [`location`] - parsing of free text locations and Maidenhead locators,
//! * [`ZoneOffsetCache`] - UTC offsets of IANA timezones for solar calculations (`tz` feature).
//!
//! ```
//! use geopoint::KeyedPoints;
//! use geopoint_types::{DistanceMethod, DistanceUnit};
//!
//! let waypoints = KeyedPoints::parse(
//!     [("home", "52.015;-0.221"), ("shop", "IO92va")],
//!     DistanceUnit::Metric,
//! )
//! .unwrap();
//!
//! let legs = waypoints.distance(&["home", "shop"], DistanceMethod::Haversine).unwrap();
//! assert!(legs[0] < 2.0);
//! ```

pub mod error;
pub mod keyed_points;
pub mod location;
pub mod points;
pub mod timed;
#[cfg(feature = "tz")]
pub mod zones;

mod legs;

pub use error::GeoPointsError;
pub use geopoint_types;
pub use keyed_points::KeyedPoints;
pub use points::Points;
pub use timed::{TimedPoint, TimedPoints};
#[cfg(feature = "tz")]
pub use zones::ZoneOffsetCache;
