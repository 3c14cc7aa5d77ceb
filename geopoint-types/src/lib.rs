//! Points on the Earth sphere and the calculations built on them.
//!
//! The central type is [`Point`], a validated latitude/longitude pair with a distance unit and a UTC offset. It
//! provides great circle distances and bearings, midpoint and destination projection, Maidenhead locators and
//! sunrise/sunset times:
//!
//! ```
//! use chrono::NaiveDate;
//! use geopoint_types::{DistanceUnit, LocatorPrecision, Point, Zenith};
//!
//! let home = Point::new(52.015, -0.221).unwrap();
//! let target = Point::new(52.6333, -2.5).unwrap();
//!
//! assert_eq!(home.distance(&target) as i32, 169);
//! assert_eq!(home.with_unit(DistanceUnit::Nautical).distance(&target) as i32, 91);
//! assert_eq!(home.to_grid_locator(LocatorPrecision::Subsquare).unwrap(), "IO92va");
//!
//! let (sunrise, _) = home
//!     .sun_events(NaiveDate::from_ymd_opt(2007, 6, 28).unwrap(), Zenith::Official)
//!     .unwrap();
//! assert_eq!(sunrise.unwrap().to_string(), "03:42:00");
//! ```
//!
//! All the algorithms are also available as free functions in their modules, working on raw values or on any type
//! implementing [`geo::GeoPoint`]:
//!
//! * [`angle`] - decimal and sexagesimal angles,
//! * [`compass`] - compass direction names,
//! * [`units`] - distance units and body radii,
//! * [`great_circle`] - distance, bearing, midpoint and destination,
//! * [`locator`] - Maidenhead locators,
//! * [`iso6709`] - ISO 6709 coordinate strings,
//! * [`solar`] - sunrise, sunset and twilight.
//!
//! Distances are calculated on a sphere with the radius of [`units::BODY_RADIUS`], which is accurate to about 0.5%.

pub mod angle;
pub mod compass;
pub mod error;
pub mod geo;
pub mod great_circle;
pub mod iso6709;
pub mod locator;
pub mod solar;
pub mod units;

mod point;

pub use error::GeoPointError;
pub use great_circle::{Bearing, BearingFormat, DistanceMethod};
pub use locator::LocatorPrecision;
pub use point::{AngleMode, AngleValue, Point, PointFormat};
pub use solar::{SunEvent, Zenith};
pub use units::DistanceUnit;
