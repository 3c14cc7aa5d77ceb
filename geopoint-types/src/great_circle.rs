//! Great circle calculations on a sphere of [`BODY_RADIUS`].
//!
//! Functions in this module work on anything implementing [`GeoPoint`] and always return kilometres and degrees
//! (or radians for the derived locations). [`Point`](crate::Point) wraps them to apply its distance unit.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::compass::octant_name;
use crate::error::GeoPointError;
use crate::geo::GeoPoint;
use crate::units::BODY_RADIUS;

/// Formula used for distance calculation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DistanceMethod {
    /// Haversine formula, numerically stable for small distances.
    #[default]
    Haversine,
    /// Spherical law of cosines.
    Sloc,
}

impl FromStr for DistanceMethod {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "haversine" => Ok(Self::Haversine),
            "sloc" => Ok(Self::Sloc),
            other => Err(GeoPointError::UnknownMethod(other.to_string())),
        }
    }
}

/// Representation of a calculated bearing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum BearingFormat {
    /// Degrees clockwise from true north.
    #[default]
    Numeric,
    /// Name of the 8 segment compass direction.
    String,
}

impl FromStr for BearingFormat {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numeric" => Ok(Self::Numeric),
            "string" => Ok(Self::String),
            other => Err(GeoPointError::UnknownFormat(other.to_string())),
        }
    }
}

/// Bearing in the requested [`BearingFormat`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Bearing {
    /// Degrees in `[0, 360)`.
    Degrees(f64),
    /// Compass direction name, e.g. `North-west`.
    Name(&'static str),
}

impl Bearing {
    /// Converts a bearing in degrees into the given format.
    pub fn new(degrees: f64, format: BearingFormat) -> Self {
        match format {
            BearingFormat::Numeric => Bearing::Degrees(degrees),
            BearingFormat::String => Bearing::Name(octant_name(degrees)),
        }
    }

    /// Numeric value, if this is a [`Bearing::Degrees`].
    pub fn degrees(&self) -> Option<f64> {
        match self {
            Bearing::Degrees(v) => Some(*v),
            Bearing::Name(_) => None,
        }
    }
}

impl Display for Bearing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Bearing::Degrees(v) => write!(f, "{v}"),
            Bearing::Name(name) => f.write_str(name),
        }
    }
}

/// Great circle distance between two points in kilometres.
pub fn distance(from: &impl GeoPoint, to: &impl GeoPoint, method: DistanceMethod) -> f64 {
    let (lat1, lat2) = (from.lat_rad(), to.lat_rad());
    let longitude_difference = to.lon_rad() - from.lon_rad();
    let latitude_difference = lat2 - lat1;

    match method {
        DistanceMethod::Haversine => {
            let temp = ((latitude_difference / 2.0).sin().powi(2)
                + lat1.cos() * lat2.cos() * (longitude_difference / 2.0).sin().powi(2))
            .clamp(0.0, 1.0);
            2.0 * BODY_RADIUS * temp.sqrt().atan2((1.0 - temp).sqrt())
        }
        DistanceMethod::Sloc => {
            let cosine =
                lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * longitude_difference.cos();
            cosine.clamp(-1.0, 1.0).acos() * BODY_RADIUS
        }
    }
}

/// Initial bearing from `from` to `to` in degrees, in `[0, 360)`.
///
/// On a sphere the bearing back from `to` is generally not the reverse of this one, see [`final_bearing`].
pub fn initial_bearing(from: &impl GeoPoint, to: &impl GeoPoint) -> f64 {
    let (lat1, lat2) = (from.lat_rad(), to.lat_rad());
    let longitude_difference = to.lon_rad() - from.lon_rad();

    let y = longitude_difference.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * longitude_difference.cos();
    let bearing = y.atan2(x).to_degrees();

    (bearing + 360.0).rem_euclid(360.0)
}

/// Bearing on arrival at `to`, in degrees.
pub fn final_bearing(from: &impl GeoPoint, to: &impl GeoPoint) -> f64 {
    (initial_bearing(to, from) + 180.0).rem_euclid(360.0)
}

/// Great circle midpoint as `(latitude, longitude)` in radians.
pub fn midpoint(from: &impl GeoPoint, to: &impl GeoPoint) -> (f64, f64) {
    let (lat1, lat2) = (from.lat_rad(), to.lat_rad());
    let longitude_difference = to.lon_rad() - from.lon_rad();

    let y = longitude_difference.sin() * lat2.cos();
    let x = lat2.cos() * longitude_difference.cos();
    let latitude = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + x).powi(2) + y.powi(2)).sqrt());
    let longitude = from.lon_rad() + y.atan2(lat1.cos() + x);

    log::trace!("Midpoint in radians: {latitude}, {longitude}");

    (latitude, longitude)
}

/// Location reached from `from` after `distance` kilometres along `bearing` degrees, as `(latitude, longitude)`
/// in radians.
///
/// The longitude is not normalized, starting close to the antimeridian can produce values beyond `±π`.
pub fn destination(from: &impl GeoPoint, bearing: f64, distance: f64) -> (f64, f64) {
    let bearing = bearing.to_radians();
    let lat1 = from.lat_rad();
    let angular_distance = distance / BODY_RADIUS;

    let latitude = (lat1.sin() * angular_distance.cos()
        + lat1.cos() * angular_distance.sin() * bearing.cos())
    .asin();
    let longitude = from.lon_rad()
        + (bearing.sin() * angular_distance.sin() * lat1.cos())
            .atan2(angular_distance.cos() - lat1.sin() * latitude.sin());

    log::trace!("Destination in radians: {latitude}, {longitude}");

    (latitude, longitude)
}
