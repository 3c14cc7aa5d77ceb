//! Distance units and body radii.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeoPointError;

/// Number of kilometres per nautical mile.
pub const NAUTICAL_MILE: f64 = 1.852;

/// Number of kilometres per statute mile.
pub const STATUTE_MILE: f64 = 1.609;

/// Radius of the body used for all great circle calculations, in kilometres.
pub const BODY_RADIUS: f64 = Body::Earth.radius();

/// Solar system bodies with known mean radii.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Moon,
    Pluto,
    Ceres,
    Eris,
}

impl Body {
    /// Radius of the body in kilometres.
    pub const fn radius(&self) -> f64 {
        match self {
            Body::Sun => 696_000.0,
            Body::Mercury => 2440.0,
            Body::Venus => 6052.0,
            Body::Earth => 6367.0,
            Body::Mars => 3390.0,
            Body::Jupiter => 69911.0,
            Body::Saturn => 58232.0,
            Body::Uranus => 25362.0,
            Body::Neptune => 24622.0,
            Body::Moon => 1738.0,
            Body::Pluto => 1153.0,
            Body::Ceres => 475.0,
            Body::Eris => 1200.0,
        }
    }
}

/// Unit used for distances returned from (and accepted by) point operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceUnit {
    /// Kilometres.
    #[default]
    Metric,
    /// Statute miles.
    Imperial,
    /// Nautical miles.
    Nautical,
}

impl DistanceUnit {
    /// Converts a distance in kilometres into this unit.
    pub fn from_kilometres(&self, distance: f64) -> f64 {
        match self {
            DistanceUnit::Metric => distance,
            DistanceUnit::Imperial => distance / STATUTE_MILE,
            DistanceUnit::Nautical => distance / NAUTICAL_MILE,
        }
    }

    /// Converts a distance in this unit into kilometres.
    pub fn to_kilometres(&self, distance: f64) -> f64 {
        match self {
            DistanceUnit::Metric => distance,
            DistanceUnit::Imperial => distance * STATUTE_MILE,
            DistanceUnit::Nautical => distance * NAUTICAL_MILE,
        }
    }

    /// Canonical name of the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Metric => "metric",
            DistanceUnit::Imperial => "imperial",
            DistanceUnit::Nautical => "nautical",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metric" | "km" => Ok(Self::Metric),
            "imperial" | "sm" | "US customary" => Ok(Self::Imperial),
            "nautical" | "nm" => Ok(Self::Nautical),
            other => Err(GeoPointError::UnknownUnit(other.to_string())),
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of the great circle arc spanning `angle` degrees, in `unit`.
pub fn angle_to_distance(angle: f64, unit: DistanceUnit) -> f64 {
    unit.from_kilometres(angle.to_radians() * BODY_RADIUS)
}

/// Angle in degrees spanned by a great circle arc of `distance` in `unit`.
pub fn distance_to_angle(distance: f64, unit: DistanceUnit) -> f64 {
    (unit.to_kilometres(distance) / BODY_RADIUS).to_degrees()
}
