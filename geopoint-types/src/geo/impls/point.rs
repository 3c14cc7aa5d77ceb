use approx::AbsDiffEq;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geo::traits::point::GeoPoint;

/// Unvalidated latitude/longitude pair in degrees.
///
/// This is what the Maidenhead and ISO 6709 decoders produce. Use [`Point`](crate::Point) for a validated value
/// with units and timezone.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    /// Latitude in degrees.
    fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    fn lon(&self) -> f64 {
        self.lon
    }
}

impl GeoPoint2d {
    /// Creates a new pair from latitude and longitude in degrees.
    pub const fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Copies coordinates of another point.
    pub fn from_point(other: &impl GeoPoint) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }
}

impl From<(f64, f64)> for GeoPoint2d {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint2d> for (f64, f64) {
    fn from(value: GeoPoint2d) -> Self {
        (value.lat, value.lon)
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new [`GeoPoint2d`] from latitude and longitude values (in degrees).
///
/// ```
/// use geopoint_types::geo::GeoPoint;
/// use geopoint_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        $crate::geo::GeoPoint2d::latlon($lat, $lon)
    };
}
