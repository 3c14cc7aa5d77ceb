//! Validated location on the Earth surface.

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use approx::AbsDiffEq;
use chrono::{NaiveDate, NaiveTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{to_dd, to_dms, DmsStyle};
use crate::error::GeoPointError;
use crate::geo::GeoPoint;
use crate::great_circle::{self, Bearing, BearingFormat, DistanceMethod};
use crate::locator::{self, LocatorPrecision};
use crate::solar::{self, SunEvent, Zenith};
use crate::units::DistanceUnit;

/// Representation in which angles are given to the [`Point`] constructors and mutators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AngleMode {
    /// Decimal degrees or sexagesimal triples.
    #[default]
    Degrees,
    /// Radians. Sexagesimal triples cannot be used in this mode.
    Radians,
}

impl FromStr for AngleMode {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degrees" => Ok(Self::Degrees),
            "radians" => Ok(Self::Radians),
            other => Err(GeoPointError::InvalidAngleMode(other.to_string())),
        }
    }
}

/// Single latitude or longitude value as accepted by [`Point`] constructors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AngleValue {
    /// Decimal value in the current [`AngleMode`].
    Decimal(f64),
    /// Degrees, minutes and seconds. All components should have the same sign.
    Sexagesimal(f64, f64, f64),
}

impl From<f64> for AngleValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<i32> for AngleValue {
    fn from(value: i32) -> Self {
        Self::Decimal(value as f64)
    }
}

impl From<(f64, f64)> for AngleValue {
    fn from((degrees, minutes): (f64, f64)) -> Self {
        Self::Sexagesimal(degrees, minutes, 0.0)
    }
}

impl From<(f64, f64, f64)> for AngleValue {
    fn from((degrees, minutes, seconds): (f64, f64, f64)) -> Self {
        Self::Sexagesimal(degrees, minutes, seconds)
    }
}

impl AngleValue {
    /// Returns the value as `(degrees, radians)`.
    fn resolve(self, mode: AngleMode) -> Result<(f64, f64), GeoPointError> {
        match (self, mode) {
            (AngleValue::Decimal(v), AngleMode::Degrees) => Ok((v, v.to_radians())),
            (AngleValue::Decimal(v), AngleMode::Radians) => Ok((v.to_degrees(), v)),
            (AngleValue::Sexagesimal(d, m, s), AngleMode::Degrees) => {
                let v = to_dd(d, m, s);
                Ok((v, v.to_radians()))
            }
            (AngleValue::Sexagesimal(..), AngleMode::Radians) => {
                Err(GeoPointError::InvalidAngleMode("radians".to_string()))
            }
        }
    }
}

/// Textual representation of a [`Point`], see [`Point::format`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PointFormat {
    /// `N52.015°; W000.221°`
    #[default]
    Dd,
    /// `52°00.90′N, 000°13.26′W`
    Dm,
    /// `52°00′54″N, 000°13′15″W`
    Dms,
    /// `IO92`
    Locator,
}

impl FromStr for PointFormat {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dd" => Ok(Self::Dd),
            "dm" => Ok(Self::Dm),
            "dms" => Ok(Self::Dms),
            "locator" => Ok(Self::Locator),
            other => Err(GeoPointError::UnknownFormat(other.to_string())),
        }
    }
}

/// Location on a sphere with distance unit and UTC offset.
///
/// Latitude and longitude are kept both in degrees and in radians. The two forms are computed together on
/// construction and by [`Point::set_location`] / [`Point::set_from_locator`], and are never out of sync.
///
/// The `unit` only affects distances accepted and returned by the point methods, and `timezone` (minutes from UTC)
/// is only used for solar events.
///
/// Two points are equal (`==`) when their canonical representations are identical, see [`Point::canonical`].
/// For distance based comparison use [`Point::approx_eq`].
///
/// ```
/// use geopoint_types::{Point, PointFormat};
///
/// let home = Point::new(52.015, -0.221).unwrap();
/// let target = Point::new(52.6333, -2.5).unwrap();
///
/// assert_eq!(home.distance(&target) as i32, 169);
/// assert_eq!(home.bearing(&target) as i32, 294);
/// assert_eq!(home.format(PointFormat::Dms).unwrap(), "52°00′54″N, 000°13′15″W");
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "PointRecord", into = "PointRecord")
)]
pub struct Point {
    latitude: f64,
    longitude: f64,
    rad_latitude: f64,
    rad_longitude: f64,
    angle: AngleMode,
    unit: DistanceUnit,
    timezone: i32,
}

impl Point {
    /// Creates a new point from degrees, with metric unit and UTC timezone.
    pub fn new(
        latitude: impl Into<AngleValue>,
        longitude: impl Into<AngleValue>,
    ) -> Result<Self, GeoPointError> {
        Self::with_options(
            latitude,
            longitude,
            DistanceUnit::default(),
            AngleMode::Degrees,
            0,
        )
    }

    /// Creates a new point from radians, with metric unit and UTC timezone.
    pub fn from_radians(latitude: f64, longitude: f64) -> Result<Self, GeoPointError> {
        Self::with_options(
            latitude,
            longitude,
            DistanceUnit::default(),
            AngleMode::Radians,
            0,
        )
    }

    /// Creates a new point with all options.
    pub fn with_options(
        latitude: impl Into<AngleValue>,
        longitude: impl Into<AngleValue>,
        unit: DistanceUnit,
        angle: AngleMode,
        timezone: i32,
    ) -> Result<Self, GeoPointError> {
        let mut point = Self {
            latitude: 0.0,
            longitude: 0.0,
            rad_latitude: 0.0,
            rad_longitude: 0.0,
            angle,
            unit,
            timezone,
        };
        point.set_location(latitude, longitude)?;

        Ok(point)
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in radians.
    pub fn rad_latitude(&self) -> f64 {
        self.rad_latitude
    }

    /// Longitude in radians.
    pub fn rad_longitude(&self) -> f64 {
        self.rad_longitude
    }

    /// Mode in which [`Point::set_location`] interprets its arguments.
    pub fn angle_mode(&self) -> AngleMode {
        self.angle
    }

    /// Unit of distances.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Offset from UTC in minutes.
    pub fn timezone(&self) -> i32 {
        self.timezone
    }

    /// Returns a copy of the point with a different distance unit.
    pub fn with_unit(mut self, unit: DistanceUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Returns a copy of the point with a different UTC offset.
    pub fn with_timezone(mut self, timezone: i32) -> Self {
        self.timezone = timezone;
        self
    }

    /// Moves the point to a new location given in the point's [`AngleMode`].
    ///
    /// If either value is invalid the point is left unchanged.
    pub fn set_location(
        &mut self,
        latitude: impl Into<AngleValue>,
        longitude: impl Into<AngleValue>,
    ) -> Result<(), GeoPointError> {
        let (latitude, rad_latitude) = latitude.into().resolve(self.angle)?;
        let (longitude, rad_longitude) = longitude.into().resolve(self.angle)?;
        Self::validate(latitude, longitude)?;

        self.latitude = latitude;
        self.longitude = longitude;
        self.rad_latitude = rad_latitude;
        self.rad_longitude = rad_longitude;

        Ok(())
    }

    /// Moves the point to the location of a Maidenhead locator, see [`locator::decode`].
    ///
    /// If the locator is invalid the point is left unchanged.
    pub fn set_from_locator(&mut self, locator: &str) -> Result<(), GeoPointError> {
        let decoded = locator::decode(locator)?;
        Self::validate(decoded.lat(), decoded.lon())?;

        self.latitude = decoded.lat();
        self.longitude = decoded.lon();
        self.rad_latitude = decoded.lat().to_radians();
        self.rad_longitude = decoded.lon().to_radians();

        Ok(())
    }

    fn validate(latitude: f64, longitude: f64) -> Result<(), GeoPointError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoPointError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoPointError::InvalidLongitude(longitude));
        }

        Ok(())
    }

    /// Creates a point from radians, carrying over the settings of `self`.
    fn derive(&self, rad_latitude: f64, rad_longitude: f64) -> Result<Self, GeoPointError> {
        let mut point = *self;
        point.angle = AngleMode::Radians;
        point.set_location(rad_latitude, rad_longitude)?;
        point.angle = self.angle;

        Ok(point)
    }

    /// Representation used for strict equality and hashing.
    ///
    /// ```
    /// use geopoint_types::Point;
    ///
    /// let point = Point::new(52.015, -0.221).unwrap();
    /// assert_eq!(point.canonical(), "Point(52.015, -0.221, 'metric', 'degrees', 0)");
    /// ```
    pub fn canonical(&self) -> String {
        format!(
            "Point({:?}, {:?}, '{}', 'degrees', {})",
            self.latitude, self.longitude, self.unit, self.timezone
        )
    }

    /// Checks whether `other` is closer than `threshold` (in the unit of `self`).
    pub fn approx_eq(&self, other: &impl GeoPoint, threshold: f64) -> bool {
        self.distance(other) < threshold
    }

    /// Renders the point in the given format.
    pub fn format(&self, format: PointFormat) -> Result<String, GeoPointError> {
        Ok(match format {
            PointFormat::Dd => self.format_dd(),
            PointFormat::Dm => self.format_sexagesimal(DmsStyle::DegreesMinutes),
            PointFormat::Dms => self.format_sexagesimal(DmsStyle::DegreesMinutesSeconds),
            PointFormat::Locator => self.to_grid_locator(LocatorPrecision::Square)?,
        })
    }

    fn format_dd(&self) -> String {
        format!(
            "{}{:06.3}°; {}{:07.3}°",
            if self.latitude < 0.0 { 'S' } else { 'N' },
            self.latitude.abs(),
            if self.longitude < 0.0 { 'W' } else { 'E' },
            self.longitude.abs(),
        )
    }

    fn format_sexagesimal(&self, style: DmsStyle) -> String {
        let lat = to_dms(self.latitude, style);
        let lon = to_dms(self.longitude, style);
        let lat_hemisphere = if self.latitude < 0.0 { 'S' } else { 'N' };
        let lon_hemisphere = if self.longitude < 0.0 { 'W' } else { 'E' };

        match (lat.seconds(), lon.seconds()) {
            (Some(lat_seconds), Some(lon_seconds)) => format!(
                "{:02}°{:02}′{:02}″{lat_hemisphere}, {:03}°{:02}′{:02}″{lon_hemisphere}",
                lat.degrees().abs(),
                lat.minutes().abs() as i32,
                lat_seconds.abs() as i32,
                lon.degrees().abs(),
                lon.minutes().abs() as i32,
                lon_seconds.abs() as i32,
            ),
            _ => format!(
                "{:02}°{:05.2}′{lat_hemisphere}, {:03}°{:05.2}′{lon_hemisphere}",
                lat.degrees().abs(),
                lat.minutes().abs(),
                lon.degrees().abs(),
                lon.minutes().abs(),
            ),
        }
    }

    /// Maidenhead locator of the point.
    pub fn to_grid_locator(&self, precision: LocatorPrecision) -> Result<String, GeoPointError> {
        locator::encode(self.latitude, self.longitude, precision)
    }

    /// Haversine distance to `other` in the unit of `self`.
    pub fn distance(&self, other: &impl GeoPoint) -> f64 {
        self.distance_with(other, DistanceMethod::Haversine)
    }

    /// Distance to `other` in the unit of `self`, calculated with the given method.
    pub fn distance_with(&self, other: &impl GeoPoint, method: DistanceMethod) -> f64 {
        self.unit
            .from_kilometres(great_circle::distance(self, other, method))
    }

    /// Initial bearing to `other` in degrees.
    pub fn bearing(&self, other: &impl GeoPoint) -> f64 {
        great_circle::initial_bearing(self, other)
    }

    /// Initial bearing to `other` in the given format.
    pub fn bearing_as(&self, other: &impl GeoPoint, format: BearingFormat) -> Bearing {
        Bearing::new(self.bearing(other), format)
    }

    /// Bearing on arrival at `other` in degrees.
    pub fn final_bearing(&self, other: &impl GeoPoint) -> f64 {
        great_circle::final_bearing(self, other)
    }

    /// Bearing on arrival at `other` in the given format.
    pub fn final_bearing_as(&self, other: &impl GeoPoint, format: BearingFormat) -> Bearing {
        Bearing::new(self.final_bearing(other), format)
    }

    /// Great circle midpoint between `self` and `other`.
    pub fn midpoint(&self, other: &impl GeoPoint) -> Result<Self, GeoPointError> {
        let (latitude, longitude) = great_circle::midpoint(self, other);
        self.derive(latitude, longitude)
    }

    /// Location after travelling `distance` (in the unit of `self`) along `bearing` degrees.
    ///
    /// Returns [`GeoPointError::InvalidLongitude`] if the path crosses the antimeridian.
    pub fn destination(&self, bearing: f64, distance: f64) -> Result<Self, GeoPointError> {
        let kilometres = self.unit.to_kilometres(distance);
        let (latitude, longitude) = great_circle::destination(self, bearing, kilometres);
        self.derive(latitude, longitude)
    }

    /// Same as [`Point::destination`].
    pub fn forward(&self, bearing: f64, distance: f64) -> Result<Self, GeoPointError> {
        self.destination(bearing, distance)
    }

    /// Initial bearing and distance to `other`.
    pub fn inverse(&self, other: &impl GeoPoint) -> (f64, f64) {
        (self.bearing(other), self.distance(other))
    }

    /// Local sunrise time on `date`.
    pub fn sunrise(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Result<Option<NaiveTime>, GeoPointError> {
        self.sun_event(date, SunEvent::Rise, zenith)
    }

    /// Local sunset time on `date`.
    pub fn sunset(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Result<Option<NaiveTime>, GeoPointError> {
        self.sun_event(date, SunEvent::Set, zenith)
    }

    /// Local sunrise and sunset times on `date`.
    pub fn sun_events(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Result<(Option<NaiveTime>, Option<NaiveTime>), GeoPointError> {
        solar::sun_events(
            self.latitude,
            self.longitude,
            date,
            self.timezone,
            zenith,
        )
    }

    fn sun_event(
        &self,
        date: NaiveDate,
        event: SunEvent,
        zenith: Zenith,
    ) -> Result<Option<NaiveTime>, GeoPointError> {
        solar::sun_rise_set(
            self.latitude,
            self.longitude,
            date,
            event,
            self.timezone,
            zenith,
        )
    }
}

impl GeoPoint for Point {
    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lon(&self) -> f64 {
        self.longitude
    }

    fn lat_rad(&self) -> f64 {
        self.rad_latitude
    }

    fn lon_rad(&self) -> f64 {
        self.rad_longitude
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_dd())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.latitude.abs_diff_eq(&other.latitude, epsilon)
            && self.longitude.abs_diff_eq(&other.longitude, epsilon)
    }
}

/// Serialized form of a [`Point`].
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PointRecord {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    unit: DistanceUnit,
    #[serde(default)]
    timezone: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<PointRecord> for Point {
    type Error = GeoPointError;

    fn try_from(value: PointRecord) -> Result<Self, Self::Error> {
        Point::with_options(
            value.latitude,
            value.longitude,
            value.unit,
            AngleMode::Degrees,
            value.timezone,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Point> for PointRecord {
    fn from(value: Point) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
            unit: value.unit,
            timezone: value.timezone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use std::collections::HashSet;

    fn home() -> Point {
        Point::new(52.015, -0.221).unwrap()
    }

    fn target() -> Point {
        Point::new(52.6333, -2.5).unwrap()
    }

    #[test]
    fn construction() {
        let point = Point::new(52.015, -0.221).unwrap();
        assert_eq!(point.latitude(), 52.015);
        assert_abs_diff_eq!(point.rad_latitude(), 52.015f64.to_radians());
        assert_eq!(point.unit(), DistanceUnit::Metric);
        assert_eq!(point.timezone(), 0);

        let point = Point::new((52.0, 0.0, 54.0), (0.0, -13.0, -15.0)).unwrap();
        assert_abs_diff_eq!(point.latitude(), 52.015, epsilon = 1e-9);
        assert_abs_diff_eq!(point.longitude(), -0.22083, epsilon = 1e-5);

        let point = Point::new((52.0, 0.9), (0.0, -13.25)).unwrap();
        assert_abs_diff_eq!(point.latitude(), 52.015, epsilon = 1e-9);

        let point = Point::new(52, 0).unwrap();
        assert_eq!(point.latitude(), 52.0);

        let point = Point::from_radians(0.9078, -0.00386).unwrap();
        assert_eq!(point.rad_latitude(), 0.9078);
        assert_abs_diff_eq!(point.latitude(), 52.013, epsilon = 1e-3);
    }

    #[test]
    fn construction_errors() {
        assert_matches!(Point::new(91.0, 0.0), Err(GeoPointError::InvalidLatitude(_)));
        assert_matches!(Point::new(0.0, -180.5), Err(GeoPointError::InvalidLongitude(_)));
        assert_matches!(Point::from_radians(1.6, 0.0), Err(GeoPointError::InvalidLatitude(_)));
        assert_matches!(
            Point::with_options((1.0, 2.0), 0.0, DistanceUnit::Metric, AngleMode::Radians, 0),
            Err(GeoPointError::InvalidAngleMode(_))
        );
        assert_matches!(
            "gradians".parse::<AngleMode>(),
            Err(GeoPointError::InvalidAngleMode(s)) if s == "gradians"
        );
        assert_matches!(
            "cubits".parse::<DistanceUnit>(),
            Err(GeoPointError::UnknownUnit(_))
        );
    }

    #[test]
    fn formats() {
        let home = home();
        assert_eq!(home.format(PointFormat::Dd).unwrap(), "N52.015°; W000.221°");
        assert_eq!(home.to_string(), "N52.015°; W000.221°");
        assert_eq!(home.format(PointFormat::Dm).unwrap(), "52°00.90′N, 000°13.26′W");
        assert_eq!(home.format(PointFormat::Dms).unwrap(), "52°00′54″N, 000°13′15″W");
        assert_eq!(home.format(PointFormat::Locator).unwrap(), "IO92");

        let south = Point::new(-33.94, 151.17).unwrap();
        assert_eq!(south.to_string(), "S33.940°; E151.170°");

        assert_eq!("dms".parse::<PointFormat>(), Ok(PointFormat::Dms));
        assert_matches!(
            "utm".parse::<PointFormat>(),
            Err(GeoPointError::UnknownFormat(s)) if s == "utm"
        );
    }

    #[test]
    fn strict_equality() {
        assert_eq!(home(), Point::new(52.015, -0.221).unwrap());
        assert_ne!(home(), target());
        assert_ne!(home(), home().with_timezone(60));
        assert_ne!(home(), home().with_unit(DistanceUnit::Nautical));

        let radians = Point::from_radians(0.5, 0.25).unwrap();
        let degrees = Point::new(0.5f64.to_degrees(), 0.25f64.to_degrees()).unwrap();
        assert_eq!(radians, degrees);

        let set: HashSet<Point> = [home(), home(), target()].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn tolerance_equality() {
        let nearby = Point::new(52.016, -0.221).unwrap();
        assert_ne!(home(), nearby);
        assert!(home().approx_eq(&nearby, 1.0));
        assert!(!home().approx_eq(&target(), 169.0));
        assert!(home().approx_eq(&target(), 170.0));
    }

    #[test]
    fn set_location_is_atomic() {
        let mut point = home();
        point.set_location(52.6333, -2.5).unwrap();
        assert_eq!(point, target());
        assert_abs_diff_eq!(point.rad_longitude(), (-2.5f64).to_radians());

        let mut point = home();
        assert_matches!(
            point.set_location(10.0, 200.0),
            Err(GeoPointError::InvalidLongitude(_))
        );
        assert_eq!(point, home());

        let mut point = home();
        point.set_from_locator("BL11bh16").unwrap();
        assert_eq!(format!("{:.3}", point.latitude()), "21.319");
        assert_eq!(format!("{:.3}", point.longitude()), "-157.904");
        assert_abs_diff_eq!(point.rad_latitude(), point.latitude().to_radians());

        let mut point = home();
        assert_matches!(
            point.set_from_locator("BL11bh1"),
            Err(GeoPointError::InvalidLocatorLength(_))
        );
        assert_eq!(point, home());
    }

    #[test]
    fn grid_locators() {
        assert_eq!(
            home().to_grid_locator(LocatorPrecision::Extsquare).unwrap(),
            "IO92va33"
        );
        assert_eq!(
            home().to_grid_locator(LocatorPrecision::Subsquare).unwrap(),
            "IO92va"
        );
    }

    #[test]
    fn distances_in_units() {
        let start = Point::new(36.12, -86.67).unwrap();
        let end = Point::new(33.94, -118.4).unwrap();

        assert_eq!(start.distance(&end) as i32, 2884);
        assert_eq!(
            start.with_unit(DistanceUnit::Imperial).distance(&end) as i32,
            1792
        );
        assert_eq!(
            start.with_unit(DistanceUnit::Nautical).distance(&end) as i32,
            1557
        );
        assert_abs_diff_eq!(
            home().distance_with(&target(), DistanceMethod::Sloc),
            home().distance(&target()),
            epsilon = 1e-6
        );
        assert_eq!(home().distance(&home()), 0.0);
        assert_eq!(home().distance_with(&home(), DistanceMethod::Sloc), 0.0);
    }

    #[test]
    fn worked_example() {
        let (home, target) = (home(), target());

        assert_eq!(home.distance(&target) as i32, 169);
        assert_eq!(home.bearing(&target) as i32, 294);
        assert_eq!(home.final_bearing(&target) as i32, 293);
        assert_eq!(
            home.bearing_as(&target, BearingFormat::String),
            Bearing::Name("North-west")
        );
        assert_eq!(
            home.final_bearing_as(&target, BearingFormat::String),
            Bearing::Name("North-west")
        );

        let (bearing, distance) = home.inverse(&target);
        assert_eq!(bearing, home.bearing(&target));
        assert_eq!(distance, home.distance(&target));

        let date = NaiveDate::from_ymd_opt(2007, 6, 28).unwrap();
        let time = |h, m| Some(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        assert_eq!(
            home.sun_events(date, Zenith::Official).unwrap(),
            (time(3, 42), time(20, 24))
        );
        assert_eq!(home.sunrise(date, Zenith::Official).unwrap(), time(3, 42));
        assert_eq!(home.sunset(date, Zenith::Official).unwrap(), time(20, 24));
        assert_eq!(
            home.with_timezone(60).sunrise(date, Zenith::Official).unwrap(),
            time(4, 42)
        );
    }

    #[test]
    fn derived_points() {
        let home = home().with_unit(DistanceUnit::Nautical).with_timezone(60);

        let midpoint = home.midpoint(&target()).unwrap();
        assert_abs_diff_eq!(midpoint.latitude(), 52.329631405407014, epsilon = 1e-9);
        assert_abs_diff_eq!(midpoint.longitude(), -1.3525368605590993, epsilon = 1e-9);
        assert_eq!(midpoint.unit(), DistanceUnit::Nautical);
        assert_eq!(midpoint.timezone(), 60);
        assert_eq!(midpoint.angle_mode(), AngleMode::Degrees);

        let destination = home
            .with_unit(DistanceUnit::Metric)
            .destination(294.0, 169.0)
            .unwrap();
        assert_abs_diff_eq!(destination.latitude(), 52.611638750214745, epsilon = 1e-9);
        assert_abs_diff_eq!(destination.longitude(), -2.509374081952352, epsilon = 1e-9);
        assert_eq!(destination.timezone(), 60);

        let forward = Point::new(36.12, -86.67)
            .unwrap()
            .forward(274.0, 2885.0)
            .unwrap();
        assert_abs_diff_eq!(forward.latitude(), 33.6872799137609, epsilon = 1e-9);
        assert_abs_diff_eq!(forward.longitude(), -118.32721842114393, epsilon = 1e-9);

        let nautical = Point::new(36.12, -86.67)
            .unwrap()
            .with_unit(DistanceUnit::Nautical)
            .destination(274.0, 2885.0 / 1.852)
            .unwrap();
        assert_abs_diff_eq!(nautical, forward, epsilon = 1e-9);
    }

    #[test]
    fn destination_does_not_wrap_longitude() {
        let point = Point::new(0.0, 179.9).unwrap();
        assert_matches!(
            point.destination(90.0, 100.0),
            Err(GeoPointError::InvalidLongitude(lon)) if lon > 180.0
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialization() {
        let point = home().with_unit(DistanceUnit::Imperial).with_timezone(-300);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(
            json,
            r#"{"latitude":52.015,"longitude":-0.221,"unit":"imperial","timezone":-300}"#
        );
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), point);

        let point: Point =
            serde_json::from_str(r#"{"latitude":52.015,"longitude":-0.221}"#).unwrap();
        assert_eq!(point, home());

        assert!(serde_json::from_str::<Point>(r#"{"latitude":95.0,"longitude":0.0}"#).is_err());
    }
}
