//! Ordered runs of points, e.g. a route.

use chrono::{NaiveDate, NaiveTime};
use geopoint_types::{DistanceMethod, DistanceUnit, LocatorPrecision, Point, Zenith};

use crate::error::GeoPointsError;
use crate::legs::Legs;
use crate::location::locate;

/// Ordered collection of points.
///
/// Leg operations (`distance`, `bearing`, ...) are calculated for every pair of consecutive points and return one
/// value less than there are points.
///
/// ```
/// use geopoint::Points;
/// use geopoint_types::{DistanceMethod, DistanceUnit};
///
/// let route = Points::parse(["52.015;-0.221", "52.168;0.040", "52.855;0.657"], DistanceUnit::Metric).unwrap();
/// let total: f64 = route.distance(DistanceMethod::Haversine).unwrap().iter().sum();
/// assert_eq!(format!("{total:.3}"), "111.632");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Points {
    points: Vec<Point>,
    unit: DistanceUnit,
}

impl Points {
    /// Creates an empty collection. `unit` is applied to points parsed into it.
    pub fn new(unit: DistanceUnit) -> Self {
        Self {
            points: Vec::new(),
            unit,
        }
    }

    /// Creates a collection from location strings, see [`locate`](crate::location::locate).
    pub fn parse<I, S>(locations: I, unit: DistanceUnit) -> Result<Self, GeoPointsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut points = Self::new(unit);
        points.import_locations(locations)?;

        Ok(points)
    }

    /// Parses location strings and appends them to the collection.
    ///
    /// Nothing is appended if any of the strings fails to parse.
    pub fn import_locations<I, S>(&mut self, locations: I) -> Result<(), GeoPointsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = locations
            .into_iter()
            .map(|location| locate(location.as_ref(), self.unit))
            .collect::<Result<Vec<_>, _>>()?;
        self.points.extend(parsed);

        Ok(())
    }

    /// Unit applied to parsed points.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Appends a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in order.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    fn legs(&self) -> Result<Legs<'_>, GeoPointsError> {
        Legs::new(self.points.iter().collect())
    }

    /// Length of every leg in the unit of its starting point.
    pub fn distance(&self, method: DistanceMethod) -> Result<Vec<f64>, GeoPointsError> {
        Ok(self.legs()?.distance(method))
    }

    /// Initial bearing of every leg.
    pub fn bearing(&self) -> Result<Vec<f64>, GeoPointsError> {
        Ok(self.legs()?.bearing())
    }

    /// Compass direction (8 segments) of every leg.
    pub fn bearing_names(&self) -> Result<Vec<&'static str>, GeoPointsError> {
        Ok(self.legs()?.bearing_names())
    }

    /// Final bearing of every leg.
    pub fn final_bearing(&self) -> Result<Vec<f64>, GeoPointsError> {
        Ok(self.legs()?.final_bearing())
    }

    /// Initial bearing and distance of every leg.
    pub fn inverse(&self) -> Result<Vec<(f64, f64)>, GeoPointsError> {
        Ok(self.legs()?.inverse())
    }

    /// Midpoint of every leg.
    pub fn midpoint(&self) -> Result<Vec<Point>, GeoPointsError> {
        Ok(self.legs()?.midpoint()?)
    }

    /// Points closer to `location` than `distance` (in the unit of `location`).
    pub fn range<'a>(
        &'a self,
        location: &'a Point,
        distance: f64,
    ) -> impl Iterator<Item = &'a Point> + 'a {
        self.points
            .iter()
            .filter(move |point| location.approx_eq(*point, distance))
    }

    /// Every point moved by `distance` along `bearing`.
    pub fn destination(&self, bearing: f64, distance: f64) -> Result<Vec<Point>, GeoPointsError> {
        Ok(self
            .points
            .iter()
            .map(|point| point.destination(bearing, distance))
            .collect::<Result<_, _>>()?)
    }

    /// Same as [`Points::destination`].
    pub fn forward(&self, bearing: f64, distance: f64) -> Result<Vec<Point>, GeoPointsError> {
        self.destination(bearing, distance)
    }

    /// Sunrise time at every point.
    pub fn sunrise(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Result<Vec<Option<NaiveTime>>, GeoPointsError> {
        Ok(self
            .points
            .iter()
            .map(|point| point.sunrise(date, zenith))
            .collect::<Result<_, _>>()?)
    }

    /// Sunset time at every point.
    pub fn sunset(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Result<Vec<Option<NaiveTime>>, GeoPointsError> {
        Ok(self
            .points
            .iter()
            .map(|point| point.sunset(date, zenith))
            .collect::<Result<_, _>>()?)
    }

    /// Sunrise and sunset times at every point.
    #[allow(clippy::type_complexity)]
    pub fn sun_events(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Result<Vec<(Option<NaiveTime>, Option<NaiveTime>)>, GeoPointsError> {
        Ok(self
            .points
            .iter()
            .map(|point| point.sun_events(date, zenith))
            .collect::<Result<_, _>>()?)
    }

    /// Maidenhead locator of every point.
    pub fn to_grid_locator(
        &self,
        precision: LocatorPrecision,
    ) -> Result<Vec<String>, GeoPointsError> {
        Ok(self
            .points
            .iter()
            .map(|point| point.to_grid_locator(precision))
            .collect::<Result<_, _>>()?)
    }
}

impl From<Vec<Point>> for Points {
    fn from(points: Vec<Point>) -> Self {
        Self {
            points,
            unit: DistanceUnit::default(),
        }
    }
}

impl FromIterator<Point> for Points {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl IntoIterator for Points {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Points {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
