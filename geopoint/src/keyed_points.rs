//! Named points, e.g. a set of waypoints.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use geopoint_types::{
    DistanceMethod, DistanceUnit, GeoPointError, LocatorPrecision, Point, Zenith,
};

use crate::error::GeoPointsError;
use crate::legs::Legs;
use crate::location::locate;

/// Points keyed by name.
///
/// Names have no inherent order for leg calculations, so leg operations take the order of names to visit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyedPoints {
    points: BTreeMap<String, Point>,
    unit: DistanceUnit,
}

impl KeyedPoints {
    /// Creates an empty collection. `unit` is applied to points parsed into it.
    pub fn new(unit: DistanceUnit) -> Self {
        Self {
            points: BTreeMap::new(),
            unit,
        }
    }

    /// Creates a collection from `(name, location string)` pairs, see [`locate`](crate::location::locate).
    pub fn parse<I, K, S>(locations: I, unit: DistanceUnit) -> Result<Self, GeoPointsError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: AsRef<str>,
    {
        let mut points = Self::new(unit);
        points.import_locations(locations)?;

        Ok(points)
    }

    /// Parses `(name, location string)` pairs into the collection, replacing points with the same name.
    ///
    /// Nothing is changed if any of the strings fails to parse.
    pub fn import_locations<I, K, S>(&mut self, locations: I) -> Result<(), GeoPointsError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: AsRef<str>,
    {
        let parsed = locations
            .into_iter()
            .map(|(name, location)| {
                let point = locate(location.as_ref(), self.unit)?;
                Ok((name.into(), point))
            })
            .collect::<Result<Vec<(String, Point)>, GeoPointsError>>()?;
        self.points.extend(parsed);

        Ok(())
    }

    /// Unit applied to parsed points.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Adds a point, returning the point previously stored under the name.
    pub fn insert(&mut self, name: impl Into<String>, point: Point) -> Option<Point> {
        self.points.insert(name.into(), point)
    }

    /// Point with the given name.
    pub fn get(&self, name: &str) -> Option<&Point> {
        self.points.get(name)
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Point)> + '_ {
        self.points.iter().map(|(name, point)| (name.as_str(), point))
    }

    fn legs(&self, order: &[&str]) -> Result<Legs<'_>, GeoPointsError> {
        let points = order
            .iter()
            .map(|name| {
                self.points
                    .get(*name)
                    .ok_or_else(|| GeoPointsError::UnknownKey(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Legs::new(points)
    }

    /// Length of every leg between the points named in `order`.
    pub fn distance(
        &self,
        order: &[&str],
        method: DistanceMethod,
    ) -> Result<Vec<f64>, GeoPointsError> {
        Ok(self.legs(order)?.distance(method))
    }

    /// Initial bearing of every leg between the points named in `order`.
    pub fn bearing(&self, order: &[&str]) -> Result<Vec<f64>, GeoPointsError> {
        Ok(self.legs(order)?.bearing())
    }

    /// Compass direction (8 segments) of every leg between the points named in `order`.
    pub fn bearing_names(&self, order: &[&str]) -> Result<Vec<&'static str>, GeoPointsError> {
        Ok(self.legs(order)?.bearing_names())
    }

    /// Final bearing of every leg between the points named in `order`.
    pub fn final_bearing(&self, order: &[&str]) -> Result<Vec<f64>, GeoPointsError> {
        Ok(self.legs(order)?.final_bearing())
    }

    /// Initial bearing and distance of every leg between the points named in `order`.
    pub fn inverse(&self, order: &[&str]) -> Result<Vec<(f64, f64)>, GeoPointsError> {
        Ok(self.legs(order)?.inverse())
    }

    /// Midpoint of every leg between the points named in `order`.
    pub fn midpoint(&self, order: &[&str]) -> Result<Vec<Point>, GeoPointsError> {
        Ok(self.legs(order)?.midpoint()?)
    }

    /// Named points closer to `location` than `distance` (in the unit of `location`).
    pub fn range<'a>(
        &'a self,
        location: &'a Point,
        distance: f64,
    ) -> impl Iterator<Item = (&'a str, &'a Point)> + 'a {
        self.iter()
            .filter(move |(_, point)| location.approx_eq(*point, distance))
    }

    fn map_points<T>(
        &self,
        f: impl Fn(&Point) -> Result<T, GeoPointError>,
    ) -> Result<BTreeMap<String, T>, GeoPointsError> {
        self.points
            .iter()
            .map(|(name, point)| Ok((name.clone(), f(point)?)))
            .collect()
    }

    /// Every point moved by `distance` along `bearing`.
    pub fn destination(
        &self,
        bearing: f64,
        distance: f64,
    ) -> Result<BTreeMap<String, Point>, GeoPointsError> {
        self.map_points(|point| point.destination(bearing, distance))
    }

    /// Same as [`KeyedPoints::destination`].
    pub fn forward(
        &self,
        bearing: f64,
        distance: f64,
    ) -> Result<BTreeMap<String, Point>, GeoPointsError> {
        self.destination(bearing, distance)
    }

    /// Sunrise time at every point.
    pub fn sunrise(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Result<BTreeMap<String, Option<NaiveTime>>, GeoPointsError> {
        self.map_points(|point| point.sunrise(date, zenith))
    }

    /// Sunset time at every point.
    pub fn sunset(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Result<BTreeMap<String, Option<NaiveTime>>, GeoPointsError> {
        self.map_points(|point| point.sunset(date, zenith))
    }

    /// Sunrise and sunset times at every point.
    #[allow(clippy::type_complexity)]
    pub fn sun_events(
        &self,
        date: NaiveDate,
        zenith: Zenith,
    ) -> Result<BTreeMap<String, (Option<NaiveTime>, Option<NaiveTime>)>, GeoPointsError> {
        self.map_points(|point| point.sun_events(date, zenith))
    }

    /// Maidenhead locator of every point.
    pub fn to_grid_locator(
        &self,
        precision: LocatorPrecision,
    ) -> Result<BTreeMap<String, String>, GeoPointsError> {
        self.map_points(|point| point.to_grid_locator(precision))
    }
}

impl<K: Into<String>> FromIterator<(K, Point)> for KeyedPoints {
    fn from_iter<T: IntoIterator<Item = (K, Point)>>(iter: T) -> Self {
        Self {
            points: iter
                .into_iter()
                .map(|(name, point)| (name.into(), point))
                .collect(),
            unit: DistanceUnit::default(),
        }
    }
}
