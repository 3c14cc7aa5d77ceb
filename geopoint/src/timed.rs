//! Points with the time they were visited, e.g. a GPS track.

use chrono::NaiveDateTime;
use geopoint_types::{DistanceMethod, Point};

use crate::error::GeoPointsError;
use crate::legs::Legs;
use crate::points::Points;

/// Point with a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimedPoint {
    point: Point,
    time: NaiveDateTime,
}

impl TimedPoint {
    /// Creates a new timed point.
    pub fn new(point: Point, time: NaiveDateTime) -> Self {
        Self { point, time }
    }

    /// Location.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Timestamp.
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }
}

/// Ordered collection of timed points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimedPoints {
    points: Vec<TimedPoint>,
}

impl TimedPoints {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point.
    pub fn push(&mut self, point: TimedPoint) {
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

    /// Iterates over the points in order.
    pub fn iter(&self) -> impl Iterator<Item = &TimedPoint> + '_ {
        self.points.iter()
    }

    /// Locations without timestamps, for the rest of the leg operations.
    pub fn to_points(&self) -> Points {
        self.points.iter().map(|p| p.point).collect()
    }

    /// Length of every leg in the unit of its starting point.
    pub fn distance(&self, method: DistanceMethod) -> Result<Vec<f64>, GeoPointsError> {
        Ok(Legs::new(self.points.iter().map(|p| &p.point).collect())?.distance(method))
    }

    /// Average speed on every leg, in the distance unit of the starting point per hour.
    ///
    /// Returns [`GeoPointsError::ZeroDuration`] if two consecutive points have the same time. Legs going back in
    /// time have negative speed.
    pub fn speed(&self) -> Result<Vec<f64>, GeoPointsError> {
        let distances = self.distance(DistanceMethod::Haversine)?;

        distances
            .into_iter()
            .zip(self.points.windows(2))
            .enumerate()
            .map(|(leg, (distance, pair))| {
                let seconds = (pair[1].time - pair[0].time).num_seconds();
                if seconds == 0 {
                    return Err(GeoPointsError::ZeroDuration(leg));
                }

                Ok(distance / (seconds as f64 / 3600.0))
            })
            .collect()
    }
}

impl FromIterator<TimedPoint> for TimedPoints {
    fn from_iter<T: IntoIterator<Item = TimedPoint>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2008, 7, 28)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn track() -> TimedPoints {
        [
            (52.015, -0.221, at(16, 38)),
            (52.168, 0.040, at(18, 38)),
            (52.855, 0.657, at(19, 17)),
        ]
        .into_iter()
        .map(|(lat, lon, time)| TimedPoint::new(Point::new(lat, lon).unwrap(), time))
        .collect()
    }

    #[test]
    fn leg_speeds() {
        let speeds = track().speed().unwrap();
        assert_eq!(speeds.len(), 2);
        assert_abs_diff_eq!(speeds[0], 12.315, epsilon = 1e-3);
        assert_abs_diff_eq!(speeds[1], 133.849, epsilon = 1e-3);
    }

    #[test]
    fn speed_errors() {
        let mut track = track();
        let last = *track.iter().last().unwrap();
        track.push(TimedPoint::new(Point::new(53.0, 1.0).unwrap(), last.time()));
        assert_matches!(track.speed(), Err(GeoPointsError::ZeroDuration(2)));

        let single: TimedPoints = track.iter().take(1).copied().collect();
        assert_matches!(single.speed(), Err(GeoPointsError::InsufficientPoints(1)));
    }

    #[test]
    fn untimed_view() {
        let points = track().to_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points.bearing().unwrap().len(), 2);
    }
}
