use geopoint_types::compass::octant_name;
use geopoint_types::{DistanceMethod, GeoPointError, Point};

use crate::error::GeoPointsError;

/// Consecutive pairs of an ordered run of at least two points.
pub(crate) struct Legs<'a> {
    points: Vec<&'a Point>,
}

impl<'a> Legs<'a> {
    pub(crate) fn new(points: Vec<&'a Point>) -> Result<Self, GeoPointsError> {
        if points.len() < 2 {
            return Err(GeoPointsError::InsufficientPoints(points.len()));
        }

        Ok(Self { points })
    }

    fn pairs(&self) -> impl Iterator<Item = (&'a Point, &'a Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub(crate) fn distance(&self, method: DistanceMethod) -> Vec<f64> {
        self.pairs()
            .map(|(from, to)| from.distance_with(to, method))
            .collect()
    }

    pub(crate) fn bearing(&self) -> Vec<f64> {
        self.pairs().map(|(from, to)| from.bearing(to)).collect()
    }

    pub(crate) fn bearing_names(&self) -> Vec<&'static str> {
        self.pairs()
            .map(|(from, to)| octant_name(from.bearing(to)))
            .collect()
    }

    pub(crate) fn final_bearing(&self) -> Vec<f64> {
        self.pairs()
            .map(|(from, to)| from.final_bearing(to))
            .collect()
    }

    pub(crate) fn inverse(&self) -> Vec<(f64, f64)> {
        self.pairs().map(|(from, to)| from.inverse(to)).collect()
    }

    pub(crate) fn midpoint(&self) -> Result<Vec<Point>, GeoPointError> {
        self.pairs().map(|(from, to)| from.midpoint(to)).collect()
    }
}
