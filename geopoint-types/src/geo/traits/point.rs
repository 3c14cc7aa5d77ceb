/// Location on the surface of a sphere, in geographic coordinates.
///
/// Great circle functions in [`great_circle`](crate::great_circle) accept anything implementing this trait.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;
    /// Longitude in degrees.
    fn lon(&self) -> f64;

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> f64 {
        self.lon().to_radians()
    }
}

impl<T: GeoPoint + ?Sized> GeoPoint for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lon(&self) -> f64 {
        (**self).lon()
    }

    fn lat_rad(&self) -> f64 {
        (**self).lat_rad()
    }

    fn lon_rad(&self) -> f64 {
        (**self).lon_rad()
    }
}
