//! Latitude/longitude seam shared by the crate's algorithms (see [`GeoPoint`]) and the plain
//! [`GeoPoint2d`] pair returned by the string codecs.

pub mod impls;
mod traits;

pub use impls::point::GeoPoint2d;
pub use traits::point::GeoPoint;
