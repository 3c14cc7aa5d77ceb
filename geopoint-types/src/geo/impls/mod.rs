//! Implementations of the [`GeoPoint`](super::GeoPoint) trait.

pub mod point;
