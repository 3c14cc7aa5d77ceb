//! Free text locations, as typed by users on command lines.

use geopoint_types::angle::to_dd;
use geopoint_types::geo::GeoPoint;
use geopoint_types::{locator, DistanceUnit, Point};

use crate::error::GeoPointsError;

const SEPARATORS: [char; 3] = [';', ',', ' '];
const SECONDS_SUFFIXES: [char; 3] = ['s', '"', '″'];

/// Parses latitude and longitude in degrees from a location string.
///
/// Supported forms:
///
/// * `52.015;-0.221`, `52.015,-0.221` and `52.015 -0.221`,
/// * `52.015N 0.221W`,
/// * `52.015 N 0.221 W`,
/// * `52d00m54s N 0d13m15s W` (seconds can also be terminated with `"` or `″`).
///
/// Returns `Ok(None)` if the text does not have any of these shapes, e.g. for a Maidenhead locator. Values are not
/// range checked.
///
/// ```
/// use geopoint::location::parse_location;
///
/// assert_eq!(parse_location("52.015N 0.221W").unwrap(), Some((52.015, -0.221)));
/// assert_eq!(parse_location("IO92va").unwrap(), None);
/// ```
pub fn parse_location(location: &str) -> Result<Option<(f64, f64)>, GeoPointsError> {
    let number = |text: &str| {
        text.trim()
            .parse::<f64>()
            .map_err(|_| GeoPointsError::UnparsableLocation(location.to_string()))
    };

    for separator in SEPARATORS {
        let chunks: Vec<&str> = location.split(separator).collect();
        match chunks[..] {
            [latitude, longitude] => {
                let latitude = if let Some(value) = latitude.strip_suffix('N') {
                    number(value)?
                } else if let Some(value) = latitude.strip_suffix('S') {
                    -number(value)?
                } else {
                    number(latitude)?
                };

                let longitude = if let Some(value) = longitude.strip_suffix('E') {
                    number(value)?
                } else if let Some(value) = longitude.strip_suffix('W') {
                    -number(value)?
                } else {
                    number(longitude)?
                };

                return Ok(Some((latitude, longitude)));
            }
            [latitude, lat_hemisphere, longitude, lon_hemisphere] => {
                let latitude = if latitude.ends_with(SECONDS_SUFFIXES) {
                    split_dms(latitude, lat_hemisphere)
                        .ok_or_else(|| GeoPointsError::UnparsableLocation(location.to_string()))?
                } else if lat_hemisphere == "S" {
                    -number(latitude)?
                } else {
                    number(latitude)?
                };

                let longitude = if longitude.ends_with(SECONDS_SUFFIXES) {
                    split_dms(longitude, lon_hemisphere)
                        .ok_or_else(|| GeoPointsError::UnparsableLocation(location.to_string()))?
                } else if lon_hemisphere == "W" {
                    -number(longitude)?
                } else {
                    number(longitude)?
                };

                return Ok(Some((latitude, longitude)));
            }
            _ => {}
        }
    }

    Ok(None)
}

/// Creates a point from a location string or, if it is not one, from a Maidenhead locator.
///
/// ```
/// use geopoint::location::locate;
/// use geopoint_types::DistanceUnit;
///
/// let point = locate("IO92va", DistanceUnit::Metric).unwrap();
/// assert_eq!(format!("{:.3}", point.latitude()), "52.021");
/// ```
pub fn locate(text: &str, unit: DistanceUnit) -> Result<Point, GeoPointsError> {
    let (latitude, longitude) = match parse_location(text)? {
        Some(location) => location,
        None => {
            log::debug!("{text:?} is not a location, decoding it as a Maidenhead locator");
            let decoded = locator::decode(text)?;
            (decoded.lat(), decoded.lon())
        }
    };

    Ok(Point::new(latitude, longitude)?.with_unit(unit))
}

/// Reads a `DDdMMmSSs` angle. Every digit group must be followed by a single non-digit character.
fn split_dms(text: &str, hemisphere: &str) -> Option<f64> {
    let mut groups = Vec::with_capacity(3);
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else {
            groups.push(std::mem::take(&mut current));
        }
    }

    let [degrees, minutes, seconds] = groups.as_slice() else {
        return None;
    };
    let sign = if matches!(hemisphere, "S" | "W") {
        -1.0
    } else {
        1.0
    };

    Some(to_dd(
        sign * degrees.parse::<f64>().ok()?,
        sign * minutes.parse::<f64>().ok()?,
        sign * seconds.parse::<f64>().ok()?,
    ))
}
