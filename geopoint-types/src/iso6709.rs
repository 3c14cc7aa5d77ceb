//! ISO 6709 coordinate strings, e.g. `+27.5916+086.5640+8850/`.
//!
//! Only the compact form used for point locations is supported: signed latitude, signed longitude, an optional
//! signed altitude and the terminating `/`. The number of digits before the decimal point selects how a field is
//! read:
//!
//! | latitude | longitude | meaning            |
//! |----------|-----------|--------------------|
//! | `±DD`    | `±DDD`    | degrees            |
//! | `±DDMM`  | `±DDDMM`  | degrees, minutes   |
//! | `±DDMMSS`| `±DDDMMSS`| degrees, minutes, seconds |
//!
//! Each of them can have a fractional part.

use std::ops::Range;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::angle::{to_dms, DmsStyle};
use crate::error::GeoPointError;
use crate::geo::GeoPoint2d;

lazy_static! {
    static ref ISO6709: Regex = Regex::new(r"^([-+][\d.]+)([-+][\d.]+)([+-][\d.]+)?/$")
        .expect("ISO 6709 pattern must compile");
}

/// Layout of the latitude and longitude fields in a generated string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Iso6709Style {
    /// Whole degrees: `+52-000/`.
    D,
    /// Decimal degrees with a given number of decimals: `+52.0150-000.2210/`.
    #[default]
    Dd,
    /// Whole degrees and minutes: `+5200-00013/`.
    Dm,
    /// Whole degrees, minutes and seconds: `+520054-0001315/`.
    Dms,
}

impl FromStr for Iso6709Style {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "d" => Ok(Self::D),
            "dd" => Ok(Self::Dd),
            "dm" => Ok(Self::Dm),
            "dms" => Ok(Self::Dms),
            other => Err(GeoPointError::UnknownFormat(other.to_string())),
        }
    }
}

/// Parses an ISO 6709 string into a location and an optional altitude.
///
/// Range of the values is not checked, pass them to [`Point::new`](crate::Point::new) for that.
///
/// ```
/// use geopoint_types::geo::GeoPoint;
/// use geopoint_types::iso6709;
///
/// let (point, altitude) = iso6709::parse("+27.5916+086.5640+8850/").unwrap();
/// assert_eq!(point.lat(), 27.5916);
/// assert_eq!(altitude, Some(8850.0));
/// ```
pub fn parse(text: &str) -> Result<(GeoPoint2d, Option<f64>), GeoPointError> {
    let malformed = || GeoPointError::MalformedInput(text.to_string());
    let captures = ISO6709.captures(text).ok_or_else(malformed)?;

    let (Some(latitude), Some(longitude)) = (captures.get(1), captures.get(2)) else {
        return Err(malformed());
    };

    let latitude = parse_field(latitude.as_str(), "latitude", 2)?;
    let longitude = parse_field(longitude.as_str(), "longitude", 3)?;
    let altitude = captures
        .get(3)
        .map(|altitude| number(altitude.as_str(), "altitude", altitude.as_str()))
        .transpose()?;

    Ok((GeoPoint2d::latlon(latitude, longitude), altitude))
}

fn number(text: &str, axis: &'static str, field: &str) -> Result<f64, GeoPointError> {
    text.parse().map_err(|_| GeoPointError::MalformedComponent {
        axis,
        value: field.to_string(),
    })
}

/// Reads a signed field with `degree_digits` digits of whole degrees.
fn parse_field(
    field: &str,
    axis: &'static str,
    degree_digits: usize,
) -> Result<f64, GeoPointError> {
    let malformed = || GeoPointError::MalformedComponent {
        axis,
        value: field.to_string(),
    };
    // `\d` also matches non-ASCII digits, so byte offsets may fall inside a character.
    let part = |range: Range<usize>| {
        field
            .get(range)
            .ok_or_else(malformed)
            .and_then(|part| number(part, axis, field))
    };

    let sign = if field.starts_with('+') { 1.0 } else { -1.0 };
    let head = field.split('.').next().map_or(0, str::len);
    let degrees_end = degree_digits + 1;
    let end = field.len();

    let value = if head == degrees_end {
        number(field, axis, field)?
    } else if head == degrees_end + 2 {
        part(0..degrees_end)? + sign * (part(degrees_end..end)? / 60.0)
    } else if head == degrees_end + 4 {
        part(0..degrees_end)?
            + sign * (part(degrees_end..degrees_end + 2)? / 60.0)
            + sign * (part(degrees_end + 2..end)? / 3600.0)
    } else {
        return Err(malformed());
    };

    Ok(value)
}

/// Generates an ISO 6709 string.
///
/// `precision` is the number of decimals for [`Iso6709Style::Dd`] and is ignored by other styles. A missing or zero
/// altitude is not written, whole altitudes are written without decimals.
pub fn format(
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
    style: Iso6709Style,
    precision: usize,
) -> String {
    let mut text = match style {
        Iso6709Style::D => format!("{:+03}{:+04}", latitude as i32, longitude as i32),
        Iso6709Style::Dd => format!(
            "{:+0lat_width$.precision$}{:+0lon_width$.precision$}",
            latitude,
            longitude,
            lat_width = precision + 4,
            lon_width = precision + 5,
        ),
        Iso6709Style::Dm | Iso6709Style::Dms => {
            let dms_style = if style == Iso6709Style::Dm {
                DmsStyle::DegreesMinutes
            } else {
                DmsStyle::DegreesMinutesSeconds
            };
            let sign = |v: f64| if v < 0.0 { '-' } else { '+' };
            let lat = to_dms(latitude, dms_style);
            let lon = to_dms(longitude, dms_style);

            let mut text = format!(
                "{}{:02}{:02}",
                sign(latitude),
                lat.degrees().abs(),
                lat.minutes().abs() as i32
            );
            if let Some(seconds) = lat.seconds() {
                text.push_str(&format!("{:02}", seconds.abs() as i32));
            }
            text.push_str(&format!(
                "{}{:03}{:02}",
                sign(longitude),
                lon.degrees().abs(),
                lon.minutes().abs() as i32
            ));
            if let Some(seconds) = lon.seconds() {
                text.push_str(&format!("{:02}", seconds.abs() as i32));
            }

            text
        }
    };

    match altitude {
        Some(altitude) if altitude != 0.0 && altitude.fract() == 0.0 => {
            text.push_str(&format!("{:+}", altitude as i64))
        }
        Some(altitude) if altitude != 0.0 => text.push_str(&format!("{altitude:+.3}")),
        _ => {}
    }

    text.push('/');
    text
}
