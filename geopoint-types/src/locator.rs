//! Maidenhead grid locator encoding and decoding.
//!
//! A locator is built from pairs of characters, each pair refining the previous cell:
//!
//! | pair      | longitude | latitude | characters |
//! |-----------|-----------|----------|------------|
//! | field     | 20°       | 10°      | `A`-`R`    |
//! | square    | 2°        | 1°       | `0`-`9`    |
//! | subsquare | 5′        | 2.5′     | `a`-`x`    |
//! | extsquare | 30″       | 15″      | `0`-`9`    |

use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeoPointError;
use crate::geo::GeoPoint2d;

const LONGITUDE_FIELD: f64 = 20.0;
const LATITUDE_FIELD: f64 = 10.0;
const LONGITUDE_SQUARE: f64 = LONGITUDE_FIELD / 10.0;
const LATITUDE_SQUARE: f64 = LATITUDE_FIELD / 10.0;
const LONGITUDE_SUBSQUARE: f64 = LONGITUDE_SQUARE / 24.0;
const LATITUDE_SUBSQUARE: f64 = LATITUDE_SQUARE / 24.0;
const LONGITUDE_EXTSQUARE: f64 = LONGITUDE_SUBSQUARE / 10.0;
const LATITUDE_EXTSQUARE: f64 = LATITUDE_SUBSQUARE / 10.0;

/// Number of character pairs in a generated locator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LocatorPrecision {
    /// Four characters, e.g. `IO92`.
    #[default]
    Square,
    /// Six characters, e.g. `IO92va`.
    Subsquare,
    /// Eight characters, e.g. `IO92va33`.
    Extsquare,
}

impl LocatorPrecision {
    /// Size of a cell at this precision as `(latitude, longitude)` degrees.
    pub fn cell_size(&self) -> (f64, f64) {
        match self {
            LocatorPrecision::Square => (LATITUDE_SQUARE, LONGITUDE_SQUARE),
            LocatorPrecision::Subsquare => (LATITUDE_SUBSQUARE, LONGITUDE_SUBSQUARE),
            LocatorPrecision::Extsquare => (LATITUDE_EXTSQUARE, LONGITUDE_EXTSQUARE),
        }
    }

    /// Length of a locator string at this precision.
    pub fn char_count(&self) -> usize {
        match self {
            LocatorPrecision::Square => 4,
            LocatorPrecision::Subsquare => 6,
            LocatorPrecision::Extsquare => 8,
        }
    }
}

impl FromStr for LocatorPrecision {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(Self::Square),
            "subsquare" => Ok(Self::Subsquare),
            "extsquare" => Ok(Self::Extsquare),
            other => Err(GeoPointError::UnknownPrecision(other.to_string())),
        }
    }
}

impl Display for LocatorPrecision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LocatorPrecision::Square => "square",
            LocatorPrecision::Subsquare => "subsquare",
            LocatorPrecision::Extsquare => "extsquare",
        })
    }
}

/// Calculates the Maidenhead locator of a location given in degrees.
///
/// Note that latitude `90` and longitude `180` fall into the non-existent field `S`, the encoder does not fold
/// them back into the grid.
pub fn encode(
    latitude: f64,
    longitude: f64,
    precision: LocatorPrecision,
) -> Result<String, GeoPointError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeoPointError::InvalidLatitude(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoPointError::InvalidLongitude(longitude));
    }

    let mut latitude = latitude + 90.0;
    let mut longitude = longitude + 180.0;
    let mut locator = String::with_capacity(precision.char_count());

    let letter = |base: u8, index: f64| (base + index as u8) as char;
    let digit = |index: f64| (b'0' + index as u8) as char;

    let field = (longitude / LONGITUDE_FIELD).trunc();
    locator.push(letter(b'A', field));
    longitude -= field * LONGITUDE_FIELD;

    let field = (latitude / LATITUDE_FIELD).trunc();
    locator.push(letter(b'A', field));
    latitude -= field * LATITUDE_FIELD;

    let square = (longitude / LONGITUDE_SQUARE).trunc();
    locator.push(digit(square));
    longitude -= square * LONGITUDE_SQUARE;

    let square = (latitude / LATITUDE_SQUARE).trunc();
    locator.push(digit(square));
    latitude -= square * LATITUDE_SQUARE;

    if precision >= LocatorPrecision::Subsquare {
        let subsquare = (longitude / LONGITUDE_SUBSQUARE).trunc();
        locator.push(letter(b'a', subsquare));
        longitude -= subsquare * LONGITUDE_SUBSQUARE;

        let subsquare = (latitude / LATITUDE_SUBSQUARE).trunc();
        locator.push(letter(b'a', subsquare));
        latitude -= subsquare * LATITUDE_SUBSQUARE;
    }

    if precision == LocatorPrecision::Extsquare {
        locator.push(digit((longitude / LONGITUDE_EXTSQUARE).trunc()));
        locator.push(digit((latitude / LATITUDE_EXTSQUARE).trunc()));
    }

    Ok(locator)
}

/// Calculates latitude and longitude of a Maidenhead locator.
///
/// The decoded location is never the exact input of [`encode`]:
/// * an 8 character locator decodes to the center of its extended square,
/// * 4 and 6 character locators decode to the lower left corner of the last given cell shifted by half of a
///   subsquare in both directions.
pub fn decode(locator: &str) -> Result<GeoPoint2d, GeoPointError> {
    let chars: Vec<char> = locator.chars().collect();
    if !matches!(chars.len(), 4 | 6 | 8) {
        return Err(GeoPointError::InvalidLocatorLength(locator.to_string()));
    }

    let invalid = || GeoPointError::InvalidLocatorValue(locator.to_string());
    let letter = |c: char, base: char, max: u32| {
        (c as u32)
            .checked_sub(base as u32)
            .filter(|v| *v <= max)
            .map(f64::from)
            .ok_or_else(invalid)
    };
    let digit = |c: char| c.to_digit(10).map(f64::from).ok_or_else(invalid);

    // Fields are always uppercase.
    let field_lon = letter(chars[0], 'A', 17)?;
    let field_lat = letter(chars[1], 'A', 17)?;
    let square_lon = digit(chars[2])?;
    let square_lat = digit(chars[3])?;

    let mut longitude = LONGITUDE_FIELD * field_lon + LONGITUDE_SQUARE * square_lon;
    let mut latitude = LATITUDE_FIELD * field_lat + LATITUDE_SQUARE * square_lat;

    if chars.len() >= 6 {
        if chars[4].is_ascii_uppercase() || chars[5].is_ascii_uppercase() {
            log::debug!("Locator {locator} has uppercase subsquare, folding it to lowercase");
        }

        let subsquare_lon = letter(chars[4].to_ascii_lowercase(), 'a', 23)?;
        let subsquare_lat = letter(chars[5].to_ascii_lowercase(), 'a', 23)?;
        longitude += LONGITUDE_SUBSQUARE * subsquare_lon;
        latitude += LATITUDE_SUBSQUARE * subsquare_lat;
    }

    if chars.len() == 8 {
        let extsquare_lon = digit(chars[6])?;
        let extsquare_lat = digit(chars[7])?;
        longitude += LONGITUDE_EXTSQUARE * extsquare_lon + LONGITUDE_EXTSQUARE / 2.0;
        latitude += LATITUDE_EXTSQUARE * extsquare_lat + LATITUDE_EXTSQUARE / 2.0;
    } else {
        longitude += LONGITUDE_EXTSQUARE * 5.0;
        latitude += LATITUDE_EXTSQUARE * 5.0;
    }

    Ok(GeoPoint2d::latlon(latitude - 90.0, longitude - 180.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use assert_matches::assert_matches;

    fn rounded(point: GeoPoint2d) -> String {
        format!("{:.3}, {:.3}", point.lat(), point.lon())
    }

    #[test]
    fn decode_known_locators() {
        assert_eq!(rounded(decode("BL11bh16").unwrap()), "21.319, -157.904");
        assert_eq!(rounded(decode("IO92va").unwrap()), "52.021, -0.208");
        assert_eq!(rounded(decode("IO92").unwrap()), "52.021, -1.958");
    }

    #[test]
    fn decode_folds_subsquare_case() {
        assert_eq!(decode("IO92VA").unwrap(), decode("IO92va").unwrap());
    }

    #[test]
    fn encode_known_locations() {
        assert_eq!(
            encode(21.319, -157.904, LocatorPrecision::Extsquare).unwrap(),
            "BL11bh16"
        );
        assert_eq!(
            encode(52.021, -0.208, LocatorPrecision::Subsquare).unwrap(),
            "IO92va"
        );
        assert_eq!(
            encode(52.021, -1.958, LocatorPrecision::Square).unwrap(),
            "IO92"
        );
        assert_eq!(
            encode(52.015, -0.221, LocatorPrecision::Extsquare).unwrap(),
            "IO92va33"
        );
        assert_eq!(
            encode(52.168, 0.040, LocatorPrecision::Extsquare).unwrap(),
            "JO02ae40"
        );
        assert_eq!(
            encode(52.855, 0.657, LocatorPrecision::Subsquare).unwrap(),
            "JO02hu"
        );
    }

    #[test]
    fn encode_errors() {
        assert_matches!(
            "fine".parse::<LocatorPrecision>(),
            Err(GeoPointError::UnknownPrecision(s)) if s == "fine"
        );
        assert_matches!(
            encode(91.0, 0.0, LocatorPrecision::Square),
            Err(GeoPointError::InvalidLatitude(_))
        );
        assert_matches!(
            encode(0.0, -181.0, LocatorPrecision::Square),
            Err(GeoPointError::InvalidLongitude(_))
        );
    }

    #[test]
    fn decode_errors() {
        assert_matches!(decode("IO9"), Err(GeoPointError::InvalidLocatorLength(_)));
        assert_matches!(
            decode("IO92v"),
            Err(GeoPointError::InvalidLocatorLength(_))
        );
        assert_matches!(decode("SO92"), Err(GeoPointError::InvalidLocatorValue(_)));
        assert_matches!(decode("io92"), Err(GeoPointError::InvalidLocatorValue(_)));
        assert_matches!(decode("IOx2"), Err(GeoPointError::InvalidLocatorValue(_)));
        assert_matches!(
            decode("IO92yb"),
            Err(GeoPointError::InvalidLocatorValue(_))
        );
        assert_matches!(
            decode("IO92va3z"),
            Err(GeoPointError::InvalidLocatorValue(_))
        );
    }

    #[test]
    fn round_trip_stays_in_cell() {
        let precisions = [
            LocatorPrecision::Square,
            LocatorPrecision::Subsquare,
            LocatorPrecision::Extsquare,
        ];

        let mut lat = -89.7;
        while lat < 90.0 {
            let mut lon = -179.9;
            while lon < 180.0 {
                for precision in precisions {
                    let locator = encode(lat, lon, precision).unwrap();
                    assert_eq!(locator.len(), precision.char_count());

                    let decoded = decode(&locator).unwrap();
                    let (cell_lat, cell_lon) = precision.cell_size();
                    assert!((decoded.lat() - lat).abs() < cell_lat, "{locator}");
                    assert!((decoded.lon() - lon).abs() < cell_lon, "{locator}");
                    assert_eq!(
                        encode(decoded.lat(), decoded.lon(), precision).unwrap(),
                        locator
                    );
                }
                lon += 7.31;
            }
            lat += 3.17;
        }
    }

    #[test]
    fn cells_shrink_with_precision() {
        let square = LocatorPrecision::Square.cell_size();
        let subsquare = LocatorPrecision::Subsquare.cell_size();
        let extsquare = LocatorPrecision::Extsquare.cell_size();

        assert!(square.0 > subsquare.0 && subsquare.0 > extsquare.0);
        assert!(square.1 > subsquare.1 && subsquare.1 > extsquare.1);
    }
}
