//! Compass direction names for bearings.
//!
//! The 16 point windrose is not written out by hand. It is built quarter by quarter from the four primitive
//! directions, so the 4, 8 and 16 segment namings are all slices of the same table.

use lazy_static::lazy_static;

use crate::error::GeoPointError;

const PRIMITIVES: [&str; 5] = ["north", "east", "south", "west", "north"];

lazy_static! {
    static ref WINDROSE: Vec<String> = windrose(false);
    static ref WINDROSE_ABBR: Vec<String> = windrose(true);
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Names of the four windrose points from `PRIMITIVES[quarter]` (inclusive) to `PRIMITIVES[quarter + 1]`
/// (exclusive).
fn quarter(quarter: usize, abbreviated: bool) -> [String; 4] {
    let name = |i: usize| {
        let primitive = PRIMITIVES[i];
        if abbreviated {
            primitive[..1].to_uppercase()
        } else {
            primitive.to_string()
        }
    };
    let separator = if abbreviated { "" } else { "-" };
    let join = |parts: &[String]| parts.join(separator);

    let here = name(quarter);
    let next = name(quarter + 1);

    // Compound names always lead with north or south.
    let (major, minor) = if quarter % 2 == 0 {
        (here.clone(), next.clone())
    } else {
        (next.clone(), here.clone())
    };

    [
        capitalize(&here),
        join(&[capitalize(&here), major.clone(), minor.clone()]),
        join(&[capitalize(&major), minor.clone()]),
        join(&[capitalize(&next), major, minor]),
    ]
}

fn windrose(abbreviated: bool) -> Vec<String> {
    (0..4).flat_map(|q| quarter(q, abbreviated)).collect()
}

/// Converts an angle in degrees into a direction name.
///
/// The angle is normalized into `[0, 360)` and assigned to one of `segments` equal arcs centered on the compass
/// points. With `abbreviated` set the letter code (`"NE"`) is returned instead of the phrase (`"North-east"`).
///
/// ```
/// use geopoint_types::compass::angle_to_name;
///
/// assert_eq!(angle_to_name(45.0, 8, false).unwrap(), "North-east");
/// assert_eq!(angle_to_name(292.0, 16, true).unwrap(), "WNW");
/// ```
pub fn angle_to_name(
    angle: f64,
    segments: u32,
    abbreviated: bool,
) -> Result<&'static str, GeoPointError> {
    let step = match segments {
        4 => 4,
        8 => 2,
        16 => 1,
        other => return Err(GeoPointError::UnsupportedSegmentCount(other)),
    };

    Ok(bucket_name(angle, step, abbreviated))
}

/// Full name of the 8 segment direction of an angle in degrees, e.g. `"North-east"`.
///
/// ```
/// use geopoint_types::compass::octant_name;
///
/// assert_eq!(octant_name(293.0), "North-west");
/// ```
pub fn octant_name(angle: f64) -> &'static str {
    bucket_name(angle, 2, false)
}

/// Windrose entry for `angle`, taking every `step`-th entry of the 16 point table.
fn bucket_name(angle: f64, step: usize, abbreviated: bool) -> &'static str {
    let segments = 16 / step;
    let arc = 360.0 / segments as f64;
    let bucket = ((angle.rem_euclid(360.0) + arc / 2.0) / arc) as usize % segments;

    let table: &'static Vec<String> = if abbreviated {
        &WINDROSE_ABBR
    } else {
        &WINDROSE
    };

    table[bucket * step].as_str()
}
