//! Conversion between decimal degrees and sexagesimal (degrees, minutes, seconds) angles.

use std::str::FromStr;

use crate::error::GeoPointError;

/// Which sexagesimal components [`to_dms`] should produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DmsStyle {
    /// Whole degrees and fractional minutes.
    DegreesMinutes,
    /// Whole degrees, whole minutes and fractional seconds.
    #[default]
    DegreesMinutesSeconds,
}

impl FromStr for DmsStyle {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dm" => Ok(Self::DegreesMinutes),
            "dms" => Ok(Self::DegreesMinutesSeconds),
            other => Err(GeoPointError::UnknownStyle(other.to_string())),
        }
    }
}

/// Angle split into sexagesimal components.
///
/// Every component carries the sign of the original angle, so `-0.221` becomes `0°, -13′, -15.6″`. Whole
/// components cannot hold a negative zero, which is why the sign must also be present on the smaller ones.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Sexagesimal {
    /// Degrees and minutes.
    DegreesMinutes {
        /// Whole degrees.
        degrees: i32,
        /// Minutes, including the fraction left over from the seconds.
        minutes: f64,
    },
    /// Degrees, minutes and seconds.
    DegreesMinutesSeconds {
        /// Whole degrees.
        degrees: i32,
        /// Whole minutes.
        minutes: i32,
        /// Seconds with fraction.
        seconds: f64,
    },
}

impl Sexagesimal {
    /// Whole degrees component.
    pub fn degrees(&self) -> i32 {
        match *self {
            Self::DegreesMinutes { degrees, .. } => degrees,
            Self::DegreesMinutesSeconds { degrees, .. } => degrees,
        }
    }

    /// Minutes component, fractional for [`Sexagesimal::DegreesMinutes`].
    pub fn minutes(&self) -> f64 {
        match *self {
            Self::DegreesMinutes { minutes, .. } => minutes,
            Self::DegreesMinutesSeconds { minutes, .. } => minutes as f64,
        }
    }

    /// Seconds component, `None` for [`Sexagesimal::DegreesMinutes`].
    pub fn seconds(&self) -> Option<f64> {
        match *self {
            Self::DegreesMinutes { .. } => None,
            Self::DegreesMinutesSeconds { seconds, .. } => Some(seconds),
        }
    }

    /// Converts the components back into decimal degrees with [`to_dd`].
    pub fn to_decimal(&self) -> f64 {
        to_dd(
            self.degrees() as f64,
            self.minutes(),
            self.seconds().unwrap_or(0.0),
        )
    }
}

/// Converts a decimal angle in degrees into sexagesimal components.
pub fn to_dms(angle: f64, style: DmsStyle) -> Sexagesimal {
    let sign = if angle >= 0.0 { 1.0 } else { -1.0 };
    let arc_seconds = angle.abs() * 3600.0;
    let (minutes, seconds) = divmod(arc_seconds, 60.0);
    let (degrees, minutes) = divmod(minutes, 60.0);

    match style {
        DmsStyle::DegreesMinutes => Sexagesimal::DegreesMinutes {
            degrees: (sign * degrees) as i32,
            minutes: sign * (minutes + seconds / 60.0),
        },
        DmsStyle::DegreesMinutesSeconds => Sexagesimal::DegreesMinutesSeconds {
            degrees: (sign * degrees) as i32,
            minutes: (sign * minutes) as i32,
            seconds: sign * seconds,
        },
    }
}

/// Converts degrees, minutes and seconds into a decimal angle.
///
/// The components are expected to share the same sign. The result is negative if any of them is negative.
pub fn to_dd(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    let sign = if degrees < 0.0 || minutes < 0.0 || seconds < 0.0 {
        -1.0
    } else {
        1.0
    };

    sign * (degrees.abs() + minutes.abs() / 60.0 + seconds.abs() / 3600.0)
}

/// Floored division with remainder for non-negative values.
///
/// The quotient is computed from the exact remainder rather than from `value / divisor`, so that values like
/// `187254.0 / 60.0` do not pick up a rounding error in the last digit.
pub(crate) fn divmod(value: f64, divisor: f64) -> (f64, f64) {
    let remainder = value % divisor;
    let quotient = (value - remainder) / divisor;
    let mut whole = quotient.floor();
    if quotient - whole > 0.5 {
        whole += 1.0;
    }

    (whole, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn splits_positive_angle() {
        let dms = to_dms(52.015, DmsStyle::DegreesMinutesSeconds);
        assert_eq!(dms.degrees(), 52);
        assert_eq!(dms.minutes(), 0.0);
        assert_abs_diff_eq!(dms.seconds().unwrap(), 54.0, epsilon = 1e-9);
    }

    #[test]
    fn sign_is_carried_by_every_component() {
        let dms = to_dms(-0.221, DmsStyle::DegreesMinutesSeconds);
        assert_eq!(dms.degrees(), 0);
        assert_eq!(dms.minutes(), -13.0);
        assert_abs_diff_eq!(dms.seconds().unwrap(), -15.6, epsilon = 1e-9);

        let dm = to_dms(-0.221, DmsStyle::DegreesMinutes);
        assert_eq!(dm.degrees(), 0);
        assert_abs_diff_eq!(dm.minutes(), -13.26, epsilon = 1e-9);
        assert_eq!(dm.seconds(), None);
    }

    #[test]
    fn style_tokens() {
        assert_eq!("dm".parse::<DmsStyle>(), Ok(DmsStyle::DegreesMinutes));
        assert_eq!("dms".parse::<DmsStyle>(), Ok(DmsStyle::DegreesMinutesSeconds));
        assert_matches!(
            "None".parse::<DmsStyle>(),
            Err(GeoPointError::UnknownStyle(s)) if s == "None"
        );
    }

    #[test]
    fn to_dd_values() {
        assert_abs_diff_eq!(to_dd(52.0, 0.0, 54.0), 52.015, epsilon = 1e-9);
        assert_abs_diff_eq!(to_dd(0.0, -13.0, -15.0), -0.22083, epsilon = 1e-5);
        assert_abs_diff_eq!(to_dd(0.0, -13.25, 0.0), -0.22083, epsilon = 1e-5);
        assert_abs_diff_eq!(to_dd(-1.0, 0.0, 0.0), -1.0);
    }

    #[test]
    fn dms_round_trip() {
        let mut angle = -180.0;
        while angle <= 180.0 {
            let back = to_dms(angle, DmsStyle::DegreesMinutesSeconds).to_decimal();
            assert_abs_diff_eq!(back, angle, epsilon = 1e-6);

            let back = to_dms(angle, DmsStyle::DegreesMinutes).to_decimal();
            assert_abs_diff_eq!(back, angle, epsilon = 1e-6);

            angle += 0.0137;
        }
    }

    #[test]
    fn divmod_matches_floor_division() {
        assert_eq!(divmod(187254.0, 60.0), (3120.0, 54.0));
        assert_eq!(divmod(0.0, 60.0), (0.0, 0.0));
        let (q, r) = divmod(795.6, 60.0);
        assert_eq!(q, 13.0);
        assert_abs_diff_eq!(r, 15.6, epsilon = 1e-9);
    }
}
