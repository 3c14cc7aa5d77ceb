//! Sunrise, sunset and twilight times.
//!
//! Times are calculated with the approximation published in the *Almanac for Computers* (Nautical Almanac Office,
//! 1990). The result is accurate to a couple of minutes for latitudes where the event happens at all.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::GeoPointError;

/// Which crossing of the zenith angle to calculate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SunEvent {
    /// Morning crossing.
    Rise,
    /// Evening crossing.
    Set,
}

impl FromStr for SunEvent {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rise" => Ok(Self::Rise),
            "set" => Ok(Self::Set),
            other => Err(GeoPointError::UnknownEvent(other.to_string())),
        }
    }
}

impl Display for SunEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SunEvent::Rise => "rise",
            SunEvent::Set => "set",
        })
    }
}

/// Angle of the sun below the horizon that defines the event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Zenith {
    /// Upper limb of the sun touches the horizon, including refraction (50′).
    #[default]
    Official,
    /// Civil twilight, 6°.
    Civil,
    /// Nautical twilight, 12°.
    Nautical,
    /// Astronomical twilight, 18°.
    Astronomical,
}

impl Zenith {
    /// Angle in degrees, negative below the horizon.
    pub fn degrees(&self) -> f64 {
        match self {
            Zenith::Official => -50.0 / 60.0,
            Zenith::Civil => -6.0,
            Zenith::Nautical => -12.0,
            Zenith::Astronomical => -18.0,
        }
    }
}

impl FromStr for Zenith {
    type Err = GeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "official" => Ok(Self::Official),
            "civil" => Ok(Self::Civil),
            "nautical" => Ok(Self::Nautical),
            "astronomical" => Ok(Self::Astronomical),
            other => Err(GeoPointError::UnknownZenith(other.to_string())),
        }
    }
}

/// Calculates the local time of a sunrise or sunset (or start/end of twilight) at a location.
///
/// `timezone` is the offset from UTC in minutes. Returns `Ok(None)` if the sun does not cross the zenith angle on
/// the given day, which is the normal outcome close to the poles.
///
/// The local time is brought into a day with a single correction: values below 0 get 24 hours added, values above
/// 23 get 24 hours removed. An event between 23:00 and 24:00 is therefore reported 24 hours earlier, which the
/// minute correction renders as e.g. `00:30` for `23:30`. If the correction is not enough to bring the hour into a
/// day, [`GeoPointError::UnrepresentableTime`] is returned.
pub fn sun_rise_set(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    event: SunEvent,
    timezone: i32,
    zenith: Zenith,
) -> Result<Option<NaiveTime>, GeoPointError> {
    let n = date.ordinal() as f64;
    let lng_hour = longitude / 15.0;

    let t = match event {
        SunEvent::Rise => n + ((6.0 - lng_hour) / 24.0),
        SunEvent::Set => n + ((18.0 - lng_hour) / 24.0),
    };

    // Mean anomaly and true longitude.
    let m = (0.9856 * t) - 3.289;
    let centre = 1.916 * m.to_radians().sin() + 0.020 * (2.0 * m.to_radians()).sin();
    let l = m + centre + 282.634;
    let l = l.abs() % 360.0;

    // Right ascension in the same quadrant as the true longitude, in hours.
    let ra = (0.91764 * l.to_radians().tan()).atan().to_degrees();
    let l_quadrant = (l / 90.0).floor() * 90.0;
    let ra_quadrant = (ra / 90.0).floor() * 90.0;
    let ra = (ra + (l_quadrant - ra_quadrant)) / 15.0;

    let sin_dec = 0.39782 * l.to_radians().sin();
    let cos_dec = sin_dec.asin().cos();

    let cos_h = (zenith.degrees().to_radians() - (sin_dec * latitude.to_radians().sin()))
        / (cos_dec * latitude.to_radians().cos());

    if !(-1.0..=1.0).contains(&cos_h) {
        log::debug!(
            "No {event} at {latitude}, {longitude} on {date} for {zenith:?} zenith, cos H = {cos_h}"
        );
        return Ok(None);
    }

    let h = match event {
        SunEvent::Rise => 360.0 - cos_h.acos().to_degrees(),
        SunEvent::Set => cos_h.acos().to_degrees(),
    } / 15.0;

    let local_mean_time = h + ra - (0.06571 * t) - 6.622;
    let utc = local_mean_time - lng_hour;

    let mut local_t = utc + timezone as f64 / 60.0;
    if local_t < 0.0 {
        local_t += 24.0;
    } else if local_t > 23.0 {
        local_t -= 24.0;
    }
    log::trace!("Local {event} time {local_t}h at {latitude}, {longitude} on {date}");

    let hour = local_t as i32;
    let mut minute = if hour == 0 {
        (60.0 * local_t) as i32
    } else {
        (60.0 * (local_t % hour as f64)) as i32
    };
    if minute < 0 {
        minute += 60;
    }

    u32::try_from(hour)
        .ok()
        .zip(u32::try_from(minute).ok())
        .and_then(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .map(Some)
        .ok_or(GeoPointError::UnrepresentableTime(local_t))
}

/// Calculates both sunrise and sunset, see [`sun_rise_set`].
pub fn sun_events(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    timezone: i32,
    zenith: Zenith,
) -> Result<(Option<NaiveTime>, Option<NaiveTime>), GeoPointError> {
    Ok((
        sun_rise_set(latitude, longitude, date, SunEvent::Rise, timezone, zenith)?,
        sun_rise_set(latitude, longitude, date, SunEvent::Set, timezone, zenith)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hm(h: u32, m: u32) -> Option<NaiveTime> {
        Some(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    const LOCATIONS: [(f64, f64); 4] = [
        (52.015, -0.221),
        (40.638611, -73.762222),
        (49.016666, -2.5333333),
        (35.549999, 139.78333333),
    ];

    #[test]
    fn official_events() {
        let d = date(2007, 6, 15);
        let cases = [
            ((52.015, -0.221), (hm(3, 40), hm(20, 22))),
            ((52.6333, -2.5), (hm(3, 45), hm(20, 35))),
            ((36.12, -86.67), (hm(10, 29), hm(1, 5))),
            ((33.94, -118.4), (hm(12, 41), hm(3, 6))),
            ((40.638611, -73.762222), (hm(9, 23), hm(0, 27))),
            ((35.549999, 139.78333333), (hm(19, 24), hm(9, 57))),
        ];

        for ((lat, lon), expected) in cases {
            assert_eq!(
                sun_events(lat, lon, d, 0, Zenith::Official).unwrap(),
                expected,
                "{lat}, {lon}"
            );
        }

        assert_eq!(
            sun_events(52.015, -0.221, date(2007, 6, 28), 0, Zenith::Official).unwrap(),
            (hm(3, 42), hm(20, 24))
        );
        assert_eq!(
            sun_events(52.015, -0.221, date(1993, 12, 11), 0, Zenith::Official).unwrap(),
            (hm(7, 58), hm(15, 49))
        );
    }

    #[test]
    fn timezone_offset_shifts_events() {
        assert_eq!(
            sun_events(52.015, -0.221, date(2007, 6, 15), 60, Zenith::Official).unwrap(),
            (hm(4, 40), hm(21, 22))
        );
    }

    #[test]
    fn single_events() {
        let rise = |d| sun_rise_set(52.015, -0.221, d, SunEvent::Rise, 0, Zenith::Official);
        assert_eq!(rise(date(2007, 2, 21)).unwrap(), hm(7, 4));
        assert_eq!(rise(date(2007, 1, 21)).unwrap(), hm(7, 56));
    }

    #[test]
    fn twilight_events() {
        let d = date(2007, 6, 15);
        let civil = [
            (hm(2, 51), hm(21, 11)),
            (hm(8, 50), hm(1, 0)),
            (hm(3, 22), hm(20, 58)),
            (hm(18, 54), hm(10, 27)),
        ];
        let nautical = [
            (hm(1, 32), hm(22, 30)),
            (hm(8, 7), hm(1, 44)),
            (hm(2, 20), hm(22, 0)),
            (hm(18, 17), hm(11, 5)),
        ];
        let astronomical = [
            (None, None),
            (hm(7, 14), hm(2, 36)),
            (None, None),
            (hm(17, 34), hm(11, 48)),
        ];

        for (zenith, expected) in [
            (Zenith::Civil, civil),
            (Zenith::Nautical, nautical),
            (Zenith::Astronomical, astronomical),
        ] {
            for ((lat, lon), events) in LOCATIONS.iter().zip(expected) {
                assert_eq!(
                    sun_events(*lat, *lon, d, 0, zenith).unwrap(),
                    events,
                    "{zenith:?} at {lat}, {lon}"
                );
            }
        }
    }

    #[test]
    fn polar_day_has_no_events() {
        let _ = env_logger::builder().is_test(true).try_init();

        assert_eq!(
            sun_rise_set(89.0, 0.0, date(2007, 12, 21), SunEvent::Rise, 0, Zenith::Official),
            Ok(None)
        );
    }

    #[test]
    fn late_evening_wraps_to_after_midnight() {
        let rise = sun_rise_set(
            52.015,
            -0.221,
            date(2007, 6, 15),
            SunEvent::Rise,
            1190,
            Zenith::Official,
        );
        assert_eq!(rise.unwrap(), hm(0, 31));

        let rise = sun_rise_set(
            52.015,
            -0.221,
            date(2007, 6, 15),
            SunEvent::Rise,
            1400,
            Zenith::Official,
        );
        assert_eq!(rise.unwrap(), hm(3, 0));
    }

    #[test]
    fn unrepresentable_time() {
        assert_matches!(
            sun_rise_set(
                52.015,
                -0.221,
                date(2007, 6, 15),
                SunEvent::Set,
                -1400,
                Zenith::Official
            ),
            Err(GeoPointError::UnrepresentableTime(_))
        );
    }

    #[test]
    fn tokens() {
        assert_eq!("set".parse::<SunEvent>(), Ok(SunEvent::Set));
        assert_matches!("noon".parse::<SunEvent>(), Err(GeoPointError::UnknownEvent(_)));
        assert_eq!("civil".parse::<Zenith>(), Ok(Zenith::Civil));
        assert_matches!(
            "golden".parse::<Zenith>(),
            Err(GeoPointError::UnknownZenith(s)) if s == "golden"
        );
    }
}
