//! UTC offsets of named timezones.

use chrono::{Duration, NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use geopoint_types::Point;
use quick_cache::unsync::Cache;

use crate::error::GeoPointsError;

const DEFAULT_CAPACITY: usize = 64;

/// Resolves IANA timezone names (`Europe/London`) into the minute offsets used by [`Point`].
///
/// Parsed zones are kept in a bounded cache owned by this struct, so looking up the same zone for many points does
/// not parse the name again.
///
/// ```
/// use chrono::NaiveDate;
/// use geopoint::ZoneOffsetCache;
///
/// let mut zones = ZoneOffsetCache::default();
/// let summer = NaiveDate::from_ymd_opt(2007, 6, 28).unwrap();
/// assert_eq!(zones.offset_minutes("Europe/London", summer).unwrap(), 60);
/// ```
pub struct ZoneOffsetCache {
    zones: Cache<String, Tz>,
}

impl Default for ZoneOffsetCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ZoneOffsetCache {
    /// Creates a cache holding at most `capacity` zones.
    pub fn new(capacity: usize) -> Self {
        Self {
            zones: Cache::new(capacity),
        }
    }

    /// Number of zones currently cached.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if no zones are cached.
    pub fn is_empty(&self) -> bool {
        self.zones.len() == 0
    }

    fn zone(&mut self, name: &str) -> Result<Tz, GeoPointsError> {
        if let Some(zone) = self.zones.get(name) {
            return Ok(*zone);
        }

        log::debug!("Timezone {name} is not cached, parsing it");
        let zone: Tz = name
            .parse()
            .map_err(|_| GeoPointsError::UnknownTimezone(name.to_string()))?;
        self.zones.insert(name.to_string(), zone);

        Ok(zone)
    }

    /// Offset of the zone from UTC in minutes, at noon UTC of `date`.
    pub fn offset_minutes(&mut self, zone: &str, date: NaiveDate) -> Result<i32, GeoPointsError> {
        let zone = self.zone(zone)?;
        let noon = date.and_time(NaiveTime::MIN) + Duration::hours(12);
        let offset = zone.offset_from_utc_datetime(&noon).fix();

        Ok(offset.local_minus_utc() / 60)
    }

    /// Returns the point with its timezone set to the offset of `zone` on `date`.
    pub fn localize(
        &mut self,
        point: &Point,
        zone: &str,
        date: NaiveDate,
    ) -> Result<Point, GeoPointsError> {
        Ok(point.with_timezone(self.offset_minutes(zone, date)?))
    }
}
