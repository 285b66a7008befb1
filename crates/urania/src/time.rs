//! Birth instants and Julian Day conversion.
//!
//! A [`BirthInstant`] is the only externally supplied root of a chart. It is
//! validated on construction; every other quantity is derived from it.

use crate::error::{ChartError, ChartResult};
use crate::ephemeris::GeoLocation;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 UTC).
pub const J2000_JD: f64 = 2_451_545.0;

const MIN_UTC_OFFSET: f64 = -12.0;
const MAX_UTC_OFFSET: f64 = 14.0;

/// Civil birth date/time with its UTC offset and geographic coordinates.
///
/// Deserialization goes through [`BirthInstant::new`], so a decoded value
/// is validated like a constructed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BirthInstantFields")]
pub struct BirthInstant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    #[serde(rename = "utcOffsetHours")]
    pub utc_offset_hours: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Wire shape of [`BirthInstant`] before validation.
#[derive(Deserialize)]
struct BirthInstantFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    #[serde(rename = "utcOffsetHours")]
    utc_offset_hours: f64,
    latitude: f64,
    longitude: f64,
}

impl TryFrom<BirthInstantFields> for BirthInstant {
    type Error = ChartError;

    fn try_from(f: BirthInstantFields) -> Result<Self, Self::Error> {
        Self::new(
            f.year,
            f.month,
            f.day,
            f.hour,
            f.minute,
            f.second,
            f.utc_offset_hours,
            f.latitude,
            f.longitude,
        )
    }
}

impl BirthInstant {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_hours: f64,
        latitude: f64,
        longitude: f64,
    ) -> ChartResult<Self> {
        let instant = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
            latitude,
            longitude,
        };
        instant.validate()?;
        Ok(instant)
    }

    /// Build from the `YYYY-MM-DD` / `HH:MM[:SS]` strings used by reading requests.
    pub fn parse(
        date: &str,
        time: &str,
        utc_offset_hours: f64,
        latitude: f64,
        longitude: f64,
    ) -> ChartResult<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| ChartError::InvalidTime(format!("bad date '{date}': {e}")))?;
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M"))
            .map_err(|e| ChartError::InvalidTime(format!("bad time '{time}': {e}")))?;

        Self::new(
            date.year(),
            date.month(),
            date.day(),
            time.hour(),
            time.minute(),
            time.second(),
            utc_offset_hours,
            latitude,
            longitude,
        )
    }

    /// Check every civil field and the coordinates.
    ///
    /// The fields are public, so values built by hand can be re-checked here.
    pub fn validate(&self) -> ChartResult<()> {
        if self.civil_date().is_none() {
            return Err(ChartError::InvalidTime(format!(
                "{:04}-{:02}-{:02} is not a calendar date",
                self.year, self.month, self.day
            )));
        }
        if self.hour >= 24 || self.minute >= 60 || self.second >= 60 {
            return Err(ChartError::InvalidTime(format!(
                "{:02}:{:02}:{:02} is not a civil time",
                self.hour, self.minute, self.second
            )));
        }
        check_utc_offset(self.utc_offset_hours)?;
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidAstronomicalInput(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidAstronomicalInput(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    fn civil_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Local clock time as a fractional hour.
    pub fn local_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second as f64 / 3600.0
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation {
            lat: self.latitude,
            lon: self.longitude,
        }
    }

    /// The birth moment as a UTC instant.
    pub fn utc_datetime(&self) -> ChartResult<DateTime<Utc>> {
        let offset_seconds = (self.utc_offset_hours * 3600.0).round() as i32;
        let offset = FixedOffset::east_opt(offset_seconds).ok_or_else(|| {
            ChartError::InvalidTime(format!("UTC offset {} hours", self.utc_offset_hours))
        })?;
        let naive = self
            .civil_date()
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, self.second))
            .ok_or_else(|| ChartError::InvalidTime("birth time does not exist".to_string()))?;
        offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| ChartError::InvalidTime("ambiguous local birth time".to_string()))
    }

    /// Julian Day (UTC) of the birth moment.
    pub fn julian_day(&self) -> ChartResult<JulianInstant> {
        civil_to_julian_day(
            self.year,
            self.month,
            self.day,
            self.local_hour(),
            self.utc_offset_hours,
        )
    }
}

fn check_utc_offset(utc_offset_hours: f64) -> ChartResult<()> {
    if !(MIN_UTC_OFFSET..=MAX_UTC_OFFSET).contains(&utc_offset_hours) {
        return Err(ChartError::InvalidTime(format!(
            "UTC offset {utc_offset_hours} outside [{MIN_UTC_OFFSET}, {MAX_UTC_OFFSET}]"
        )));
    }
    Ok(())
}

/// Convert a local civil date and fractional hour to a UTC Julian Day.
///
/// The UTC hour is `local_hour - utc_offset`; when it leaves [0, 24) the
/// calendar date is rolled by exactly one day. Larger shifts are rejected.
pub fn civil_to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    local_hour: f64,
    utc_offset_hours: f64,
) -> ChartResult<JulianInstant> {
    if !(0.0..24.0).contains(&local_hour) {
        return Err(ChartError::InvalidTime(format!(
            "local hour {local_hour} outside [0, 24)"
        )));
    }
    check_utc_offset(utc_offset_hours)?;

    let mut date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ChartError::InvalidTime(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
    })?;
    let mut utc_hour = local_hour - utc_offset_hours;

    if utc_hour < 0.0 {
        utc_hour += 24.0;
        date = date
            .pred_opt()
            .ok_or_else(|| ChartError::InvalidTime("date underflow".to_string()))?;
    } else if utc_hour >= 24.0 {
        utc_hour -= 24.0;
        date = date
            .succ_opt()
            .ok_or_else(|| ChartError::InvalidTime("date overflow".to_string()))?;
    }

    if !(0.0..24.0).contains(&utc_hour) {
        return Err(ChartError::InvalidTime(format!(
            "offset {utc_offset_hours} shifts the date by more than one day"
        )));
    }

    Ok(JulianInstant::from_calendar(
        date.year(),
        date.month(),
        date.day(),
        utc_hour,
    ))
}

/// A UTC instant expressed as a continuous Julian Day count.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianInstant(f64);

impl JulianInstant {
    pub fn new(julian_day: f64) -> Self {
        Self(julian_day)
    }

    /// Gregorian calendar date plus fractional UTC hour to Julian Day.
    pub fn from_calendar(year: i32, month: u32, day: u32, utc_hour: f64) -> Self {
        let (y, m) = if month <= 2 {
            (year as f64 - 1.0, month as f64 + 12.0)
        } else {
            (year as f64, month as f64)
        };
        let d = day as f64 + utc_hour / 24.0;
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        Self((365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + d + b - 1524.5)
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let hour = dt.hour() as f64
            + dt.minute() as f64 / 60.0
            + (dt.second() as f64 + dt.nanosecond() as f64 / 1e9) / 3600.0;
        Self::from_calendar(dt.year(), dt.month(), dt.day(), hour)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Julian centuries since J2000.0.
    pub fn centuries_since_j2000(self) -> f64 {
        (self.0 - J2000_JD) / 36_525.0
    }

    /// Inverse of [`JulianInstant::from_calendar`], to the millisecond.
    pub fn to_datetime(self) -> ChartResult<DateTime<Utc>> {
        let jd = self.0 + 0.5;
        let z = jd.floor();
        let f = jd - z;
        let a = if z < 2_299_161.0 {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = (b - d - (30.6001 * e).floor()) as u32;
        let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u32;
        let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;

        let midnight = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| {
                ChartError::InvalidAstronomicalInput(format!("julian day {} out of range", self.0))
            })?;
        let millis = (f * 86_400_000.0).round() as i64;
        Ok(Utc.from_utc_datetime(&midnight) + chrono::Duration::milliseconds(millis))
    }
}

/// Calendar UTC instant for a Julian Day, mainly for diagnostics.
pub fn julian_day_to_datetime(julian_day: f64) -> ChartResult<DateTime<Utc>> {
    JulianInstant::new(julian_day).to_datetime()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_j2000_epoch() {
        let jd = JulianInstant::from_calendar(2000, 1, 1, 12.0);
        assert_eq!(jd.value(), J2000_JD);
        assert_eq!(jd.centuries_since_j2000(), 0.0);
    }

    #[test]
    fn test_offset_applied() {
        // 16:20 IST is 10:50 UTC
        let jd = civil_to_julian_day(1999, 11, 13, 16.0 + 20.0 / 60.0, 5.5).unwrap();
        assert_relative_eq!(jd.value(), 2_451_495.951_388_9, epsilon = 1e-6);
    }

    #[test]
    fn test_rolls_back_across_year_boundary() {
        let jd = civil_to_julian_day(2024, 1, 1, 3.0, 5.5).unwrap();
        let expected = JulianInstant::from_calendar(2023, 12, 31, 21.5);
        assert_relative_eq!(jd.value(), expected.value(), epsilon = 1e-9);
    }

    #[test]
    fn test_rolls_forward_across_month_boundary() {
        let jd = civil_to_julian_day(2023, 2, 28, 20.0, -6.0).unwrap();
        let expected = JulianInstant::from_calendar(2023, 3, 1, 2.0);
        assert_relative_eq!(jd.value(), expected.value(), epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_out_of_range_inputs() {
        assert!(matches!(
            civil_to_julian_day(2023, 1, 1, 25.0, 0.0),
            Err(ChartError::InvalidTime(_))
        ));
        assert!(matches!(
            civil_to_julian_day(2023, 1, 1, 10.0, 15.0),
            Err(ChartError::InvalidTime(_))
        ));
        assert!(matches!(
            civil_to_julian_day(2023, 2, 30, 10.0, 0.0),
            Err(ChartError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_birth_instant_validation() {
        assert!(BirthInstant::new(1999, 11, 13, 16, 20, 0, 5.5, 17.68, 83.21).is_ok());
        assert!(BirthInstant::new(1999, 13, 13, 16, 20, 0, 5.5, 17.68, 83.21).is_err());
        assert!(BirthInstant::new(1999, 11, 13, 24, 0, 0, 5.5, 17.68, 83.21).is_err());
        assert!(BirthInstant::new(1999, 11, 13, 16, 20, 0, -13.0, 17.68, 83.21).is_err());
        assert!(matches!(
            BirthInstant::new(1999, 11, 13, 16, 20, 0, 5.5, 95.0, 83.21),
            Err(ChartError::InvalidAstronomicalInput(_))
        ));
    }

    #[test]
    fn test_parse_request_strings() {
        let birth = BirthInstant::parse("1999-11-13", "16:20", 5.5, 17.68, 83.21).unwrap();
        assert_eq!((birth.hour, birth.minute, birth.second), (16, 20, 0));
        let birth = BirthInstant::parse("1999-11-13", "16:20:45", 5.5, 17.68, 83.21).unwrap();
        assert_eq!(birth.second, 45);
        assert!(BirthInstant::parse("13/11/1999", "16:20", 5.5, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_utc_datetime_and_julian_day_agree() {
        let birth = BirthInstant::new(1999, 11, 13, 16, 20, 0, 5.5, 17.68, 83.21).unwrap();
        let utc = birth.utc_datetime().unwrap();
        assert_eq!(utc.to_rfc3339(), "1999-11-13T10:50:00+00:00");
        assert_relative_eq!(
            JulianInstant::from_datetime(utc).value(),
            birth.julian_day().unwrap().value(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_to_datetime_inverts_from_calendar() {
        let jd = JulianInstant::from_calendar(1987, 4, 10, 19.0 + 21.0 / 60.0);
        let dt = jd.to_datetime().unwrap();
        assert_eq!(dt.to_rfc3339(), "1987-04-10T19:21:00+00:00");
    }
}
