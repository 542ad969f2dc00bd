//! UTC instants with millisecond resolution.
//!
//! [`Instant`] is the time input to every skywatch calculation. It is an
//! immutable count of milliseconds since 1970-01-01T00:00:00 UTC; conversion to
//! a [`JulianDate`] splits whole days from the day fraction so no precision is
//! lost at the millisecond level.
//!
//! ```
//! use skywatch_time::Instant;
//!
//! let t = Instant::from_calendar(2000, 1, 1, 12, 0, 0.0)?;
//! assert_eq!(t.to_julian_date(), 2451545.0);
//! assert_eq!(t.to_string(), "2000-01-01T12:00:00.000Z");
//!
//! let back = Instant::from_julian_date(t.to_julian_date())?;
//! assert_eq!(back, t);
//! # Ok::<(), skywatch_time::TimeError>(())
//! ```
//!
//! Leap seconds are not represented; a UTC day is always 86 400 000 ms, matching
//! Unix time. That keeps Julian Date conversion monotonic and exactly invertible.

use crate::julian::JulianDate;
use crate::{TimeError, TimeResult};
use skywatch_core::constants::{MILLIS_PER_DAY, MILLIS_PER_DAY_F64, UNIX_EPOCH_JD};
use skywatch_core::SkyError;
use std::fmt;

/// Unix day number of 0001-01-01; earlier calendar dates are rejected.
const MIN_UNIX_DAY: i64 = -719_162;
/// Unix day number of 9999-12-31.
const MAX_UNIX_DAY: i64 = 2_932_896;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    unix_millis: i64,
}

impl Instant {
    pub const fn from_unix_millis(unix_millis: i64) -> Self {
        Self { unix_millis }
    }

    /// J2000.0 (2000-01-01T12:00:00 UTC, JD 2451545.0).
    ///
    /// Strictly J2000.0 is defined in TT; the 64 s offset is below the accuracy
    /// of everything built on this type.
    pub const fn j2000() -> Self {
        Self::from_unix_millis(946_728_000_000)
    }

    /// Reads the system clock.
    ///
    /// Only for callers that own a polling loop; nothing in the workspace calls it.
    pub fn now() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let millis = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_millis() as i64,
            Err(e) => -(e.duration().as_millis() as i64),
        };
        Self::from_unix_millis(millis)
    }

    /// Builds an instant from Gregorian calendar components (UTC).
    ///
    /// `second` may carry a fraction and is rounded to the nearest millisecond.
    ///
    /// # Errors
    ///
    /// [`TimeError::InvalidDate`] for an impossible date or time of day
    /// (month 13, February 30, hour 24, second ≥ 60) or a year outside 1–9999.
    pub fn from_calendar(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> TimeResult<Self> {
        validate_calendar(year, month, day)?;
        if hour > 23 || minute > 59 || !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(SkyError::invalid_date(
                year,
                month as i32,
                day as i32,
                &format!("time {:02}:{:02}:{} out of range", hour, minute, second),
            )
            .into());
        }

        let unix_day = unix_day_from_calendar(year, month, day);
        let day_millis = (hour as i64 * 3600 + minute as i64 * 60) * 1000
            + (second * 1000.0).round() as i64;
        Ok(Self::from_unix_millis(unix_day * MILLIS_PER_DAY + day_millis))
    }

    /// Inverse of [`to_julian_date`](Self::to_julian_date), rounded to the
    /// nearest millisecond.
    ///
    /// # Errors
    ///
    /// [`TimeError::NonFinite`] for NaN/∞ and [`TimeError::OutOfRange`] for
    /// dates outside years 1–9999.
    pub fn from_julian_date(jd: f64) -> TimeResult<Self> {
        if !jd.is_finite() {
            return Err(TimeError::NonFinite(format!("Julian Date {}", jd)));
        }
        let days = jd - UNIX_EPOCH_JD;
        let whole = days.floor();
        if whole < MIN_UNIX_DAY as f64 || whole > MAX_UNIX_DAY as f64 {
            return Err(TimeError::OutOfRange(format!(
                "Julian Date {} outside years 1-9999",
                jd
            )));
        }
        let millis = whole as i64 * MILLIS_PER_DAY + ((days - whole) * MILLIS_PER_DAY_F64).round() as i64;
        Ok(Self::from_unix_millis(millis))
    }

    pub const fn unix_millis(&self) -> i64 {
        self.unix_millis
    }

    /// Two-part Julian Date: UTC midnight in `jd1`, day fraction in `jd2`.
    pub fn julian_date(&self) -> JulianDate {
        let days = self.unix_millis.div_euclid(MILLIS_PER_DAY);
        let rem = self.unix_millis.rem_euclid(MILLIS_PER_DAY);
        JulianDate::new(UNIX_EPOCH_JD + days as f64, rem as f64 / MILLIS_PER_DAY_F64)
    }

    /// Julian Date as a single `f64` day count.
    pub fn to_julian_date(&self) -> f64 {
        self.julian_date().to_f64()
    }

    pub fn add_millis(&self, millis: i64) -> Self {
        Self::from_unix_millis(self.unix_millis.saturating_add(millis))
    }

    /// Offsets by a (possibly fractional) number of days, rounded to the millisecond.
    pub fn add_days(&self, days: f64) -> TimeResult<Self> {
        if !days.is_finite() {
            return Err(TimeError::NonFinite(format!("day offset {}", days)));
        }
        Ok(self.add_millis((days * MILLIS_PER_DAY_F64).round() as i64))
    }

    /// Signed elapsed days from `earlier` to `self`. Defined for any pair of
    /// instants, including ones far outside the calendar range.
    pub fn days_since(&self, earlier: &Instant) -> f64 {
        (self.unix_millis as i128 - earlier.unix_millis as i128) as f64 / MILLIS_PER_DAY_F64
    }

    /// True if the instant falls within years 1–9999, the range
    /// [`from_calendar`](Self::from_calendar) accepts.
    pub fn is_within_calendar_range(&self) -> bool {
        let day = self.unix_millis.div_euclid(MILLIS_PER_DAY);
        (MIN_UNIX_DAY..=MAX_UNIX_DAY).contains(&day)
    }

    /// Calendar breakdown `(year, month, day, hour, minute, millisecond-of-minute)`.
    pub fn to_calendar(&self) -> (i32, u8, u8, u8, u8, u32) {
        let days = self.unix_millis.div_euclid(MILLIS_PER_DAY);
        let rem = self.unix_millis.rem_euclid(MILLIS_PER_DAY);
        let (year, month, day) = calendar_from_unix_day(days);
        let hour = (rem / 3_600_000) as u8;
        let minute = ((rem % 3_600_000) / 60_000) as u8;
        let millis = (rem % 60_000) as u32;
        (year, month, day, hour, minute, millis)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day, hour, minute, millis) = self.to_calendar();
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            year,
            month,
            day,
            hour,
            minute,
            millis / 1000,
            millis % 1000
        )
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn validate_calendar(year: i32, month: u8, day: u8) -> TimeResult<()> {
    if !(1..=9999).contains(&year) {
        return Err(SkyError::invalid_date(year, month as i32, day as i32, "year outside 1-9999").into());
    }
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => {
            return Err(
                SkyError::invalid_date(year, month as i32, day as i32, "month out of range").into(),
            )
        }
    };
    if day == 0 || day > days_in_month {
        return Err(SkyError::invalid_date(year, month as i32, day as i32, "day out of range").into());
    }
    Ok(())
}

/// Gregorian date to days since 1970-01-01 (ERFA `eraCal2jd` integer form).
fn unix_day_from_calendar(year: i32, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let my = (month - 14) / 12;
    let iypmy = year as i64 + my;

    let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day as i64
        - 2432076;

    // MJD 40587 is 1970-01-01
    mjd - 40587
}

/// Days since 1970-01-01 to Gregorian date (ERFA `eraJd2cal` integer form).
fn calendar_from_unix_day(unix_day: i64) -> (i32, u8, u8) {
    // Julian Day Number of the civil day starting at this midnight
    let jdn = unix_day + 2_440_588;

    let mut l = jdn + 68569;
    let n = (4 * l) / 146097;
    l -= (146097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1461001;
    l -= (1461 * i) / 4 - 31;
    let k = (80 * l) / 2447;
    let day = l - (2447 * k) / 80;
    l = k / 11;
    let month = k + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;

    (year as i32, month as u8, day as u8)
}
