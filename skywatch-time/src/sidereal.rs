//! Greenwich and local mean sidereal time.
//!
//! Uses the linear J2000.0 expression
//!
//! ```text
//! GMST = 280.46061837° + 360.98564736629° · d,   d = JD − 2451545.0
//! ```
//!
//! reduced to [0°, 360°). The quadratic and cubic terms of the full IAU
//! polynomial are dropped, which keeps the result within about an arc-minute
//! for the years 1900–2100. Outside that window the angle is still defined,
//! just less accurate. UT1−UTC is ignored for the same reason.
//!
//! ```
//! use skywatch_time::{sidereal, Instant};
//!
//! let lst = sidereal::local_sidereal_time_deg(&Instant::j2000(), -90.0)?;
//! assert!((lst - 190.46061837).abs() < 1e-9);
//! # Ok::<(), skywatch_time::TimeError>(())
//! ```

use crate::instant::Instant;
use crate::{TimeError, TimeResult};
use skywatch_core::angle::{wrap_0_360, wrap_pm_180};
use skywatch_core::constants::{DEG_TO_RAD, J2000_JD};
use skywatch_core::GeographicObserver;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// GMST at J2000.0, degrees.
pub const GMST_AT_J2000_DEG: f64 = 280.460_618_37;

/// Sidereal angle swept per solar day, degrees.
pub const SIDEREAL_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Sidereal rate in degrees per millisecond of UTC, for callers scheduling redraws.
pub const SIDEREAL_RATE_DEG_PER_MS: f64 = SIDEREAL_RATE_DEG_PER_DAY / 86_400_000.0;

fn gmst_from_days(days_since_j2000: f64) -> f64 {
    wrap_0_360(GMST_AT_J2000_DEG + SIDEREAL_RATE_DEG_PER_DAY * days_since_j2000)
}

/// Greenwich mean sidereal time in [0, 360).
pub fn greenwich_sidereal_time_deg(instant: &Instant) -> f64 {
    gmst_from_days(instant.julian_date().days_since_j2000())
}

/// GMST for a raw Julian Date.
///
/// # Errors
///
/// [`TimeError::NonFinite`] if `jd` is NaN or infinite.
pub fn gmst_deg_from_julian_date(jd: f64) -> TimeResult<f64> {
    if !jd.is_finite() {
        return Err(TimeError::NonFinite(format!("Julian Date {}", jd)));
    }
    Ok(gmst_from_days(jd - J2000_JD))
}

/// Local mean sidereal time in [0, 360) for an east-positive longitude.
///
/// # Errors
///
/// [`TimeError::NonFinite`] if `longitude_deg` is NaN or infinite.
pub fn local_sidereal_time_deg(instant: &Instant, longitude_deg: f64) -> TimeResult<f64> {
    if !longitude_deg.is_finite() {
        return Err(TimeError::NonFinite(format!("longitude {}", longitude_deg)));
    }
    Ok(wrap_0_360(greenwich_sidereal_time_deg(instant) + longitude_deg))
}

/// A sidereal angle held in degrees, always in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealTime(f64);

impl SiderealTime {
    pub fn from_degrees(degrees: f64) -> Self {
        Self(wrap_0_360(degrees))
    }

    pub fn from_hours(hours: f64) -> Self {
        Self::from_degrees(hours * 15.0)
    }

    pub fn greenwich(instant: &Instant) -> Self {
        Self(greenwich_sidereal_time_deg(instant))
    }

    /// Local sidereal time at the observer's meridian.
    pub fn local(instant: &Instant, observer: &GeographicObserver) -> Self {
        Self::from_degrees(greenwich_sidereal_time_deg(instant) + observer.longitude_deg())
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0 / 15.0
    }

    pub fn radians(&self) -> f64 {
        self.0 * DEG_TO_RAD
    }

    /// Hour angle `LST − RA` in (-180, 180]; positive west of the meridian.
    pub fn hour_angle_deg(&self, ra_deg: f64) -> f64 {
        wrap_pm_180(self.0 - ra_deg)
    }
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_seconds = self.hours() * 3600.0;
        let h = (total_seconds / 3600.0).floor();
        let m = ((total_seconds - h * 3600.0) / 60.0).floor();
        let s = total_seconds - h * 3600.0 - m * 60.0;
        write!(f, "{:02}h{:02}m{:06.3}s", h as u32, m as u32, s)
    }
}
