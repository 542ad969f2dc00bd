//! Angle normalization and validation.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, azimuth, sidereal time | [0°, 360°) | [`wrap_0_360`] |
//! | Hour angle, longitude difference | (-180°, 180°] | [`wrap_pm_180`] |
//! | Geographic longitude | [-180°, 180°] | [`normalize_longitude`] |
//! | Mean anomaly | [-π, π) | [`wrap_pm_pi`] |
//!
//! The wrapping functions use `libm::fmod` (via [`crate::math::fmod`]) and then
//! shift into range. Rust's `%` is a remainder, so `-1.0 % 360.0 == -1.0`; the
//! shift step is what gives the sign-correct modulo.
//!
//! Wrapping preserves a direction (370° and 10° are the same azimuth). The
//! validators reject input instead: a latitude of 95° is a caller bug, not a
//! direction to be wrapped.

use crate::constants::{PI, TWOPI};
use crate::math::fmod;
use crate::{MathErrorKind, SkyError, SkyResult};

/// Wraps degrees to [0, 360).
///
/// ```
/// use skywatch_core::angle::wrap_0_360;
///
/// assert_eq!(wrap_0_360(-90.0), 270.0);
/// assert_eq!(wrap_0_360(720.5), 0.5);
/// ```
#[inline]
pub fn wrap_0_360(deg: f64) -> f64 {
    let w = fmod(deg, 360.0);
    let w = if w < 0.0 { w + 360.0 } else { w };
    // -1e-14 + 360.0 rounds to 360.0
    if w >= 360.0 {
        0.0
    } else {
        w
    }
}

/// Wraps degrees to (-180, 180].
#[inline]
pub fn wrap_pm_180(deg: f64) -> f64 {
    let w = wrap_0_360(deg);
    if w > 180.0 {
        w - 360.0
    } else {
        w
    }
}

/// Wraps radians to [0, 2π).
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    let w = if w < 0.0 { w + TWOPI } else { w };
    if w >= TWOPI {
        0.0
    } else {
        w
    }
}

/// Wraps radians to [-π, π). `-π` is kept and `π` maps to `-π`.
///
/// ```
/// use skywatch_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// assert_eq!(wrap_pm_pi(-PI), -PI);
/// assert_eq!(wrap_pm_pi(PI), -PI);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    let w = if w < -PI { w + TWOPI } else { w };
    // w + TWOPI may round up to exactly π
    if w >= PI {
        w - TWOPI
    } else {
        w
    }
}

/// Normalizes a geographic longitude to [-180°, 180°].
///
/// Values already inside [-180, 180] are returned unchanged, so both `-180`
/// and `180` survive; anything else (for example the [0, 360) convention)
/// is wrapped to (-180, 180].
#[inline]
pub fn normalize_longitude(lon_deg: f64) -> f64 {
    if (-180.0..=180.0).contains(&lon_deg) {
        lon_deg
    } else {
        wrap_pm_180(lon_deg)
    }
}

/// Rejects NaN and ±∞.
pub fn validate_finite(value: f64, operation: &str, name: &str) -> SkyResult<f64> {
    if value.is_finite() {
        return Ok(value);
    }
    Err(SkyError::math_error(
        operation,
        MathErrorKind::NotFinite,
        &format!("{} is not finite ({})", name, value),
    ))
}

/// Rejects non-finite values and values outside `[min, max]`.
pub fn validate_range(
    value: f64,
    min: f64,
    max: f64,
    operation: &str,
    name: &str,
) -> SkyResult<f64> {
    validate_finite(value, operation, name)?;
    if (min..=max).contains(&value) {
        return Ok(value);
    }
    Err(SkyError::math_error(
        operation,
        MathErrorKind::OutOfRange,
        &format!("{} {} outside [{}, {}]", name, value, min, max),
    ))
}
