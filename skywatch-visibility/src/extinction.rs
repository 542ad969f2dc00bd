//! Airmass and atmospheric extinction.

use libm::{pow, sin};
use skywatch_core::constants::DEG_TO_RAD;

/// Altitude at or below which [`airmass`] reports an infinite path.
pub const AIRMASS_HORIZON_LIMIT_DEG: f64 = -5.0;

/// Extinction reported for targets at or below the horizon, magnitudes.
pub const BELOW_HORIZON_EXTINCTION_MAG: f64 = 99.0;

/// Relative optical path length, Kasten & Young (1989):
///
/// ```text
/// X = 1 / (sin h + 0.50572 · (h + 6.07995°)^-1.6364)
/// ```
///
/// About 1 at the zenith and 38 at the horizon. `+∞` for `h ≤ -5°`.
pub fn airmass(altitude_deg: f64) -> f64 {
    if altitude_deg <= AIRMASS_HORIZON_LIMIT_DEG {
        return f64::INFINITY;
    }
    1.0 / (sin(altitude_deg * DEG_TO_RAD) + 0.50572 * pow(altitude_deg + 6.07995, -1.6364))
}

/// Dimming relative to the zenith, `k · max(0, X − 1)` magnitudes.
///
/// Returns [`BELOW_HORIZON_EXTINCTION_MAG`] for `altitude_deg ≤ 0` so that
/// nothing below the horizon passes a magnitude test.
pub fn extinction_delta_magnitude(altitude_deg: f64, k_mag_per_airmass: f64) -> f64 {
    if altitude_deg <= 0.0 {
        return BELOW_HORIZON_EXTINCTION_MAG;
    }
    k_mag_per_airmass * (airmass(altitude_deg) - 1.0).max(0.0)
}
