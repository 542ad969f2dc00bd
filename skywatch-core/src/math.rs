//! Domain-safe numeric primitives.
//!
//! Every inverse-trig call in the workspace goes through [`safe_asin`] or
//! [`safe_acos`], which share [`clamp_unit`]. Products of sines and cosines
//! regularly land a few ULP outside [-1, 1]; feeding those to `asin`/`acos`
//! yields NaN. NaN input is not a rounding artifact and is passed through
//! untouched so callers can reject it.

/// Cosine threshold above which two directions count as near-coincident and
/// [`angular_separation`] switches from the law of cosines to the haversine form.
const NEAR_COINCIDENT_COS: f64 = 0.999_999;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Clamps `x` to [-1, 1]. NaN stays NaN.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}

#[inline]
pub fn safe_asin(x: f64) -> f64 {
    libm::asin(clamp_unit(x))
}

#[inline]
pub fn safe_acos(x: f64) -> f64 {
    libm::acos(clamp_unit(x))
}

/// Great-circle angle in radians between two points given by latitude and
/// longitude difference (all radians).
///
/// Uses the spherical law of cosines with the argument clamped before `acos`.
/// For nearly coincident points `acos` loses precision, so the haversine form
/// takes over there; both forms are symmetric in their arguments, and identical
/// points give exactly zero.
#[inline]
pub fn angular_separation(lat1: f64, lat2: f64, delta_lon: f64) -> f64 {
    let (sin_lat1, cos_lat1) = libm::sincos(lat1);
    let (sin_lat2, cos_lat2) = libm::sincos(lat2);

    let cos_sep = sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * libm::cos(delta_lon);
    if cos_sep < NEAR_COINCIDENT_COS {
        return safe_acos(cos_sep);
    }

    let half_dlat = libm::sin((lat2 - lat1) / 2.0);
    let half_dlon = libm::sin(delta_lon / 2.0);
    let h = half_dlat * half_dlat + cos_lat1 * cos_lat2 * half_dlon * half_dlon;
    2.0 * safe_asin(libm::sqrt(h))
}
