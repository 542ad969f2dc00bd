//! Observer position on Earth.
//!
//! [`GeographicObserver`] is an immutable value: callers build one per query
//! and pass it by reference into every transform. There is no process-wide
//! "current location".
//!
//! # Coordinate conventions
//!
//! - **Latitude**: degrees, north positive, [-90, 90]
//! - **Longitude**: degrees, east positive. Accepted in [-180, 180] or the
//!   [0, 360) convention; always stored in [-180, 180].
//! - **Elevation**: meters above the reference ellipsoid
//!
//! ```
//! use skywatch_core::GeographicObserver;
//!
//! // Mauna Kea summit
//! let obs = GeographicObserver::new(19.8207, -155.4681, 4205.0)?;
//! assert!((obs.latitude_deg() - 19.8207).abs() < 1e-12);
//!
//! // 204.5319° east is the same meridian
//! let same = GeographicObserver::new(19.8207, 204.5319, 4205.0)?;
//! assert!((same.longitude_deg() - obs.longitude_deg()).abs() < 1e-9);
//! # Ok::<(), skywatch_core::SkyError>(())
//! ```

use crate::angle::{normalize_longitude, validate_finite, validate_range};
use crate::constants::DEG_TO_RAD;
use crate::errors::{MathErrorKind, SkyError, SkyResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Elevation bounds in meters: Dead Sea shore to well above aircraft altitude.
const MIN_ELEVATION_M: f64 = -500.0;
const MAX_ELEVATION_M: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GeographicObserver {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
}

impl GeographicObserver {
    /// Creates an observer, rejecting non-finite or out-of-range coordinates.
    ///
    /// # Errors
    ///
    /// [`MathErrorKind::NotFinite`] for NaN/∞ and [`MathErrorKind::OutOfRange`]
    /// for latitude outside [-90, 90], longitude outside [-180, 360) or
    /// elevation outside [-500, 100000] meters.
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> SkyResult<Self> {
        const OP: &str = "GeographicObserver::new";
        validate_range(latitude_deg, -90.0, 90.0, OP, "latitude")?;
        validate_finite(longitude_deg, OP, "longitude")?;
        if !(-180.0..360.0).contains(&longitude_deg) {
            return Err(SkyError::math_error(
                OP,
                MathErrorKind::OutOfRange,
                &format!("longitude {} outside [-180, 360)", longitude_deg),
            ));
        }
        validate_range(elevation_m, MIN_ELEVATION_M, MAX_ELEVATION_M, OP, "elevation")?;

        Ok(Self {
            latitude_deg,
            longitude_deg: normalize_longitude(longitude_deg),
            elevation_m,
        })
    }

    /// Greenwich, sea level.
    pub fn greenwich() -> Self {
        Self {
            latitude_deg: 51.4769,
            longitude_deg: 0.0,
            elevation_m: 0.0,
        }
    }

    #[inline]
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    #[inline]
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    #[inline]
    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    #[inline]
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg * DEG_TO_RAD
    }

    #[inline]
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg * DEG_TO_RAD
    }

    /// True within `tolerance_deg` of either geographic pole, where azimuth
    /// and hour angle stop being defined.
    pub fn is_near_pole(&self, tolerance_deg: f64) -> bool {
        90.0 - self.latitude_deg.abs() <= tolerance_deg
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawObserver {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GeographicObserver {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = RawObserver::deserialize(d)?;
        Self::new(raw.latitude_deg, raw.longitude_deg, raw.elevation_m)
            .map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for GeographicObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Observer({:.4}°, {:.4}°, {:.0} m)",
            self.latitude_deg, self.longitude_deg, self.elevation_m
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_observer() {
        let obs = GeographicObserver::new(-29.2563, -70.7380, 2400.0).unwrap();
        assert_eq!(obs.latitude_deg(), -29.2563);
        assert_eq!(obs.longitude_deg(), -70.7380);
        assert_eq!(obs.elevation_m(), 2400.0);
    }

    #[test]
    fn test_longitude_east_convention_normalized() {
        let obs = GeographicObserver::new(10.0, 270.0, 0.0).unwrap();
        assert_eq!(obs.longitude_deg(), -90.0);
        let edge = GeographicObserver::new(10.0, 180.0, 0.0).unwrap();
        assert_eq!(edge.longitude_deg(), 180.0);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = GeographicObserver::new(90.5, 0.0, 0.0).unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::OutOfRange));
        assert!(GeographicObserver::new(0.0, 360.0, 0.0).is_err());
        assert!(GeographicObserver::new(0.0, -180.5, 0.0).is_err());
        assert!(GeographicObserver::new(0.0, 0.0, 2.0e5).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = GeographicObserver::new(f64::NAN, 0.0, 0.0).unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::NotFinite));
        let err = GeographicObserver::new(0.0, f64::INFINITY, 0.0).unwrap_err();
        assert_eq!(err.math_kind(), Some(MathErrorKind::NotFinite));
    }

    #[test]
    fn test_near_pole() {
        assert!(GeographicObserver::new(89.9999, 0.0, 0.0)
            .unwrap()
            .is_near_pole(1e-3));
        assert!(!GeographicObserver::greenwich().is_near_pole(1.0));
    }

    #[test]
    fn test_radians() {
        let obs = GeographicObserver::new(45.0, -90.0, 0.0).unwrap();
        assert!((obs.latitude_rad() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
        assert!((obs.longitude_rad() + std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let obs = GeographicObserver::new(19.8283, -155.4783, 4145.0).unwrap();
        let json = serde_json::to_string(&obs).unwrap();
        let back: GeographicObserver = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let bad = r#"{"latitude_deg":500.0,"longitude_deg":0.0,"elevation_m":0.0}"#;
        let err = serde_json::from_str::<GeographicObserver>(bad).unwrap_err();
        assert!(err.to_string().contains("latitude"));

        let east = r#"{"latitude_deg":10.0,"longitude_deg":270.0,"elevation_m":0.0}"#;
        let obs: GeographicObserver = serde_json::from_str(east).unwrap();
        assert_eq!(obs.longitude_deg(), -90.0);
    }
}
