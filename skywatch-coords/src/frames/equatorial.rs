use crate::{CoordError, CoordResult, SkyDirection};
use skywatch_core::angle::wrap_0_360;
use skywatch_core::constants::{DEG_TO_RAD, RAD_TO_DEG};
use skywatch_core::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right ascension and declination in degrees, J2000 frame.
///
/// No precession is applied anywhere in this crate; catalog positions are
/// used as given.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    ra_deg: f64,
    dec_deg: f64,
}

impl EquatorialCoordinate {
    /// RA is wrapped to [0, 360); declination must lie in [-90, 90].
    pub fn new(ra_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        if !ra_deg.is_finite() {
            return Err(CoordError::invalid_coordinate(format!(
                "right ascension {} is not finite",
                ra_deg
            )));
        }
        if !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
            return Err(CoordError::invalid_coordinate(format!(
                "declination {} outside [-90, 90]",
                dec_deg
            )));
        }

        Ok(Self {
            ra_deg: wrap_0_360(ra_deg),
            dec_deg,
        })
    }

    /// Skips validation; callers guarantee finite values.
    pub(crate) fn from_trusted(ra_deg: f64, dec_deg: f64) -> Self {
        Self {
            ra_deg: wrap_0_360(ra_deg),
            dec_deg: dec_deg.clamp(-90.0, 90.0),
        }
    }

    pub fn from_hours(ra_hours: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(ra_hours * 15.0, dec_deg)
    }

    /// Builds from the direction of a Cartesian vector (magnitude ignored).
    pub fn from_vector(v: &Vector3) -> CoordResult<Self> {
        if !v.is_finite() || v.magnitude_squared() == 0.0 {
            return Err(CoordError::invalid_coordinate(format!(
                "vector {} has no direction",
                v
            )));
        }
        let (theta, phi) = v.to_spherical();
        Self::new(theta * RAD_TO_DEG, phi * RAD_TO_DEG)
    }

    #[inline]
    pub fn ra_deg(&self) -> f64 {
        self.ra_deg
    }

    #[inline]
    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_deg / 15.0
    }

    pub fn to_unit_vector(&self) -> Vector3 {
        Vector3::from_spherical(self.ra_deg * DEG_TO_RAD, self.dec_deg * DEG_TO_RAD)
    }
}

impl SkyDirection for EquatorialCoordinate {
    fn longitude_deg(&self) -> f64 {
        self.ra_deg
    }

    fn latitude_deg(&self) -> f64 {
        self.dec_deg
    }
}

impl std::fmt::Display for EquatorialCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RA {:.6}° Dec {:+.6}°", self.ra_deg, self.dec_deg)
    }
}
