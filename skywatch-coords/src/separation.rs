//! Great-circle geometry shared by every coordinate type.
//!
//! [`SkyDirection`] exposes a coordinate as a (longitude, latitude) pair on
//! the sphere: RA/Dec for [`EquatorialCoordinate`](crate::EquatorialCoordinate),
//! Az/Alt for [`HorizontalCoordinate`](crate::HorizontalCoordinate). Distance
//! and bearing are written once against that view.

use skywatch_core::angle::wrap_0_360;
use skywatch_core::constants::{DEG_TO_RAD, RAD_TO_DEG};
use skywatch_core::math::angular_separation;

pub trait SkyDirection {
    /// Angle along the reference circle, degrees (RA or azimuth).
    fn longitude_deg(&self) -> f64;

    /// Angle above the reference circle, degrees (Dec or altitude).
    fn latitude_deg(&self) -> f64;
}

/// Great-circle distance in degrees, in [0, 180].
///
/// Exactly symmetric, and exactly zero for identical directions.
pub fn angular_separation_deg<T: SkyDirection + ?Sized>(a: &T, b: &T) -> f64 {
    let delta_lon = (b.longitude_deg() - a.longitude_deg()) * DEG_TO_RAD;
    angular_separation(
        a.latitude_deg() * DEG_TO_RAD,
        b.latitude_deg() * DEG_TO_RAD,
        delta_lon,
    ) * RAD_TO_DEG
}

/// Initial great-circle bearing in radians, in (-π, π], from `from` to `to`.
///
/// Zero points toward increasing latitude; positive angles turn toward
/// increasing longitude.
pub(crate) fn bearing_rad<T: SkyDirection + ?Sized>(from: &T, to: &T) -> f64 {
    let (sin_lat1, cos_lat1) = libm::sincos(from.latitude_deg() * DEG_TO_RAD);
    let (sin_lat2, cos_lat2) = libm::sincos(to.latitude_deg() * DEG_TO_RAD);
    let (sin_dlon, cos_dlon) = libm::sincos((to.longitude_deg() - from.longitude_deg()) * DEG_TO_RAD);

    let y = sin_dlon * cos_lat2;
    let x = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon;
    libm::atan2(y, x)
}

/// Initial great-circle bearing in [0, 360): 0° toward the pole of the frame
/// (north, or the zenith for horizontal coordinates), 90° toward increasing
/// longitude.
///
/// Coincident points return 0.
pub fn bearing_deg<T: SkyDirection + ?Sized>(from: &T, to: &T) -> f64 {
    wrap_0_360(bearing_rad(from, to) * RAD_TO_DEG)
}
