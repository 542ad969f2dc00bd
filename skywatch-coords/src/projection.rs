//! Equidistant ("fisheye") projection of horizontal coordinates.
//!
//! A view is a center direction plus a circular field of view. Angular
//! distance from the center maps linearly to radius, with the full field
//! spanning the unit square `[-0.5, 0.5]²`:
//!
//! ```text
//! r = distance / fov        (0 at the center, 0.5 at the field edge)
//! ```
//!
//! The bearing from the center (0° toward the zenith, clockwise toward
//! increasing azimuth) sets the direction. Output uses screen orientation:
//! `+x` right, `+y` down, so "up" is `-y`. Pixel scaling belongs to the
//! renderer.
//!
//! A target exactly `fov / 2` from the center is inside the view; anything
//! farther projects to `None`.
//!
//! ```
//! use skywatch_coords::{project_fisheye, HorizontalCoordinate};
//!
//! let center = HorizontalCoordinate::new(45.0, 180.0)?;
//! let above = HorizontalCoordinate::new(55.0, 180.0)?;
//! let p = project_fisheye(&above, &center, 60.0)?.expect("inside the view");
//! assert!(p.x.abs() < 1e-12);
//! assert!((p.y + 10.0 / 60.0).abs() < 1e-12);
//!
//! let behind = HorizontalCoordinate::new(10.0, 0.0)?;
//! assert!(project_fisheye(&behind, &center, 60.0)?.is_none());
//! # Ok::<(), skywatch_coords::CoordError>(())
//! ```

use crate::separation::{angular_separation_deg, bearing_rad};
use crate::{CoordError, CoordResult, HorizontalCoordinate};
use skywatch_core::constants::{DEG_TO_RAD, RAD_TO_DEG};
use skywatch_core::math::safe_asin;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in the view's unit square, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Distance from the view center in field-of-view units.
    pub fn radius(&self) -> f64 {
        libm::hypot(self.x, self.y)
    }
}

fn validate_fov(fov_deg: f64) -> CoordResult<f64> {
    if !fov_deg.is_finite() || fov_deg <= 0.0 || fov_deg > 360.0 {
        return Err(CoordError::invalid_field_of_view(format!(
            "{} must be in (0, 360]",
            fov_deg
        )));
    }
    Ok(fov_deg)
}

/// Projects `target` into the view centered on `view_center`.
///
/// Returns `Ok(None)` when the target lies outside the field of view; that is
/// the normal outcome for most of a catalog and not an error.
///
/// # Errors
///
/// [`CoordError::InvalidFieldOfView`] if `fov_deg` is not in (0, 360].
pub fn project_fisheye(
    target: &HorizontalCoordinate,
    view_center: &HorizontalCoordinate,
    fov_deg: f64,
) -> CoordResult<Option<NormalizedPoint>> {
    let fov_deg = validate_fov(fov_deg)?;

    let distance = angular_separation_deg(target, view_center);
    if distance > fov_deg / 2.0 {
        return Ok(None);
    }
    if distance == 0.0 {
        return Ok(Some(NormalizedPoint::origin()));
    }

    let r = distance / fov_deg;
    let (sin_b, cos_b) = libm::sincos(bearing_rad(view_center, target));
    Ok(Some(NormalizedPoint::new(sin_b * r, -cos_b * r)))
}

/// Inverse of [`project_fisheye`]: the sky direction under a point of the view.
///
/// Returns `Ok(None)` for points outside the field-of-view circle
/// (radius > 0.5).
///
/// # Errors
///
/// [`CoordError::InvalidFieldOfView`] for a bad `fov_deg` and
/// [`CoordError::InvalidCoordinate`] for a non-finite point.
pub fn unproject_fisheye(
    point: &NormalizedPoint,
    view_center: &HorizontalCoordinate,
    fov_deg: f64,
) -> CoordResult<Option<HorizontalCoordinate>> {
    let fov_deg = validate_fov(fov_deg)?;
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(CoordError::invalid_coordinate(format!(
            "view point ({}, {}) is not finite",
            point.x, point.y
        )));
    }

    let r = point.radius();
    if r > 0.5 {
        return Ok(None);
    }
    if r == 0.0 {
        return Ok(Some(*view_center));
    }

    let distance = r * fov_deg * DEG_TO_RAD;
    let bearing = libm::atan2(point.x, -point.y);

    let (sin_alt0, cos_alt0) = libm::sincos(view_center.altitude_deg() * DEG_TO_RAD);
    let (sin_d, cos_d) = libm::sincos(distance);
    let (sin_b, cos_b) = libm::sincos(bearing);

    let sin_alt = sin_alt0 * cos_d + cos_alt0 * sin_d * cos_b;
    let alt = safe_asin(sin_alt);
    let delta_az = libm::atan2(sin_b * sin_d * cos_alt0, cos_d - sin_alt0 * sin_alt);

    Ok(Some(HorizontalCoordinate::from_trusted(
        alt * RAD_TO_DEG,
        view_center.azimuth_deg() + delta_az * RAD_TO_DEG,
    )))
}
