//! Rotation between the J2000 ecliptic and equatorial frames.
//!
//! A fixed rotation about the X axis (the equinox direction) by the J2000
//! mean obliquity, 23.439291111°. No precession, nutation or frame bias.

use skywatch_core::{RotationMatrix3, Vector3};

const COS_OBLIQUITY: f64 = 0.917_482_062_069_953_2;
const SIN_OBLIQUITY: f64 = 0.397_777_155_930_134_5;

/// Ecliptic J2000 → equatorial J2000.
pub const ECLIPTIC_TO_EQUATORIAL: RotationMatrix3 = RotationMatrix3::from_array([
    [1.0, 0.0, 0.0],
    [0.0, COS_OBLIQUITY, -SIN_OBLIQUITY],
    [0.0, SIN_OBLIQUITY, COS_OBLIQUITY],
]);

/// Equatorial J2000 → ecliptic J2000.
pub const EQUATORIAL_TO_ECLIPTIC: RotationMatrix3 = RotationMatrix3::from_array([
    [1.0, 0.0, 0.0],
    [0.0, COS_OBLIQUITY, SIN_OBLIQUITY],
    [0.0, -SIN_OBLIQUITY, COS_OBLIQUITY],
]);

pub fn ecliptic_to_equatorial_j2000(v: &Vector3) -> Vector3 {
    ECLIPTIC_TO_EQUATORIAL * *v
}

pub fn equatorial_to_ecliptic_j2000(v: &Vector3) -> Vector3 {
    EQUATORIAL_TO_ECLIPTIC * *v
}
