//! 3D Cartesian vectors.
//!
//! Heliocentric and geocentric positions (in AU) are carried as [`Vector3`].
//! Directions on the sky go through [`from_spherical`](Vector3::from_spherical)
//! and [`to_spherical`](Vector3::to_spherical), which use the astronomical
//! convention:
//!
//! - **θ (theta)**: angle from +X toward +Y (right ascension, ecliptic longitude)
//! - **φ (phi)**: elevation from the XY plane (declination, ecliptic latitude)
//!
//! ```
//! use skywatch_core::Vector3;
//!
//! let earth = Vector3::new(-0.18, 0.97, 0.0);
//! let comet = Vector3::new(1.2, 0.3, 0.4);
//! let geocentric = comet - earth;
//! assert!(geocentric.magnitude() > 1.0);
//! ```
use std::fmt;

/// A 3D Cartesian vector.
///
/// Components are public; the frame (ecliptic or equatorial, AU or unit
/// length) is whatever the producing function documents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Returns `true` when every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Creates a unit vector from spherical angles in radians.
    ///
    /// ```
    /// use skywatch_core::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vector3::from_spherical(FRAC_PI_2, 0.0);
    /// assert!((v.y - 1.0).abs() < 1e-15);
    /// ```
    pub fn from_spherical(theta: f64, phi: f64) -> Self {
        let (sin_t, cos_t) = libm::sincos(theta);
        let (sin_p, cos_p) = libm::sincos(phi);
        Self::new(cos_p * cos_t, cos_p * sin_t, sin_p)
    }

    /// Converts to spherical angles `(theta, phi)` in radians.
    ///
    /// `theta` is in (-π, π], `phi` in [-π/2, π/2]. Magnitude is ignored.
    /// The zero vector maps to `(0.0, 0.0)`.
    pub fn to_spherical(&self) -> (f64, f64) {
        let d2 = self.x * self.x + self.y * self.y;

        let theta = if d2 == 0.0 {
            0.0
        } else {
            libm::atan2(self.y, self.x)
        };
        let phi = if self.z == 0.0 {
            0.0
        } else {
            libm::atan2(self.z, libm::sqrt(d2))
        };

        (theta, phi)
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_vector3_magnitude() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(Vector3::zeros().magnitude(), 0.0);
    }

    #[test]
    fn test_vector3_array_conversion() {
        let v = Vector3::from_array([1.0, -2.0, 0.5]);
        assert_eq!(v, Vector3::new(1.0, -2.0, 0.5));
        assert_eq!(v.to_array(), [1.0, -2.0, 0.5]);
    }

    #[test]
    fn test_vector3_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_spherical_round_trip() {
        let v = Vector3::from_spherical(2.0, -0.4) * 3.5;
        let (theta, phi) = v.to_spherical();
        assert!((theta - 2.0).abs() < 1e-14);
        assert!((phi + 0.4).abs() < 1e-14);
    }

    #[test]
    fn test_to_spherical_pole_and_zero() {
        let (theta, phi) = Vector3::new(0.0, 0.0, 2.0).to_spherical();
        assert_eq!(theta, 0.0);
        assert_eq!(phi, FRAC_PI_2);
        assert_eq!(Vector3::zeros().to_spherical(), (0.0, 0.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Vector3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vector3::new(1.0, f64::NAN, 3.0).is_finite());
    }
}
