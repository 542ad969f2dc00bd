//! 3x3 rotation matrices.
//!
//! Rotations follow the ERFA "passive" convention: `rotate_z(psi)` rotates the
//! coordinate frame, so a positive 90° rotation about Z takes `[1, 0, 0]` to
//! `[0, -1, 0]`. An active rotation of a vector by `+θ` is therefore a passive
//! rotation by `-θ`.
//!
//! Matrices compose by multiplication and each `rotate_*` call left-multiplies,
//! so the first call acts first on the vector:
//!
//! ```
//! use skywatch_core::RotationMatrix3;
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(0.3); // applied first
//! m.rotate_x(0.1); // applied second
//! let v = m.apply_to_vector([1.0, 0.0, 0.0]);
//! assert!((v[0] * v[0] + v[1] * v[1] + v[2] * v[2] - 1.0).abs() < 1e-15);
//! ```

use super::Vector3;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl RotationMatrix3 {
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    pub const fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Left-multiplies by a passive rotation about X (radians).
    ///
    /// ```text
    /// Rx(phi) = | 1    0         0       |
    ///           | 0    cos(phi)  sin(phi)|
    ///           | 0   -sin(phi)  cos(phi)|
    /// ```
    pub fn rotate_x(&mut self, phi: f64) {
        let (s, c) = libm::sincos(phi);

        for col in 0..3 {
            let r1 = self.elements[1][col];
            let r2 = self.elements[2][col];
            self.elements[1][col] = c * r1 + s * r2;
            self.elements[2][col] = -s * r1 + c * r2;
        }
    }

    /// Left-multiplies by a passive rotation about Z (radians).
    ///
    /// ```text
    /// Rz(psi) = | cos(psi)  sin(psi)  0 |
    ///           |-sin(psi)  cos(psi)  0 |
    ///           |    0         0      1 |
    /// ```
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = libm::sincos(psi);

        for col in 0..3 {
            let r0 = self.elements[0][col];
            let r1 = self.elements[1][col];
            self.elements[0][col] = c * r0 + s * r1;
            self.elements[1][col] = -s * r0 + c * r1;
        }
    }

    /// Returns `self * other` (`other` is applied first).
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        let m = &self.elements;
        [
            m[0][0] * vector[0] + m[0][1] * vector[1] + m[0][2] * vector[2],
            m[1][0] * vector[0] + m[1][1] * vector[1] + m[1][2] * vector[2],
            m[2][0] * vector[0] + m[2][1] * vector[1] + m[2][2] * vector[2],
        ]
    }
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(rhs.to_array()))
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(rhs.to_array()))
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            writeln!(f, "[{:>13.9} {:>13.9} {:>13.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
