//! Osculating elements of a comet on an elliptical orbit.
//!
//! Elements follow the perihelion-based form used in comet catalogs (MPC
//! `CometEls.txt` and similar): perihelion distance `q`, eccentricity `e`,
//! the three orientation angles referred to the J2000 ecliptic and equinox,
//! and the time of perihelion passage.

use crate::{OrbitError, OrbitResult};
use skywatch_core::constants::GAUSSIAN_GRAVITATIONAL_CONSTANT;
use skywatch_time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Total-magnitude parameters for a comet.
///
/// ```text
/// m = H + 5·log10(Δ) + 2.5·n·log10(r)
/// ```
///
/// with `Δ` the distance from Earth and `r` the distance from the Sun, both
/// in AU. Catalogs often quote `K = 2.5·n` instead of `n`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CometMagnitude {
    /// `H`: magnitude at 1 AU from both Sun and Earth.
    pub absolute_magnitude: f64,
    /// `n`: how steeply brightness grows toward the Sun. 4 is typical.
    pub activity_index: f64,
}

impl CometMagnitude {
    pub fn new(absolute_magnitude: f64, activity_index: f64) -> OrbitResult<Self> {
        if !absolute_magnitude.is_finite() || !activity_index.is_finite() {
            return Err(OrbitError::invalid_elements(format!(
                "magnitude parameters H={} n={} must be finite",
                absolute_magnitude, activity_index
            )));
        }
        Ok(Self {
            absolute_magnitude,
            activity_index,
        })
    }

    /// From catalog `G`/`K` (`K = 2.5·n`).
    pub fn from_g_k(g: f64, k: f64) -> OrbitResult<Self> {
        Self::new(g, k / 2.5)
    }

    /// Apparent total magnitude at heliocentric distance `r_au` and
    /// geocentric distance `delta_au`.
    pub fn apparent_magnitude(&self, r_au: f64, delta_au: f64) -> OrbitResult<f64> {
        if !(r_au.is_finite() && r_au > 0.0 && delta_au.is_finite() && delta_au > 0.0) {
            return Err(OrbitError::invalid_elements(format!(
                "distances r={} delta={} must be positive",
                r_au, delta_au
            )));
        }
        Ok(self.absolute_magnitude
            + 5.0 * libm::log10(delta_au)
            + 2.5 * self.activity_index * libm::log10(r_au))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalElements {
    /// `q`, AU.
    pub perihelion_distance_au: f64,
    /// `e`, 0 ≤ e < 1.
    pub eccentricity: f64,
    /// `ω`, degrees.
    pub arg_perihelion_deg: f64,
    /// `Ω`, degrees.
    pub asc_node_deg: f64,
    /// `i`, degrees.
    pub inclination_deg: f64,
    pub perihelion_time: Instant,
    pub magnitude: Option<CometMagnitude>,
}

impl OrbitalElements {
    pub fn new(
        perihelion_distance_au: f64,
        eccentricity: f64,
        arg_perihelion_deg: f64,
        asc_node_deg: f64,
        inclination_deg: f64,
        perihelion_time: Instant,
    ) -> OrbitResult<Self> {
        let elements = Self {
            perihelion_distance_au,
            eccentricity,
            arg_perihelion_deg,
            asc_node_deg,
            inclination_deg,
            perihelion_time,
            magnitude: None,
        };
        elements.validate()?;
        Ok(elements)
    }

    pub fn with_magnitude(mut self, magnitude: CometMagnitude) -> Self {
        self.magnitude = Some(magnitude);
        self
    }

    /// Checks the invariants every propagation relies on.
    ///
    /// Fields are public so catalog records can be built directly; this is
    /// re-run before each propagation.
    ///
    /// # Errors
    ///
    /// [`OrbitError::UnsupportedEccentricity`] for `e ≥ 1`;
    /// [`OrbitError::InvalidElements`] for `q ≤ 0`, negative or non-finite
    /// eccentricity, non-finite angles, or inclination outside [0, 180].
    pub fn validate(&self) -> OrbitResult<()> {
        let e = self.eccentricity;
        if e >= 1.0 {
            return Err(OrbitError::UnsupportedEccentricity { eccentricity: e });
        }
        if !(0.0..1.0).contains(&e) {
            return Err(OrbitError::invalid_elements(format!(
                "eccentricity {} outside [0, 1)",
                e
            )));
        }

        let q = self.perihelion_distance_au;
        if !q.is_finite() || q <= 0.0 {
            return Err(OrbitError::invalid_elements(format!(
                "perihelion distance {} AU must be positive",
                q
            )));
        }

        for (name, value) in [
            ("argument of perihelion", self.arg_perihelion_deg),
            ("ascending node", self.asc_node_deg),
        ] {
            if !value.is_finite() {
                return Err(OrbitError::invalid_elements(format!(
                    "{} {} is not finite",
                    name, value
                )));
            }
        }
        if !(0.0..=180.0).contains(&self.inclination_deg) {
            return Err(OrbitError::invalid_elements(format!(
                "inclination {} outside [0, 180]",
                self.inclination_deg
            )));
        }

        if !self.perihelion_time.is_within_calendar_range() {
            return Err(OrbitError::invalid_elements(format!(
                "perihelion time {} ms since the Unix epoch is outside years 1-9999",
                self.perihelion_time.unix_millis()
            )));
        }

        if let Some(mag) = &self.magnitude {
            if !mag.absolute_magnitude.is_finite() || !mag.activity_index.is_finite() {
                return Err(OrbitError::invalid_elements("magnitude parameters are not finite"));
            }
        }
        Ok(())
    }

    /// Semi-major axis `a = q / (1 − e)`, AU.
    pub fn semi_major_axis_au(&self) -> f64 {
        self.perihelion_distance_au / (1.0 - self.eccentricity)
    }

    pub fn aphelion_distance_au(&self) -> f64 {
        self.semi_major_axis_au() * (1.0 + self.eccentricity)
    }

    /// Mean motion `n = k / a^1.5`, radians per day.
    pub fn mean_motion_rad_per_day(&self) -> f64 {
        let a = self.semi_major_axis_au();
        GAUSSIAN_GRAVITATIONAL_CONSTANT * libm::sqrt(1.0 / (a * a * a))
    }

    pub fn period_days(&self) -> f64 {
        skywatch_core::constants::TWOPI / self.mean_motion_rad_per_day()
    }
}
