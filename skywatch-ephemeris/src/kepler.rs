//! Kepler's equation for elliptical orbits.
//!
//! Solves `E − e·sin E = M` for the eccentric anomaly `E` by Newton–Raphson:
//!
//! ```text
//! E ← E − (E − e·sin E − M) / (1 − e·cos E)
//! ```
//!
//! stopping when the step drops below the tolerance or the iteration cap is
//! reached. Hitting the cap is reported through [`KeplerSolution::converged`],
//! never hidden.
//!
//! # Starting guess
//!
//! `E0 = M` for `e < 0.8`. For more eccentric orbits `E0 = π`, except close to
//! perihelion where Newton from π crawls: there the cubic obtained from
//! `sin E ≈ E − E³/6`,
//!
//! ```text
//! (e/6)·E³ + (1 − e)·E − |M| = 0
//! ```
//!
//! has a single real root that sits just below the true solution, and that
//! root is used whenever it is below 1 rad. With this start every
//! `e ∈ [0, 0.99]` converges to 1e-12 in well under 12 iterations.

use crate::{OrbitError, OrbitResult};
use skywatch_core::angle::wrap_pm_pi;
use skywatch_core::constants::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOLERANCE: f64 = 1e-12;
pub const DEFAULT_MAX_ITERATIONS: u32 = 12;

/// Above this eccentricity the starting guess switches away from `E0 = M`.
const HIGH_ECCENTRICITY: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly, radians. Same branch as the mean anomaly passed in.
    pub eccentric_anomaly: f64,
    pub iterations: u32,
    /// `|E − e·sin E − M|` at the returned `E`.
    pub residual: f64,
    pub converged: bool,
}

/// Solver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeplerSolver {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    pub fn new(tolerance: f64, max_iterations: u32) -> OrbitResult<Self> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(OrbitError::invalid_elements(format!(
                "solver tolerance {} must be positive",
                tolerance
            )));
        }
        if max_iterations == 0 {
            return Err(OrbitError::invalid_elements(
                "solver needs at least one iteration",
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }

    pub fn solve(&self, mean_anomaly: f64, eccentricity: f64) -> OrbitResult<KeplerSolution> {
        solve_kepler_equation(
            mean_anomaly,
            eccentricity,
            self.tolerance,
            self.max_iterations,
        )
    }
}

/// Root of `x³ + p·x + q = 0` for `p ≥ 0` (single real root, Cardano).
fn depressed_cubic_root(p: f64, q: f64) -> f64 {
    let half_q = q / 2.0;
    let disc = libm::sqrt(half_q * half_q + p * p * p / 27.0);
    libm::cbrt(-half_q + disc) + libm::cbrt(-half_q - disc)
}

fn starting_guess(mean_anomaly: f64, eccentricity: f64) -> f64 {
    if eccentricity < HIGH_ECCENTRICITY {
        return mean_anomaly;
    }

    let m = mean_anomaly.abs();
    let p = 6.0 * (1.0 - eccentricity) / eccentricity;
    let q = -6.0 * m / eccentricity;
    let root = depressed_cubic_root(p, q);

    let guess = if root < 1.0 { root } else { PI };
    guess.copysign(mean_anomaly)
}

/// Solves Kepler's equation for an elliptical orbit.
///
/// `mean_anomaly` may take any finite value; it is reduced to [-π, π) for the
/// iteration and the returned eccentric anomaly is shifted back by the same
/// whole number of turns.
///
/// # Errors
///
/// [`OrbitError::UnsupportedEccentricity`] for `e ≥ 1` and
/// [`OrbitError::InvalidElements`] for non-finite input, negative
/// eccentricity or an unusable tolerance/iteration cap. Non-convergence is
/// not an error here; check [`KeplerSolution::converged`].
pub fn solve_kepler_equation(
    mean_anomaly: f64,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: u32,
) -> OrbitResult<KeplerSolution> {
    if !mean_anomaly.is_finite() {
        return Err(OrbitError::invalid_elements(format!(
            "mean anomaly {} is not finite",
            mean_anomaly
        )));
    }
    if eccentricity >= 1.0 {
        return Err(OrbitError::UnsupportedEccentricity { eccentricity });
    }
    if !(0.0..1.0).contains(&eccentricity) {
        return Err(OrbitError::invalid_elements(format!(
            "eccentricity {} outside [0, 1)",
            eccentricity
        )));
    }
    if !tolerance.is_finite() || tolerance <= 0.0 || max_iterations == 0 {
        return Err(OrbitError::invalid_elements(format!(
            "solver settings tolerance={} max_iterations={}",
            tolerance, max_iterations
        )));
    }

    let m = wrap_pm_pi(mean_anomaly);
    let turns = mean_anomaly - m;

    let mut e_anom = starting_guess(m, eccentricity);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        iterations += 1;
        let (sin_e, cos_e) = libm::sincos(e_anom);
        let delta = (e_anom - eccentricity * sin_e - m) / (1.0 - eccentricity * cos_e);
        e_anom -= delta;
        if delta.abs() < tolerance {
            converged = true;
            break;
        }
    }

    let residual = (e_anom - eccentricity * libm::sin(e_anom) - m).abs();

    Ok(KeplerSolution {
        eccentric_anomaly: e_anom + turns,
        iterations,
        residual,
        converged,
    })
}
