//! Heliocentric positions of comets on elliptical orbits.
//!
//! For an instant `t`:
//!
//! 1. `a = q / (1 − e)`, `n = k·√(1/a³)`
//! 2. `M = n·(t − T)` reduced to [-π, π]
//! 3. Solve Kepler's equation for `E`
//! 4. `ν = atan2(√(1−e²)·sin E, cos E − e)`, `r = a·(1 − e·cos E)`
//! 5. Rotate `(r·cos ν, r·sin ν, 0)` by `Rz(Ω)·Rx(i)·Rz(ω)`
//!
//! giving ecliptic J2000 coordinates in AU. Only `(elements, instant)` enter;
//! there is no observer and no clock.

use crate::kepler::KeplerSolver;
use crate::{OrbitError, OrbitResult, OrbitalElements};
use skywatch_core::angle::wrap_pm_pi;
use skywatch_core::constants::DEG_TO_RAD;
use skywatch_core::{RotationMatrix3, Vector3};
use skywatch_time::Instant;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Heliocentric ecliptic J2000 position, AU.
    pub position: Vector3,
    /// Distance from the Sun, AU.
    pub radius_au: f64,
    pub true_anomaly_rad: f64,
    pub eccentric_anomaly_rad: f64,
    pub mean_anomaly_rad: f64,
}

/// Perifocal → ecliptic rotation `Rz(Ω)·Rx(i)·Rz(ω)`.
///
/// `RotationMatrix3` rotations are passive and left-multiplying, so the
/// active rotations are built from negated angles in application order.
pub fn perifocal_to_ecliptic(elements: &OrbitalElements) -> RotationMatrix3 {
    let mut m = RotationMatrix3::identity();
    m.rotate_z(-elements.arg_perihelion_deg * DEG_TO_RAD);
    m.rotate_x(-elements.inclination_deg * DEG_TO_RAD);
    m.rotate_z(-elements.asc_node_deg * DEG_TO_RAD);
    m
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitPropagator {
    pub solver: KeplerSolver,
}

impl OrbitPropagator {
    pub fn new(solver: KeplerSolver) -> Self {
        Self { solver }
    }

    /// Full orbital state at `instant`.
    ///
    /// # Errors
    ///
    /// Element validation failures (see [`OrbitalElements::validate`]) and
    /// [`OrbitError::NonConvergence`] if Kepler's equation does not converge
    /// within the solver's iteration cap.
    pub fn state_at(&self, elements: &OrbitalElements, instant: &Instant) -> OrbitResult<OrbitState> {
        elements.validate()?;

        let e = elements.eccentricity;
        let a = elements.semi_major_axis_au();
        let dt_days = instant.days_since(&elements.perihelion_time);
        let mean_anomaly = wrap_pm_pi(elements.mean_motion_rad_per_day() * dt_days);

        let solution = self.solver.solve(mean_anomaly, e)?;
        if !solution.converged {
            tracing::warn!(
                eccentricity = e,
                mean_anomaly,
                iterations = solution.iterations,
                residual = solution.residual,
                "Kepler solver did not converge"
            );
            return Err(OrbitError::NonConvergence {
                iterations: solution.iterations,
                residual: solution.residual,
            });
        }

        let big_e = solution.eccentric_anomaly;
        let (sin_e, cos_e) = libm::sincos(big_e);
        let true_anomaly = libm::atan2(libm::sqrt(1.0 - e * e) * sin_e, cos_e - e);
        let radius = a * (1.0 - e * cos_e);

        let (sin_nu, cos_nu) = libm::sincos(true_anomaly);
        let perifocal = Vector3::new(radius * cos_nu, radius * sin_nu, 0.0);
        let position = perifocal_to_ecliptic(elements) * perifocal;

        Ok(OrbitState {
            position,
            radius_au: radius,
            true_anomaly_rad: true_anomaly,
            eccentric_anomaly_rad: big_e,
            mean_anomaly_rad: mean_anomaly,
        })
    }

    pub fn position_at(&self, elements: &OrbitalElements, instant: &Instant) -> OrbitResult<Vector3> {
        Ok(self.state_at(elements, instant)?.position)
    }
}

/// Heliocentric ecliptic J2000 position in AU with the default solver
/// (tolerance 1e-12, 12 iterations).
///
/// # Errors
///
/// [`OrbitError::UnsupportedEccentricity`] for `e ≥ 1`,
/// [`OrbitError::InvalidElements`] for `q ≤ 0` or other malformed elements,
/// [`OrbitError::NonConvergence`] if the solver gives up.
pub fn heliocentric_ecliptic_position(
    elements: &OrbitalElements,
    instant: &Instant,
) -> OrbitResult<Vector3> {
    OrbitPropagator::default().position_at(elements, instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use skywatch_core::constants::TWOPI;

    fn perihelion() -> Instant {
        Instant::from_calendar(2024, 3, 15, 6, 0, 0.0).unwrap()
    }

    fn comet(q: f64, e: f64) -> OrbitalElements {
        OrbitalElements::new(q, e, 72.5, 130.0, 11.3, perihelion()).unwrap()
    }

    #[test]
    fn test_radius_equals_q_at_perihelion() {
        let el = comet(1.0, 0.5);
        let pos = heliocentric_ecliptic_position(&el, &perihelion()).unwrap();
        assert_abs_diff_eq!(pos.magnitude(), 1.0, epsilon = 1e-6);

        let state = OrbitPropagator::default().state_at(&el, &perihelion()).unwrap();
        assert_eq!(state.true_anomaly_rad, 0.0);
        assert_abs_diff_eq!(state.radius_au, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_aphelion_after_half_period() {
        let el = comet(0.8, 0.6);
        let half = perihelion().add_days(el.period_days() / 2.0).unwrap();
        let state = OrbitPropagator::default().state_at(&el, &half).unwrap();
        assert_abs_diff_eq!(state.radius_au, el.aphelion_distance_au(), epsilon = 1e-6);
        assert_abs_diff_eq!(state.true_anomaly_rad.abs(), std::f64::consts::PI, epsilon = 1e-4);
    }

    #[test]
    fn test_position_matches_closed_form() {
        let el = comet(0.586, 0.967);
        let t = perihelion().add_days(-43.25).unwrap();
        let state = OrbitPropagator::default().state_at(&el, &t).unwrap();

        let w = el.arg_perihelion_deg.to_radians();
        let node = el.asc_node_deg.to_radians();
        let inc = el.inclination_deg.to_radians();
        let u = w + state.true_anomaly_rad;
        let r = state.radius_au;
        let expected = Vector3::new(
            r * (node.cos() * u.cos() - node.sin() * u.sin() * inc.cos()),
            r * (node.sin() * u.cos() + node.cos() * u.sin() * inc.cos()),
            r * u.sin() * inc.sin(),
        );
        assert!((state.position - expected).magnitude() < 1e-12);
        assert_abs_diff_eq!(state.position.magnitude(), r, epsilon = 1e-12);
    }

    #[test]
    fn test_motion_is_prograde_for_low_inclination() {
        let el = OrbitalElements::new(1.5, 0.2, 0.0, 0.0, 0.0, perihelion()).unwrap();
        let later = perihelion().add_days(10.0).unwrap();
        let p = heliocentric_ecliptic_position(&el, &later).unwrap();
        assert!(p.y > 0.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_periodic() {
        let el = comet(2.0, 0.3);
        let t = perihelion().add_days(123.0).unwrap();
        let period_ms = (TWOPI / el.mean_motion_rad_per_day() * 86_400_000.0).round() as i64;
        let p1 = heliocentric_ecliptic_position(&el, &t).unwrap();
        let p2 = heliocentric_ecliptic_position(&el, &t.add_millis(period_ms)).unwrap();
        assert!((p1 - p2).magnitude() < 1e-8);
    }

    #[test]
    fn test_rejects_unsupported_orbits() {
        let mut el = comet(1.0, 0.5);
        el.eccentricity = 1.0;
        assert!(matches!(
            heliocentric_ecliptic_position(&el, &perihelion()),
            Err(OrbitError::UnsupportedEccentricity { .. })
        ));

        let mut el = comet(1.0, 0.5);
        el.perihelion_distance_au = 0.0;
        assert!(matches!(
            heliocentric_ecliptic_position(&el, &perihelion()),
            Err(OrbitError::InvalidElements { .. })
        ));
    }

    #[test]
    fn test_extreme_instants_do_not_panic() {
        let mut el = comet(1.0, 0.5);
        el.perihelion_time = Instant::from_unix_millis(i64::MIN);
        assert!(matches!(
            heliocentric_ecliptic_position(&el, &perihelion()),
            Err(OrbitError::InvalidElements { .. })
        ));

        let el = comet(1.0, 0.5);
        for t in [Instant::from_unix_millis(i64::MIN), Instant::from_unix_millis(i64::MAX)] {
            let pos = heliocentric_ecliptic_position(&el, &t).unwrap();
            assert!(pos.magnitude() >= el.perihelion_distance_au - 1e-9);
            assert!(pos.magnitude() <= el.aphelion_distance_au() + 1e-9);
        }
    }

    #[test]
    fn test_non_convergence_surfaces_as_error() {
        let el = comet(0.5, 0.99);
        let stingy = OrbitPropagator::new(KeplerSolver {
            tolerance: 1e-15,
            max_iterations: 1,
        });
        let t = perihelion().add_days(30.0).unwrap();
        assert!(matches!(
            stingy.state_at(&el, &t),
            Err(OrbitError::NonConvergence { iterations: 1, .. })
        ));
    }
}
