//! Comet orbits and geocentric positions.
//!
//! - [`kepler`]: Newton–Raphson solution of Kepler's equation with an
//!   explicit convergence report
//! - [`elements`]: perihelion-form [`OrbitalElements`] and
//!   [`CometMagnitude`]
//! - [`propagator`]: heliocentric ecliptic J2000 positions from elements
//! - [`ecliptic`]: fixed J2000 ecliptic ↔ equatorial rotation
//! - [`resolver`]: combines an external Earth ephemeris with targets to give
//!   observer-centered sky coordinates, with optional light-time correction
//!
//! ```
//! use skywatch_ephemeris::{heliocentric_ecliptic_position, OrbitalElements};
//! use skywatch_time::Instant;
//!
//! let perihelion = Instant::from_calendar(2024, 3, 15, 0, 0, 0.0)?;
//! let elements = OrbitalElements::new(1.0, 0.5, 72.5, 130.0, 11.3, perihelion)?;
//!
//! let r = heliocentric_ecliptic_position(&elements, &perihelion)?;
//! assert!((r.magnitude() - 1.0).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Only elliptical orbits are modeled. Parabolic and hyperbolic elements are
//! rejected with [`OrbitError::UnsupportedEccentricity`] instead of being
//! approximated.

pub mod ecliptic;
pub mod elements;
pub mod errors;
pub mod kepler;
pub mod propagator;
pub mod resolver;

pub use ecliptic::{ecliptic_to_equatorial_j2000, equatorial_to_ecliptic_j2000};
pub use elements::{CometMagnitude, OrbitalElements};
pub use errors::{OrbitError, OrbitResult};
pub use kepler::{solve_kepler_equation, KeplerSolution, KeplerSolver};
pub use propagator::{heliocentric_ecliptic_position, OrbitPropagator, OrbitState};
pub use resolver::{
    resolve_satellite, Body, EphemerisProvider, GeocentricResolver, LightTimeCorrection,
    ResolvedPosition, SatelliteLook, SatellitePropagator, SiteVectorProvider, Tle,
};
