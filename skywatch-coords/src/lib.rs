//! Sky coordinates for a ground observer.
//!
//! Strongly typed equatorial and horizontal positions, the transforms between
//! them for a [`GeographicObserver`] at an [`Instant`], great-circle distance
//! and bearing, and an equidistant fisheye projection into a renderer-agnostic
//! unit square.
//!
//! ```
//! use skywatch_coords::{equatorial_to_horizontal, EquatorialCoordinate};
//! use skywatch_core::GeographicObserver;
//! use skywatch_time::Instant;
//!
//! let sirius = EquatorialCoordinate::new(101.287_155, -16.716_116)?;
//! let observer = GeographicObserver::new(34.05, -118.25, 90.0)?;
//! let instant = Instant::from_calendar(2024, 2, 1, 5, 0, 0.0)?;
//!
//! let hor = equatorial_to_horizontal(&sirius, &observer, &instant);
//! assert!((-90.0..=90.0).contains(&hor.altitude_deg()));
//! assert!((0.0..360.0).contains(&hor.azimuth_deg()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! All functions are pure. Observer and instant are explicit arguments; nothing
//! here reads the clock or keeps a current location.

pub mod errors;
pub mod frames;
pub mod projection;
pub mod separation;
pub mod transforms;

pub use errors::{CoordError, CoordResult};
pub use frames::{EquatorialCoordinate, HorizontalCoordinate};
pub use projection::{project_fisheye, unproject_fisheye, NormalizedPoint};
pub use separation::{angular_separation_deg, bearing_deg, SkyDirection};
pub use transforms::{
    equatorial_to_horizontal, equatorial_to_horizontal_batch, hour_angle_deg,
    horizontal_to_equatorial,
};

pub use skywatch_core::GeographicObserver;
pub use skywatch_time::Instant;
