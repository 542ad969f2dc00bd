//! Naked-eye visibility scoring.
//!
//! Pure functions that decide whether a star or deep-sky object can be seen
//! under a given sky, and how strongly a renderer should draw it. Inputs are
//! the Sun and Moon altitudes, the Moon's illuminated fraction, the site's
//! Bortle class and the target altitude; the caller computes those (for
//! instance with `skywatch-coords`) and passes them in.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`sky`] | Twilight and moonlight factors, Bortle table, limiting magnitude |
//! | [`extinction`] | Kasten–Young airmass, extinction in magnitudes |
//! | [`star`] | Point sources, single and batch |
//! | [`dso`] | Extended objects via surface brightness |
//! | [`config`] | Tunable model constants |
//!
//! ```
//! use skywatch_visibility::{evaluate_star_visibility, VisibilityInputs};
//!
//! // Sun 20° down, no Moon, suburban sky, Sirius 45° up
//! let inputs = VisibilityInputs::new(-20.0, -10.0, 0.0, 4, 45.0)?;
//! let sirius = evaluate_star_visibility(-1.46, &inputs)?;
//! assert!(sirius.visible);
//! # Ok::<(), skywatch_visibility::VisibilityError>(())
//! ```
//!
//! The boolean `visible` gate and the continuous `alpha` weight are computed
//! separately so a renderer can cross-fade objects instead of popping them.

pub mod conditions;
pub mod config;
pub mod dso;
pub mod errors;
pub mod extinction;
pub mod sky;
pub mod star;

pub use conditions::{SkyConditions, VisibilityInputs};
pub use config::{DsoConfig, VisibilityConfig, BORTLE_LIMITING_MAGNITUDES};
pub use dso::{evaluate_dso_detectability, surface_brightness, DeepSkyObject, DsoVisibility};
pub use errors::{VisibilityError, VisibilityResult};
pub use extinction::{airmass, extinction_delta_magnitude};
pub use sky::{
    bortle_limiting_magnitude, effective_limiting_magnitude, moon_wash_factor, twilight_factor,
};
pub use star::{evaluate_star_batch, evaluate_star_visibility, StarTarget, StarVisibility};
