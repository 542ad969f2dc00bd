//! Shared primitives for the skywatch crates.
//!
//! `skywatch-core` holds the pieces every other crate leans on: the error
//! type, astronomical constants, the clamp-to-domain helpers used by every
//! inverse-trig call, angle wrapping, 3D vectors and rotation matrices, and
//! the [`GeographicObserver`] value type.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Wrapping to [0, 360) / (-180, 180], finite and range validation |
//! | [`math`] | [`clamp_unit`](math::clamp_unit), `safe_asin`, `safe_acos`, great-circle angle |
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`] |
//! | [`observer`] | [`GeographicObserver`] |
//! | [`constants`] | J2000, Unix epoch, obliquity, Gaussian constant, unit conversions |
//! | [`errors`] | [`SkyError`] and [`SkyResult`] |
//!
//! # Design Notes
//!
//! - **No implicit state**: nothing here reads the clock or holds a current
//!   observer. Every function is a pure function of its arguments.
//! - **Degrees at the API, radians inside**: public types store degrees with
//!   the unit in the name (`latitude_deg`); trigonometry converts locally.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod observer;

pub use errors::{MathErrorKind, SkyError, SkyResult};
pub use matrix::{RotationMatrix3, Vector3};
pub use observer::GeographicObserver;
