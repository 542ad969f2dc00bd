//! Error types shared by every skywatch crate.
//!
//! [`SkyError`] covers the failures the core primitives can report: a value
//! that is not a usable number, an invalid calendar date, or an algorithm that
//! could not produce a result.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`MathError`](SkyError::MathError) | NaN/∞ input, value outside its documented domain |
//! | [`InvalidDate`](SkyError::InvalidDate) | Calendar validation failures |
//! | [`CalculationError`](SkyError::CalculationError) | Algorithm failures |
//!
//! Higher-level crates wrap this type in their own error enums, so a caller
//! only ever matches on the error of the crate it called.
//!
//! ```
//! use skywatch_core::{MathErrorKind, SkyError};
//!
//! fn checked_sqrt(x: f64) -> Result<f64, SkyError> {
//!     if x < 0.0 {
//!         return Err(SkyError::math_error(
//!             "checked_sqrt",
//!             MathErrorKind::OutOfRange,
//!             "argument is negative",
//!         ));
//!     }
//!     Ok(x.sqrt())
//! }
//! assert!(checked_sqrt(-1.0).is_err());
//! ```

use thiserror::Error;

/// Classification of numerical errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Input or result is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyError {
    /// Invalid calendar date (e.g., February 30, month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    /// Numerical input rejected at the call boundary.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Algorithm or calculation failure.
    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

/// Convenience alias for `Result<T, SkyError>`.
pub type SkyResult<T> = Result<T, SkyError>;

impl SkyError {
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn calculation_error(context: &str, reason: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] if this is a [`MathError`](Self::MathError).
    pub fn math_kind(&self) -> Option<MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
