//! Time handling for skywatch: UTC instants, Julian Dates and sidereal time.
//!
//! Every position calculation starts from an [`Instant`], a UTC timestamp with
//! millisecond resolution. It converts to a two-part [`JulianDate`] and from
//! there to Greenwich and local mean sidereal time.
//!
//! ```
//! use skywatch_time::{sidereal, Instant};
//!
//! let t = Instant::from_calendar(2024, 8, 12, 2, 30, 0.0)?;
//! let jd = t.to_julian_date();
//! assert_eq!(Instant::from_julian_date(jd)?, t);
//!
//! let lst = sidereal::local_sidereal_time_deg(&t, 13.4)?;
//! assert!((0.0..360.0).contains(&lst));
//! # Ok::<(), skywatch_time::TimeError>(())
//! ```
//!
//! Sidereal time uses the linear J2000 expression and is good to about an
//! arc-minute for 1900–2100. There is no UT1, no leap-second table and no
//! nutation; see [`sidereal`].

pub mod instant;
pub mod julian;
pub mod sidereal;

pub use instant::Instant;
pub use julian::JulianDate;
pub use sidereal::{
    gmst_deg_from_julian_date, greenwich_sidereal_time_deg, local_sidereal_time_deg,
    SiderealTime,
};

use skywatch_core::SkyError;
use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// Invalid calendar input or a core validation failure.
    #[error(transparent)]
    Core(#[from] SkyError),

    #[error("Non-finite time value: {0}")]
    NonFinite(String),

    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimeError::NonFinite("Julian Date NaN".to_string());
        assert_eq!(err.to_string(), "Non-finite time value: Julian Date NaN");

        let err: TimeError = SkyError::invalid_date(2023, 2, 30, "day out of range").into();
        assert!(err.to_string().contains("2023-02-30"));
    }

    #[test]
    fn test_calendar_error_is_core() {
        let err = Instant::from_calendar(2023, 2, 30, 0, 0, 0.0).unwrap_err();
        assert!(matches!(err, TimeError::Core(SkyError::InvalidDate { .. })));
    }
}
