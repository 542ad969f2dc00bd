use skywatch_coords::CoordError;
use skywatch_core::SkyError;
use skywatch_time::TimeError;
use thiserror::Error;

pub type OrbitResult<T> = Result<T, OrbitError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    /// Parabolic and hyperbolic orbits (e ≥ 1) are outside the elliptical model.
    #[error("Unsupported eccentricity {eccentricity}: only elliptical orbits (0 <= e < 1) are modeled")]
    UnsupportedEccentricity { eccentricity: f64 },

    #[error("Invalid orbital elements: {message}")]
    InvalidElements { message: String },

    #[error("Kepler solver did not converge after {iterations} iterations (residual {residual:e})")]
    NonConvergence { iterations: u32, residual: f64 },

    /// Failure reported by an external ephemeris or satellite propagator.
    #[error("Ephemeris error: {message}")]
    Ephemeris { message: String },

    #[error(transparent)]
    Coord(#[from] CoordError),

    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Core(#[from] SkyError),
}

impl OrbitError {
    pub fn invalid_elements(message: impl Into<String>) -> Self {
        Self::InvalidElements {
            message: message.into(),
        }
    }

    pub fn ephemeris(message: impl Into<String>) -> Self {
        Self::Ephemeris {
            message: message.into(),
        }
    }
}
