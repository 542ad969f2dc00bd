use skywatch_core::SkyError;
use skywatch_time::TimeError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error("Invalid field of view: {message}")]
    InvalidFieldOfView { message: String },

    #[error("Epoch conversion failed: {source}")]
    EpochError {
        #[from]
        source: TimeError,
    },

    #[error("Core astronomical calculation failed: {message}")]
    CoreError { message: String },
}

impl CoordError {
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn invalid_field_of_view(message: impl Into<String>) -> Self {
        Self::InvalidFieldOfView {
            message: message.into(),
        }
    }

    pub fn from_core(error: SkyError) -> Self {
        Self::CoreError {
            message: error.to_string(),
        }
    }
}

impl From<SkyError> for CoordError {
    fn from(error: SkyError) -> Self {
        Self::from_core(error)
    }
}
