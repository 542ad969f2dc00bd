use skywatch_core::SkyError;
use thiserror::Error;

pub type VisibilityResult<T> = Result<T, VisibilityError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisibilityError {
    #[error("Invalid visibility input: {message}")]
    InvalidInput { message: String },

    #[error("Invalid visibility configuration: {message}")]
    InvalidConfig { message: String },

    #[error(transparent)]
    Core(#[from] SkyError),
}

impl VisibilityError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
