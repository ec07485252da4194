use thiserror::Error;

use crate::core::data::buffer_descriptor::BufferDescriptorError;
use crate::core::data::view_state::ViewStateError;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("device unavailable: {0}")]
    DeviceUnavailable(String),

    #[error("compute failure: {0}")]
    ComputeFailure(String),
}

impl RenderError {
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn device_unavailable(msg: impl Into<String>) -> Self {
        Self::DeviceUnavailable(msg.into())
    }

    pub fn compute_failure(msg: impl Into<String>) -> Self {
        Self::ComputeFailure(msg.into())
    }
}

impl From<ViewStateError> for RenderError {
    fn from(err: ViewStateError) -> Self {
        Self::invalid_configuration(err.to_string())
    }
}

impl From<BufferDescriptorError> for RenderError {
    fn from(err: BufferDescriptorError) -> Self {
        Self::invalid_configuration(err.to_string())
    }
}
