//! Errors raised while checking box parameters or building panel outlines

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CamToolError {
    /// The layouter was asked for something it cannot draw
    #[error("Layout failed: {0}")]
    GeometryError(String),

    #[error("Bad box parameters: {0}")]
    Parameter(#[from] ParameterError),
}

/// A rejected box or edge parameter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{name} {reason}")]
    InvalidValue { name: String, reason: String },

    /// Each value is fine alone but the combination cannot be cut
    #[error("{0}")]
    Incompatible(String),
}

impl ParameterError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type CamToolResult<T> = Result<T, CamToolError>;

pub type ParameterResult<T> = Result<T, ParameterError>;
