use thiserror::Error;

pub const NON_INTEGRAL_OR_EMPTY: &str = "Inputs should be integers and array should be non-empty";
pub const NEGATIVE_ELEMENT: &str = "Inputs should be positive";
pub const NOT_ONE_DIMENSIONAL: &str = "Density array should be 1D";

/// Errors raised while converting or validating a density array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnergyError {
    #[error("type error: {0}")]
    ShapeOrType(String),
    #[error("value error: {0}")]
    ValueRange(String),
}

/// Coarse classification callers assert on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TypeError,
    ValueError,
}

impl EnergyError {
    pub fn shape_or_type(msg: impl Into<String>) -> Self {
        Self::ShapeOrType(msg.into())
    }

    pub fn value_range(msg: impl Into<String>) -> Self {
        Self::ValueRange(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ShapeOrType(_) => ErrorKind::TypeError,
            Self::ValueRange(_) => ErrorKind::ValueError,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ShapeOrType(m) | Self::ValueRange(m) => m,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid energy config: {0}")]
    Parse(#[from] serde_json::Error),
}
