//! Error type for editor construction and resizing.

use std::error::Error;
use std::fmt;

use strata_space::MatrixError;

use crate::config::ConfigError;

/// Errors returned by editor operations that can fail.
///
/// Ordinary edits never fail: out-of-bounds or no-op edits are reported
/// as `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditError {
    /// The level matrix could not be built.
    Matrix(MatrixError),
    /// The configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix(e) => write!(f, "matrix: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Matrix(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<MatrixError> for EditError {
    fn from(e: MatrixError) -> Self {
        Self::Matrix(e)
    }
}

impl From<ConfigError> for EditError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
