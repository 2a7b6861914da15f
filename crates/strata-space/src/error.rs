//! Error types for matrix operations.

use std::error::Error;
use std::fmt;

use strata_core::{CellError, Coords};

/// Errors arising from matrix construction, indexing and import.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// Attempted to build a matrix with zero width or height.
    EmptyMatrix,
    /// A dimension exceeds what signed coordinates can address.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: usize,
        /// Maximum allowed value.
        max: usize,
    },
    /// A coordinate is outside the matrix.
    CoordOutOfBounds {
        /// The offending coordinate.
        coords: Coords,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// A flat cell buffer does not match the declared dimensions.
    SizeMismatch {
        /// Cell count implied by the dimensions.
        expected: usize,
        /// Cell count supplied.
        actual: usize,
    },
    /// A persisted cell could not be rehydrated.
    Cell(CellError),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatrix => write!(f, "matrix must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::CoordOutOfBounds { coords, bounds } => {
                write!(f, "coordinate {coords} out of bounds: {bounds}")
            }
            Self::SizeMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::Cell(e) => write!(f, "invalid cell: {e}"),
        }
    }
}

impl Error for MatrixError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cell(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CellError> for MatrixError {
    fn from(e: CellError) -> Self {
        Self::Cell(e)
    }
}
