//! Error types for the cell model.

use std::error::Error;
use std::fmt;

/// Errors from converting raw or persisted data into cell-model types.
///
/// Editing and inference never produce these; they arise only at the
/// boundary where untrusted ids enter the model (imports, sparse cells).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellError {
    /// A geometry id that does not name any [`GeoType`](crate::GeoType).
    UnknownGeo {
        /// The unrecognized id.
        id: i32,
    },
    /// A stackable index outside `0..STACKABLE_COUNT`.
    StackableOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// A layer index outside `0..LAYER_COUNT`.
    LayerOutOfRange {
        /// The offending index.
        index: usize,
    },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGeo { id } => write!(f, "unknown geometry id {id}"),
            Self::StackableOutOfRange { index } => {
                write!(
                    f,
                    "stackable index {index} out of range [0, {})",
                    crate::STACKABLE_COUNT
                )
            }
            Self::LayerOutOfRange { index } => {
                write!(f, "layer index {index} out of range [0, {})", crate::LAYER_COUNT)
            }
        }
    }
}

impl Error for CellError {}
