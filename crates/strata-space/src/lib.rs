//! Level storage for the Strata level editor.
//!
//! This crate owns the dense three-layer [`LevelMatrix`], the layerless
//! [`SubMatrix`] used for copy buffers and rectangle edits, and the
//! [`CellGrid`] read trait that both implement. The tile layer lives in a
//! separate [`TileMatrix`] of the same shape.
//!
//! # Neighbourhoods
//!
//! [`get_context`] extracts the 3x3 [`Context`] around a cell that the
//! inference engine consumes. Bounds are always supplied by the caller and
//! out-of-bounds positions read as default cells, so extraction never fails.
//!
//! # Resizing
//!
//! [`resize`] and [`resize_edges`] build a new matrix; the old one is
//! left untouched and no cell is shared between the two.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod error;
pub mod grid;
pub mod matrix;
pub mod region;
pub mod resize;
pub mod submatrix;
pub mod tiles;

#[cfg(test)]
pub(crate) mod compliance;

pub use context::{get_context, get_context_2d, Context};
pub use error::MatrixError;
pub use grid::CellGrid;
pub use matrix::{LevelMatrix, MAX_DIM};
pub use region::Rect;
pub use resize::{resize, resize_2d, resize_edges};
pub use submatrix::SubMatrix;
pub use tiles::TileMatrix;
