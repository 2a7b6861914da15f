//! Core types for the Strata level editor.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the terrain cell model shared by every other crate in the workspace:
//! coordinates and layers, geometry types, stackable features, the dense
//! [`RunCell`] and its sparse persisted form [`Cell`], and the tile-layer
//! [`TileCell`] sum type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod geo;
pub mod id;
pub mod stackables;
pub mod tile;

pub use cell::{Cell, RunCell};
pub use error::CellError;
pub use geo::{Feature, GeoType};
pub use id::{Coords, Layer, LAYER_COUNT};
pub use stackables::{Stackables, StackablesIter, STACKABLE_COUNT};
pub use tile::{TileCell, TileRef};
