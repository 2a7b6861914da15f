//! Undo/redo history for the Strata level editor.
//!
//! Edits are recorded as reversible actions carrying both the before and
//! after image of what they touched. [`Gram`] keeps them in a linear log
//! with a cursor; [`apply_previous`] and [`apply_next`] write the images
//! back onto a [`LevelMatrix`](strata_space::LevelMatrix) or
//! [`TileMatrix`](strata_space::TileMatrix).
//!
//! # Architecture
//!
//! - [`Gram`] is generic over the action type and never sees level data
//! - [`GeoAction`] covers single-cell, rectangle and grouped geometry edits
//! - [`TileAction`] covers tile and material edits on the tile layer, stored
//!   as per-cell images
//!
//! Undo applies the current entry's before image and then steps back.
//! Redo steps forward and then applies the new current entry's after image.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod apply;
pub mod history;
pub mod tile;

pub use action::{CellAction, GeoAction, GroupAction, RectAction};
pub use apply::{apply_next, apply_previous, apply_tile_next, apply_tile_previous};
pub use history::Gram;
pub use tile::{TileAction, TileCellAction, TileEditKind, TileGroup};
