//! Editing sessions for the Strata level editor.
//!
//! [`GeoEditor`] owns a level's geometry and its undo history and exposes
//! the edit operations the editor pages use: single cells, slopes,
//! features, rectangles, brushes and coalesced strokes. [`TileEditor`]
//! does the same for the tile layer. Both are plain values; a host keeps
//! one per open level.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod editor;
pub mod error;
pub mod tile;

pub use config::{ConfigError, EditorConfig};
pub use editor::{BrushShape, GeoEditor};
pub use error::EditError;
pub use tile::{TileEditor, TileFootprint};
