//! Strata: the core of a layered 2D level editor.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Strata sub-crates. For most users, adding `strata` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! // A 3x3 room with solid walls on the north and west.
//! let mut editor = GeoEditor::new(3, 3, EditorConfig::default()).unwrap();
//! for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
//!     editor.set_cell(Coords::new(x, y, 0), RunCell::default());
//! }
//!
//! // The corner cell takes the slope its neighbours call for.
//! let corner = Coords::new(1, 1, 0);
//! assert!(editor.place_slope(corner));
//! assert_eq!(editor.matrix().get(corner).unwrap().geo, GeoType::SlopeES);
//!
//! // Every edit can be undone.
//! assert!(editor.undo());
//! assert_eq!(editor.matrix().get(corner).unwrap().geo, GeoType::Air);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Coordinates, geometry and feature ids, cells |
//! | [`space`] | `strata-space` | Level and tile matrices, contexts, resizing |
//! | [`infer`] | `strata-infer` | Feature variants, slope orientation, layer rules |
//! | [`gram`] | `strata-gram` | Undo history and edit actions |
//! | [`editor`] | `strata-editor` | Geometry and tile editing sessions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core cell types and ids (`strata-core`).
///
/// Contains [`types::Coords`], [`types::GeoType`], [`types::Feature`],
/// [`types::RunCell`] and its sparse form [`types::Cell`].
pub use strata_core as types;

/// Level storage (`strata-space`).
///
/// Provides [`space::LevelMatrix`], [`space::SubMatrix`],
/// [`space::TileMatrix`] and the [`space::get_context`] extractor.
pub use strata_space as space;

/// Geometry inference (`strata-infer`).
///
/// [`infer::resolve_stackable`] picks a feature's graphic from its
/// neighbourhood; [`infer::resolve_slope`] orients slopes.
pub use strata_infer as infer;

/// Undo history (`strata-gram`).
///
/// [`gram::Gram`] is the linear log; [`gram::GeoAction`] and
/// [`gram::TileAction`] are its entries.
pub use strata_gram as gram;

/// Editing sessions (`strata-editor`).
pub use strata_editor as editor;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strata_core::{Cell, Coords, Feature, GeoType, Layer, RunCell, TileCell, TileRef};

    // Storage
    pub use strata_space::{get_context, CellGrid, Context, LevelMatrix, Rect, SubMatrix};

    // Inference
    pub use strata_infer::{resolve_slope, resolve_stackable, EntranceRule, VariantIndex};

    // History
    pub use strata_gram::{GeoAction, Gram, TileAction};

    // Editors
    pub use strata_editor::{
        BrushShape, EditError, EditorConfig, GeoEditor, TileEditor, TileFootprint,
    };
}
