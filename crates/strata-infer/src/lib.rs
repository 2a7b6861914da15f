//! Geometry inference for the Strata level editor.
//!
//! Every rule that turns a cell and its 3x3 neighbourhood into something
//! concrete lives here, shared by editing and rendering:
//!
//! - [`resolve_stackable`]: the graphic of a stackable feature. Shortcut
//!   entrances and cracks depend on their neighbours.
//! - [`resolve_slope`]: the slope orientation implied by solid neighbours.
//! - [`block_index`]: the graphic of a geometry block.
//! - [`feature_visible_on`] / [`feature_placeable_on`]: per-layer rules.
//!
//! All functions are pure and total. Impossible placements come back as
//! `None` or as the generic fallback variant; nothing here panics on
//! level data.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod block;
pub mod layer;
pub mod slope;
pub mod stackable;
pub mod variant;

pub use block::block_index;
pub use layer::{feature_placeable_on, feature_visible_on, is_shortcut_family};
pub use slope::resolve_slope;
pub use stackable::{
    resolve_cell_variants, resolve_stackable, resolve_stackable_raw, resolve_stackable_with,
    stackable_variant, EntranceRule, CRACK_ISOLATED, ENTRANCE_LOOSE,
};
pub use variant::VariantIndex;
