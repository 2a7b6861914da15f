//! Tile-layer cells.

use crate::id::Coords;

/// Identifies a tile definition by its catalogue position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileRef {
    /// Category index in the tile catalogue.
    pub category: usize,
    /// Position of the tile within its category.
    pub position: usize,
}

impl TileRef {
    /// Construct a tile reference.
    pub const fn new(category: usize, position: usize) -> Self {
        Self { category, position }
    }
}

/// Content of one tile-layer cell.
///
/// A multi-cell tile occupies one `Head` cell (which names the tile) and
/// any number of `Body` cells pointing back at it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TileCell {
    /// No tile and no material; rendered with the level default material.
    #[default]
    Default,
    /// A material fill.
    Material {
        /// Material name.
        name: String,
    },
    /// The anchor cell of a placed tile.
    Head {
        /// Catalogue position of the tile.
        tile: TileRef,
        /// Tile name, kept for display and export.
        name: String,
    },
    /// A cell covered by a tile anchored elsewhere.
    Body {
        /// Position of the owning `Head` cell.
        head: Coords,
    },
}

impl TileCell {
    /// `true` for [`TileCell::Default`].
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// The tile reference of a head cell.
    pub fn head_tile(&self) -> Option<TileRef> {
        match self {
            Self::Head { tile, .. } => Some(*tile),
            Self::Default | Self::Material { .. } | Self::Body { .. } => None,
        }
    }
}
