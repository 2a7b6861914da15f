//! Tile-layer edit actions.
//!
//! Tile edits are stored as before/after images of every cell they
//! touched. Placing a tile writes a head and its body cells, so most
//! entries are groups.

use strata_core::{Coords, TileCell};

/// What kind of edit a tile history entry came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileEditKind {
    /// A tile was placed.
    Place,
    /// A tile was removed.
    Remove,
    /// Material was painted.
    PlaceMaterial,
    /// Material was erased.
    RemoveMaterial,
}

/// One tile cell before and after an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileCellAction {
    /// Edited cell.
    pub position: Coords,
    /// Cell before the edit.
    pub previous: TileCell,
    /// Cell after the edit.
    pub next: TileCell,
}

impl TileCellAction {
    /// Construct a tile cell action.
    pub fn new(position: Coords, previous: TileCell, next: TileCell) -> Self {
        Self {
            position,
            previous,
            next,
        }
    }
}

/// One entry in the tile history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TileAction {
    /// A single cell edit.
    Cell(TileEditKind, TileCellAction),
    /// Several cell edits as one step.
    Group(TileGroup),
}

impl TileAction {
    /// Where the edit happened. Groups report their first member.
    pub fn position(&self) -> Coords {
        match self {
            Self::Cell(_, a) => a.position,
            Self::Group(g) => g.position(),
        }
    }

    /// The edit this entry came from.
    pub fn kind(&self) -> TileEditKind {
        match self {
            Self::Cell(kind, _) => *kind,
            Self::Group(g) => g.kind(),
        }
    }
}

/// A non-empty list of tile cell edits of one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGroup {
    kind: TileEditKind,
    actions: Vec<TileCellAction>,
}

impl TileGroup {
    /// Group `actions`, or `None` if the list is empty.
    pub fn new(kind: TileEditKind, actions: Vec<TileCellAction>) -> Option<Self> {
        if actions.is_empty() {
            None
        } else {
            Some(Self { kind, actions })
        }
    }

    /// The edit the group came from.
    pub fn kind(&self) -> TileEditKind {
        self.kind
    }

    /// Member edits in recording order.
    pub fn actions(&self) -> &[TileCellAction] {
        &self.actions
    }

    /// Position of the first member.
    pub fn position(&self) -> Coords {
        self.actions[0].position
    }
}
