//! The tile editor: tile heads, bodies and materials with undo.

use strata_core::{Coords, TileCell, TileRef};
use strata_gram::{
    apply_tile_next, apply_tile_previous, Gram, TileAction, TileCellAction, TileEditKind,
    TileGroup,
};
use strata_space::TileMatrix;

use crate::config::EditorConfig;
use crate::editor::brush_span;
use crate::error::EditError;

/// Size and identity of a tile about to be placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileFootprint {
    /// Catalogue position.
    pub tile: TileRef,
    /// Tile name, stored on the head cell.
    pub name: String,
    /// Columns covered.
    pub width: usize,
    /// Rows covered.
    pub height: usize,
}

impl TileFootprint {
    /// Construct a footprint.
    pub fn new(tile: TileRef, name: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            tile,
            name: name.into(),
            width,
            height,
        }
    }

    /// Offset of the head cell from the footprint's top-left corner.
    ///
    /// ```
    /// use strata_core::TileRef;
    /// use strata_editor::TileFootprint;
    ///
    /// let t = TileFootprint::new(TileRef::new(0, 0), "Box", 4, 3);
    /// assert_eq!(t.head_origin(), (1, 1));
    /// ```
    pub fn head_origin(&self) -> (usize, usize) {
        (middle(self.width), middle(self.height))
    }
}

fn middle(n: usize) -> usize {
    if n < 3 {
        0
    } else if n % 2 == 0 {
        n / 2 - 1
    } else {
        n / 2
    }
}

/// Editing session over one level's tile layer.
#[derive(Debug)]
pub struct TileEditor {
    tiles: TileMatrix,
    gram: Gram<TileAction>,
}

impl TileEditor {
    /// An empty tile layer.
    pub fn new(width: usize, height: usize, config: &EditorConfig) -> Result<Self, EditError> {
        let tiles = TileMatrix::new(width, height)?;
        Self::from_tiles(tiles, config)
    }

    /// Edit an existing tile layer.
    pub fn from_tiles(tiles: TileMatrix, config: &EditorConfig) -> Result<Self, EditError> {
        Ok(Self {
            tiles,
            gram: Gram::bounded(config.tile_limit()?),
        })
    }

    /// The tile layer.
    pub fn tiles(&self) -> &TileMatrix {
        &self.tiles
    }

    /// The undo history.
    pub fn gram(&self) -> &Gram<TileAction> {
        &self.gram
    }

    /// Place `tile` with its head at `position`.
    ///
    /// Tiles already occupying the footprint are removed first, all in the
    /// same history entry. Parts of the footprint outside the level are
    /// skipped, but the head itself must be inside.
    pub fn place(&mut self, position: Coords, tile: &TileFootprint) -> bool {
        if !self.tiles.contains(position) || tile.width == 0 || tile.height == 0 {
            return false;
        }
        let (ox, oy) = tile.head_origin();
        let start = position.offset(-(ox as i32), -(oy as i32));
        let covered: Vec<Coords> = (0..tile.height as i32)
            .flat_map(|dy| (0..tile.width as i32).map(move |dx| start.offset(dx, dy)))
            .filter(|c| self.tiles.contains(*c))
            .collect();

        let mut actions = Vec::new();
        for at in &covered {
            if let Some(head) = self.owning_head(*at) {
                self.clear_tile(head, &mut actions);
            }
        }
        let head = TileCell::Head {
            tile: tile.tile,
            name: tile.name.clone(),
        };
        self.write(position, head, &mut actions);
        for at in covered.into_iter().filter(|c| *c != position) {
            self.write(at, TileCell::Body { head: position }, &mut actions);
        }
        self.record(TileEditKind::Place, actions)
    }

    /// Remove the tile at `position`, given its head or any body cell.
    ///
    /// A body cell whose head is missing is cleared on its own.
    pub fn remove(&mut self, position: Coords) -> bool {
        let mut actions = Vec::new();
        match self.owning_head(position) {
            Some(head) => self.clear_tile(head, &mut actions),
            None => {
                if matches!(self.tiles.get(position), Some(TileCell::Body { .. })) {
                    self.write(position, TileCell::Default, &mut actions);
                }
            }
        }
        self.record(TileEditKind::Remove, actions)
    }

    /// Paint material `name` over a square of `radius` around `center`.
    /// Cells covered by tiles are left alone.
    pub fn place_material(&mut self, center: Coords, radius: u32, name: &str) -> bool {
        let cell = TileCell::Material { name: name.to_owned() };
        self.brush(center, radius, TileEditKind::PlaceMaterial, &cell)
    }

    /// Erase material over a square of `radius` around `center`.
    pub fn remove_material(&mut self, center: Coords, radius: u32) -> bool {
        self.brush(center, radius, TileEditKind::RemoveMaterial, &TileCell::Default)
    }

    /// Revert the current entry and step back.
    pub fn undo(&mut self) -> bool {
        match self.gram.current() {
            Some(action) => {
                apply_tile_previous(action, &mut self.tiles);
                self.gram.undo()
            }
            None => false,
        }
    }

    /// Step forward and re-apply the new current entry.
    pub fn redo(&mut self) -> bool {
        if !self.gram.redo() {
            return false;
        }
        if let Some(action) = self.gram.current() {
            apply_tile_next(action, &mut self.tiles);
        }
        true
    }

    /// Resize keeping the top-left overlap. History is cleared.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), EditError> {
        self.tiles = self.tiles.resized(new_width, new_height)?;
        tracing::debug!(new_width, new_height, "tile layer resized, history cleared");
        self.gram.clear();
        Ok(())
    }

    fn brush(&mut self, center: Coords, radius: u32, kind: TileEditKind, cell: &TileCell) -> bool {
        let xs = brush_span(center.x, radius, self.tiles.width());
        let mut actions = Vec::new();
        for y in brush_span(center.y, radius, self.tiles.height()) {
            for x in xs.clone() {
                let at = Coords::new(x, y, center.z);
                if matches!(
                    self.tiles.get(at),
                    Some(TileCell::Default | TileCell::Material { .. })
                ) {
                    self.write(at, cell.clone(), &mut actions);
                }
            }
        }
        self.record(kind, actions)
    }

    /// The head position of the tile covering `at`, if it has a live head.
    fn owning_head(&self, at: Coords) -> Option<Coords> {
        match self.tiles.get(at)? {
            TileCell::Head { .. } => Some(at),
            TileCell::Body { head } => {
                matches!(self.tiles.get(*head), Some(TileCell::Head { .. })).then_some(*head)
            }
            TileCell::Default | TileCell::Material { .. } => None,
        }
    }

    fn clear_tile(&mut self, head: Coords, actions: &mut Vec<TileCellAction>) {
        let body: Vec<Coords> = self
            .tiles
            .occupied()
            .filter(|(c, cell)| c.z == head.z && **cell == TileCell::Body { head })
            .map(|(c, _)| c)
            .collect();
        self.write(head, TileCell::Default, actions);
        for at in body {
            self.write(at, TileCell::Default, actions);
        }
    }

    fn write(&mut self, at: Coords, cell: TileCell, actions: &mut Vec<TileCellAction>) {
        if self.tiles.get(at) == Some(&cell) {
            return;
        }
        if let Ok(previous) = self.tiles.set(at, cell.clone()) {
            actions.push(TileCellAction::new(at, previous, cell));
        }
    }

    fn record(&mut self, kind: TileEditKind, mut actions: Vec<TileCellAction>) -> bool {
        let action = match actions.len() {
            0 => return false,
            1 => match actions.pop() {
                Some(a) => TileAction::Cell(kind, a),
                None => return false,
            },
            _ => match TileGroup::new(kind, actions) {
                Some(g) => TileAction::Group(g),
                None => return false,
            },
        };
        tracing::trace!(?kind, position = %action.position(), "tile edit recorded");
        self.gram.record(action);
        true
    }
}
