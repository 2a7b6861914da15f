//! Dense storage for the tile layer.

use strata_core::{Coords, TileCell, LAYER_COUNT};

use crate::error::MatrixError;
use crate::grid::axis_index;
use crate::matrix::check_dims;

/// Tile-layer cells, laid out like [`LevelMatrix`](crate::LevelMatrix).
///
/// Unlike terrain cells, tile cells own strings, so the matrix hands out
/// references and replaces cells by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMatrix {
    width: usize,
    height: usize,
    cells: Vec<TileCell>,
}

impl TileMatrix {
    /// A matrix of [`TileCell::Default`] cells.
    pub fn new(width: usize, height: usize) -> Result<Self, MatrixError> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![TileCell::Default; width * height * LAYER_COUNT],
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, coords: Coords) -> Option<usize> {
        let x = axis_index(coords.x, self.width)?;
        let y = axis_index(coords.y, self.height)?;
        (coords.z < LAYER_COUNT).then_some((y * self.width + x) * LAYER_COUNT + coords.z)
    }

    /// Whether `coords` addresses a stored cell.
    pub fn contains(&self, coords: Coords) -> bool {
        self.index(coords).is_some()
    }

    /// The cell at `coords`.
    pub fn get(&self, coords: Coords) -> Option<&TileCell> {
        self.index(coords).map(|i| &self.cells[i])
    }

    /// Replace the cell at `coords`, returning the previous value.
    pub fn set(&mut self, coords: Coords, cell: TileCell) -> Result<TileCell, MatrixError> {
        match self.index(coords) {
            Some(i) => Ok(std::mem::replace(&mut self.cells[i], cell)),
            None => Err(MatrixError::CoordOutOfBounds {
                coords,
                bounds: format!(
                    "[0, {}) x [0, {}) x [0, {LAYER_COUNT})",
                    self.width, self.height
                ),
            }),
        }
    }

    /// Every non-default cell with its coordinate.
    pub fn occupied(&self) -> impl Iterator<Item = (Coords, &TileCell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_default())
            .map(move |(i, cell)| {
                let z = i % LAYER_COUNT;
                let xy = i / LAYER_COUNT;
                (Coords::new((xy % width) as i32, (xy / width) as i32, z), cell)
            })
    }

    /// A new matrix of the given size keeping the top-left overlap.
    pub fn resized(&self, new_width: usize, new_height: usize) -> Result<Self, MatrixError> {
        let mut out = Self::new(new_width, new_height)?;
        for (coords, cell) in self.occupied() {
            if out.contains(coords) {
                out.set(coords, cell.clone())?;
            }
        }
        Ok(out)
    }
}
