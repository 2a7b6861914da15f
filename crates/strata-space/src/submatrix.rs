//! Two-dimensional cell blocks.

use strata_core::RunCell;

use crate::error::MatrixError;
use crate::grid::{axis_index, CellGrid};
use crate::matrix::check_dims;

/// A `height x width` block of cells with no layer axis.
///
/// Used for copy buffers, previews and the before/after images of
/// rectangle edits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubMatrix {
    width: usize,
    height: usize,
    cells: Vec<RunCell>,
}

impl SubMatrix {
    /// A block filled with `fill`.
    pub fn new(width: usize, height: usize, fill: RunCell) -> Result<Self, MatrixError> {
        check_dims(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; width * height],
        })
    }

    /// Wrap a row-major buffer.
    pub fn from_cells(width: usize, height: usize, cells: Vec<RunCell>) -> Result<Self, MatrixError> {
        check_dims(width, height)?;
        if cells.len() != width * height {
            return Err(MatrixError::SizeMismatch {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
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

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        Some(axis_index(y, self.height)? * self.width + axis_index(x, self.width)?)
    }

    /// The cell at `(x, y)`.
    pub fn get(&self, x: i32, y: i32) -> Option<&RunCell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Replace the cell at `(x, y)`, returning the previous value.
    pub fn set(&mut self, x: i32, y: i32, cell: RunCell) -> Option<RunCell> {
        let i = self.index(x, y)?;
        Some(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Every cell with its offset, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &RunCell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| ((i % width) as i32, (i / width) as i32, c))
    }
}

impl CellGrid for SubMatrix {
    fn cell_at(&self, x: i32, y: i32, _z: usize) -> Option<&RunCell> {
        self.get(x, y)
    }
}
