//! Dense three-layer level storage.

use strata_core::{Cell, Coords, GeoType, RunCell, LAYER_COUNT};

use crate::error::MatrixError;
use crate::grid::{axis_index, CellGrid};
use crate::region::Rect;
use crate::submatrix::SubMatrix;

/// Largest width or height: coordinates are `i32`, so each axis must fit.
pub const MAX_DIM: usize = i32::MAX as usize;

pub(crate) fn check_dims(width: usize, height: usize) -> Result<(), MatrixError> {
    if width == 0 || height == 0 {
        return Err(MatrixError::EmptyMatrix);
    }
    if width > MAX_DIM {
        return Err(MatrixError::DimensionTooLarge {
            name: "width",
            value: width,
            max: MAX_DIM,
        });
    }
    if height > MAX_DIM {
        return Err(MatrixError::DimensionTooLarge {
            name: "height",
            value: height,
            max: MAX_DIM,
        });
    }
    Ok(())
}

/// The geometry of a level: `height x width x 3` terrain cells.
///
/// Cells are stored row-major with the layer as the fastest axis, so the
/// three layers of one position are adjacent. A matrix is never empty.
///
/// # Examples
///
/// ```
/// use strata_core::{Coords, GeoType, RunCell};
/// use strata_space::LevelMatrix;
///
/// let mut m = LevelMatrix::filled(4, 3, GeoType::Solid).unwrap();
/// assert_eq!(m.get(Coords::new(3, 2, 1)).unwrap().geo, GeoType::Solid);
/// assert_eq!(m.get(Coords::new(3, 2, 2)).unwrap().geo, GeoType::Air);
///
/// let old = m.set(Coords::new(0, 0, 0), RunCell::default()).unwrap();
/// assert_eq!(old.geo, GeoType::Solid);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelMatrix {
    width: usize,
    height: usize,
    cells: Vec<RunCell>,
}

impl LevelMatrix {
    /// A matrix whose layer `z` is filled with `fill[z]`.
    pub fn new(width: usize, height: usize, fill: [RunCell; LAYER_COUNT]) -> Result<Self, MatrixError> {
        check_dims(width, height)?;
        let mut cells = Vec::with_capacity(width * height * LAYER_COUNT);
        for _ in 0..width * height {
            cells.extend_from_slice(&fill);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// A fresh level: the first two layers hold `geo`, the back layer air.
    pub fn filled(width: usize, height: usize, geo: GeoType) -> Result<Self, MatrixError> {
        let g = RunCell::new(geo);
        Self::new(width, height, [g, g, RunCell::default()])
    }

    /// Wrap an existing buffer laid out as `[row][column][layer]`.
    pub fn from_cells(width: usize, height: usize, cells: Vec<RunCell>) -> Result<Self, MatrixError> {
        check_dims(width, height)?;
        let expected = width * height * LAYER_COUNT;
        if cells.len() != expected {
            return Err(MatrixError::SizeMismatch {
                expected,
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

    /// Always `false`; construction rejects empty matrices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The raw cell buffer, `[row][column][layer]`.
    pub fn cells(&self) -> &[RunCell] {
        &self.cells
    }

    fn index(&self, x: i32, y: i32, z: usize) -> Option<usize> {
        let x = axis_index(x, self.width)?;
        let y = axis_index(y, self.height)?;
        (z < LAYER_COUNT).then_some((y * self.width + x) * LAYER_COUNT + z)
    }

    fn out_of_bounds(&self, coords: Coords) -> MatrixError {
        MatrixError::CoordOutOfBounds {
            coords,
            bounds: format!(
                "[0, {}) x [0, {}) x [0, {LAYER_COUNT})",
                self.width, self.height
            ),
        }
    }

    /// Whether `coords` addresses a stored cell.
    pub fn contains(&self, coords: Coords) -> bool {
        self.index(coords.x, coords.y, coords.z).is_some()
    }

    /// The cell at `coords`.
    pub fn get(&self, coords: Coords) -> Option<&RunCell> {
        self.index(coords.x, coords.y, coords.z)
            .map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `coords`.
    pub fn get_mut(&mut self, coords: Coords) -> Option<&mut RunCell> {
        self.index(coords.x, coords.y, coords.z)
            .map(|i| &mut self.cells[i])
    }

    /// Replace the cell at `coords`, returning the previous value.
    pub fn set(&mut self, coords: Coords, cell: RunCell) -> Result<RunCell, MatrixError> {
        match self.get_mut(coords) {
            Some(slot) => Ok(std::mem::replace(slot, cell)),
            None => Err(self.out_of_bounds(coords)),
        }
    }

    /// Every cell with its coordinate, row by row, layers innermost.
    pub fn iter(&self) -> impl Iterator<Item = (Coords, &RunCell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let z = i % LAYER_COUNT;
            let xy = i / LAYER_COUNT;
            (Coords::new((xy % width) as i32, (xy / width) as i32, z), cell)
        })
    }

    /// Copy the part of `rect` inside the matrix on layer `z`.
    ///
    /// Returns `None` if the rectangle misses the matrix or `z` is not a
    /// layer. The copy starts at the clipped rectangle's top-left corner.
    pub fn extract(&self, rect: Rect, z: usize) -> Option<(Rect, SubMatrix)> {
        if z >= LAYER_COUNT {
            return None;
        }
        let clipped = rect.clip(self.width, self.height)?;
        let mut cells = Vec::with_capacity(clipped.area());
        for (x, y) in clipped.iter() {
            let cell = self.cell_at(x, y, z).copied().unwrap_or_default();
            cells.push(cell);
        }
        let sub = SubMatrix::from_cells(clipped.width, clipped.height, cells).ok()?;
        Some((clipped, sub))
    }

    /// Write `sub` with its top-left corner at `at`, skipping cells that
    /// fall outside the matrix. Returns the number of cells written.
    pub fn paste(&mut self, sub: &SubMatrix, at: Coords) -> usize {
        let mut written = 0;
        for (dx, dy, cell) in sub.iter() {
            if let Some(slot) = self.get_mut(at.offset(dx, dy)) {
                *slot = *cell;
                written += 1;
            }
        }
        written
    }

    /// Export to sparse cells in column-major order: x outermost, then
    /// y, then layer.
    pub fn to_sparse(&self) -> Vec<Cell> {
        let mut out = Vec::with_capacity(self.cells.len());
        for x in 0..self.width {
            for y in 0..self.height {
                let base = (y * self.width + x) * LAYER_COUNT;
                out.extend(self.cells[base..base + LAYER_COUNT].iter().map(Cell::from));
            }
        }
        out
    }

    /// Rebuild a matrix from the output of [`to_sparse`](Self::to_sparse).
    pub fn from_sparse(width: usize, height: usize, sparse: &[Cell]) -> Result<Self, MatrixError> {
        check_dims(width, height)?;
        let expected = width * height * LAYER_COUNT;
        if sparse.len() != expected {
            return Err(MatrixError::SizeMismatch {
                expected,
                actual: sparse.len(),
            });
        }
        let mut cells = vec![RunCell::default(); expected];
        for (i, cell) in sparse.iter().enumerate() {
            let z = i % LAYER_COUNT;
            let xy = i / LAYER_COUNT;
            let (x, y) = (xy / height, xy % height);
            cells[(y * width + x) * LAYER_COUNT + z] = RunCell::try_from(cell)?;
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

impl CellGrid for LevelMatrix {
    fn cell_at(&self, x: i32, y: i32, z: usize) -> Option<&RunCell> {
        self.index(x, y, z).map(|i| &self.cells[i])
    }
}
