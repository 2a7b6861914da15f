//! 3x3 neighbourhood extraction.

use strata_core::RunCell;

use crate::grid::CellGrid;
use crate::submatrix::SubMatrix;

/// A 3x3 snapshot of cells centred on a target, indexed `[row][col]`.
///
/// `[1][1]` is the centre, row 0 is north and column 0 is west.
/// Positions outside the source matrix hold default (air) cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Context {
    cells: [[RunCell; 3]; 3],
}

impl Context {
    /// Wrap a prepared 3x3 array.
    pub const fn new(cells: [[RunCell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// The full `[row][col]` array.
    pub fn cells(&self) -> &[[RunCell; 3]; 3] {
        &self.cells
    }

    /// The cell at `(row, col)`, both in `0..3`.
    pub fn get(&self, row: usize, col: usize) -> Option<&RunCell> {
        self.cells.get(row)?.get(col)
    }

    /// The target cell.
    pub fn center(&self) -> &RunCell {
        &self.cells[1][1]
    }

    /// The cell above the target.
    pub fn north(&self) -> &RunCell {
        &self.cells[0][1]
    }

    /// The cell below the target.
    pub fn south(&self) -> &RunCell {
        &self.cells[2][1]
    }

    /// The cell right of the target.
    pub fn east(&self) -> &RunCell {
        &self.cells[1][2]
    }

    /// The cell left of the target.
    pub fn west(&self) -> &RunCell {
        &self.cells[1][0]
    }

    /// The orthogonal neighbours in `[north, east, south, west]` order.
    pub fn orthogonal(&self) -> [&RunCell; 4] {
        [self.north(), self.east(), self.south(), self.west()]
    }

    /// The eight neighbours, row by row, centre excluded.
    pub fn neighbours(&self) -> [&RunCell; 8] {
        let c = &self.cells;
        [
            &c[0][0], &c[0][1], &c[0][2], &c[1][0], &c[1][2], &c[2][0], &c[2][1], &c[2][2],
        ]
    }
}

/// Extract the neighbourhood of `(x, y)` on layer `z`.
///
/// `width` and `height` bound the lookup; positions outside
/// `[0, width) x [0, height)` become default cells even if `grid` stores
/// something there. The centre itself may be out of bounds.
///
/// # Examples
///
/// ```
/// use strata_core::{Coords, GeoType, RunCell};
/// use strata_space::{get_context, LevelMatrix};
///
/// let m = LevelMatrix::filled(3, 3, GeoType::Solid).unwrap();
/// let ctx = get_context(&m, 3, 3, 0, 0, 0);
/// assert_eq!(ctx.center().geo, GeoType::Solid);
/// assert_eq!(ctx.north().geo, GeoType::Air);
/// assert_eq!(ctx.west().geo, GeoType::Air);
/// ```
pub fn get_context<G: CellGrid + ?Sized>(
    grid: &G,
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    z: usize,
) -> Context {
    let mut cells = [[RunCell::default(); 3]; 3];
    for (dy, row) in (-1i32..=1).zip(cells.iter_mut()) {
        for (dx, slot) in (-1i32..=1).zip(row.iter_mut()) {
            let (nx, ny) = (i64::from(x) + i64::from(dx), i64::from(y) + i64::from(dy));
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            // In range of the declared bounds, so the narrowing cannot fail.
            if let Some(cell) = grid.cell_at(nx as i32, ny as i32, z) {
                *slot = *cell;
            }
        }
    }
    Context::new(cells)
}

/// [`get_context`] for a layerless block, bounded by its own dimensions.
pub fn get_context_2d(sub: &SubMatrix, x: i32, y: i32) -> Context {
    get_context(sub, sub.width(), sub.height(), x, y, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::LevelMatrix;
    use strata_core::{Coords, Feature, GeoType};

    fn numbered() -> LevelMatrix {
        // Each cell on layer 0 carries a distinct feature so positions are
        // distinguishable after extraction.
        let mut m = LevelMatrix::filled(3, 3, GeoType::Air).unwrap();
        for (i, (x, y)) in [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
            .into_iter()
            .enumerate()
        {
            m.get_mut(Coords::new(x, y, 0))
                .unwrap()
                .enable(Feature::ALL[i]);
        }
        m
    }

    // ── Orientation ─────────────────────────────────────────────

    #[test]
    fn centre_context_matches_matrix() {
        let m = numbered();
        let ctx = get_context(&m, 3, 3, 1, 1, 0);
        for row in 0..3 {
            for col in 0..3 {
                let expected = m.get(Coords::new(col as i32, row as i32, 0)).unwrap();
                assert_eq!(ctx.get(row, col), Some(expected));
            }
        }
        assert!(ctx.north().has(Feature::VerticalPole));
        assert!(ctx.west().has(Feature::ShortcutEntrance));
        assert!(ctx.east().has(Feature::RoomEntrance));
        assert!(ctx.south().has(Feature::PlaceRock));
    }

    #[test]
    fn neighbours_exclude_centre() {
        let m = numbered();
        let ctx = get_context(&m, 3, 3, 1, 1, 0);
        let n = ctx.neighbours();
        assert_eq!(n.len(), 8);
        assert!(n.iter().all(|c| !c.has(Feature::ShortcutPath)));
    }

    // ── Boundaries ──────────────────────────────────────────────

    #[test]
    fn corner_pads_with_default() {
        let m = LevelMatrix::filled(3, 3, GeoType::Solid).unwrap();
        let ctx = get_context(&m, 3, 3, 2, 2, 1);
        for row in 0..3 {
            for col in 0..3 {
                let inside = row < 2 && col < 2;
                let expected = if inside { GeoType::Solid } else { GeoType::Air };
                assert_eq!(ctx.cells()[row][col].geo, expected, "[{row}][{col}]");
            }
        }
    }

    #[test]
    fn declared_bounds_win_over_storage() {
        let m = LevelMatrix::filled(3, 3, GeoType::Solid).unwrap();
        let ctx = get_context(&m, 2, 2, 1, 1, 0);
        assert_eq!(ctx.center().geo, GeoType::Solid);
        assert_eq!(ctx.east().geo, GeoType::Air);
        assert_eq!(ctx.south().geo, GeoType::Air);
    }

    #[test]
    fn far_outside_is_all_default() {
        let m = LevelMatrix::filled(3, 3, GeoType::Solid).unwrap();
        for (x, y) in [(-5, 1), (1, 40), (i32::MIN, i32::MAX)] {
            assert_eq!(get_context(&m, 3, 3, x, y, 0), Context::default());
        }
    }

    #[test]
    fn invalid_layer_is_all_default() {
        let m = LevelMatrix::filled(3, 3, GeoType::Solid).unwrap();
        assert_eq!(get_context(&m, 3, 3, 1, 1, 5), Context::default());
    }

    #[test]
    fn sub_matrix_context() {
        let mut s = SubMatrix::new(2, 1, RunCell::default()).unwrap();
        s.set(1, 0, RunCell::new(GeoType::Glass));
        let ctx = get_context_2d(&s, 0, 0);
        assert_eq!(ctx.east().geo, GeoType::Glass);
        assert_eq!(*ctx.south(), RunCell::default());
    }
}
