//! Matrix resizing.
//!
//! Resizing always allocates a fresh matrix: every position receives its
//! own copy of either the old cell or the layer's fill value.

use strata_core::{Coords, RunCell, LAYER_COUNT};

use crate::error::MatrixError;
use crate::matrix::LevelMatrix;
use crate::submatrix::SubMatrix;

/// Resize to `new_width x new_height`, keeping the top-left overlap.
///
/// Cells outside the old bounds take `fill[z]` for their layer.
///
/// # Examples
///
/// ```
/// use strata_core::{Coords, GeoType, RunCell};
/// use strata_space::{resize, LevelMatrix};
///
/// let m = LevelMatrix::filled(2, 2, GeoType::Solid).unwrap();
/// let fill = [RunCell::new(GeoType::Glass); 3];
/// let big = resize(&m, 3, 2, &fill).unwrap();
/// assert_eq!(big.get(Coords::new(1, 1, 0)).unwrap().geo, GeoType::Solid);
/// assert_eq!(big.get(Coords::new(2, 1, 0)).unwrap().geo, GeoType::Glass);
/// ```
pub fn resize(
    matrix: &LevelMatrix,
    new_width: usize,
    new_height: usize,
    fill: &[RunCell; LAYER_COUNT],
) -> Result<LevelMatrix, MatrixError> {
    shifted(matrix, new_width, new_height, 0, 0, fill)
}

/// Grow or shrink each edge independently.
///
/// Positive deltas add rows or columns on that side, negative deltas
/// remove them. The old cell at `(x, y)` moves to `(x + left, y + top)`.
/// All-zero deltas return an unchanged copy.
pub fn resize_edges(
    matrix: &LevelMatrix,
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    fill: &[RunCell; LAYER_COUNT],
) -> Result<LevelMatrix, MatrixError> {
    if left == 0 && top == 0 && right == 0 && bottom == 0 {
        return Ok(matrix.clone());
    }
    let new_width = grown(matrix.width(), left, right)?;
    let new_height = grown(matrix.height(), top, bottom)?;
    shifted(matrix, new_width, new_height, left, top, fill)
}

/// Resize a layerless block, keeping the top-left overlap.
pub fn resize_2d(
    sub: &SubMatrix,
    new_width: usize,
    new_height: usize,
    fill: RunCell,
) -> Result<SubMatrix, MatrixError> {
    let mut out = SubMatrix::new(new_width, new_height, fill)?;
    for (x, y, cell) in sub.iter() {
        out.set(x, y, *cell);
    }
    Ok(out)
}

fn grown(len: usize, before: i32, after: i32) -> Result<usize, MatrixError> {
    let n = len as i64 + i64::from(before) + i64::from(after);
    if n <= 0 {
        return Err(MatrixError::EmptyMatrix);
    }
    Ok(n as usize)
}

fn shifted(
    matrix: &LevelMatrix,
    new_width: usize,
    new_height: usize,
    dx: i32,
    dy: i32,
    fill: &[RunCell; LAYER_COUNT],
) -> Result<LevelMatrix, MatrixError> {
    let mut out = LevelMatrix::new(new_width, new_height, *fill)?;
    for (c, cell) in matrix.iter() {
        let (Some(x), Some(y)) = (c.x.checked_add(dx), c.y.checked_add(dy)) else {
            continue;
        };
        if let Some(slot) = out.get_mut(Coords::new(x, y, c.z)) {
            *slot = *cell;
        }
    }
    Ok(out)
}
