//! The [`CellGrid`] read-access trait.

use strata_core::RunCell;

/// Read access to cells addressed by column, row and layer.
///
/// Implementors return `None` for any position they do not store,
/// including negative coordinates. Two-dimensional storage ignores `z`.
pub trait CellGrid {
    /// The cell at `(x, y, z)`, if stored.
    fn cell_at(&self, x: i32, y: i32, z: usize) -> Option<&RunCell>;
}

impl<G: CellGrid + ?Sized> CellGrid for &G {
    fn cell_at(&self, x: i32, y: i32, z: usize) -> Option<&RunCell> {
        (**self).cell_at(x, y, z)
    }
}

/// Convert a signed coordinate into an index below `len`.
pub(crate) fn axis_index(v: i32, len: usize) -> Option<usize> {
    usize::try_from(v).ok().filter(|&i| i < len)
}
