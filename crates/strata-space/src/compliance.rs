//! CellGrid trait compliance test helpers.
//!
//! These functions verify that a `CellGrid` implementation satisfies the
//! contract relied on by the context extractor. Reused by the matrix and
//! sub-matrix test modules.

use crate::context::get_context;
use crate::grid::CellGrid;
use indexmap::IndexSet;

/// Assert that every in-bounds position yields a cell.
pub fn assert_in_bounds_present(grid: &dyn CellGrid, width: usize, height: usize, layers: usize) {
    for z in 0..layers {
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                assert!(
                    grid.cell_at(x, y, z).is_some(),
                    "cell_at({x}, {y}, {z}) missing inside [0, {width}) x [0, {height})"
                );
            }
        }
    }
}

/// Assert that positions just past each edge yield nothing.
pub fn assert_out_of_bounds_absent(grid: &dyn CellGrid, width: usize, height: usize) {
    let (w, h) = (width as i32, height as i32);
    let mut outside = IndexSet::new();
    for x in -1..=w {
        outside.insert((x, -1));
        outside.insert((x, h));
    }
    for y in -1..=h {
        outside.insert((-1, y));
        outside.insert((w, y));
    }
    for (x, y) in outside {
        assert!(
            grid.cell_at(x, y, 0).is_none(),
            "cell_at({x}, {y}, 0) present outside [0, {width}) x [0, {height})"
        );
    }
}

/// Assert that the extracted centre always equals the stored cell.
pub fn assert_context_centre_matches(grid: &dyn CellGrid, width: usize, height: usize, layers: usize) {
    for z in 0..layers {
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let ctx = get_context(grid, width, height, x, y, z);
                assert_eq!(
                    Some(ctx.center()),
                    grid.cell_at(x, y, z),
                    "context centre differs at ({x}, {y}, {z})"
                );
            }
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance(grid: &dyn CellGrid, width: usize, height: usize, layers: usize) {
    assert_in_bounds_present(grid, width, height, layers);
    assert_out_of_bounds_absent(grid, width, height);
    assert_context_centre_matches(grid, width, height, layers);
}
