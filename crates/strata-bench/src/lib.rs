//! Benchmark levels for the Strata level editor core.
//!
//! Provides deterministic pre-built levels for benchmarking:
//!
//! - [`reference_level`]: 100x100 level with mixed geometry and features
//! - [`stress_level`]: 316x316 level (~100K positions) for stress testing
//! - [`edit_positions`]: deterministic edit targets via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_core::{Coords, Feature, GeoType, RunCell};
use strata_space::{LevelMatrix, MatrixError};

/// Build a reference benchmark level: 100x100, three layers.
///
/// Roughly half the front-layer cells are solid; every seventh cell
/// carries a feature, so inference has real work on every row.
pub fn reference_level(seed: u64) -> Result<LevelMatrix, MatrixError> {
    generated_level(100, 100, seed)
}

/// Build a stress benchmark level: 316x316.
///
/// Same generator as [`reference_level`] at 10x the cell count.
pub fn stress_level(seed: u64) -> Result<LevelMatrix, MatrixError> {
    generated_level(316, 316, seed)
}

/// Generate a level with deterministic pseudo-random content.
pub fn generated_level(
    width: usize,
    height: usize,
    seed: u64,
) -> Result<LevelMatrix, MatrixError> {
    const FEATURES: [Feature; 5] = [
        Feature::CrackedTerrain,
        Feature::ShortcutPath,
        Feature::ShortcutEntrance,
        Feature::HorizontalPole,
        Feature::Waterfall,
    ];
    let mut cells = Vec::with_capacity(width * height * 3);
    for i in 0..(width * height * 3) as u64 {
        let h = hash(seed, i);
        let geo = if h % 2 == 0 {
            GeoType::Solid
        } else {
            GeoType::Air
        };
        let mut cell = RunCell::new(geo);
        if h % 7 == 0 {
            cell.enable(FEATURES[((h >> 8) % FEATURES.len() as u64) as usize]);
        }
        cells.push(cell);
    }
    LevelMatrix::from_cells(width, height, cells)
}

/// Generate `n` deterministic front-layer positions inside a level.
pub fn edit_positions(width: usize, height: usize, n: usize, seed: u64) -> Vec<Coords> {
    (0..n as u64)
        .map(|i| {
            let h = hash(seed, i);
            let x = (h % width as u64) as i32;
            let y = ((h >> 20) % height as u64) as i32;
            Coords::new(x, y, 0)
        })
        .collect()
}

fn hash(seed: u64, i: u64) -> u64 {
    let x = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407));
    x ^ (x >> 33)
}
