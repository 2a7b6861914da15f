//! ASCII fixtures for matrices and contexts.
//!
//! Each character names a geometry type:
//!
//! | char | geometry |
//! |------|----------|
//! | `.`  | air |
//! | `#`  | solid |
//! | `-`  | platform |
//! | `g`  | glass |
//! | `e`  | shortcut entrance |
//! | `2`..`5` | slopes by id |

use strata_core::{Coords, Feature, GeoType, RunCell};
use strata_space::{Context, LevelMatrix};

/// Map a fixture character to its geometry. Panics on unknown characters.
pub fn geo_from_char(ch: char) -> GeoType {
    match ch {
        '.' => GeoType::Air,
        '#' => GeoType::Solid,
        '-' => GeoType::Platform,
        'g' => GeoType::Glass,
        'e' => GeoType::ShortcutEntrance,
        '2' => GeoType::SlopeNE,
        '3' => GeoType::SlopeNW,
        '4' => GeoType::SlopeES,
        '5' => GeoType::SlopeSW,
        other => panic!("unknown fixture char {other:?}"),
    }
}

/// Build a matrix whose first layer is drawn by `rows`; the other two
/// layers are air.
///
/// ```
/// use strata_core::{Coords, GeoType};
/// use strata_test_utils::matrix_from_rows;
///
/// let m = matrix_from_rows(&["#.", ".#"]);
/// assert_eq!(m.get(Coords::new(1, 1, 0)).unwrap().geo, GeoType::Solid);
/// ```
pub fn matrix_from_rows(rows: &[&str]) -> LevelMatrix {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut m = LevelMatrix::new(width, height, [RunCell::default(); 3])
        .expect("fixture must not be empty");
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "ragged fixture row {y}");
        for (x, ch) in row.chars().enumerate() {
            m.set(Coords::new(x as i32, y as i32, 0), RunCell::new(geo_from_char(ch)))
                .expect("fixture cell in bounds");
        }
    }
    m
}

/// Build a context from three rows of three characters.
pub fn context_from_rows(rows: [&str; 3]) -> Context {
    let mut cells = [[RunCell::default(); 3]; 3];
    for (r, row) in rows.iter().enumerate() {
        let chars: Vec<char> = row.chars().collect();
        assert_eq!(chars.len(), 3, "context row {r} must have 3 cells");
        for (c, ch) in chars.into_iter().enumerate() {
            cells[r][c] = RunCell::new(geo_from_char(ch));
        }
    }
    Context::new(cells)
}

/// `ctx` with `feature` raised on the cell at `(row, col)`.
pub fn flag(ctx: Context, row: usize, col: usize, feature: Feature) -> Context {
    let mut cells = *ctx.cells();
    cells[row][col].enable(feature);
    Context::new(cells)
}

/// Eight solid neighbours around an air centre.
pub fn solid_ring() -> Context {
    context_from_rows(["###", "#.#", "###"])
}
