//! Replaying recorded actions onto a matrix.
//!
//! The matrix may have been resized since an action was recorded, so
//! every write is bounds-checked and out-of-range cells are skipped.

use strata_space::{LevelMatrix, TileMatrix};

use crate::action::{CellAction, GeoAction};
use crate::tile::{TileAction, TileCellAction};

/// Restore the before image of `action`. Returns the number of cells
/// written.
///
/// Group members are restored last to first, so a cell edited twice in
/// one group ends at its original value.
pub fn apply_previous(action: &GeoAction, matrix: &mut LevelMatrix) -> usize {
    match action {
        GeoAction::Cell(a) => write_cell(a, matrix, true),
        GeoAction::Rect(a) => matrix.paste(&a.previous, a.position),
        GeoAction::Group(g) => g
            .actions()
            .iter()
            .rev()
            .map(|a| write_cell(a, matrix, true))
            .sum(),
    }
}

/// Apply the after image of `action`. Returns the number of cells
/// written.
pub fn apply_next(action: &GeoAction, matrix: &mut LevelMatrix) -> usize {
    match action {
        GeoAction::Cell(a) => write_cell(a, matrix, false),
        GeoAction::Rect(a) => matrix.paste(&a.next, a.position),
        GeoAction::Group(g) => g
            .actions()
            .iter()
            .map(|a| write_cell(a, matrix, false))
            .sum(),
    }
}

fn write_cell(action: &CellAction, matrix: &mut LevelMatrix, previous: bool) -> usize {
    let Some(slot) = matrix.get_mut(action.position) else {
        return 0;
    };
    *slot = if previous { action.previous } else { action.next };
    1
}

/// Restore the before image of a tile action. Returns the number of
/// cells written.
pub fn apply_tile_previous(action: &TileAction, tiles: &mut TileMatrix) -> usize {
    match action {
        TileAction::Cell(_, a) => write_tile(a, tiles, true),
        TileAction::Group(g) => g
            .actions()
            .iter()
            .rev()
            .map(|a| write_tile(a, tiles, true))
            .sum(),
    }
}

/// Apply the after image of a tile action. Returns the number of cells
/// written.
pub fn apply_tile_next(action: &TileAction, tiles: &mut TileMatrix) -> usize {
    match action {
        TileAction::Cell(_, a) => write_tile(a, tiles, false),
        TileAction::Group(g) => g
            .actions()
            .iter()
            .map(|a| write_tile(a, tiles, false))
            .sum(),
    }
}

fn write_tile(action: &TileCellAction, tiles: &mut TileMatrix, previous: bool) -> usize {
    let cell = if previous {
        &action.previous
    } else {
        &action.next
    };
    match tiles.set(action.position, cell.clone()) {
        Ok(_) => 1,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{GroupAction, RectAction};
    use crate::tile::{TileEditKind, TileGroup};
    use strata_core::{Coords, GeoType, RunCell, TileCell, TileRef};
    use strata_space::SubMatrix;

    fn solid() -> RunCell {
        RunCell::new(GeoType::Solid)
    }

    #[test]
    fn cell_round_trip() {
        let mut m = LevelMatrix::filled(2, 2, GeoType::Air).unwrap();
        let c = Coords::new(1, 0, 0);
        let a = GeoAction::Cell(CellAction::new(c, RunCell::default(), solid()));
        assert_eq!(apply_next(&a, &mut m), 1);
        assert_eq!(m.get(c), Some(&solid()));
        assert_eq!(apply_previous(&a, &mut m), 1);
        assert_eq!(m.get(c), Some(&RunCell::default()));
    }

    #[test]
    fn stale_positions_are_skipped() {
        let mut m = LevelMatrix::filled(2, 2, GeoType::Air).unwrap();
        let before = m.clone();
        let a = GeoAction::Cell(CellAction::new(Coords::new(5, 5, 0), RunCell::default(), solid()));
        assert_eq!(apply_next(&a, &mut m), 0);
        assert_eq!(m, before);
    }

    #[test]
    fn rect_uses_layer_of_position() {
        let mut m = LevelMatrix::filled(3, 3, GeoType::Air).unwrap();
        let a = GeoAction::Rect(RectAction {
            position: Coords::new(1, 1, 2),
            previous: SubMatrix::new(2, 2, RunCell::default()).unwrap(),
            next: SubMatrix::new(2, 2, solid()).unwrap(),
        });
        assert_eq!(apply_next(&a, &mut m), 4);
        assert_eq!(m.get(Coords::new(2, 2, 2)), Some(&solid()));
        assert_eq!(m.get(Coords::new(2, 2, 1)), Some(&RunCell::default()));
        assert_eq!(m.get(Coords::new(0, 0, 2)), Some(&RunCell::default()));
        apply_previous(&a, &mut m);
        assert!(m.iter().all(|(c, cell)| c.z != 2 || cell.geo == GeoType::Air));
    }

    #[test]
    fn group_undo_restores_first_image() {
        let mut m = LevelMatrix::filled(1, 1, GeoType::Air).unwrap();
        let c = Coords::new(0, 0, 0);
        let glass = RunCell::new(GeoType::Glass);
        let g = GroupAction::new(vec![
            CellAction::new(c, RunCell::default(), solid()),
            CellAction::new(c, solid(), glass),
        ])
        .unwrap();
        let a = GeoAction::Group(g);
        assert_eq!(apply_next(&a, &mut m), 2);
        assert_eq!(m.get(c), Some(&glass));
        apply_previous(&a, &mut m);
        assert_eq!(m.get(c), Some(&RunCell::default()));
    }

    // ── Tiles ───────────────────────────────────────────────────

    #[test]
    fn tile_group_round_trip() {
        let mut tiles = TileMatrix::new(3, 1).unwrap();
        let head_at = Coords::new(0, 0, 0);
        let head = TileCell::Head {
            tile: TileRef::new(0, 3),
            name: "Pipe".into(),
        };
        let body = TileCell::Body { head: head_at };
        let g = TileGroup::new(
            TileEditKind::Place,
            vec![
                TileCellAction::new(head_at, TileCell::Default, head.clone()),
                TileCellAction::new(Coords::new(1, 0, 0), TileCell::Default, body.clone()),
                TileCellAction::new(Coords::new(9, 0, 0), TileCell::Default, body),
            ],
        )
        .unwrap();
        let a = TileAction::Group(g);
        assert_eq!(a.kind(), TileEditKind::Place);
        assert_eq!(apply_tile_next(&a, &mut tiles), 2);
        assert_eq!(tiles.get(head_at), Some(&head));
        assert_eq!(apply_tile_previous(&a, &mut tiles), 2);
        assert_eq!(tiles.occupied().count(), 0);
    }
}
