use proptest::prelude::*;
use strata_core::{Coords, RunCell};
use strata_gram::{apply_next, apply_previous, CellAction, GeoAction, Gram};
use strata_space::{resize, LevelMatrix};
use strata_test_utils::{arb_run_cell, matrix_from_rows};

fn undo(gram: &mut Gram<GeoAction>, m: &mut LevelMatrix) -> bool {
    match gram.current() {
        Some(a) => {
            apply_previous(a, m);
            gram.undo()
        }
        None => false,
    }
}

fn redo(gram: &mut Gram<GeoAction>, m: &mut LevelMatrix) -> bool {
    if !gram.redo() {
        return false;
    }
    if let Some(a) = gram.current() {
        apply_next(a, m);
    }
    true
}

proptest! {
    #[test]
    fn undo_all_restores_original(
        edits in prop::collection::vec((0i32..4, 0i32..3, 0usize..3, arb_run_cell()), 1..30),
    ) {
        let original = matrix_from_rows(&["#..#", ".##.", "#..#"]);
        let mut m = original.clone();
        let mut gram = Gram::new();
        for (x, y, z, cell) in edits {
            let c = Coords::new(x, y, z);
            let previous = m.set(c, cell).unwrap();
            gram.record(GeoAction::Cell(CellAction::new(c, previous, cell)));
        }
        let edited = m.clone();

        while undo(&mut gram, &mut m) {}
        prop_assert_eq!(&m, &original);

        while redo(&mut gram, &mut m) {}
        prop_assert_eq!(&m, &edited);
    }
}

#[test]
fn undo_after_shrink_skips_lost_cells() {
    let mut m = matrix_from_rows(&["...", "..."]);
    let mut gram = Gram::new();
    let far = Coords::new(2, 1, 0);
    let solid = RunCell::new(strata_core::GeoType::Solid);
    let previous = m.set(far, solid).unwrap();
    gram.record(GeoAction::Cell(CellAction::new(far, previous, solid)));

    let mut small = resize(&m, 2, 1, &[RunCell::default(); 3]).unwrap();
    assert!(undo(&mut gram, &mut small));
    assert!(small.iter().all(|(_, c)| *c == RunCell::default()));
    assert!(redo(&mut gram, &mut small));
}
