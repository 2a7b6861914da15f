use proptest::prelude::*;
use strata_core::{Coords, Feature, GeoType, RunCell};
use strata_editor::{BrushShape, EditorConfig, GeoEditor};
use strata_gram::GeoAction;
use strata_infer::VariantIndex;
use strata_space::Rect;
use strata_test_utils::{arb_geo, arb_run_cell, matrix_from_rows};

#[derive(Clone, Debug)]
enum Op {
    Set(Coords, RunCell),
    Fill((i32, i32), (i32, i32), usize, GeoType),
    Brush(Coords, u32, GeoType, BrushShape),
    Stroke(Vec<(Coords, RunCell)>),
    Slope(Coords),
    Begin,
    Drag(Coords, RunCell),
}

fn arb_coords() -> impl Strategy<Value = Coords> {
    (-1i32..6, -1i32..5, 0usize..3).prop_map(|(x, y, z)| Coords::new(x, y, z))
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_coords(), arb_run_cell()).prop_map(|(c, cell)| Op::Set(c, cell)),
        ((-1i32..6, -1i32..5), (-1i32..6, -1i32..5), 0usize..3, arb_geo())
            .prop_map(|(a, b, z, g)| Op::Fill(a, b, z, g)),
        (arb_coords(), 0u32..3, arb_geo(), prop_oneof![Just(BrushShape::Square), Just(BrushShape::Circle)])
            .prop_map(|(c, r, g, s)| Op::Brush(c, r, g, s)),
        prop::collection::vec((arb_coords(), arb_run_cell()), 1..6).prop_map(Op::Stroke),
        arb_coords().prop_map(Op::Slope),
    ]
}

/// Plain edits mixed with strokes that may still be open when the next
/// edit arrives.
fn arb_session_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_op(),
        1 => Just(Op::Begin),
        2 => (arb_coords(), arb_run_cell()).prop_map(|(c, cell)| Op::Drag(c, cell)),
    ]
}

fn run(ed: &mut GeoEditor, op: Op) {
    match op {
        Op::Set(c, cell) => {
            ed.set_cell(c, cell);
        }
        Op::Fill(a, b, z, g) => {
            ed.fill_rect(Rect::from_corners(a, b), z, g);
        }
        Op::Brush(c, r, g, s) => {
            ed.paint_brush(c, r, g, s);
        }
        Op::Stroke(cells) => {
            ed.begin_stroke();
            for (c, cell) in cells {
                ed.stroke_set(c, cell);
            }
            ed.end_stroke();
        }
        Op::Slope(c) => {
            ed.place_slope(c);
        }
        Op::Begin => ed.begin_stroke(),
        Op::Drag(c, cell) => {
            ed.stroke_set(c, cell);
        }
    }
}

fn roomy() -> EditorConfig {
    EditorConfig {
        geo_history_limit: 1000,
        ..EditorConfig::default()
    }
}

proptest! {
    #[test]
    fn undo_everything_restores_level(ops in prop::collection::vec(arb_session_op(), 1..25)) {
        let original = matrix_from_rows(&["#...#", ".#.#.", "..#..", "#####"]);
        let mut ed = GeoEditor::from_matrix(original.clone(), roomy()).unwrap();
        for op in ops {
            run(&mut ed, op);
        }
        ed.end_stroke();
        let edited = ed.matrix().clone();

        while ed.undo() {}
        prop_assert_eq!(ed.matrix(), &original);

        while ed.redo() {}
        prop_assert_eq!(ed.matrix(), &edited);
    }

    #[test]
    fn every_entry_changes_something(ops in prop::collection::vec(arb_op(), 1..15)) {
        let mut ed = GeoEditor::from_matrix(matrix_from_rows(&["#..#", "....", "#..#"]), roomy()).unwrap();
        for op in ops {
            let before = ed.matrix().clone();
            let len = ed.gram().len();
            run(&mut ed, op);
            if ed.gram().len() > len {
                prop_assert_ne!(ed.matrix(), &before);
            }
        }
    }
}

// ── Shortcut workflow ───────────────────────────────────────────

#[test]
fn entrance_follows_path() {
    let m = matrix_from_rows(&["###", "#.#", "#.#"]);
    let mut ed = GeoEditor::from_matrix(m, EditorConfig::default()).unwrap();
    let entrance = Coords::new(1, 1, 0);
    let below = Coords::new(1, 2, 0);

    assert!(ed.toggle_feature(entrance, Feature::ShortcutEntrance, true));
    assert_eq!(ed.variant_at(entrance, Feature::ShortcutEntrance), Some(VariantIndex(26)));

    assert!(ed.toggle_feature(below, Feature::ShortcutPath, true));
    assert_eq!(ed.variant_at(entrance, Feature::ShortcutEntrance), Some(VariantIndex(22)));

    // A second entrance next to the first makes both loose.
    assert!(ed.toggle_feature(below, Feature::ShortcutEntrance, true));
    assert_eq!(ed.variant_at(entrance, Feature::ShortcutEntrance), Some(VariantIndex(26)));

    assert!(ed.undo());
    assert_eq!(ed.variant_at(entrance, Feature::ShortcutEntrance), Some(VariantIndex(22)));
}

#[test]
fn directional_entrance_takes_entrance_geometry() {
    let m = matrix_from_rows(&["###", "#.#", "#.#"]);
    let mut ed = GeoEditor::from_matrix(m, EditorConfig::default()).unwrap();
    let entrance = Coords::new(1, 1, 0);
    let below = Coords::new(1, 2, 0);

    ed.toggle_feature(entrance, Feature::ShortcutEntrance, true);
    assert_eq!(ed.matrix().get(entrance).unwrap().geo, GeoType::Air);

    // The path orients the entrance, which settles in the same entry.
    assert!(ed.toggle_feature(below, Feature::ShortcutPath, true));
    assert_eq!(ed.matrix().get(entrance).unwrap().geo, GeoType::ShortcutEntrance);
    assert!(matches!(ed.gram().current(), Some(GeoAction::Group(g)) if g.actions().len() == 2));

    assert!(ed.undo());
    assert_eq!(ed.matrix().get(entrance).unwrap().geo, GeoType::Air);
    assert!(!ed.matrix().get(below).unwrap().has(Feature::ShortcutPath));

    assert!(ed.redo());
    assert_eq!(ed.matrix().get(entrance).unwrap().geo, GeoType::ShortcutEntrance);
}

#[test]
fn entrance_on_solid_cell_restores_solid() {
    let m = matrix_from_rows(&["###", "###", "#.#"]);
    let mut ed = GeoEditor::from_matrix(m, EditorConfig::default()).unwrap();
    let entrance = Coords::new(1, 1, 0);

    ed.toggle_feature(Coords::new(1, 2, 0), Feature::ShortcutPath, true);
    assert!(ed.toggle_feature(entrance, Feature::ShortcutEntrance, true));
    let cell = ed.matrix().get(entrance).unwrap();
    assert_eq!(cell.geo, GeoType::ShortcutEntrance);
    assert!(cell.has(Feature::ShortcutEntrance));

    assert!(ed.undo());
    assert_eq!(ed.matrix().get(entrance), Some(&RunCell::new(GeoType::Solid)));
}

#[test]
fn loose_entrance_stays_air() {
    let m = matrix_from_rows(&["###", "#.#", "###"]);
    let mut ed = GeoEditor::from_matrix(m, EditorConfig::default()).unwrap();
    let entrance = Coords::new(1, 1, 0);
    assert!(ed.toggle_feature(entrance, Feature::ShortcutEntrance, true));
    assert_eq!(ed.matrix().get(entrance).unwrap().geo, GeoType::Air);
    assert!(matches!(ed.gram().current(), Some(GeoAction::Cell(_))));
}

// ── Strokes ─────────────────────────────────────────────────────

#[test]
fn plain_edit_commits_open_stroke() {
    let m = matrix_from_rows(&["...", "...", "..."]);
    let mut ed = GeoEditor::from_matrix(m.clone(), EditorConfig::default()).unwrap();
    let p = Coords::new(1, 1, 0);

    ed.begin_stroke();
    assert!(ed.stroke_set(p, RunCell::new(GeoType::Solid)));
    assert!(ed.set_cell(p, RunCell::new(GeoType::Glass)));
    assert!(!ed.in_stroke());
    assert_eq!(ed.gram().len(), 2);

    ed.begin_stroke();
    assert!(ed.stroke_set(p, RunCell::new(GeoType::Solid)));
    assert!(ed.fill_rect(Rect::from_corners((1, 1), (1, 1)), 0, GeoType::Glass));
    assert!(!ed.end_stroke());

    while ed.undo() {}
    assert_eq!(ed.matrix().get(p), Some(&RunCell::default()));
    assert_eq!(ed.matrix(), &m);
}

#[test]
fn brush_and_slope_commit_open_stroke() {
    let m = matrix_from_rows(&[".#.", "#..", "..."]);
    let mut ed = GeoEditor::from_matrix(m.clone(), EditorConfig::default()).unwrap();
    let p = Coords::new(2, 2, 0);

    ed.begin_stroke();
    ed.stroke_set(p, RunCell::new(GeoType::Solid));
    assert!(ed.paint_brush(p, 0, GeoType::Glass, BrushShape::Square));
    ed.begin_stroke();
    ed.stroke_set(Coords::new(2, 0, 0), RunCell::new(GeoType::Glass));
    assert!(ed.place_slope(Coords::new(1, 1, 0)));
    assert!(!ed.in_stroke());

    while ed.undo() {}
    assert_eq!(ed.matrix(), &m);
}

// ── Limits and resizing ─────────────────────────────────────────

#[test]
fn history_limit_drops_oldest() {
    let cfg = EditorConfig {
        geo_history_limit: 3,
        ..EditorConfig::default()
    };
    let mut ed = GeoEditor::new(5, 1, cfg).unwrap();
    for x in 0..5 {
        assert!(ed.set_cell(Coords::new(x, 0, 0), RunCell::new(GeoType::Glass)));
    }
    assert_eq!(ed.gram().len(), 3);
    while ed.undo() {}
    let glass: Vec<i32> = ed
        .matrix()
        .iter()
        .filter(|(c, cell)| c.z == 0 && cell.geo == GeoType::Glass)
        .map(|(c, _)| c.x)
        .collect();
    assert_eq!(glass, vec![0, 1]);
}

#[test]
fn resize_then_undo_is_noop() {
    let mut ed = GeoEditor::new(3, 3, EditorConfig::default()).unwrap();
    ed.set_cell(Coords::new(0, 0, 0), RunCell::default());
    ed.resize_edges(0, 0, -1, -1).unwrap();
    assert!(!ed.undo());
    assert_eq!((ed.matrix().width(), ed.matrix().height()), (2, 2));
    assert_eq!(ed.matrix().get(Coords::new(0, 0, 0)), Some(&RunCell::default()));
}
