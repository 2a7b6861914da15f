//! Criterion benchmarks for history recording and replay.

use std::num::NonZeroUsize;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_bench::{edit_positions, reference_level};
use strata_core::{GeoType, RunCell};
use strata_editor::{BrushShape, EditorConfig, GeoEditor};
use strata_gram::{CellAction, GeoAction, Gram};

/// Benchmark: Record 1000 cell actions into a history capped at 40.
fn bench_record_bounded(c: &mut Criterion) {
    let positions = edit_positions(100, 100, 1000, 7);
    let limit = NonZeroUsize::new(40).unwrap();

    c.bench_function("record_1000_bounded_40", |b| {
        b.iter(|| {
            let mut gram = Gram::bounded(limit);
            for &at in &positions {
                let a = CellAction::new(at, RunCell::default(), RunCell::new(GeoType::Solid));
                gram.record(GeoAction::Cell(a));
            }
            black_box(gram.len());
        });
    });
}

/// Benchmark: Walk a full history back and forth.
fn bench_undo_redo_walk(c: &mut Criterion) {
    let mut gram = Gram::new();
    for at in edit_positions(100, 100, 1000, 7) {
        let a = CellAction::new(at, RunCell::default(), RunCell::new(GeoType::Solid));
        gram.record(GeoAction::Cell(a));
    }

    c.bench_function("undo_redo_walk_1000", |b| {
        b.iter(|| {
            while gram.undo() {}
            while gram.redo() {}
            black_box(gram.cursor_index());
        });
    });
}

/// Benchmark: Paint 100 brush stamps on a 100x100 level, then undo them.
fn bench_editor_brush_undo(c: &mut Criterion) {
    let level = reference_level(42).unwrap();
    let positions = edit_positions(100, 100, 100, 11);
    let config = EditorConfig {
        geo_history_limit: 100,
        ..EditorConfig::default()
    };

    c.bench_function("editor_brush_undo_100", |b| {
        b.iter(|| {
            let mut ed = GeoEditor::from_matrix(level.clone(), config.clone()).unwrap();
            for &at in &positions {
                ed.paint_brush(at, 2, GeoType::Glass, BrushShape::Circle);
            }
            while ed.undo() {}
            black_box(ed.matrix().width());
        });
    });
}

criterion_group!(
    benches,
    bench_record_bounded,
    bench_undo_redo_walk,
    bench_editor_brush_undo
);
criterion_main!(benches);
