//! The geometry editor: a level matrix with its undo history.

use std::ops::RangeInclusive;

use indexmap::IndexMap;
use strata_core::{Coords, Feature, GeoType, RunCell};
use strata_gram::{
    apply_next, apply_previous, CellAction, GeoAction, Gram, GroupAction, RectAction,
};
use strata_infer::{feature_placeable_on, resolve_slope, resolve_stackable_with, VariantIndex};
use strata_space::{get_context, resize, resize_edges, Context, LevelMatrix, Rect};

use crate::config::EditorConfig;
use crate::error::EditError;

/// Footprint of a brush stamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrushShape {
    /// Every cell within `radius` on both axes.
    #[default]
    Square,
    /// Cells touched by a circle of `radius` cells around the centre
    /// cell's midpoint.
    Circle,
}

impl BrushShape {
    /// Whether the cell at offset `(dx, dy)` from the centre is painted.
    pub fn covers(self, dx: i64, dy: i64, radius: u32) -> bool {
        let r = i128::from(radius);
        let (dx, dy) = (i128::from(dx), i128::from(dy));
        if dx.abs() > r || dy.abs() > r {
            return false;
        }
        match self {
            Self::Square => true,
            Self::Circle => {
                // Doubled so the half-cell offsets stay integral.
                let ax = (2 * dx.abs() - 1).max(0);
                let ay = (2 * dy.abs() - 1).max(0);
                ax * ax + ay * ay <= 4 * r * r
            }
        }
    }
}

/// Positions along one axis of length `len` that a brush of `radius`
/// around `center` can reach. Empty when the brush misses the axis.
pub(crate) fn brush_span(center: i32, radius: u32, len: usize) -> RangeInclusive<i32> {
    let c = i64::from(center);
    let r = i64::from(radius);
    let lo = (c - r).max(0);
    let hi = (c + r).min(i64::try_from(len).unwrap_or(i64::MAX) - 1);
    if lo > hi {
        return 1..=0;
    }
    let clamp = |v: i64| i32::try_from(v).unwrap_or(i32::MAX);
    clamp(lo)..=clamp(hi)
}

/// Editing session over one level's geometry.
///
/// Every successful edit writes the matrix and records one history
/// entry; [`undo`](Self::undo) and [`redo`](Self::redo) replay those
/// entries. Drag edits are coalesced into a single entry between
/// [`begin_stroke`](Self::begin_stroke) and
/// [`end_stroke`](Self::end_stroke).
///
/// # Examples
///
/// ```
/// use strata_core::{Coords, GeoType, RunCell};
/// use strata_editor::{EditorConfig, GeoEditor};
///
/// let mut ed = GeoEditor::new(4, 4, EditorConfig::default()).unwrap();
/// let at = Coords::new(1, 1, 0);
/// assert!(ed.set_cell(at, RunCell::default()));
/// assert!(ed.undo());
/// assert_eq!(ed.matrix().get(at).unwrap().geo, GeoType::Solid);
/// ```
#[derive(Debug)]
pub struct GeoEditor {
    matrix: LevelMatrix,
    gram: Gram<GeoAction>,
    config: EditorConfig,
    stroke: Option<IndexMap<Coords, CellAction>>,
}

// Compile-time assertion: a host may build an editor on a loader thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<GeoEditor>();
    }
};

impl GeoEditor {
    /// A new level whose layers are filled from `config.layer_fill`.
    pub fn new(width: usize, height: usize, config: EditorConfig) -> Result<Self, EditError> {
        let matrix = LevelMatrix::new(width, height, config.layer_fill)?;
        Self::from_matrix(matrix, config)
    }

    /// Edit an existing matrix.
    pub fn from_matrix(matrix: LevelMatrix, config: EditorConfig) -> Result<Self, EditError> {
        let limit = config.geo_limit()?;
        Ok(Self {
            matrix,
            gram: Gram::bounded(limit),
            config,
            stroke: None,
        })
    }

    /// The level geometry.
    pub fn matrix(&self) -> &LevelMatrix {
        &self.matrix
    }

    /// The undo history.
    pub fn gram(&self) -> &Gram<GeoAction> {
        &self.gram
    }

    /// The active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Give up the editor, keeping the matrix.
    pub fn into_matrix(self) -> LevelMatrix {
        self.matrix
    }

    /// The 3x3 neighbourhood around `coords` on its layer.
    pub fn context_at(&self, coords: Coords) -> Context {
        get_context(
            &self.matrix,
            self.matrix.width(),
            self.matrix.height(),
            coords.x,
            coords.y,
            coords.z,
        )
    }

    // ── Single-cell edits ───────────────────────────────────────

    /// Write `cell` at `coords` and record it.
    ///
    /// Returns `false`, recording nothing, when `coords` is outside the
    /// level or the cell already holds `cell`. A pending stroke is
    /// committed first.
    pub fn set_cell(&mut self, coords: Coords, cell: RunCell) -> bool {
        self.end_stroke();
        match self.write(coords, cell) {
            Some(action) => {
                self.gram.record(GeoAction::Cell(action));
                true
            }
            None => false,
        }
    }

    /// Turn the cell at `coords` into the slope its solid neighbours
    /// call for. Features on the cell are kept.
    ///
    /// Returns `false` when no slope fits.
    pub fn place_slope(&mut self, coords: Coords) -> bool {
        self.end_stroke();
        let Some(current) = self.matrix.get(coords).copied() else {
            return false;
        };
        let Some(geo) = resolve_slope(&self.context_at(coords)) else {
            tracing::debug!(%coords, "slope rejected: no matching corner");
            return false;
        };
        self.set_cell(coords, RunCell { geo, ..current })
    }

    /// Raise or clear `feature` at `coords`.
    ///
    /// Shortcut-family features are refused off the front layer. Changing
    /// a shortcut entrance also clears the cell's geometry to air. Any
    /// entrance on or next to `coords` that now resolves to a direction
    /// takes [`GeoType::ShortcutEntrance`] in the same history entry.
    pub fn toggle_feature(&mut self, coords: Coords, feature: Feature, on: bool) -> bool {
        self.end_stroke();
        let Some(layer) = coords.layer() else {
            return false;
        };
        if !feature_placeable_on(feature, layer) {
            tracing::debug!(%coords, %feature, "feature not placeable on layer {layer}");
            return false;
        }
        let Some(current) = self.matrix.get(coords).copied() else {
            return false;
        };
        if current.has(feature) == on {
            return false;
        }
        let mut next = current;
        next.toggle_when(feature, on);
        if feature == Feature::ShortcutEntrance {
            next.geo = GeoType::Air;
        }
        let Some(action) = self.write(coords, next) else {
            return false;
        };
        let mut actions = vec![action];
        self.settle_entrances(coords, &mut actions);
        self.record_edit(actions)
    }

    // ── Area edits ──────────────────────────────────────────────

    /// Set the geometry of every cell of `rect` on layer `z`, keeping
    /// features. The part outside the level is ignored.
    ///
    /// Records one rectangle entry. Returns `false` if nothing changed.
    pub fn fill_rect(&mut self, rect: Rect, z: usize, geo: GeoType) -> bool {
        self.end_stroke();
        let Some((clipped, previous)) = self.matrix.extract(rect, z) else {
            return false;
        };
        let mut next = previous.clone();
        for (x, y, cell) in previous.iter() {
            next.set(x, y, RunCell { geo, ..*cell });
        }
        if next == previous {
            return false;
        }
        let position = Coords::new(clipped.x, clipped.y, z);
        self.matrix.paste(&next, position);
        self.gram.record(GeoAction::Rect(RectAction {
            position,
            previous,
            next,
        }));
        true
    }

    /// Stamp `geo` around `center` with the given brush, keeping
    /// features. Records one group entry.
    pub fn paint_brush(&mut self, center: Coords, radius: u32, geo: GeoType, shape: BrushShape) -> bool {
        self.end_stroke();
        let xs = brush_span(center.x, radius, self.matrix.width());
        let mut actions = Vec::new();
        for y in brush_span(center.y, radius, self.matrix.height()) {
            for x in xs.clone() {
                let dx = i64::from(x) - i64::from(center.x);
                let dy = i64::from(y) - i64::from(center.y);
                if !shape.covers(dx, dy, radius) {
                    continue;
                }
                let at = Coords::new(x, y, center.z);
                let Some(current) = self.matrix.get(at).copied() else {
                    continue;
                };
                if let Some(action) = self.write(at, RunCell { geo, ..current }) {
                    actions.push(action);
                }
            }
        }
        self.record_group(actions)
    }

    // ── Strokes ─────────────────────────────────────────────────

    /// Start coalescing edits. A stroke already in progress is committed
    /// first.
    pub fn begin_stroke(&mut self) {
        self.end_stroke();
        self.stroke = Some(IndexMap::new());
    }

    /// Whether a stroke is in progress.
    pub fn in_stroke(&self) -> bool {
        self.stroke.is_some()
    }

    /// Write `cell` as part of the current stroke.
    ///
    /// Without an active stroke this is [`set_cell`](Self::set_cell).
    /// Revisiting a position keeps its first before image and its last
    /// after image.
    pub fn stroke_set(&mut self, coords: Coords, cell: RunCell) -> bool {
        if self.stroke.is_none() {
            return self.set_cell(coords, cell);
        }
        let Some(action) = self.write(coords, cell) else {
            return false;
        };
        if let Some(stroke) = self.stroke.as_mut() {
            stroke
                .entry(coords)
                .and_modify(|a| a.next = action.next)
                .or_insert(action);
        }
        true
    }

    /// Commit the current stroke as one group entry.
    ///
    /// Positions that ended where they started are dropped. Returns
    /// `false` when nothing is left to record.
    pub fn end_stroke(&mut self) -> bool {
        let Some(stroke) = self.stroke.take() else {
            return false;
        };
        let touched = stroke.len();
        let actions: Vec<CellAction> = stroke.into_values().filter(|a| !a.is_noop()).collect();
        tracing::trace!(touched, kept = actions.len(), "stroke committed");
        self.record_group(actions)
    }

    // ── History ─────────────────────────────────────────────────

    /// Revert the current entry and step back. Commits a pending stroke
    /// first.
    pub fn undo(&mut self) -> bool {
        self.end_stroke();
        match self.gram.current() {
            Some(action) => {
                apply_previous(action, &mut self.matrix);
                self.gram.undo()
            }
            None => false,
        }
    }

    /// Step forward and re-apply the new current entry.
    pub fn redo(&mut self) -> bool {
        self.end_stroke();
        if !self.gram.redo() {
            return false;
        }
        if let Some(action) = self.gram.current() {
            apply_next(action, &mut self.matrix);
        }
        true
    }

    // ── Resizing ────────────────────────────────────────────────

    /// Resize keeping the top-left overlap. New cells take the configured
    /// layer fill. History is cleared.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> Result<(), EditError> {
        let resized = resize(&self.matrix, new_width, new_height, &self.config.layer_fill)?;
        self.replace_matrix(resized);
        Ok(())
    }

    /// Grow or shrink each edge. History is cleared.
    pub fn resize_edges(&mut self, left: i32, top: i32, right: i32, bottom: i32) -> Result<(), EditError> {
        let resized = resize_edges(&self.matrix, left, top, right, bottom, &self.config.layer_fill)?;
        self.replace_matrix(resized);
        Ok(())
    }

    fn replace_matrix(&mut self, matrix: LevelMatrix) {
        self.stroke = None;
        tracing::debug!(
            from_width = self.matrix.width(),
            from_height = self.matrix.height(),
            width = matrix.width(),
            height = matrix.height(),
            dropped = self.gram.len(),
            "matrix resized, history cleared"
        );
        self.matrix = matrix;
        self.gram.clear();
    }

    // ── Inference ───────────────────────────────────────────────

    /// The graphic variant for `feature` at `coords`, or `None` if the
    /// cell does not carry it.
    pub fn variant_at(&self, coords: Coords, feature: Feature) -> Option<VariantIndex> {
        if !self.matrix.get(coords)?.has(feature) {
            return None;
        }
        resolve_stackable_with(feature, &self.context_at(coords), self.config.entrance_rule)
    }

    // ── Internals ───────────────────────────────────────────────

    fn write(&mut self, coords: Coords, cell: RunCell) -> Option<CellAction> {
        let slot = self.matrix.get_mut(coords)?;
        if *slot == cell {
            return None;
        }
        let previous = std::mem::replace(slot, cell);
        Some(CellAction::new(coords, previous, cell))
    }

    /// Entrances at `around` or orthogonally next to it that resolve to
    /// a direction take the entrance geometry.
    fn settle_entrances(&mut self, around: Coords, actions: &mut Vec<CellAction>) {
        let candidates = [
            around,
            around.offset(0, -1),
            around.offset(1, 0),
            around.offset(0, 1),
            around.offset(-1, 0),
        ];
        for at in candidates {
            let Some(current) = self.matrix.get(at).copied() else {
                continue;
            };
            if current.geo == GeoType::ShortcutEntrance {
                continue;
            }
            let directional = self
                .variant_at(at, Feature::ShortcutEntrance)
                .is_some_and(VariantIndex::is_entrance_direction);
            if !directional {
                continue;
            }
            let settled = RunCell {
                geo: GeoType::ShortcutEntrance,
                ..current
            };
            if let Some(action) = self.write(at, settled) {
                tracing::trace!(%at, "entrance settled");
                actions.push(action);
            }
        }
    }

    fn record_edit(&mut self, mut actions: Vec<CellAction>) -> bool {
        if actions.len() == 1 {
            if let Some(action) = actions.pop() {
                self.gram.record(GeoAction::Cell(action));
                return true;
            }
        }
        self.record_group(actions)
    }

    fn record_group(&mut self, actions: Vec<CellAction>) -> bool {
        match GroupAction::new(actions) {
            Some(group) => {
                self.gram.record(GeoAction::Group(group));
                true
            }
            None => false,
        }
    }
}
