//! Geometry edit actions.

use strata_core::{Coords, RunCell};
use strata_space::SubMatrix;

/// A single-cell edit: the cell before and after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellAction {
    /// Edited cell.
    pub position: Coords,
    /// Cell value before the edit.
    pub previous: RunCell,
    /// Cell value after the edit.
    pub next: RunCell,
}

impl CellAction {
    /// Construct a cell action.
    pub fn new(position: Coords, previous: RunCell, next: RunCell) -> Self {
        Self {
            position,
            previous,
            next,
        }
    }

    /// `true` when the edit changed nothing.
    pub fn is_noop(&self) -> bool {
        self.previous == self.next
    }
}

/// A rectangular edit on one layer.
///
/// Both images have the same dimensions and are anchored with their
/// top-left corner at `position`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RectAction {
    /// Top-left corner; `z` selects the layer.
    pub position: Coords,
    /// Block before the edit.
    pub previous: SubMatrix,
    /// Block after the edit.
    pub next: SubMatrix,
}

/// Several cell edits undone and redone as one step.
///
/// Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupAction {
    actions: Vec<CellAction>,
}

impl GroupAction {
    /// Group `actions`, or `None` if the list is empty.
    pub fn new(actions: Vec<CellAction>) -> Option<Self> {
        if actions.is_empty() {
            None
        } else {
            Some(Self { actions })
        }
    }

    /// Member edits in recording order.
    pub fn actions(&self) -> &[CellAction] {
        &self.actions
    }

    /// Position of the first member.
    pub fn position(&self) -> Coords {
        self.actions[0].position
    }
}

/// One entry in the geometry history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeoAction {
    /// Single-cell edit.
    Cell(CellAction),
    /// Rectangular edit.
    Rect(RectAction),
    /// Grouped cell edits.
    Group(GroupAction),
}

impl GeoAction {
    /// Where the edit happened, for highlighting.
    pub fn position(&self) -> Coords {
        match self {
            Self::Cell(a) => a.position,
            Self::Rect(a) => a.position,
            Self::Group(a) => a.position(),
        }
    }
}

impl From<CellAction> for GeoAction {
    fn from(a: CellAction) -> Self {
        Self::Cell(a)
    }
}

impl From<RectAction> for GeoAction {
    fn from(a: RectAction) -> Self {
        Self::Rect(a)
    }
}

impl From<GroupAction> for GeoAction {
    fn from(a: GroupAction) -> Self {
        Self::Group(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::GeoType;

    #[test]
    fn empty_group_rejected() {
        assert_eq!(GroupAction::new(Vec::new()), None);
    }

    #[test]
    fn group_position_is_first_member() {
        let a = CellAction::new(Coords::new(4, 1, 0), RunCell::default(), RunCell::new(GeoType::Solid));
        let b = CellAction::new(Coords::new(0, 0, 2), RunCell::default(), RunCell::default());
        let g = GeoAction::from(GroupAction::new(vec![a, b]).unwrap());
        assert_eq!(g.position(), Coords::new(4, 1, 0));
        assert!(b.is_noop());
        assert!(!a.is_noop());
    }
}
