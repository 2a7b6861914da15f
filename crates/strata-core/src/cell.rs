//! Dense runtime cells and their sparse persisted form.

use smallvec::SmallVec;

use crate::error::CellError;
use crate::geo::{Feature, GeoType};
use crate::stackables::{Stackables, STACKABLE_COUNT};

/// A terrain cell as held in memory while editing.
///
/// Equality compares the geometry and all stackable flags.
///
/// # Examples
///
/// ```
/// use strata_core::{Feature, GeoType, RunCell};
///
/// let cell = RunCell::new(GeoType::Solid).with_feature(Feature::CrackedTerrain);
/// assert!(cell.has(Feature::CrackedTerrain));
/// assert_ne!(cell, RunCell::new(GeoType::Solid));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RunCell {
    /// Geometry type.
    pub geo: GeoType,
    /// Stackable feature flags.
    pub stackables: Stackables,
}

impl RunCell {
    /// A cell of the given geometry with no features.
    pub const fn new(geo: GeoType) -> Self {
        Self {
            geo,
            stackables: Stackables::empty(),
        }
    }

    /// This cell with `feature` raised.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.enable(feature);
        self
    }

    /// Whether `feature` is raised.
    pub fn has(&self, feature: Feature) -> bool {
        self.stackables.get(feature.index())
    }

    /// Raise `feature`.
    pub fn enable(&mut self, feature: Feature) {
        self.stackables.set(feature.index(), true);
    }

    /// Clear `feature`.
    pub fn disable(&mut self, feature: Feature) {
        self.stackables.set(feature.index(), false);
    }

    /// Set `feature` to `on`.
    pub fn toggle_when(&mut self, feature: Feature, on: bool) {
        self.stackables.set(feature.index(), on);
    }
}

/// Sparse form of a [`RunCell`] used for export and persistence.
///
/// Holds the raw geometry id and the ascending indices of raised flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Raw geometry id.
    pub geo: i32,
    /// Raised stackable indices, ascending.
    pub stackables: SmallVec<[u8; 8]>,
}

impl From<&RunCell> for Cell {
    fn from(cell: &RunCell) -> Self {
        Self {
            geo: cell.geo.id(),
            // Indices are below STACKABLE_COUNT, so they fit in a u8.
            stackables: cell.stackables.iter_set().map(|i| i as u8).collect(),
        }
    }
}

impl From<RunCell> for Cell {
    fn from(cell: RunCell) -> Self {
        Self::from(&cell)
    }
}

impl TryFrom<&Cell> for RunCell {
    type Error = CellError;

    fn try_from(cell: &Cell) -> Result<Self, Self::Error> {
        let geo = GeoType::try_from(cell.geo)?;
        let mut stackables = Stackables::empty();
        for &index in &cell.stackables {
            let index = usize::from(index);
            if index >= STACKABLE_COUNT {
                return Err(CellError::StackableOutOfRange { index });
            }
            stackables.set(index, true);
        }
        Ok(Self { geo, stackables })
    }
}

impl TryFrom<Cell> for RunCell {
    type Error = CellError;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        Self::try_from(&cell)
    }
}
