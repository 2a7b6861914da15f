//! Proptest strategies for cell-model types.

use proptest::prelude::*;
use strata_core::{GeoType, RunCell, Stackables, STACKABLE_COUNT};

/// Any geometry type.
pub fn arb_geo() -> impl Strategy<Value = GeoType> {
    prop::sample::select(GeoType::ALL.to_vec())
}

/// Any flag set, including the reserved index 0.
pub fn arb_stackables() -> impl Strategy<Value = Stackables> {
    prop::collection::vec(0usize..STACKABLE_COUNT, 0..8)
        .prop_map(|ids| ids.into_iter().collect::<Stackables>())
}

/// Any runtime cell.
pub fn arb_run_cell() -> impl Strategy<Value = RunCell> {
    (arb_geo(), arb_stackables()).prop_map(|(geo, stackables)| RunCell { geo, stackables })
}
