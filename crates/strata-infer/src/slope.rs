//! Slope orientation from solid neighbours.

use strata_core::{GeoType, RunCell};
use strata_space::Context;

/// Pick the slope that fits the L-corner formed by two adjacent solid
/// orthogonal neighbours.
///
/// Returns `None` when the neighbours do not form exactly one L-corner
/// or when any orthogonal neighbour is already a slope; callers treat
/// that as a rejected placement.
///
/// # Examples
///
/// ```
/// use strata_core::{GeoType, RunCell};
/// use strata_infer::resolve_slope;
/// use strata_space::Context;
///
/// let s = RunCell::new(GeoType::Solid);
/// let a = RunCell::default();
/// // Solid to the north and west.
/// let ctx = Context::new([[a, s, a], [s, a, a], [a, a, a]]);
/// assert_eq!(resolve_slope(&ctx), Some(GeoType::SlopeES));
/// ```
pub fn resolve_slope(ctx: &Context) -> Option<GeoType> {
    if ctx.orthogonal().iter().any(|c| c.geo.is_slope()) {
        return None;
    }
    let [n, e, s, w] = ctx.orthogonal().map(|c: &RunCell| c.geo == GeoType::Solid);
    match (n, e, s, w) {
        (false, false, true, true) => Some(GeoType::SlopeNE),
        (false, true, true, false) => Some(GeoType::SlopeNW),
        (true, false, false, true) => Some(GeoType::SlopeES),
        (true, true, false, false) => Some(GeoType::SlopeSW),
        _ => None,
    }
}
