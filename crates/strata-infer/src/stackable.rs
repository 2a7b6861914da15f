//! Stackable feature variant resolution.
//!
//! Most features map to one fixed graphic. Shortcut entrances and cracked
//! terrain pick a directional variant from their 3x3 neighbourhood; those
//! rules are written as explicit match tables over `(N, E, S, W)`.

use smallvec::SmallVec;
use strata_core::{Feature, GeoType, RunCell};
use strata_space::Context;

use crate::variant::VariantIndex;

/// Generic entrance graphic used whenever no direction can be inferred.
pub const ENTRANCE_LOOSE: VariantIndex = VariantIndex(26);

/// Crack graphic for an isolated crack with no neighbouring cracks.
pub const CRACK_ISOLATED: VariantIndex = VariantIndex(14);

/// Which neighbour flags mark a path leading into a shortcut entrance.
///
/// Two rule sets have been in use. `Current` counts scavenger holes as
/// paths; `Legacy` does not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntranceRule {
    /// Paths are flags 5, 6, 7, 19 and 21.
    #[default]
    Current,
    /// Paths are flags 5, 6, 7 and 19.
    Legacy,
}

impl EntranceRule {
    /// The features XOR-combined to decide whether a neighbour is a path.
    pub fn path_features(self) -> &'static [Feature] {
        static CURRENT: [Feature; 5] = [
            Feature::ShortcutPath,
            Feature::RoomEntrance,
            Feature::CreatureDen,
            Feature::WackAMoleHole,
            Feature::ScavengerHole,
        ];
        match self {
            Self::Current => &CURRENT,
            Self::Legacy => &CURRENT[..4],
        }
    }

    fn is_path(self, cell: &RunCell) -> bool {
        self.path_features()
            .iter()
            .fold(false, |acc, &f| acc ^ cell.has(f))
    }
}

/// The context-free graphic of `feature`.
///
/// Returns `None` for shortcut entrances and cracked terrain, whose
/// graphic depends on neighbours.
pub fn stackable_variant(feature: Feature) -> Option<VariantIndex> {
    let v = match feature {
        Feature::HorizontalPole => 0,
        Feature::VerticalPole => 1,
        Feature::Bathive => 2,
        Feature::ShortcutPath => 3,
        Feature::RoomEntrance => 27,
        Feature::CreatureDen => 28,
        Feature::PlaceRock => 18,
        Feature::PlaceSpear => 29,
        Feature::ForbidFlyChains => 30,
        Feature::GarbageWormHole => 16,
        Feature::Waterfall => 19,
        Feature::WackAMoleHole => 20,
        Feature::WormGrass => 21,
        Feature::ScavengerHole => 17,
        Feature::ShortcutEntrance | Feature::CrackedTerrain => return None,
    };
    Some(VariantIndex(v))
}

/// Resolve the graphic of `feature` at the centre of `ctx` under the
/// default [`EntranceRule`].
///
/// Every named feature resolves to a variant.
///
/// # Examples
///
/// ```
/// use strata_core::{Feature, GeoType, RunCell};
/// use strata_infer::{resolve_stackable, VariantIndex};
/// use strata_space::Context;
///
/// let ctx = Context::default();
/// assert_eq!(resolve_stackable(Feature::Bathive, &ctx), Some(VariantIndex(2)));
/// assert_eq!(resolve_stackable(Feature::ShortcutEntrance, &ctx), Some(VariantIndex(26)));
/// assert_eq!(resolve_stackable(Feature::CrackedTerrain, &ctx), Some(VariantIndex(14)));
/// ```
pub fn resolve_stackable(feature: Feature, ctx: &Context) -> Option<VariantIndex> {
    resolve_stackable_with(feature, ctx, EntranceRule::default())
}

/// [`resolve_stackable`] with an explicit entrance rule.
pub fn resolve_stackable_with(
    feature: Feature,
    ctx: &Context,
    rule: EntranceRule,
) -> Option<VariantIndex> {
    match feature {
        Feature::ShortcutEntrance => Some(entrance(ctx, rule)),
        Feature::CrackedTerrain => Some(crack(ctx)),
        other => stackable_variant(other),
    }
}

/// Resolve by raw flag index. Indices that name no feature give `None`.
pub fn resolve_stackable_raw(index: usize, ctx: &Context) -> Option<VariantIndex> {
    Feature::from_index(index).and_then(|f| resolve_stackable(f, ctx))
}

/// Resolve every raised flag of the centre cell, in index order.
pub fn resolve_cell_variants(
    ctx: &Context,
    rule: EntranceRule,
) -> SmallVec<[(Feature, VariantIndex); 4]> {
    ctx.center()
        .stackables
        .iter_set()
        .filter_map(Feature::from_index)
        .filter_map(|f| resolve_stackable_with(f, ctx, rule).map(|v| (f, v)))
        .collect()
}

// ── Shortcut entrances ──────────────────────────────────────────

fn entrance(ctx: &Context, rule: EntranceRule) -> VariantIndex {
    // Two adjacent entrances can never both be valid.
    if ctx
        .neighbours()
        .iter()
        .any(|c| c.has(Feature::ShortcutEntrance))
    {
        return ENTRANCE_LOOSE;
    }

    let direction = match ctx.orthogonal().map(|c| rule.is_path(c)) {
        [true, false, false, false] => VariantIndex(25),
        [false, true, false, false] => VariantIndex(24),
        [false, false, true, false] => VariantIndex(22),
        [false, false, false, true] => VariantIndex(23),
        _ => return ENTRANCE_LOOSE,
    };

    match ring_opening(ctx) {
        Some(opening) if matches!(opening.geo, GeoType::Air | GeoType::Platform) => direction,
        _ => ENTRANCE_LOOSE,
    }
}

/// The open side of a solid ring around the centre.
///
/// The ring needs all four corners solid and at least three orthogonal
/// sides solid. The first non-required side in N, E, S, W order is the
/// opening; it is not compared against the path direction.
fn ring_opening(ctx: &Context) -> Option<&RunCell> {
    let cells = ctx.cells();
    let solid = |c: &RunCell| c.geo == GeoType::Solid;
    let corners = [&cells[0][0], &cells[0][2], &cells[2][0], &cells[2][2]];
    if !corners.into_iter().all(solid) {
        return None;
    }
    match ctx.orthogonal().map(solid) {
        [_, true, true, true] => Some(ctx.north()),
        [true, _, true, true] => Some(ctx.east()),
        [true, true, _, true] => Some(ctx.south()),
        [true, true, true, _] => Some(ctx.west()),
        _ => None,
    }
}

// ── Cracked terrain ─────────────────────────────────────────────

fn crack(ctx: &Context) -> VariantIndex {
    let [n, e, s, w] = ctx.orthogonal().map(|c| c.has(Feature::CrackedTerrain));
    let v = match (n, e, s, w) {
        // Dead ends.
        (true, false, false, false) => 33,
        (false, true, false, false) => 32,
        (false, false, true, false) => 31,
        (false, false, false, true) => 34,
        // Corners.
        (true, true, false, false) => 13,
        (false, true, true, false) => 5,
        (false, false, true, true) => 4,
        (true, false, false, true) => 10,
        // Junctions.
        (true, true, false, true) => 12,
        (true, true, true, false) => 9,
        (false, true, true, true) => 8,
        (true, false, true, true) => 11,
        // Straights.
        (false, true, false, true) => 7,
        (true, false, true, false) => 15,
        (true, true, true, true) => 6,
        (false, false, false, false) => return crack_from_geometry(ctx),
    };
    VariantIndex(v)
}

/// Orient an isolated crack along a solid corridor, if there is one.
fn crack_from_geometry(ctx: &Context) -> VariantIndex {
    let solid = |c: &RunCell| c.geo == GeoType::Solid;
    let centre = solid(ctx.center());
    let [n, e, s, w] = ctx.orthogonal().map(solid);
    match (centre, n, e, s, w) {
        (true, false, true, false, true) => VariantIndex(15),
        (true, true, false, true, false) => VariantIndex(7),
        _ => CRACK_ISOLATED,
    }
}
