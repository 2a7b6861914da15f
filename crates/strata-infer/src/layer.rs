//! Per-layer feature rules.

use strata_core::{Feature, Layer};

/// Whether `feature` is drawn when viewing `layer`.
///
/// The front layer shows everything. Back layers only show poles, bat
/// hives and cracks, which are the features the game reads there.
pub fn feature_visible_on(feature: Feature, layer: Layer) -> bool {
    match layer {
        Layer::First => true,
        Layer::Second | Layer::Third => matches!(
            feature,
            Feature::HorizontalPole
                | Feature::VerticalPole
                | Feature::Bathive
                | Feature::CrackedTerrain
        ),
    }
}

/// Whether `feature` may be placed on `layer`.
///
/// The shortcut family only works on the front layer.
pub fn feature_placeable_on(feature: Feature, layer: Layer) -> bool {
    layer == Layer::First || !is_shortcut_family(feature)
}

/// Entrances, paths, dens and holes that connect to the shortcut network.
pub fn is_shortcut_family(feature: Feature) -> bool {
    matches!(
        feature,
        Feature::ShortcutEntrance
            | Feature::ShortcutPath
            | Feature::RoomEntrance
            | Feature::CreatureDen
            | Feature::GarbageWormHole
            | Feature::WackAMoleHole
            | Feature::ScavengerHole
    )
}
