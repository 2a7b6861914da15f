//! Geometry block graphics.

use strata_core::GeoType;

/// Atlas index of the block graphic for `geo`. Air has no graphic.
pub fn block_index(geo: GeoType) -> Option<usize> {
    match geo {
        GeoType::Air => None,
        GeoType::Solid => Some(0),
        GeoType::SlopeNE => Some(1),
        GeoType::SlopeNW => Some(2),
        GeoType::SlopeES => Some(3),
        GeoType::SlopeSW => Some(4),
        GeoType::Platform => Some(5),
        GeoType::ShortcutEntrance => Some(6),
        GeoType::Glass => Some(7),
    }
}
