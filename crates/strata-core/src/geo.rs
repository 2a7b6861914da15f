//! Geometry types and named stackable features.

use std::fmt;

use crate::error::CellError;

/// The solid-geometry type of a cell.
///
/// Discriminants are the persisted integer ids. Id 8 is unused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum GeoType {
    /// Empty space.
    #[default]
    Air = 0,
    /// Solid wall.
    Solid = 1,
    /// Slope with its open side facing north-east.
    SlopeNE = 2,
    /// Slope with its open side facing north-west.
    SlopeNW = 3,
    /// Slope with its open side facing east-south.
    SlopeES = 4,
    /// Slope with its open side facing south-west.
    SlopeSW = 5,
    /// One-way platform.
    Platform = 6,
    /// Geometry block marking a shortcut entrance.
    ShortcutEntrance = 7,
    /// Glass.
    Glass = 9,
}

impl GeoType {
    /// Every geometry type, in id order.
    pub const ALL: [GeoType; 9] = [
        GeoType::Air,
        GeoType::Solid,
        GeoType::SlopeNE,
        GeoType::SlopeNW,
        GeoType::SlopeES,
        GeoType::SlopeSW,
        GeoType::Platform,
        GeoType::ShortcutEntrance,
        GeoType::Glass,
    ];

    /// The persisted integer id.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// Look up a geometry type by id.
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.id() == id)
    }

    /// `true` for the four slope orientations (ids 2 to 5).
    pub fn is_slope(self) -> bool {
        matches!(
            self,
            Self::SlopeNE | Self::SlopeNW | Self::SlopeES | Self::SlopeSW
        )
    }
}

impl TryFrom<i32> for GeoType {
    type Error = CellError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(CellError::UnknownGeo { id })
    }
}

impl fmt::Display for GeoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Air => "air",
            Self::Solid => "solid",
            Self::SlopeNE => "slope NE",
            Self::SlopeNW => "slope NW",
            Self::SlopeES => "slope ES",
            Self::SlopeSW => "slope SW",
            Self::Platform => "platform",
            Self::ShortcutEntrance => "shortcut entrance",
            Self::Glass => "glass",
        };
        f.write_str(name)
    }
}

/// A named stackable feature. The discriminant is its flag index.
///
/// Indices 0, 8, 14, 15, 16 and 17 have no named feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Feature {
    /// Horizontal pole.
    HorizontalPole = 1,
    /// Vertical pole.
    VerticalPole = 2,
    /// Bat hive.
    Bathive = 3,
    /// Shortcut entrance marker.
    ShortcutEntrance = 4,
    /// Shortcut path segment.
    ShortcutPath = 5,
    /// Room entrance.
    RoomEntrance = 6,
    /// Creature den.
    CreatureDen = 7,
    /// Rock spawn.
    PlaceRock = 9,
    /// Spear spawn.
    PlaceSpear = 10,
    /// Cracked terrain.
    CrackedTerrain = 11,
    /// Forbid fly chains.
    ForbidFlyChains = 12,
    /// Garbage worm hole.
    GarbageWormHole = 13,
    /// Waterfall.
    Waterfall = 18,
    /// Whack-a-mole hole.
    WackAMoleHole = 19,
    /// Worm grass.
    WormGrass = 20,
    /// Scavenger hole.
    ScavengerHole = 21,
}

impl Feature {
    /// Every named feature, in index order.
    pub const ALL: [Feature; 16] = [
        Feature::HorizontalPole,
        Feature::VerticalPole,
        Feature::Bathive,
        Feature::ShortcutEntrance,
        Feature::ShortcutPath,
        Feature::RoomEntrance,
        Feature::CreatureDen,
        Feature::PlaceRock,
        Feature::PlaceSpear,
        Feature::CrackedTerrain,
        Feature::ForbidFlyChains,
        Feature::GarbageWormHole,
        Feature::Waterfall,
        Feature::WackAMoleHole,
        Feature::WormGrass,
        Feature::ScavengerHole,
    ];

    /// The flag index of this feature in [`Stackables`](crate::Stackables).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up the feature stored at a flag index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.index() == index)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
