//! Coordinates and layer identifiers.

use std::fmt;

use crate::error::CellError;

/// Number of terrain layers in every level.
pub const LAYER_COUNT: usize = 3;

/// One of the three parallel terrain planes of a level.
///
/// `First` is the front (playable) layer, `Third` the backmost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Front layer (z = 0).
    First,
    /// Middle layer (z = 1).
    Second,
    /// Back layer (z = 2).
    Third,
}

impl Layer {
    /// All layers, front to back.
    pub const ALL: [Layer; LAYER_COUNT] = [Layer::First, Layer::Second, Layer::Third];

    /// The z index of this layer.
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

impl TryFrom<usize> for Layer {
    type Error = CellError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::First),
            1 => Ok(Self::Second),
            2 => Ok(Self::Third),
            _ => Err(CellError::LayerOutOfRange { index }),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// A position in a level: column, row and layer.
///
/// `x` and `y` are signed so that positions computed relative to a
/// cursor (brush centres, paste anchors) can fall outside the level;
/// consumers bounds-check before indexing.
///
/// # Examples
///
/// ```
/// use strata_core::Coords;
///
/// let c: Coords = (4, 2, 1).into();
/// let (x, y, z) = c.into();
/// assert_eq!((x, y, z), (4, 2, 1));
/// assert_eq!(c.offset(-1, 1), Coords::new(3, 3, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coords {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Layer index in `0..LAYER_COUNT`.
    pub z: usize,
}

impl Coords {
    /// Construct a coordinate.
    pub const fn new(x: i32, y: i32, z: usize) -> Self {
        Self { x, y, z }
    }

    /// The same position shifted within its layer.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z,
        }
    }

    /// The layer of this coordinate, if `z` is valid.
    pub fn layer(self) -> Option<Layer> {
        Layer::try_from(self.z).ok()
    }
}

impl From<(i32, i32, usize)> for Coords {
    fn from((x, y, z): (i32, i32, usize)) -> Self {
        Self { x, y, z }
    }
}

impl From<Coords> for (i32, i32, usize) {
    fn from(c: Coords) -> Self {
        (c.x, c.y, c.z)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
