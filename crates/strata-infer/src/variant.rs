//! The [`VariantIndex`] newtype.

use std::fmt;

/// Index of a concrete feature graphic in the stackable texture atlas.
///
/// Produced by the resolvers in this crate and consumed by renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantIndex(pub u32);

impl VariantIndex {
    /// Whether this is one of the four oriented shortcut entrance
    /// graphics (22 to 25).
    ///
    /// ```
    /// use strata_infer::{VariantIndex, ENTRANCE_LOOSE};
    ///
    /// assert!(VariantIndex(22).is_entrance_direction());
    /// assert!(!ENTRANCE_LOOSE.is_entrance_direction());
    /// ```
    pub fn is_entrance_direction(self) -> bool {
        (22..=25).contains(&self.0)
    }
}

impl fmt::Display for VariantIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for VariantIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
