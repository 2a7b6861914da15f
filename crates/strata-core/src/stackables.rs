//! The [`Stackables`] bitset: per-cell stackable feature flags.

use std::fmt;

/// Number of stackable flag slots per cell. Index 0 is reserved.
pub const STACKABLE_COUNT: usize = 22;

/// A fixed-width set of 22 stackable feature flags.
///
/// Stored as a `u32` mask with only the low [`STACKABLE_COUNT`] bits in
/// use. The type is `Copy`, so every cell owns its own flags and two
/// cells can never observe each other's mutations.
///
/// # Examples
///
/// ```
/// use strata_core::Stackables;
///
/// let mut s = Stackables::empty();
/// s.set(4, true);
/// s.toggle(11);
/// assert!(s.get(4) && s.get(11));
/// assert_eq!(s.iter_set().collect::<Vec<_>>(), vec![4, 11]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Stackables {
    bits: u32,
}

impl Stackables {
    const MASK: u32 = (1u32 << STACKABLE_COUNT) - 1;

    /// Create a set with no flags raised.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Read flag `index`. Out-of-range indices read as `false`.
    pub fn get(&self, index: usize) -> bool {
        index < STACKABLE_COUNT && self.bits & (1u32 << index) != 0
    }

    /// Raise or clear flag `index`.
    ///
    /// Indices outside `0..STACKABLE_COUNT` are a caller bug: they trip a
    /// debug assertion and are ignored in release builds.
    pub fn set(&mut self, index: usize, value: bool) {
        debug_assert!(
            index < STACKABLE_COUNT,
            "stackable index {index} out of range"
        );
        if index >= STACKABLE_COUNT {
            return;
        }
        if value {
            self.bits |= 1u32 << index;
        } else {
            self.bits &= !(1u32 << index);
        }
    }

    /// Flip flag `index`. Same range contract as [`set`](Self::set).
    pub fn toggle(&mut self, index: usize) {
        let current = self.get(index);
        self.set(index, !current);
    }

    /// Build a set from a boolean slice. Entries past the fixed width are
    /// dropped; missing entries are `false`.
    pub fn from_bools(flags: &[bool]) -> Self {
        let bits = flags
            .iter()
            .take(STACKABLE_COUNT)
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(0u32, |acc, (i, _)| acc | (1u32 << i));
        Self { bits }
    }

    /// Expand to a full boolean array.
    pub fn to_bools(&self) -> [bool; STACKABLE_COUNT] {
        let mut out = [false; STACKABLE_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.get(i);
        }
        out
    }

    /// Returns `true` if no flag is raised.
    pub fn is_empty(&self) -> bool {
        self.bits & Self::MASK == 0
    }

    /// Number of raised flags.
    pub fn count(&self) -> usize {
        (self.bits & Self::MASK).count_ones() as usize
    }

    /// Iterate over raised flag indices in ascending order.
    pub fn iter_set(&self) -> StackablesIter {
        StackablesIter {
            bits: self.bits & Self::MASK,
        }
    }
}

impl fmt::Debug for Stackables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_set()).finish()
    }
}

impl FromIterator<usize> for Stackables {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::empty();
        for index in iter {
            set.set(index, true);
        }
        set
    }
}

impl IntoIterator for Stackables {
    type Item = usize;
    type IntoIter = StackablesIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_set()
    }
}

/// Iterator over raised indices of a [`Stackables`], ascending.
#[derive(Clone, Debug)]
pub struct StackablesIter {
    bits: u32,
}

impl Iterator for StackablesIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for StackablesIter {}
