//! The [`Gram`]: a linear undo/redo log with a cursor.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// A linear action history with a single redo branch.
///
/// Entries are stored oldest first. The cursor points at the most
/// recently applied entry, or is `None` when every entry has been undone
/// (or nothing was recorded). Recording while entries lie ahead of the
/// cursor replaces the next entry and drops the rest of that branch.
///
/// The log never touches level data: callers apply an action's before or
/// after image themselves when moving the cursor.
///
/// # Examples
///
/// ```
/// use strata_gram::Gram;
///
/// let mut g = Gram::new();
/// g.record('a');
/// g.record('b');
/// g.record('c');
/// g.undo();
/// g.undo();
/// g.record('d');
/// assert_eq!(g.current(), Some(&'d'));
/// assert!(!g.redo());
/// assert_eq!(g.iter().copied().collect::<String>(), "ad");
/// ```
#[derive(Clone, Debug)]
pub struct Gram<A> {
    entries: VecDeque<A>,
    cursor: Option<usize>,
    capacity: Option<NonZeroUsize>,
}

impl<A> Default for Gram<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Gram<A> {
    /// An unbounded history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity: None,
        }
    }

    /// A history holding at most `limit` entries; the oldest entry is
    /// dropped when a new one would exceed the limit.
    pub fn bounded(limit: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.get()),
            cursor: None,
            capacity: Some(limit),
        }
    }

    /// Maximum number of retained entries, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity.map(NonZeroUsize::get)
    }

    /// Number of retained entries, including undone ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the cursor, counted from the oldest retained entry.
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor
    }

    fn next_index(&self) -> usize {
        self.cursor.map_or(0, |c| c + 1)
    }

    /// Append `action` after the cursor and move the cursor onto it.
    ///
    /// Undone entries beyond the new one are discarded.
    pub fn record(&mut self, action: A) {
        let next = self.next_index();
        if next < self.entries.len() {
            let dropped = self.entries.len() - next - 1;
            self.entries.truncate(next + 1);
            self.entries[next] = action;
            if dropped > 0 {
                tracing::debug!(dropped, "gram: redo branch truncated");
            }
        } else {
            self.entries.push_back(action);
        }
        self.cursor = Some(next);
        self.enforce_capacity();
        tracing::trace!(cursor = ?self.cursor, len = self.entries.len(), "gram: record");
    }

    fn enforce_capacity(&mut self) {
        let Some(limit) = self.capacity else {
            return;
        };
        while self.entries.len() > limit.get() {
            self.entries.pop_front();
            // Eviction shifts every index down; an evicted cursor lands
            // before the first entry.
            self.cursor = self.cursor.and_then(|c| c.checked_sub(1));
            tracing::debug!(limit = limit.get(), "gram: evicted oldest entry");
        }
    }

    /// The entry under the cursor.
    pub fn current(&self) -> Option<&A> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// The entry a [`redo`](Self::redo) would move onto.
    pub fn peek_redo(&self) -> Option<&A> {
        self.entries.get(self.next_index())
    }

    /// Whether [`undo`](Self::undo) would move the cursor.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// Whether [`redo`](Self::redo) would move the cursor.
    pub fn can_redo(&self) -> bool {
        self.next_index() < self.entries.len()
    }

    /// Step the cursor back one entry. Returns `false` at the start.
    pub fn undo(&mut self) -> bool {
        let Some(c) = self.cursor else {
            return false;
        };
        self.cursor = c.checked_sub(1);
        tracing::trace!(cursor = ?self.cursor, "gram: undo");
        true
    }

    /// Step the cursor forward one entry. Returns `false` at the end.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        let next = self.next_index();
        self.cursor = Some(next);
        tracing::trace!(cursor = next, "gram: redo");
        true
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    /// Entries from oldest to newest, undone ones included.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &A> + ExactSizeIterator + '_ {
        self.entries.iter()
    }
}
