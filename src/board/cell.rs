//! A single board cell

use super::Mark;

/// Holder of exactly one mark. Starts empty; normal play never overwrites a
/// non-empty cell (enforced by [`Board`](super::Board)), only an explicit
/// reset clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: Mark,
}

impl Cell {
    pub fn new() -> Self {
        Self { value: Mark::Empty }
    }

    /// Current mark in this cell
    #[inline]
    pub fn value(&self) -> Mark {
        self.value
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value == Mark::Empty
    }

    /// Place a mark in this cell
    #[inline]
    pub(super) fn add_token(&mut self, mark: Mark) {
        self.value = mark;
    }

    /// Clear back to empty
    #[inline]
    pub(super) fn clear(&mut self) {
        self.value = Mark::Empty;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
