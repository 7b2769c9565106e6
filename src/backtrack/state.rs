//! Incremental search state: placed queens and their conflict sets.

use std::ops::{Deref, DerefMut};

use crate::board::Board;

/// Queens placed on rows `0..depth()` and the lines they occupy.
///
/// Invariant: `columns`, `rising` and `falling` mark exactly the lines of
/// the queens in `placement`. Queens are only added through [`Placed`],
/// which removes them again when dropped.
#[derive(Debug)]
pub(crate) struct SearchState {
    n: usize,
    placement: Vec<usize>,
    columns: Vec<bool>,
    /// Indexed by `row + col`.
    rising: Vec<bool>,
    /// Indexed by `row - col + n - 1`.
    falling: Vec<bool>,
}

impl SearchState {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            placement: Vec::with_capacity(n),
            columns: vec![false; n],
            rising: vec![false; 2 * n],
            falling: vec![false; 2 * n],
        }
    }

    /// Number of rows filled so far.
    pub(crate) fn depth(&self) -> usize {
        self.placement.len()
    }

    /// O(1) attack test for a queen at `(row, col)`.
    pub(crate) fn is_free(&self, row: usize, col: usize) -> bool {
        !self.columns[col] && !self.rising[row + col] && !self.falling[self.falling_index(row, col)]
    }

    /// Places a queen on the next row. The queen is removed when the
    /// returned guard drops.
    pub(crate) fn place(&mut self, row: usize, col: usize) -> Placed<'_> {
        debug_assert_eq!(row, self.depth(), "queens are placed row by row");
        debug_assert!(self.is_free(row, col));
        self.set(row, col, true);
        self.placement.push(col);
        Placed { state: self, row, col }
    }

    /// Independent copy of the current (complete) placement.
    pub(crate) fn snapshot(&self) -> Board {
        Board::from_permutation(self.placement.clone())
    }

    fn release(&mut self, row: usize, col: usize) {
        let popped = self.placement.pop();
        debug_assert_eq!(popped, Some(col));
        self.set(row, col, false);
    }

    fn set(&mut self, row: usize, col: usize, occupied: bool) {
        let falling = self.falling_index(row, col);
        self.columns[col] = occupied;
        self.rising[row + col] = occupied;
        self.falling[falling] = occupied;
    }

    fn falling_index(&self, row: usize, col: usize) -> usize {
        row + (self.n - 1 - col)
    }

    #[cfg(test)]
    fn occupied_lines(&self) -> usize {
        [&self.columns, &self.rising, &self.falling]
            .iter()
            .map(|set| set.iter().filter(|&&b| b).count())
            .sum()
    }
}

/// Scope guard for one placed queen.
pub(crate) struct Placed<'a> {
    state: &'a mut SearchState,
    row: usize,
    col: usize,
}

impl Deref for Placed<'_> {
    type Target = SearchState;

    fn deref(&self) -> &SearchState {
        &*self.state
    }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut SearchState {
        &mut *self.state
    }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) {
        self.state.release(self.row, self.col);
    }
}
