//! Depth-first backtracking search.
//!
//! # Algorithm
//!
//! 1. At row `r`, try columns `0..N` in increasing order
//! 2. Skip any column whose column, rising diagonal (`r + c`) or falling
//!    diagonal (`r - c`) is already occupied (O(1) per candidate)
//! 3. Place the queen and recurse to row `r + 1`; the placement is undone
//!    when the recursive call returns
//! 4. At row `N`, record a snapshot of the board
//!
//! In [`SearchMode::First`] the first recorded board breaks out of every
//! frame at once.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::config::{BacktrackConfig, SearchMode};
use super::state::SearchState;
use crate::board::Board;

/// How a backtracking run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The search fulfilled its mode: every solution enumerated, or the
    /// first solution found (or proven absent).
    Complete,
    /// `max_nodes` was reached first; the solution list is partial.
    BudgetExhausted,
    /// Cancelled externally; the solution list is partial.
    Cancelled,
}

/// Result of a backtracking run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BacktrackResult {
    /// Solutions in discovery order (lexicographic by column sequence).
    pub solutions: Vec<Board>,

    /// Number of queens placed during the search.
    pub nodes: usize,

    /// Why the search stopped.
    pub status: SearchStatus,
}

impl BacktrackResult {
    /// Whether the search ran to its natural end.
    pub fn is_complete(&self) -> bool {
        self.status == SearchStatus::Complete
    }
}

/// Executes the backtracking search.
pub struct BacktrackRunner;

impl BacktrackRunner {
    /// Runs the search on an `n`×`n` board.
    pub fn run(n: usize, config: &BacktrackConfig) -> BacktrackResult {
        Self::run_with_cancel(n, config, None)
    }

    /// Runs the search with an optional cancellation token, checked before
    /// every placement.
    #[instrument(level = "debug", skip(config, cancel), fields(mode = ?config.mode))]
    pub fn run_with_cancel(
        n: usize,
        config: &BacktrackConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> BacktrackResult {
        let mut search = Search {
            n,
            mode: config.mode,
            max_nodes: config.max_nodes,
            cancel: cancel.as_deref(),
            nodes: 0,
            solutions: Vec::new(),
        };
        let mut state = SearchState::new(n);

        let status = match search.descend(&mut state, 0) {
            ControlFlow::Continue(()) | ControlFlow::Break(Halt::Found) => SearchStatus::Complete,
            ControlFlow::Break(Halt::Budget) => SearchStatus::BudgetExhausted,
            ControlFlow::Break(Halt::Cancelled) => SearchStatus::Cancelled,
        };
        debug_assert_eq!(state.depth(), 0, "every placement must be undone");

        if status != SearchStatus::Complete {
            warn!(?status, nodes = search.nodes, "backtracking stopped early");
        }
        debug!(
            solutions = search.solutions.len(),
            nodes = search.nodes,
            "backtracking finished"
        );

        BacktrackResult {
            solutions: search.solutions,
            nodes: search.nodes,
            status,
        }
    }
}

/// Enumerates every solution for an `n`×`n` board.
///
/// `n = 0` yields a single empty board; `n = 2` and `n = 3` yield none.
///
/// # Examples
///
/// ```
/// use u_nqueens::solve_all;
///
/// let solutions = solve_all(4);
/// assert_eq!(solutions.len(), 2);
/// assert_eq!(solutions[0].columns(), &[1, 3, 0, 2]);
/// ```
pub fn solve_all(n: usize) -> Vec<Board> {
    BacktrackRunner::run(n, &BacktrackConfig::all()).solutions
}

/// Returns the first solution in column order, or an empty list when none
/// exists.
pub fn solve_first(n: usize) -> Vec<Board> {
    BacktrackRunner::run(n, &BacktrackConfig::first()).solutions
}

/// Reason for unwinding every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    Found,
    Budget,
    Cancelled,
}

struct Search<'c> {
    n: usize,
    mode: SearchMode,
    max_nodes: usize,
    cancel: Option<&'c AtomicBool>,
    nodes: usize,
    solutions: Vec<Board>,
}

impl Search<'_> {
    fn descend(&mut self, state: &mut SearchState, row: usize) -> ControlFlow<Halt> {
        if row == self.n {
            self.solutions.push(state.snapshot());
            return match self.mode {
                SearchMode::All => ControlFlow::Continue(()),
                SearchMode::First => ControlFlow::Break(Halt::Found),
            };
        }

        for col in 0..self.n {
            if !state.is_free(row, col) {
                continue;
            }
            if let Some(halt) = self.out_of_budget() {
                return ControlFlow::Break(halt);
            }

            self.nodes += 1;
            let mut placed = state.place(row, col);
            if let ControlFlow::Break(halt) = self.descend(&mut placed, row + 1) {
                return ControlFlow::Break(halt);
            }
        }

        ControlFlow::Continue(())
    }

    fn out_of_budget(&self) -> Option<Halt> {
        if self.max_nodes > 0 && self.nodes >= self.max_nodes {
            return Some(Halt::Budget);
        }
        match self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Some(Halt::Cancelled),
            _ => None,
        }
    }
}
