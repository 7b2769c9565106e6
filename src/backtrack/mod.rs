//! Constrained backtracking search.
//!
//! Queens are placed row by row. Each placement occupies a column, a rising
//! diagonal (`row + col`) and a falling diagonal (`row - col`); a candidate
//! square is rejected in O(1) if any of its three lines is already taken.
//! Placements are released by a scope guard, so the occupancy sets always
//! describe exactly the queens on the rows above the current one.
//!
//! Two modes are supported: enumerate every solution ([`solve_all`]) or
//! stop at the first ([`solve_first`]).

mod config;
mod runner;
mod state;

pub use config::{BacktrackConfig, SearchMode};
pub use runner::{solve_all, solve_first, BacktrackResult, BacktrackRunner, SearchStatus};
