//! N-Queens solvers.
//!
//! Places N non-attacking queens on an N×N board with two independent
//! engines:
//!
//! - **Backtracking**: depth-first row-by-row placement pruned by O(1)
//!   column and diagonal occupancy tests. Enumerates every solution
//!   ([`solve_all`]) or stops at the first ([`solve_first`]).
//! - **Simulated Annealing (SA)**: swap moves over a permutation board,
//!   Metropolis acceptance on the diagonal-conflict [`energy`], geometric
//!   cooling. A single run ([`sa::anneal_once`]) may end unsolved; repeated
//!   runs under a visited-state filter ([`sa::anneal_harvest`]) collect
//!   distinct solutions.
//!
//! All randomness comes from a caller-supplied generator (see
//! [`random::create_rng`]), so a fixed seed reproduces every run.
//!
//! # Examples
//!
//! ```
//! use u_nqueens::random::create_rng;
//! use u_nqueens::sa::{anneal_once, AnnealConfig};
//! use u_nqueens::{solve_all, solve_first};
//!
//! assert_eq!(solve_all(8).len(), 92);
//! assert_eq!(solve_first(8)[0].columns(), &[0, 4, 7, 5, 2, 6, 1, 3]);
//!
//! let mut rng = create_rng(7);
//! let result = anneal_once(16, &AnnealConfig::default(), &mut rng, None).unwrap();
//! if result.is_solution() {
//!     assert!(result.board.is_solution());
//! }
//! ```

pub mod backtrack;
pub mod board;
pub mod energy;
pub mod error;
pub mod known;
pub mod random;
pub mod report;
pub mod sa;

pub use backtrack::{solve_all, solve_first};
pub use board::Board;
pub use energy::energy;
pub use error::{NQueensError, Result};
pub use known::known_solution_count;
