//! Board representation shared by both solvers.
//!
//! A [`Board`] stores one queen per row as a permutation: `columns[row]` is
//! the column of that row's queen. Row and column conflicts are therefore
//! impossible by construction; only diagonal attacks remain, which is what
//! [`crate::energy`] counts.
//!
//! Boards render to the conventional `'.'`/`'Q'` row strings via
//! [`Board::rows`] and parse back via [`Board::from_rows`].

mod render;
mod types;

pub use types::{is_permutation, Board};
