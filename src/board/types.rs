//! The permutation-encoded board.

use crate::energy::energy;
use crate::error::{NQueensError, Result};

/// Cell marker for an empty square.
pub(crate) const EMPTY: char = '.';
/// Cell marker for a queen.
pub(crate) const QUEEN: char = 'Q';

/// An N×N board holding exactly one queen per row and per column.
///
/// Ordering is lexicographic on the column sequence, which matches the order
/// in which the backtracking solver discovers solutions.
///
/// # Examples
///
/// ```
/// use u_nqueens::Board;
///
/// let board = Board::new(vec![1, 3, 0, 2]).unwrap();
/// assert!(board.is_solution());
/// assert_eq!(board.rows(), vec![".Q..", "...Q", "Q...", "..Q."]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Board {
    columns: Vec<usize>,
}

impl Board {
    /// Creates a board from a column-per-row permutation.
    ///
    /// Fails with [`NQueensError::InvalidPermutation`] unless `columns` is a
    /// permutation of `0..columns.len()`.
    pub fn new(columns: Vec<usize>) -> Result<Self> {
        if !is_permutation(&columns) {
            return Err(NQueensError::InvalidPermutation {
                n: columns.len(),
                columns,
            });
        }
        Ok(Self { columns })
    }

    /// Wraps a permutation produced by one of the solvers.
    pub(crate) fn from_permutation(columns: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&columns), "solver produced a non-permutation");
        Self { columns }
    }

    /// Parses `'.'`/`'Q'` rows, one queen per row.
    ///
    /// ```
    /// use u_nqueens::Board;
    ///
    /// let board = Board::from_rows(&["..Q.", "Q...", "...Q", ".Q.."]).unwrap();
    /// assert_eq!(board.columns(), &[2, 0, 3, 1]);
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let n = rows.len();
        let mut columns = Vec::with_capacity(n);

        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != n {
                return Err(NQueensError::InvalidBoardRow {
                    row,
                    reason: format!("expected {n} cells, found {width}"),
                });
            }

            let mut queen = None;
            for (col, cell) in line.chars().enumerate() {
                match cell {
                    EMPTY => {}
                    QUEEN if queen.is_none() => queen = Some(col),
                    QUEEN => {
                        return Err(NQueensError::InvalidBoardRow {
                            row,
                            reason: "more than one queen".into(),
                        })
                    }
                    other => {
                        return Err(NQueensError::InvalidBoardRow {
                            row,
                            reason: format!("unexpected cell '{other}'"),
                        })
                    }
                }
            }

            match queen {
                Some(col) => columns.push(col),
                None => {
                    return Err(NQueensError::InvalidBoardRow {
                        row,
                        reason: "no queen".into(),
                    })
                }
            }
        }

        Self::new(columns)
    }

    /// Board size N.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Queen column for each row.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Consumes the board, returning its permutation.
    pub fn into_columns(self) -> Vec<usize> {
        self.columns
    }

    /// Whether a queen sits on `(row, col)`.
    pub fn has_queen(&self, row: usize, col: usize) -> bool {
        self.columns.get(row) == Some(&col)
    }

    /// Number of diagonally attacking queen pairs.
    pub fn energy(&self) -> usize {
        energy(&self.columns)
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.energy() == 0
    }
}

impl TryFrom<Vec<usize>> for Board {
    type Error = NQueensError;

    fn try_from(columns: Vec<usize>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<Board> for Vec<usize> {
    fn from(board: Board) -> Self {
        board.columns
    }
}

/// Whether `columns` is a permutation of `0..columns.len()`.
pub fn is_permutation(columns: &[usize]) -> bool {
    let mut seen = vec![false; columns.len()];
    for &c in columns {
        match seen.get_mut(c) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_duplicate_column() {
        let err = Board::new(vec![0, 2, 2]).unwrap_err();
        assert!(matches!(err, NQueensError::InvalidPermutation { n: 3, .. }));
    }

    #[test]
    fn test_new_rejects_out_of_range_column() {
        assert!(Board::new(vec![0, 3, 1]).is_err());
    }

    #[test]
    fn test_empty_board_is_solution() {
        let board = Board::new(Vec::new()).unwrap();
        assert_eq!(board.size(), 0);
        assert!(board.is_solution());
    }

    #[test]
    fn test_from_rows_roundtrips_known_solution() {
        let rows = [".Q..", "...Q", "Q...", "..Q."];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.columns(), &[1, 3, 0, 2]);
        assert_eq!(board.rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_bad_rows() {
        assert!(matches!(
            Board::from_rows(&["Q.", "QQ"]),
            Err(NQueensError::InvalidBoardRow { row: 1, .. })
        ));
        assert!(matches!(
            Board::from_rows(&["Q.", ".."]),
            Err(NQueensError::InvalidBoardRow { row: 1, .. })
        ));
        assert!(matches!(
            Board::from_rows(&["Q..", ".Q."]),
            Err(NQueensError::InvalidBoardRow { row: 0, .. })
        ));
        assert!(matches!(
            Board::from_rows(&["Q.", "x."]),
            Err(NQueensError::InvalidBoardRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_from_rows_rejects_shared_column() {
        assert!(matches!(
            Board::from_rows(&["Q.", "Q."]),
            Err(NQueensError::InvalidPermutation { .. })
        ));
    }

    #[test]
    fn test_has_queen() {
        let board = Board::new(vec![2, 0, 3, 1]).unwrap();
        assert!(board.has_queen(0, 2));
        assert!(!board.has_queen(0, 1));
        assert!(!board.has_queen(9, 0));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let a = Board::new(vec![1, 3, 0, 2]).unwrap();
        let b = Board::new(vec![2, 0, 3, 1]).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_try_from_validates() {
        let board = Board::try_from(vec![2, 0, 3, 1]).unwrap();
        assert_eq!(Vec::from(board), vec![2, 0, 3, 1]);
        assert!(matches!(
            Board::try_from(vec![0, 0]),
            Err(NQueensError::InvalidPermutation { n: 2, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_and_rejection() {
        let board = Board::new(vec![1, 3, 0, 2]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "[1,3,0,2]");
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let err = serde_json::from_str::<Board>("[0,0]").unwrap_err();
        assert!(err.to_string().contains("Not a permutation"), "{err}");
        assert!(serde_json::from_str::<Board>("[0,5,1]").is_err());
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[0, 0]));
        assert!(!is_permutation(&[1]));
    }
}
