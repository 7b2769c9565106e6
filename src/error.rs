//! Error types shared by all solvers.

use thiserror::Error;

/// Errors reported when a solver is misused.
///
/// Search outcomes are never errors: an exhausted annealing schedule is
/// reported through a positive energy, and an unsolvable board size through
/// an empty solution list.
#[derive(Debug, Error)]
pub enum NQueensError {
    #[error("Invalid board size {n}: {reason}")]
    InvalidSize { n: usize, reason: &'static str },

    #[error("Invalid temperature '{name}' = {value}: {reason}")]
    InvalidTemperature {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Cooling rate must be in (0, 1), got {0}")]
    InvalidCoolingRate(f64),

    #[error("Invalid harvest schedule: {0}")]
    InvalidSchedule(&'static str),

    #[error("Not a permutation of 0..{n}: {columns:?}")]
    InvalidPermutation { n: usize, columns: Vec<usize> },

    #[error("Invalid board row {row}: {reason}")]
    InvalidBoardRow { row: usize, reason: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NQueensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_details() {
        let err = NQueensError::InvalidSize {
            n: 1,
            reason: "annealing needs at least two queens",
        };
        assert_eq!(
            err.to_string(),
            "Invalid board size 1: annealing needs at least two queens"
        );

        let err = NQueensError::InvalidCoolingRate(1.5);
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::other("disk full"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(NQueensError::Io { .. })));
    }
}
