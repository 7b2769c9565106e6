//! Text rendering of boards.

use std::fmt;

use super::types::{Board, EMPTY, QUEEN};

impl Board {
    /// Renders each row as a string of `'.'` and `'Q'`.
    pub fn rows(&self) -> Vec<String> {
        let n = self.size();
        self.columns()
            .iter()
            .map(|&queen| {
                (0..n)
                    .map(|col| if col == queen { QUEEN } else { EMPTY })
                    .collect()
            })
            .collect()
    }
}

/// Space-separated grid, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for (row, &queen) in self.columns().iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..n {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", if col == queen { QUEEN } else { EMPTY })?;
            }
        }
        Ok(())
    }
}
