//! CSV timing log for benchmark drivers.
//!
//! One record per board size: `n,attempts,seconds,solutions`. The
//! `attempts` column is empty for backtracking runs.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::error::{NQueensError, Result};

const HEADER: [&str; 4] = ["n", "attempts", "seconds", "solutions"];

/// Timing of one solver invocation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingRecord {
    /// Board size.
    pub n: usize,

    /// Annealing attempts, if the solver was stochastic.
    pub attempts: Option<usize>,

    /// Wall-clock time of the invocation.
    pub elapsed: Duration,

    /// Number of solutions returned.
    pub solutions: usize,
}

impl TimingRecord {
    fn fields(&self) -> [String; 4] {
        [
            self.n.to_string(),
            self.attempts.map(|a| a.to_string()).unwrap_or_default(),
            format!("{:.6}", self.elapsed.as_secs_f64()),
            self.solutions.to_string(),
        ]
    }
}

/// Writes [`TimingRecord`]s as CSV.
pub struct TimingLog<W: Write> {
    writer: csv::Writer<W>,
}

impl TimingLog<File> {
    /// Creates (or truncates) a log file and writes the header.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> TimingLog<W> {
    /// Wraps a writer and writes the header.
    pub fn new(inner: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self { writer })
    }

    /// Appends one record.
    pub fn record(&mut self, record: &TimingRecord) -> Result<()> {
        self.writer.write_record(record.fields())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| NQueensError::Io {
            source: e.into_error(),
        })
    }
}

/// Runs `f`, returning its output and elapsed wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}
