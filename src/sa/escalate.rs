//! Harvesting with a growing attempt budget.
//!
//! Each round is a fresh [`anneal_harvest`] with `attempts` runs. When the
//! round falls short of the published solution count for N, the budget is
//! multiplied by `growth_factor` and the harvest starts over, until the count
//! is met or the ceiling is reached.

use std::time::Duration;

use rand::Rng;
use tracing::{info, instrument, warn};

use super::config::AnnealConfig;
use super::harvest::{anneal_harvest, HarvestConfig};
use crate::board::Board;
use crate::error::{NQueensError, Result};
use crate::known::known_solution_count;
use crate::report::{timed, TimingRecord};

/// Budget schedule for [`harvest_escalating`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscalationConfig {
    /// Attempts in the first round.
    pub initial_attempts: usize,

    /// No round uses more attempts than this.
    pub attempt_ceiling: usize,

    /// Budget multiplier between rounds. At least 2.
    pub growth_factor: usize,

    /// Parameters of every annealing run.
    pub anneal: AnnealConfig,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            initial_attempts: 50,
            attempt_ceiling: 100_000,
            growth_factor: 2,
            anneal: AnnealConfig::default(),
        }
    }
}

impl EscalationConfig {
    pub fn with_initial_attempts(mut self, n: usize) -> Self {
        self.initial_attempts = n;
        self
    }

    pub fn with_attempt_ceiling(mut self, n: usize) -> Self {
        self.attempt_ceiling = n;
        self
    }

    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        self.growth_factor = factor;
        self
    }

    pub fn with_anneal(mut self, anneal: AnnealConfig) -> Self {
        self.anneal = anneal;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.initial_attempts == 0 {
            return Err(NQueensError::InvalidSchedule(
                "initial_attempts must be at least 1",
            ));
        }
        if self.attempt_ceiling < self.initial_attempts {
            return Err(NQueensError::InvalidSchedule(
                "attempt_ceiling must not be below initial_attempts",
            ));
        }
        if self.growth_factor < 2 {
            return Err(NQueensError::InvalidSchedule(
                "growth_factor must be at least 2",
            ));
        }
        self.anneal.validate()
    }
}

/// One harvest round.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscalationRound {
    /// Attempt budget of this round.
    pub attempts: usize,

    /// Distinct solutions found in this round.
    pub solutions: usize,

    /// Wall-clock time of the round.
    pub elapsed: Duration,
}

/// Outcome of [`harvest_escalating`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscalationReport {
    /// Board size.
    pub n: usize,

    /// Published solution count, when known.
    pub target: Option<u64>,

    /// Every round, in order.
    pub rounds: Vec<EscalationRound>,

    /// Solutions of the last round.
    pub solutions: Vec<Board>,
}

impl EscalationReport {
    /// Whether the last round found every known solution.
    pub fn is_exhaustive(&self) -> bool {
        self.target.is_some_and(|t| self.solutions.len() as u64 >= t)
    }

    /// Timing record of the last round.
    pub fn timing_record(&self) -> Option<TimingRecord> {
        self.rounds.last().map(|round| TimingRecord {
            n: self.n,
            attempts: Some(round.attempts),
            elapsed: round.elapsed,
            solutions: round.solutions,
        })
    }
}

/// Repeats harvesting with a growing budget until every known solution is
/// found or the attempt ceiling is reached.
///
/// Boards without a tabulated count always run up to the ceiling.
///
/// # Errors
///
/// Fails for `n < 2` or an invalid configuration.
#[instrument(level = "info", skip(config, rng))]
pub fn harvest_escalating<R: Rng + ?Sized>(
    n: usize,
    config: &EscalationConfig,
    rng: &mut R,
) -> Result<EscalationReport> {
    config.validate()?;

    let target = known_solution_count(n);
    let mut attempts = config.initial_attempts;
    let mut rounds = Vec::new();

    loop {
        let mut harvest = HarvestConfig::default()
            .with_max_attempts(attempts)
            .with_anneal(config.anneal.clone());
        if let Some(t) = target.and_then(|t| usize::try_from(t).ok()) {
            harvest = harvest.with_target(t);
        }

        let (result, elapsed) = timed(|| anneal_harvest(n, &harvest, rng));
        let result = result?;
        info!(
            attempts,
            solutions = result.solutions.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "harvest round finished"
        );
        rounds.push(EscalationRound {
            attempts,
            solutions: result.solutions.len(),
            elapsed,
        });

        let complete = target.is_some_and(|t| result.solutions.len() as u64 >= t);
        if complete || attempts >= config.attempt_ceiling {
            if !complete {
                warn!(attempts, "attempt ceiling reached before all solutions were found");
            }
            return Ok(EscalationReport {
                n,
                target,
                rounds,
                solutions: result.solutions,
            });
        }

        attempts = attempts
            .saturating_mul(config.growth_factor)
            .min(config.attempt_ceiling);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn fast_anneal() -> AnnealConfig {
        AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_cooling_rate(0.99)
            .with_min_temperature(0.01)
    }

    #[test]
    fn test_default_config() {
        let config = EscalationConfig::default();
        assert_eq!(config.initial_attempts, 50);
        assert_eq!(config.attempt_ceiling, 100_000);
        assert_eq!(config.growth_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_schedule() {
        let bad = [
            EscalationConfig::default().with_initial_attempts(0),
            EscalationConfig::default().with_attempt_ceiling(10),
            EscalationConfig::default().with_growth_factor(1),
        ];
        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(NQueensError::InvalidSchedule(_))
            ));
        }
    }

    #[test]
    fn test_reaches_known_count_for_six() {
        let config = EscalationConfig::default()
            .with_initial_attempts(4)
            .with_attempt_ceiling(4096)
            .with_anneal(fast_anneal());
        let report = harvest_escalating(6, &config, &mut create_rng(42)).unwrap();

        assert_eq!(report.target, Some(4));
        assert!(report.is_exhaustive());
        assert_eq!(report.solutions.len(), 4);
        assert!(report
            .rounds
            .windows(2)
            .all(|w| w[1].attempts == (w[0].attempts * 2).min(4096)));

        let record = report.timing_record().unwrap();
        assert_eq!(record.n, 6);
        assert_eq!(record.solutions, 4);
        assert_eq!(record.attempts, report.rounds.last().map(|r| r.attempts));
    }

    #[test]
    fn test_unsolvable_size_meets_zero_target() {
        let config = EscalationConfig::default()
            .with_initial_attempts(1)
            .with_attempt_ceiling(5)
            .with_growth_factor(2)
            .with_anneal(fast_anneal().with_max_iterations(10));
        let report = harvest_escalating(3, &config, &mut create_rng(0)).unwrap();

        // Zero known solutions for n = 3: the first round already meets it.
        assert_eq!(report.target, Some(0));
        assert_eq!(report.rounds.len(), 1);
        assert!(report.is_exhaustive());
    }

    #[test]
    fn test_untabulated_size_runs_to_ceiling() {
        let config = EscalationConfig::default()
            .with_initial_attempts(1)
            .with_attempt_ceiling(5)
            .with_anneal(fast_anneal().with_max_iterations(5));
        let report = harvest_escalating(24, &config, &mut create_rng(0)).unwrap();

        assert!(report.target.is_none());
        let budgets: Vec<usize> = report.rounds.iter().map(|r| r.attempts).collect();
        assert_eq!(budgets, vec![1, 2, 4, 5]);
        assert!(!report.is_exhaustive());
    }

    #[test]
    fn test_rejects_small_board() {
        let config = EscalationConfig::default().with_anneal(fast_anneal());
        assert!(matches!(
            harvest_escalating(1, &config, &mut create_rng(0)),
            Err(NQueensError::InvalidSize { .. })
        ));
    }
}
