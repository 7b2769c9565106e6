//! Multi-solution harvesting by repeated annealing.
//!
//! Each attempt is an independent annealing run sharing one [`VisitedSet`].
//! Every new solution is added to the set, so later runs treat it as
//! infinitely costly and are pushed toward solutions not yet found.

use rand::Rng;
use tracing::{debug, instrument, trace};

use super::config::AnnealConfig;
use super::filter::VisitedSet;
use super::runner::{check_size, AnnealRunner};
use crate::board::Board;
use crate::error::Result;

/// Configuration for harvesting distinct solutions.
///
/// # Examples
///
/// ```
/// use u_nqueens::sa::{AnnealConfig, HarvestConfig};
///
/// let config = HarvestConfig::default()
///     .with_max_attempts(200)
///     .with_target(10)
///     .with_anneal(AnnealConfig::default().with_cooling_rate(0.99));
/// assert_eq!(config.target, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarvestConfig {
    /// Number of annealing runs.
    pub max_attempts: usize,

    /// Stop early once this many distinct solutions are found.
    pub target: Option<usize>,

    /// Parameters of every run.
    pub anneal: AnnealConfig,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            max_attempts: 50,
            target: None,
            anneal: AnnealConfig::default(),
        }
    }
}

impl HarvestConfig {
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_anneal(mut self, anneal: AnnealConfig) -> Self {
        self.anneal = anneal;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.anneal.validate()
    }
}

/// Result of a harvesting session.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarvestResult {
    /// Distinct solutions, in discovery order.
    pub solutions: Vec<Board>,

    /// Number of annealing runs performed.
    pub attempts: usize,

    /// Runs that ended with energy 0 (including repeats).
    pub converged_runs: usize,

    /// Converged runs that produced an already-known solution.
    pub duplicate_runs: usize,

    /// Total proposed moves over all runs.
    pub iterations: usize,
}

impl HarvestResult {
    /// Whether `target` distinct solutions were collected.
    pub fn reached(&self, target: usize) -> bool {
        self.solutions.len() >= target
    }
}

/// Collects distinct zero-energy boards over repeated annealing runs.
///
/// # Errors
///
/// Fails for `n < 2` or an invalid annealing configuration.
#[instrument(level = "debug", skip(config, rng), fields(max_attempts = config.max_attempts))]
pub fn anneal_harvest<R: Rng + ?Sized>(
    n: usize,
    config: &HarvestConfig,
    rng: &mut R,
) -> Result<HarvestResult> {
    check_size(n)?;
    config.validate()?;

    let mut visited = VisitedSet::new();
    let mut result = HarvestResult {
        solutions: Vec::new(),
        attempts: 0,
        converged_runs: 0,
        duplicate_runs: 0,
        iterations: 0,
    };

    for attempt in 1..=config.max_attempts {
        if config.target.is_some_and(|t| result.reached(t)) {
            break;
        }

        let run = AnnealRunner::run_with(n, &config.anneal, rng, &visited)?;
        result.attempts = attempt;
        result.iterations += run.iterations;

        if !run.is_solution() {
            trace!(attempt, energy = run.energy, "run did not converge");
            continue;
        }

        result.converged_runs += 1;
        if visited.insert(run.board.columns().to_vec()) {
            trace!(attempt, found = result.solutions.len() + 1, "new solution");
            result.solutions.push(run.board);
        } else {
            result.duplicate_runs += 1;
        }
    }

    debug!(
        solutions = result.solutions.len(),
        attempts = result.attempts,
        converged = result.converged_runs,
        "harvest finished"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtrack::solve_all;
    use crate::error::NQueensError;
    use crate::random::create_rng;
    use std::collections::BTreeSet;

    fn fast_anneal() -> AnnealConfig {
        AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_cooling_rate(0.99)
            .with_min_temperature(0.01)
    }

    #[test]
    fn test_default_config() {
        let config = HarvestConfig::default();
        assert_eq!(config.max_attempts, 50);
        assert!(config.target.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_board() {
        let mut rng = create_rng(0);
        assert!(matches!(
            anneal_harvest(1, &HarvestConfig::default(), &mut rng),
            Err(NQueensError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_harvests_all_four_queens_solutions() {
        let config = HarvestConfig::default()
            .with_max_attempts(500)
            .with_target(2)
            .with_anneal(fast_anneal());
        let result = anneal_harvest(4, &config, &mut create_rng(42)).unwrap();

        assert!(result.reached(2));
        let found: BTreeSet<Board> = result.solutions.iter().cloned().collect();
        let expected: BTreeSet<Board> = solve_all(4).into_iter().collect();
        assert_eq!(found, expected);
        assert!(result.attempts <= 500);
    }

    #[test]
    fn test_harvested_boards_are_distinct_solutions() {
        let config = HarvestConfig::default()
            .with_max_attempts(2000)
            .with_target(10)
            .with_anneal(fast_anneal());
        let result = anneal_harvest(5, &config, &mut create_rng(7)).unwrap();

        assert_eq!(result.solutions.len(), 10);
        assert!(result.solutions.iter().all(Board::is_solution));
        let unique: BTreeSet<&Board> = result.solutions.iter().collect();
        assert_eq!(unique.len(), result.solutions.len());
        assert_eq!(
            result.converged_runs,
            result.solutions.len() + result.duplicate_runs
        );
    }

    #[test]
    fn test_impossible_board_collects_nothing() {
        let config = HarvestConfig::default()
            .with_max_attempts(5)
            .with_anneal(fast_anneal());
        let result = anneal_harvest(3, &config, &mut create_rng(1)).unwrap();
        assert!(result.solutions.is_empty());
        assert_eq!(result.attempts, 5);
        assert_eq!(result.converged_runs, 0);
    }

    #[test]
    fn test_zero_target_runs_nothing() {
        let config = HarvestConfig::default().with_target(0);
        let result = anneal_harvest(8, &config, &mut create_rng(1)).unwrap();
        assert_eq!(result.attempts, 0);
        assert!(result.reached(0));
    }

    #[test]
    fn test_deterministic_for_seed() {
        let config = HarvestConfig::default()
            .with_max_attempts(20)
            .with_anneal(fast_anneal());
        let a = anneal_harvest(6, &config, &mut create_rng(3)).unwrap();
        let b = anneal_harvest(6, &config, &mut create_rng(3)).unwrap();
        assert_eq!(a.solutions, b.solutions);
        assert_eq!(a.iterations, b.iterations);
    }
}
