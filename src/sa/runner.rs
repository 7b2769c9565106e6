//! Annealing loop over permutation boards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::Rng;
use tracing::{debug, instrument};

use super::config::AnnealConfig;
use super::filter::{AcceptAll, CandidateFilter, VisitedSet};
use crate::board::Board;
use crate::energy::energy;
use crate::error::{NQueensError, Result};
use crate::random::{distinct_pair, random_permutation, rng_from_option};

/// Result of one annealing run.
///
/// `board`/`energy` is the state the run ended in. A run stops as soon as it
/// reaches energy 0, so an energy of 0 here means `board` is a solution; a
/// positive energy means the schedule ran out first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealResult {
    /// Final state.
    pub board: Board,

    /// Energy of the final state.
    pub energy: usize,

    /// Lowest-energy state seen during the run.
    pub best: Board,

    /// Energy of `best`.
    pub best_energy: usize,

    /// Number of proposed moves.
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Number of candidates rejected by the filter.
    pub filtered_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

impl AnnealResult {
    /// Whether the run converged to a valid board.
    pub fn is_solution(&self) -> bool {
        self.energy == 0
    }
}

/// Executes simulated annealing on an N-Queens board.
pub struct AnnealRunner;

impl AnnealRunner {
    /// Runs with a generator seeded from `config.seed` and no filter.
    pub fn run(n: usize, config: &AnnealConfig) -> Result<AnnealResult> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with(n, config, &mut rng, &AcceptAll)
    }

    /// Runs with an injected generator and candidate filter.
    pub fn run_with<R, F>(
        n: usize,
        config: &AnnealConfig,
        rng: &mut R,
        filter: &F,
    ) -> Result<AnnealResult>
    where
        R: Rng + ?Sized,
        F: CandidateFilter + ?Sized,
    {
        Self::run_with_cancel(n, config, rng, filter, None)
    }

    /// Runs with an optional cancellation token, checked before every move.
    ///
    /// # Errors
    ///
    /// [`NQueensError::InvalidSize`] for `n < 2`, or the error from
    /// [`AnnealConfig::validate`]. Failing to converge is not an error.
    #[instrument(level = "debug", skip_all, fields(n = n))]
    pub fn run_with_cancel<R, F>(
        n: usize,
        config: &AnnealConfig,
        rng: &mut R,
        filter: &F,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AnnealResult>
    where
        R: Rng + ?Sized,
        F: CandidateFilter + ?Sized,
    {
        check_size(n)?;
        config.validate()?;

        let mut current = random_permutation(n, rng);
        let mut current_energy = energy(&current);
        let mut best = current.clone();
        let mut best_energy = current_energy;
        let mut candidate = current.clone();

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut filtered_moves = 0usize;
        let mut cancelled = false;

        while temperature > config.min_temperature && current_energy > 0 {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            candidate.copy_from_slice(&current);
            let (i, j) = distinct_pair(n, rng);
            candidate.swap(i, j);

            let candidate_energy = if filter.admits(&candidate) {
                energy(&candidate) as f64
            } else {
                filtered_moves += 1;
                f64::INFINITY
            };
            let delta = candidate_energy - current_energy as f64;

            // Metropolis acceptance criterion
            let accept = if delta < 0.0 {
                improving_moves += 1;
                true
            } else {
                // Filtered candidates still consume a draw; the random stream
                // for a given seed depends on it.
                let probability = (-delta / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                std::mem::swap(&mut current, &mut candidate);
                current_energy = candidate_energy as usize;
                accepted_moves += 1;

                if current_energy < best_energy {
                    best.copy_from_slice(&current);
                    best_energy = current_energy;
                }
            }

            temperature = cool(temperature, config.cooling_rate);
            iterations += 1;
        }

        debug!(
            energy = current_energy,
            best_energy, iterations, accepted_moves, temperature, "annealing finished"
        );

        Ok(AnnealResult {
            board: Board::from_permutation(current),
            energy: current_energy,
            best: Board::from_permutation(best),
            best_energy,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            filtered_moves,
            cancelled,
        })
    }
}

/// Runs one annealing pass, optionally rejecting already-visited states.
///
/// # Examples
///
/// ```
/// use u_nqueens::random::create_rng;
/// use u_nqueens::sa::{anneal_once, AnnealConfig};
///
/// let mut rng = create_rng(42);
/// let result = anneal_once(8, &AnnealConfig::default(), &mut rng, None).unwrap();
/// assert_eq!(result.energy, result.board.energy());
/// ```
pub fn anneal_once<R: Rng + ?Sized>(
    n: usize,
    config: &AnnealConfig,
    rng: &mut R,
    visited: Option<&VisitedSet>,
) -> Result<AnnealResult> {
    match visited {
        Some(visited) => AnnealRunner::run_with(n, config, rng, visited),
        None => AnnealRunner::run_with(n, config, rng, &AcceptAll),
    }
}

/// Geometric cooling step.
fn cool(temperature: f64, alpha: f64) -> f64 {
    temperature * alpha
}

pub(crate) fn check_size(n: usize) -> Result<()> {
    if n < 2 {
        return Err(NQueensError::InvalidSize {
            n,
            reason: "annealing needs at least two queens",
        });
    }
    Ok(())
}
