//! Simulated Annealing (SA) over permutation boards.
//!
//! The state is a permutation of columns, so only diagonal attacks can
//! occur and the energy is their count. A move swaps the columns of two
//! distinct rows. Worsening moves are accepted with probability
//! `exp(-delta / T)`, and the temperature is cooled geometrically after every
//! move. A run ends when the energy reaches 0 or the temperature drops to
//! `min_temperature`; ending with positive energy is a normal outcome.
//!
//! [`anneal_harvest`] repeats runs under a shared [`VisitedSet`] to collect
//! distinct solutions, and [`harvest_escalating`] grows the attempt budget
//! until the published count for N is reached.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod escalate;
mod filter;
mod harvest;
mod runner;

pub use config::AnnealConfig;
pub use escalate::{harvest_escalating, EscalationConfig, EscalationReport, EscalationRound};
pub use filter::{AcceptAll, CandidateFilter, VisitedSet};
pub use harvest::{anneal_harvest, HarvestConfig, HarvestResult};
pub use runner::{anneal_once, AnnealResult, AnnealRunner};
