//! Annealing configuration.

use crate::error::{NQueensError, Result};

/// Configuration for a single simulated-annealing run.
///
/// Temperature follows a geometric schedule, `T_{k+1} = cooling_rate * T_k`,
/// applied once per proposed move.
///
/// # Examples
///
/// ```
/// use u_nqueens::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.001)
///     .with_cooling_rate(0.995)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Initial temperature. Higher values accept more uphill moves early on.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// The run stops once the temperature is at or below this value.
    pub min_temperature: f64,

    /// Maximum number of proposed moves (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Seed for runners that create their own generator.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.999,
            min_temperature: 0.01,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of moves a run makes before the schedule reaches
    /// `min_temperature`, absent convergence or an iteration budget.
    ///
    /// Counted with the same repeated multiplication the annealing loop
    /// uses, so rounding can make it one more than the closed form
    /// `ceil(ln(T_min / T_0) / ln(alpha))`. Returns 0 for an invalid
    /// configuration.
    pub fn cooling_steps(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut temperature = self.initial_temperature;
        let mut steps = 0;
        while temperature > self.min_temperature {
            temperature *= self.cooling_rate;
            steps += 1;
        }
        steps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_temperature("initial_temperature", self.initial_temperature)?;
        check_temperature("min_temperature", self.min_temperature)?;
        if self.min_temperature >= self.initial_temperature {
            return Err(NQueensError::InvalidTemperature {
                name: "min_temperature",
                value: self.min_temperature,
                reason: "must be less than initial_temperature",
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(NQueensError::InvalidCoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}

fn check_temperature(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(NQueensError::InvalidTemperature {
            name,
            value,
            reason: "must be positive and finite",
        });
    }
    Ok(())
}
