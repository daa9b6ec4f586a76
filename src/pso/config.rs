//! PSO configuration.

use crate::error::{ensure_at_least, ensure_non_negative, ConfigError};

/// Configuration for Particle Swarm Optimization.
///
/// The inertia weight is annealed linearly from [`w_max`](Self::w_max) at
/// the first iteration toward [`w_min`](Self::w_min), trading early
/// exploration for late refinement.
///
/// # Examples
///
/// ```
/// use warehouse_pso::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_particles(30)
///     .with_iterations(100)
///     .with_inertia(0.9, 0.4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub n_particles: usize,

    /// Number of update passes over the swarm. There is no early stop.
    pub max_iterations: usize,

    /// Inertia weight at iteration 0.
    pub w_max: f64,

    /// Inertia weight the schedule anneals toward.
    pub w_min: f64,

    /// Cognitive coefficient: pull toward the particle's own best.
    pub c1: f64,

    /// Social coefficient: pull toward the swarm's best.
    pub c2: f64,

    /// Half-width of the uniform range initial velocities are drawn from.
    pub initial_velocity: f64,

    /// Record per-iteration position snapshots in the result.
    pub record_trajectory: bool,

    /// Whether to evaluate particle positions in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// to sequential evaluation.
    pub parallel: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            n_particles: 50,
            max_iterations: 200,
            w_max: 0.9,
            w_min: 0.5,
            c1: 1.5,
            c2: 1.5,
            initial_velocity: 0.05,
            record_trajectory: false,
            parallel: false,
            seed: None,
        }
    }
}

impl PsoConfig {
    pub fn with_particles(mut self, n: usize) -> Self {
        self.n_particles = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the inertia schedule bounds.
    pub fn with_inertia(mut self, w_max: f64, w_min: f64) -> Self {
        self.w_max = w_max;
        self.w_min = w_min;
        self
    }

    /// Sets the cognitive and social coefficients.
    pub fn with_coefficients(mut self, c1: f64, c2: f64) -> Self {
        self.c1 = c1;
        self.c2 = c2;
        self
    }

    pub fn with_initial_velocity(mut self, v: f64) -> Self {
        self.initial_velocity = v;
        self
    }

    pub fn with_trajectory(mut self, record: bool) -> Self {
        self.record_trajectory = record;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Inertia weight used during the given (0-based) iteration.
    ///
    /// `w = w_max - (iteration / max_iterations) * (w_max - w_min)`
    pub fn inertia(&self, iteration: usize) -> f64 {
        if self.max_iterations == 0 {
            return self.w_max;
        }
        let progress = iteration as f64 / self.max_iterations as f64;
        self.w_max - progress * (self.w_max - self.w_min)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_at_least("n_particles", self.n_particles, 1)?;
        ensure_at_least("max_iterations", self.max_iterations, 1)?;
        ensure_non_negative("w_min", self.w_min)?;
        ensure_non_negative("w_max", self.w_max)?;
        if self.w_min > self.w_max {
            return Err(ConfigError::InvertedRange {
                field: "inertia",
                low: self.w_min,
                high: self.w_max,
            });
        }
        ensure_non_negative("c1", self.c1)?;
        ensure_non_negative("c2", self.c2)?;
        ensure_non_negative("initial_velocity", self.initial_velocity)?;
        Ok(())
    }
}
