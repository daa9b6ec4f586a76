//! Warehouse placement runs.
//!
//! Binds the [`FitnessEvaluator`] to the generic swarm through
//! [`WarehouseProblem`] and exposes the run entry points consumed by
//! reporting and rendering code.

use super::config::PlacementConfig;
use super::environment::Environment;
use super::fitness::{Candidate, FitnessBreakdown, FitnessEvaluator};
use super::geometry::Point;
use crate::error::ConfigError;
use crate::pso::{PsoProblem, PsoRunner, PsoSnapshot};
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{info, warn};

/// The placement problem as seen by the swarm: a flat vector of
/// `2 * n_warehouses` coordinates, each bounded by the city.
#[derive(Debug, Clone, Copy)]
pub struct WarehouseProblem<'a> {
    evaluator: FitnessEvaluator<'a>,
}

impl<'a> WarehouseProblem<'a> {
    pub fn new(config: &'a PlacementConfig, environment: &'a Environment) -> Self {
        Self {
            evaluator: FitnessEvaluator::new(config, environment),
        }
    }

    pub fn evaluator(&self) -> &FitnessEvaluator<'a> {
        &self.evaluator
    }
}

impl PsoProblem for WarehouseProblem<'_> {
    fn dimensions(&self) -> usize {
        self.evaluator.config().dimensions()
    }

    fn bounds(&self, _dim: usize) -> (f64, f64) {
        let config = self.evaluator.config();
        (config.min_coord, config.max_coord)
    }

    fn evaluate(&self, position: &[f64]) -> f64 {
        self.evaluator.evaluate_flat(position)
    }

    fn on_iteration(&self, iteration: usize, best_fitness: f64) {
        let config = self.evaluator.config();
        let interval = config.progress_interval;
        if interval == 0 || iteration % interval != 0 {
            return;
        }
        let total = config.pso.max_iterations;
        if best_fitness < config.feasibility_threshold {
            info!(iteration, total, best_fitness, "placement progress");
        } else {
            info!(
                iteration,
                total, "placement progress: best placement still violates constraints"
            );
        }
    }
}

/// Outcome of a placement run.
///
/// An infeasible outcome is a normal result: check
/// [`is_feasible`](Self::is_feasible) before using the placement.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementResult {
    /// Best placement as `[x1, y1, x2, y2, ...]`.
    pub best_position: Vec<f64>,

    /// Fitness of `best_position`.
    pub best_fitness: f64,

    /// Hard/soft split of `best_fitness`.
    pub breakdown: FitnessBreakdown,

    /// Global best fitness before the first iteration and after each one.
    pub fitness_history: Vec<f64>,

    /// Per-iteration swarm snapshots, when requested.
    pub trajectory: Option<Vec<PsoSnapshot>>,

    /// The environment the placement was optimized against.
    pub environment: Environment,

    /// Threshold used by [`is_feasible`](Self::is_feasible).
    pub feasibility_threshold: f64,
}

impl PlacementResult {
    /// Best placement as points, one per warehouse.
    pub fn warehouses(&self) -> Vec<Point> {
        Candidate::from_flat(&self.best_position).warehouses().to_vec()
    }

    /// Whether the best fitness is below the feasibility threshold.
    pub fn is_feasible(&self) -> bool {
        self.best_fitness < self.feasibility_threshold
    }
}

/// Generates an environment and optimizes warehouse placement in it.
///
/// Environment generation and the swarm share one RNG stream seeded from
/// `config.pso.seed`, so a fixed seed reproduces the whole run.
/// `record_history` enables per-iteration trajectory snapshots.
///
/// # Examples
///
/// ```
/// use warehouse_pso::placement::{run, PlacementConfig};
/// use warehouse_pso::pso::PsoConfig;
///
/// let config = PlacementConfig::default()
///     .with_pso(PsoConfig::default().with_particles(20).with_iterations(30))
///     .with_seed(42);
/// let result = run(&config, false).unwrap();
/// assert_eq!(result.fitness_history.len(), 31);
/// assert_eq!(result.best_position.len(), 8);
/// ```
pub fn run(config: &PlacementConfig, record_history: bool) -> Result<PlacementResult, ConfigError> {
    config.validate()?;
    let mut rng = rng_from_seed(config.pso.seed);
    let environment = Environment::generate(config, &mut rng);
    optimize(config, environment, record_history, &mut rng)
}

/// Optimizes warehouse placement against a caller-supplied environment.
///
/// Lets a caller render and optimize against exactly the same data.
pub fn run_with_environment(
    config: &PlacementConfig,
    environment: Environment,
    record_history: bool,
) -> Result<PlacementResult, ConfigError> {
    config.validate()?;
    let mut rng = rng_from_seed(config.pso.seed);
    optimize(config, environment, record_history, &mut rng)
}

fn optimize<R: Rng>(
    config: &PlacementConfig,
    environment: Environment,
    record_history: bool,
    rng: &mut R,
) -> Result<PlacementResult, ConfigError> {
    let pso = config.pso.clone().with_trajectory(record_history);

    let (result, breakdown) = {
        let problem = WarehouseProblem::new(config, &environment);
        info!(
            warehouses = config.n_warehouses,
            particles = pso.n_particles,
            iterations = pso.max_iterations,
            "starting placement optimization"
        );
        let result = PsoRunner::run_with_rng(&problem, &pso, rng)?;
        let breakdown = problem.evaluator().breakdown_flat(&result.best_position);
        (result, breakdown)
    };

    if result.best_fitness < config.feasibility_threshold {
        info!(best_fitness = result.best_fitness, "placement optimization finished");
    } else {
        warn!(
            best_fitness = result.best_fitness,
            violations = breakdown.violations,
            "no feasible placement found"
        );
    }

    Ok(PlacementResult {
        best_position: result.best_position,
        best_fitness: result.best_fitness,
        breakdown,
        fitness_history: result.fitness_history,
        trajectory: result.trajectory,
        environment,
        feasibility_threshold: config.feasibility_threshold,
    })
}
