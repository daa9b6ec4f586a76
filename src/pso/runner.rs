//! PSO execution loop.
//!
//! [`PsoRunner`] owns the swarm for the duration of one run:
//! initialization → evaluate → best update → velocity/position update → repeat.

use super::config::PsoConfig;
use super::types::PsoProblem;
use crate::error::{ensure_at_least, ConfigError};
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, trace};

/// One particle of the swarm.
#[derive(Debug, Clone)]
struct Particle {
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_fitness: f64,
}

/// Best position seen by any particle so far.
#[derive(Debug, Clone)]
struct GlobalBest {
    position: Vec<f64>,
    fitness: f64,
}

/// Swarm state, exclusively owned by a single run.
#[derive(Debug)]
struct Swarm {
    particles: Vec<Particle>,
    best: GlobalBest,
}

impl Swarm {
    fn snapshot(&self) -> PsoSnapshot {
        PsoSnapshot {
            positions: self.particles.iter().map(|p| p.position.clone()).collect(),
            personal_bests: self
                .particles
                .iter()
                .map(|p| p.best_position.clone())
                .collect(),
            global_best: self.best.position.clone(),
            global_best_fitness: self.best.fitness,
        }
    }
}

/// Swarm state captured at the end of an iteration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoSnapshot {
    /// Current position of every particle, in particle order.
    pub positions: Vec<Vec<f64>>,

    /// Personal best position of every particle, in particle order.
    pub personal_bests: Vec<Vec<f64>>,

    /// Global best position.
    pub global_best: Vec<f64>,

    /// Global best fitness.
    pub global_best_fitness: f64,
}

/// Result of a PSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// Best position found.
    pub best_position: Vec<f64>,

    /// Objective value of [`best_position`](Self::best_position).
    pub best_fitness: f64,

    /// Number of iterations executed (always `max_iterations`).
    pub iterations: usize,

    /// Global best fitness after initialization and after every iteration.
    ///
    /// Length is `max_iterations + 1` and the sequence is non-increasing.
    pub fitness_history: Vec<f64>,

    /// Swarm snapshots aligned with `fitness_history`, present only when
    /// [`PsoConfig::record_trajectory`] is set.
    pub trajectory: Option<Vec<PsoSnapshot>>,
}

/// Executes Particle Swarm Optimization.
///
/// # Usage
///
/// ```ignore
/// let config = PsoConfig::default().with_seed(42);
/// let result = PsoRunner::run(&problem, &config)?;
/// println!("best: {}", result.best_fitness);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO with an RNG seeded from [`PsoConfig::seed`].
    pub fn run<P: PsoProblem>(problem: &P, config: &PsoConfig) -> Result<PsoResult, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs PSO drawing all randomness from `rng`.
    ///
    /// [`PsoConfig::seed`] is ignored. Useful when the caller already
    /// consumed part of the same stream, e.g. to generate problem data.
    pub fn run_with_rng<P: PsoProblem, R: Rng>(
        problem: &P,
        config: &PsoConfig,
        rng: &mut R,
    ) -> Result<PsoResult, ConfigError> {
        config.validate()?;
        let bounds = problem_bounds(problem)?;
        let dim = bounds.len();

        let mut swarm = init_swarm(problem, config, &bounds, rng);
        debug!(
            particles = config.n_particles,
            dimensions = dim,
            iterations = config.max_iterations,
            initial_best = swarm.best.fitness,
            "swarm initialized"
        );

        let mut fitness_history = Vec::with_capacity(config.max_iterations + 1);
        fitness_history.push(swarm.best.fitness);
        let mut trajectory = config.record_trajectory.then(|| {
            let mut frames = Vec::with_capacity(config.max_iterations + 1);
            frames.push(swarm.snapshot());
            frames
        });

        for it in 0..config.max_iterations {
            let w = config.inertia(it);

            // A particle's position only changes during its own step, so
            // fitness for the whole pass can be computed up front.
            let fitness = evaluate_positions(problem, &swarm.particles, config.parallel);

            for (particle, f) in swarm.particles.iter_mut().zip(fitness) {
                step_particle(particle, f, &mut swarm.best, &bounds, w, config, rng);
            }

            fitness_history.push(swarm.best.fitness);
            if let Some(frames) = trajectory.as_mut() {
                frames.push(swarm.snapshot());
            }

            trace!(iteration = it + 1, inertia = w, best = swarm.best.fitness, "iteration complete");
            problem.on_iteration(it + 1, swarm.best.fitness);
        }

        debug!(best = swarm.best.fitness, "swarm finished");

        Ok(PsoResult {
            best_position: swarm.best.position,
            best_fitness: swarm.best.fitness,
            iterations: config.max_iterations,
            fitness_history,
            trajectory,
        })
    }
}

/// Collects and checks the per-dimension bounds of a problem.
fn problem_bounds<P: PsoProblem>(problem: &P) -> Result<Vec<(f64, f64)>, ConfigError> {
    let dim = problem.dimensions();
    ensure_at_least("dimensions", dim, 1)?;
    (0..dim)
        .map(|d| {
            let (lo, hi) = problem.bounds(d);
            if lo <= hi {
                Ok((lo, hi))
            } else {
                Err(ConfigError::InvertedRange {
                    field: "bounds",
                    low: lo,
                    high: hi,
                })
            }
        })
        .collect()
}

/// Creates particles with uniform random positions and small random
/// velocities, then seeds personal and global bests.
fn init_swarm<P: PsoProblem, R: Rng>(
    problem: &P,
    config: &PsoConfig,
    bounds: &[(f64, f64)],
    rng: &mut R,
) -> Swarm {
    let positions: Vec<Vec<f64>> = (0..config.n_particles)
        .map(|_| {
            bounds
                .iter()
                .map(|&(lo, hi)| lo + rng.random::<f64>() * (hi - lo))
                .collect()
        })
        .collect();

    let v0 = config.initial_velocity;
    let velocities: Vec<Vec<f64>> = (0..config.n_particles)
        .map(|_| {
            bounds
                .iter()
                .map(|_| (rng.random::<f64>() - 0.5) * 2.0 * v0)
                .collect()
        })
        .collect();

    let particles: Vec<Particle> = positions
        .into_iter()
        .zip(velocities)
        .map(|(position, velocity)| {
            let best_fitness = problem.evaluate(&position);
            Particle {
                best_position: position.clone(),
                position,
                velocity,
                best_fitness,
            }
        })
        .collect();

    // First particle with the minimum fitness wins ties.
    let mut best_idx = 0;
    for (i, p) in particles.iter().enumerate().skip(1) {
        if p.best_fitness < particles[best_idx].best_fitness {
            best_idx = i;
        }
    }
    let best = GlobalBest {
        position: particles[best_idx].best_position.clone(),
        fitness: particles[best_idx].best_fitness,
    };

    Swarm { particles, best }
}

#[cfg(feature = "parallel")]
fn evaluate_positions<P: PsoProblem>(problem: &P, particles: &[Particle], parallel: bool) -> Vec<f64> {
    use rayon::prelude::*;

    if parallel {
        particles
            .par_iter()
            .map(|p| problem.evaluate(&p.position))
            .collect()
    } else {
        particles.iter().map(|p| problem.evaluate(&p.position)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_positions<P: PsoProblem>(problem: &P, particles: &[Particle], _parallel: bool) -> Vec<f64> {
    particles.iter().map(|p| problem.evaluate(&p.position)).collect()
}

/// Applies one particle's update: best bookkeeping, then kinematics.
///
/// `best` is updated in place, so particles stepped later in the same pass
/// are pulled toward the newest global best.
fn step_particle<R: Rng>(
    particle: &mut Particle,
    fitness: f64,
    best: &mut GlobalBest,
    bounds: &[(f64, f64)],
    w: f64,
    config: &PsoConfig,
    rng: &mut R,
) {
    if fitness < particle.best_fitness {
        particle.best_fitness = fitness;
        particle.best_position.clone_from(&particle.position);

        if fitness < best.fitness {
            best.fitness = fitness;
            best.position.clone_from(&particle.position);
        }
    }

    let dim = bounds.len();
    let r1: Vec<f64> = (0..dim).map(|_| rng.random()).collect();
    let r2: Vec<f64> = (0..dim).map(|_| rng.random()).collect();

    for d in 0..dim {
        let x = particle.position[d];
        let cognitive = config.c1 * r1[d] * (particle.best_position[d] - x);
        let social = config.c2 * r2[d] * (best.position[d] - x);
        let v = w * particle.velocity[d] + cognitive + social;

        // Only the position is clamped; velocity keeps pointing outward.
        let (lo, hi) = bounds[d];
        particle.velocity[d] = v;
        particle.position[d] = (x + v).clamp(lo, hi);
    }
}

// ============================================================================
// Tests
// ============================================================================
