//! Particle Swarm Optimization (PSO).
//!
//! A population-based optimizer for continuous search boxes. Every particle
//! remembers the best position it has visited, the swarm shares the best
//! position any particle has visited, and each step blends momentum with a
//! randomly weighted pull toward both:
//!
//! ```text
//! v = w·v + c1·r1·(pbest − x) + c2·r2·(gbest − x)
//! x = clamp(x + v)
//! ```
//!
//! The inertia `w` decreases linearly over the run. Particles are updated
//! in a fixed order and global best improvements are visible immediately to
//! the particles that follow in the same pass.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod runner;
mod types;

pub use config::PsoConfig;
pub use runner::{PsoResult, PsoRunner, PsoSnapshot};
pub use types::PsoProblem;
