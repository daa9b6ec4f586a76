//! Constrained warehouse placement via Particle Swarm Optimization.
//!
//! - **PSO**: a generic swarm optimizer over continuous boxes. Problems
//!   implement [`pso::PsoProblem`]; the runner handles particle memory,
//!   inertia annealing and boundary clamping.
//! - **Placement**: the warehouse siting domain. Residential centers and
//!   restricted zones are generated once per run, hard constraints are
//!   expressed as penalties and soft preferences as weighted costs.
//!
//! # Architecture
//!
//! `pso` knows nothing about warehouses; `placement` is a consumer of it.
//! Rendering, plotting and command-line handling are left to callers,
//! which read [`placement::PlacementResult`].
//!
//! # Features
//!
//! - `parallel`: evaluate particle positions with rayon
//! - `serde`: serialize configurations, environments and results

pub mod error;
pub mod placement;
pub mod pso;
pub mod random;

pub use error::ConfigError;
