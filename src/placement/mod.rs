//! Warehouse placement on a city grid.
//!
//! Places `n_warehouses` warehouses inside a square city so that none sits
//! in a restricted zone, each keeps a minimum distance from every
//! residential center, and warehouses keep a minimum distance from each
//! other. Among placements satisfying all of that, the one that stays clear
//! of residences, spreads warehouses apart and stays close to the center is
//! preferred.
//!
//! # Key Types
//!
//! - [`PlacementConfig`]: city, constraint and swarm parameters
//! - [`Environment`]: residential centers and restricted zones
//! - [`FitnessEvaluator`]: penalty-shaped objective
//! - [`WarehouseProblem`]: the objective adapted to [`crate::pso`]
//! - [`run`] / [`run_with_environment`]: end-to-end entry points

mod config;
mod environment;
mod fitness;
mod geometry;
mod runner;

pub use config::PlacementConfig;
pub use environment::Environment;
pub use fitness::{Candidate, FitnessBreakdown, FitnessEvaluator};
pub use geometry::{Point, RestrictedZone};
pub use runner::{run, run_with_environment, PlacementResult, WarehouseProblem};
