//! Penalty-shaped fitness for warehouse placements.
//!
//! Hard constraints become large additive penalties so that infeasible
//! candidates still have a gradient toward feasibility. Soft preferences
//! are only scored once a candidate has no violations at all, which means
//! infeasible candidates compare purely by how badly they violate.

use super::config::PlacementConfig;
use super::environment::Environment;
use super::geometry::Point;

/// One full placement: a point for every warehouse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    warehouses: Vec<Point>,
}

impl Candidate {
    pub fn new(warehouses: Vec<Point>) -> Self {
        Self { warehouses }
    }

    /// Builds a candidate from `[x1, y1, x2, y2, ...]`.
    ///
    /// # Panics
    /// Panics if `flat` has odd length.
    pub fn from_flat(flat: &[f64]) -> Self {
        assert!(
            flat.len() % 2 == 0,
            "flat candidate must hold (x, y) pairs, got length {}",
            flat.len()
        );
        let warehouses = flat
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();
        Self { warehouses }
    }

    /// Flattens back into `[x1, y1, x2, y2, ...]`.
    pub fn to_flat(&self) -> Vec<f64> {
        self.warehouses.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    pub fn warehouses(&self) -> &[Point] {
        &self.warehouses
    }

    pub fn len(&self) -> usize {
        self.warehouses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warehouses.is_empty()
    }
}

/// Fitness split into its hard and soft parts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessBreakdown {
    /// Sum of all constraint penalties.
    pub hard_penalty: f64,

    /// Weighted preference cost. Always 0 when `hard_penalty` is nonzero.
    pub soft_cost: f64,

    /// Number of individual constraint violations.
    pub violations: usize,
}

impl FitnessBreakdown {
    pub fn total(&self) -> f64 {
        self.hard_penalty + self.soft_cost
    }

    /// True when no hard constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.violations == 0
    }
}

/// Scores candidates against a fixed environment.
///
/// Stateless apart from its borrowed inputs: the same candidate always
/// yields the same fitness.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    config: &'a PlacementConfig,
    environment: &'a Environment,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(config: &'a PlacementConfig, environment: &'a Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    pub fn config(&self) -> &'a PlacementConfig {
        self.config
    }

    /// Fitness of a candidate. Lower is better.
    ///
    /// # Panics
    /// Panics if the candidate does not hold exactly `n_warehouses` points.
    pub fn evaluate(&self, candidate: &Candidate) -> f64 {
        self.breakdown(candidate).total()
    }

    /// Fitness of a flattened candidate.
    ///
    /// # Panics
    /// Panics if `flat.len() != 2 * n_warehouses`.
    pub fn evaluate_flat(&self, flat: &[f64]) -> f64 {
        self.breakdown_flat(flat).total()
    }

    /// [`breakdown`](Self::breakdown) for a flattened candidate.
    ///
    /// # Panics
    /// Panics if `flat.len() != 2 * n_warehouses`.
    pub fn breakdown_flat(&self, flat: &[f64]) -> FitnessBreakdown {
        assert_eq!(
            flat.len(),
            self.config.dimensions(),
            "candidate vector length must be 2 * n_warehouses"
        );
        self.breakdown(&Candidate::from_flat(flat))
    }

    /// Computes hard penalty and, for feasible candidates, soft cost.
    ///
    /// # Panics
    /// Panics if the candidate does not hold exactly `n_warehouses` points.
    pub fn breakdown(&self, candidate: &Candidate) -> FitnessBreakdown {
        assert_eq!(
            candidate.len(),
            self.config.n_warehouses,
            "candidate must place exactly n_warehouses warehouses"
        );
        let warehouses = candidate.warehouses();

        let (hard_penalty, violations) = self.hard_penalty(warehouses);

        // With positive penalty weights every violation adds a strictly
        // positive term, so an exact zero means nothing was violated.
        let soft_cost = if hard_penalty == 0.0 {
            self.soft_cost(warehouses)
        } else {
            0.0
        };

        FitnessBreakdown {
            hard_penalty,
            soft_cost,
            violations,
        }
    }

    fn hard_penalty(&self, warehouses: &[Point]) -> (f64, usize) {
        let cfg = self.config;
        let mut penalty = 0.0;
        let mut violations = 0;

        for wh in warehouses {
            if self.environment.in_restricted_zone(wh) {
                penalty += cfg.penalty_zone;
                violations += 1;
            }
        }

        for wh in warehouses {
            for res in &self.environment.residential_centers {
                let d = wh.distance(res);
                if d < cfg.d_min_residential {
                    penalty += cfg.penalty_residential * (cfg.d_min_residential - d);
                    violations += 1;
                }
            }
        }

        for (i, a) in warehouses.iter().enumerate() {
            for b in &warehouses[i + 1..] {
                let d = a.distance(b);
                if d < cfg.d_min_warehouse {
                    penalty += cfg.penalty_warehouse * (cfg.d_min_warehouse - d);
                    violations += 1;
                }
            }
        }

        (penalty, violations)
    }

    fn soft_cost(&self, warehouses: &[Point]) -> f64 {
        let cfg = self.config;
        let scale = cfg.soft_cost_scale;

        let mut residential = 0.0;
        for wh in warehouses {
            for res in &self.environment.residential_centers {
                let margin = wh.distance(res) - cfg.d_min_residential;
                residential += (-margin / scale).exp();
            }
        }

        let mut separation = 0.0;
        for (i, a) in warehouses.iter().enumerate() {
            for b in &warehouses[i + 1..] {
                let margin = a.distance(b) - cfg.d_min_warehouse;
                separation += (-margin / scale).exp();
            }
        }

        let center = cfg.city_center();
        let max_dist = cfg.max_center_distance();
        let mut centrality = 0.0;
        for wh in warehouses {
            let normalized = wh.distance(&center) / max_dist;
            centrality += normalized * normalized;
        }

        cfg.alpha * residential + cfg.beta * separation + cfg.gamma * centrality
    }
}
