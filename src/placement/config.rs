//! Placement problem configuration.

use super::geometry::Point;
use crate::error::{ensure_at_least, ensure_non_negative, ensure_positive, ConfigError};
use crate::pso::PsoConfig;

/// Configuration for a warehouse placement run.
///
/// Covers the city domain, environment generation, hard-constraint
/// thresholds and penalties, soft-cost weights, and the swarm parameters
/// in [`pso`](Self::pso).
///
/// # Examples
///
/// ```
/// use warehouse_pso::placement::PlacementConfig;
/// use warehouse_pso::pso::PsoConfig;
///
/// let config = PlacementConfig::default()
///     .with_warehouses(3)
///     .with_min_distances(40.0, 120.0)
///     .with_pso(PsoConfig::default().with_iterations(100))
///     .with_seed(42);
/// assert_eq!(config.dimensions(), 6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementConfig {
    /// Lower coordinate bound of the square city, on both axes.
    pub min_coord: f64,

    /// Upper coordinate bound of the square city, on both axes.
    pub max_coord: f64,

    /// Number of warehouses placed simultaneously.
    pub n_warehouses: usize,

    /// Number of residential centers to generate.
    pub n_residential: usize,

    /// Number of restricted zones to generate.
    pub n_zones: usize,

    /// Smallest generated zone width/height.
    pub zone_min_extent: f64,

    /// Largest generated zone width/height.
    pub zone_max_extent: f64,

    /// Minimum warehouse-to-residential distance.
    pub d_min_residential: f64,

    /// Minimum warehouse-to-warehouse distance.
    pub d_min_warehouse: f64,

    /// Flat penalty for each warehouse inside a restricted zone.
    pub penalty_zone: f64,

    /// Penalty per unit of residential distance violation.
    pub penalty_residential: f64,

    /// Penalty per unit of warehouse separation violation.
    pub penalty_warehouse: f64,

    /// Weight of the residential-proximity soft cost.
    pub alpha: f64,

    /// Weight of the warehouse-separation soft cost.
    pub beta: f64,

    /// Weight of the centrality soft cost.
    pub gamma: f64,

    /// Decay length of the exponential proximity terms.
    pub soft_cost_scale: f64,

    /// Fitness at or above which a solution is reported as infeasible.
    pub feasibility_threshold: f64,

    /// Log progress every this many iterations. 0 disables.
    pub progress_interval: usize,

    /// Swarm parameters.
    pub pso: PsoConfig,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_coord: 0.0,
            max_coord: 1000.0,
            n_warehouses: 4,
            n_residential: 10,
            n_zones: 5,
            zone_min_extent: 5.0,
            zone_max_extent: 20.0,
            d_min_residential: 50.0,
            d_min_warehouse: 100.0,
            penalty_zone: 1e9,
            penalty_residential: 1e6,
            penalty_warehouse: 1e6,
            alpha: 0.6,
            beta: 0.5,
            gamma: 0.9,
            soft_cost_scale: 100.0,
            feasibility_threshold: 1e6,
            progress_interval: 20,
            pso: PsoConfig::default(),
        }
    }
}

impl PlacementConfig {
    /// Sets the city coordinate range.
    pub fn with_city(mut self, min_coord: f64, max_coord: f64) -> Self {
        self.min_coord = min_coord;
        self.max_coord = max_coord;
        self
    }

    pub fn with_warehouses(mut self, n: usize) -> Self {
        self.n_warehouses = n;
        self
    }

    pub fn with_residential(mut self, n: usize) -> Self {
        self.n_residential = n;
        self
    }

    pub fn with_zones(mut self, n: usize) -> Self {
        self.n_zones = n;
        self
    }

    /// Sets the range generated zone sides are drawn from.
    pub fn with_zone_extent(mut self, min: f64, max: f64) -> Self {
        self.zone_min_extent = min;
        self.zone_max_extent = max;
        self
    }

    /// Sets the residential and warehouse minimum distances.
    pub fn with_min_distances(mut self, residential: f64, warehouse: f64) -> Self {
        self.d_min_residential = residential;
        self.d_min_warehouse = warehouse;
        self
    }

    pub fn with_penalties(mut self, zone: f64, residential: f64, warehouse: f64) -> Self {
        self.penalty_zone = zone;
        self.penalty_residential = residential;
        self.penalty_warehouse = warehouse;
        self
    }

    /// Sets the soft-cost weights (residential, separation, centrality).
    pub fn with_weights(mut self, alpha: f64, beta: f64, gamma: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self.gamma = gamma;
        self
    }

    pub fn with_soft_cost_scale(mut self, scale: f64) -> Self {
        self.soft_cost_scale = scale;
        self
    }

    pub fn with_feasibility_threshold(mut self, threshold: f64) -> Self {
        self.feasibility_threshold = threshold;
        self
    }

    pub fn with_progress_interval(mut self, n: usize) -> Self {
        self.progress_interval = n;
        self
    }

    pub fn with_pso(mut self, pso: PsoConfig) -> Self {
        self.pso = pso;
        self
    }

    /// Seeds both environment generation and the swarm.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.pso.seed = Some(seed);
        self
    }

    /// Length of a flattened candidate: `2 * n_warehouses`.
    pub fn dimensions(&self) -> usize {
        2 * self.n_warehouses
    }

    pub fn city_size(&self) -> f64 {
        self.max_coord - self.min_coord
    }

    pub fn city_center(&self) -> Point {
        let mid = (self.min_coord + self.max_coord) / 2.0;
        Point::new(mid, mid)
    }

    /// Distance from a city corner to the center. Normalizes centrality.
    pub fn max_center_distance(&self) -> f64 {
        Point::new(self.min_coord, self.min_coord).distance(&self.city_center())
    }

    /// Validates the configuration, including the nested [`PsoConfig`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_coord.is_nan() || self.max_coord.is_nan() || self.min_coord >= self.max_coord {
            return Err(ConfigError::InvertedRange {
                field: "city",
                low: self.min_coord,
                high: self.max_coord,
            });
        }
        ensure_at_least("n_warehouses", self.n_warehouses, 1)?;

        // Zone extents only matter when zones are generated.
        if self.n_zones > 0 {
            ensure_positive("zone_min_extent", self.zone_min_extent)?;
            if self.zone_min_extent > self.zone_max_extent {
                return Err(ConfigError::InvertedRange {
                    field: "zone_extent",
                    low: self.zone_min_extent,
                    high: self.zone_max_extent,
                });
            }
            if self.zone_max_extent >= self.city_size() {
                return Err(ConfigError::ExceedsCity {
                    field: "zone_max_extent",
                    value: self.zone_max_extent,
                    city_size: self.city_size(),
                });
            }
        }

        ensure_positive("d_min_residential", self.d_min_residential)?;
        ensure_positive("d_min_warehouse", self.d_min_warehouse)?;
        // Every violation must add a non-zero term to the hard penalty.
        ensure_positive("penalty_zone", self.penalty_zone)?;
        ensure_positive("penalty_residential", self.penalty_residential)?;
        ensure_positive("penalty_warehouse", self.penalty_warehouse)?;
        ensure_non_negative("alpha", self.alpha)?;
        ensure_non_negative("beta", self.beta)?;
        ensure_non_negative("gamma", self.gamma)?;
        ensure_positive("soft_cost_scale", self.soft_cost_scale)?;
        ensure_positive("feasibility_threshold", self.feasibility_threshold)?;

        self.pso.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlacementConfig::default();
        assert_eq!(config.n_warehouses, 4);
        assert_eq!(config.n_residential, 10);
        assert_eq!(config.n_zones, 5);
        assert_eq!(config.dimensions(), 8);
        assert_eq!(config.city_size(), 1000.0);
        assert_eq!(config.city_center(), Point::new(500.0, 500.0));
        assert!((config.max_center_distance() - 500.0 * 2f64.sqrt()).abs() < 1e-9);
        assert_eq!(config.pso.n_particles, 50);
        assert_eq!(config.pso.max_iterations, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlacementConfig::default()
            .with_city(-100.0, 100.0)
            .with_warehouses(2)
            .with_residential(3)
            .with_zones(0)
            .with_zone_extent(1.0, 2.0)
            .with_min_distances(10.0, 20.0)
            .with_penalties(5.0, 6.0, 7.0)
            .with_weights(0.1, 0.2, 0.3)
            .with_soft_cost_scale(50.0)
            .with_feasibility_threshold(1e3)
            .with_progress_interval(0)
            .with_seed(8);

        assert_eq!(config.city_center(), Point::new(0.0, 0.0));
        assert_eq!(config.n_warehouses, 2);
        assert_eq!(config.n_residential, 3);
        assert_eq!(config.n_zones, 0);
        assert_eq!(config.penalty_warehouse, 7.0);
        assert_eq!(config.gamma, 0.3);
        assert_eq!(config.pso.seed, Some(8));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_inverted_city() {
        let config = PlacementConfig::default().with_city(10.0, 10.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange { field: "city", .. })
        ));
    }

    #[test]
    fn test_validate_zero_warehouses() {
        assert!(PlacementConfig::default().with_warehouses(0).validate().is_err());
    }

    #[test]
    fn test_validate_non_positive_distance() {
        let config = PlacementConfig::default().with_min_distances(0.0, 100.0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "d_min_residential",
                value: 0.0
            })
        );
        let config = PlacementConfig::default().with_min_distances(50.0, -1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zone_extent() {
        let too_big = PlacementConfig::default().with_zone_extent(5.0, 1000.0);
        assert!(matches!(
            too_big.validate(),
            Err(ConfigError::ExceedsCity { .. })
        ));

        let inverted = PlacementConfig::default().with_zone_extent(20.0, 5.0);
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_validate_negative_weight() {
        let config = PlacementConfig::default().with_weights(0.6, -0.5, 0.9);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_penalty() {
        let config = PlacementConfig::default().with_penalties(0.0, 1e6, 1e6);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "penalty_zone",
                value: 0.0
            })
        );

        let config = PlacementConfig::default().with_penalties(1e9, 0.0, 1e6);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "penalty_residential",
                ..
            })
        ));

        let config = PlacementConfig::default().with_penalties(1e9, 1e6, 0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "penalty_warehouse",
                ..
            })
        ));
    }

    #[test]
    fn test_zone_extent_ignored_without_zones() {
        let config = PlacementConfig::default()
            .with_zones(0)
            .with_zone_extent(5.0, 5000.0);
        assert!(config.validate().is_ok());

        let config = PlacementConfig::default()
            .with_zones(0)
            .with_zone_extent(0.0, -1.0);
        assert!(config.validate().is_ok());

        let config = PlacementConfig::default()
            .with_zones(1)
            .with_zone_extent(5.0, 5000.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nested_pso() {
        let config = PlacementConfig::default().with_pso(PsoConfig::default().with_iterations(0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooSmall {
                field: "max_iterations",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_environment_is_valid() {
        let config = PlacementConfig::default().with_residential(0).with_zones(0);
        assert!(config.validate().is_ok());
    }
}
