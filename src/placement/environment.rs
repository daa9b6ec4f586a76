//! Residential centers and restricted zones.

use super::config::PlacementConfig;
use super::geometry::{Point, RestrictedZone};
use rand::Rng;
use tracing::debug;

/// The fixed obstacles of a placement run.
///
/// Generated once, then only read. Callers that render a run and want to
/// re-evaluate it should keep this value rather than regenerating it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    pub residential_centers: Vec<Point>,
    pub restricted_zones: Vec<RestrictedZone>,
}

impl Environment {
    pub fn new(residential_centers: Vec<Point>, restricted_zones: Vec<RestrictedZone>) -> Self {
        Self {
            residential_centers,
            restricted_zones,
        }
    }

    /// Draws a random environment inside the configured city.
    ///
    /// Residential centers are uniform over the city. Zone corners are
    /// drawn so that even a maximum-size zone stays inside the city.
    /// Expects a validated `config`.
    pub fn generate<R: Rng>(config: &PlacementConfig, rng: &mut R) -> Self {
        let min = config.min_coord;
        let size = config.city_size();

        let residential_centers: Vec<Point> = (0..config.n_residential)
            .map(|_| {
                let x = min + rng.random::<f64>() * size;
                let y = min + rng.random::<f64>() * size;
                Point::new(x, y)
            })
            .collect();

        let corner_span = size - config.zone_max_extent;
        let extent_span = config.zone_max_extent - config.zone_min_extent;
        let restricted_zones: Vec<RestrictedZone> = (0..config.n_zones)
            .map(|_| {
                let x_min = min + rng.random::<f64>() * corner_span;
                let y_min = min + rng.random::<f64>() * corner_span;
                let width = config.zone_min_extent + rng.random::<f64>() * extent_span;
                let height = config.zone_min_extent + rng.random::<f64>() * extent_span;
                RestrictedZone::new(x_min, y_min, x_min + width, y_min + height)
            })
            .collect();

        debug!(
            residential = residential_centers.len(),
            zones = restricted_zones.len(),
            "environment generated"
        );

        Self {
            residential_centers,
            restricted_zones,
        }
    }

    /// Whether `p` lies inside any restricted zone.
    pub fn in_restricted_zone(&self, p: &Point) -> bool {
        self.restricted_zones.iter().any(|zone| zone.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_generate_counts() {
        let config = PlacementConfig::default();
        let env = Environment::generate(&config, &mut create_rng(42));
        assert_eq!(env.residential_centers.len(), 10);
        assert_eq!(env.restricted_zones.len(), 5);
    }

    #[test]
    fn test_generated_data_inside_city() {
        let config = PlacementConfig::default()
            .with_city(-50.0, 250.0)
            .with_residential(200)
            .with_zones(200);
        let env = Environment::generate(&config, &mut create_rng(3));

        for c in &env.residential_centers {
            assert!((-50.0..250.0).contains(&c.x));
            assert!((-50.0..250.0).contains(&c.y));
        }
        for z in &env.restricted_zones {
            assert!(z.x_min >= -50.0 && z.x_max <= 250.0);
            assert!(z.y_min >= -50.0 && z.y_max <= 250.0);
            assert!((5.0..20.0).contains(&z.width()));
            assert!((5.0..20.0).contains(&z.height()));
        }
    }

    #[test]
    fn test_generate_is_seeded() {
        let config = PlacementConfig::default();
        let a = Environment::generate(&config, &mut create_rng(10));
        let b = Environment::generate(&config, &mut create_rng(10));
        let c = Environment::generate(&config, &mut create_rng(11));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_environment() {
        let config = PlacementConfig::default().with_residential(0).with_zones(0);
        let env = Environment::generate(&config, &mut create_rng(1));
        assert!(env.residential_centers.is_empty());
        assert!(env.restricted_zones.is_empty());
        assert!(!env.in_restricted_zone(&Point::new(500.0, 500.0)));
    }

    #[test]
    fn test_in_restricted_zone_any() {
        let env = Environment::new(
            vec![],
            vec![
                RestrictedZone::new(0.0, 0.0, 10.0, 10.0),
                RestrictedZone::new(100.0, 100.0, 110.0, 110.0),
            ],
        );
        assert!(env.in_restricted_zone(&Point::new(5.0, 5.0)));
        assert!(env.in_restricted_zone(&Point::new(110.0, 100.0)));
        assert!(!env.in_restricted_zone(&Point::new(50.0, 50.0)));
    }
}
