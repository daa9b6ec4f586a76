//! Planar geometry primitives for the city grid.

/// A location on the city grid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned rectangle where warehouses may not be built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestrictedZone {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl RestrictedZone {
    pub const fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Whether `p` lies inside the zone. The boundary counts as inside.
    pub fn contains(&self, p: &Point) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_zone_contains_interior() {
        let zone = RestrictedZone::new(10.0, 10.0, 20.0, 30.0);
        assert!(zone.contains(&Point::new(15.0, 20.0)));
        assert_eq!(zone.width(), 10.0);
        assert_eq!(zone.height(), 20.0);
    }

    #[test]
    fn test_zone_boundary_is_inside() {
        let zone = RestrictedZone::new(10.0, 10.0, 20.0, 20.0);
        assert!(zone.contains(&Point::new(10.0, 15.0)));
        assert!(zone.contains(&Point::new(20.0, 15.0)));
        assert!(zone.contains(&Point::new(15.0, 10.0)));
        assert!(zone.contains(&Point::new(15.0, 20.0)));
        assert!(zone.contains(&Point::new(20.0, 20.0)));
    }

    #[test]
    fn test_zone_one_unit_outside() {
        let zone = RestrictedZone::new(10.0, 10.0, 20.0, 20.0);
        assert!(!zone.contains(&Point::new(9.0, 15.0)));
        assert!(!zone.contains(&Point::new(21.0, 15.0)));
        assert!(!zone.contains(&Point::new(15.0, 9.0)));
        assert!(!zone.contains(&Point::new(15.0, 21.0)));
    }
}
