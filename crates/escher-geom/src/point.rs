//! Exact points on the upper sheet of the hyperboloid.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use escher_exact::RadicalRational;

use crate::sqrt2;

/// A point of the hyperbolic plane in the hyperboloid model.
///
/// Coordinates satisfy `(x² + y²)·√2 = z² − 1` with `z > 0`. Equality and
/// hashing use `(x, y)` only — the sheet equation determines `z`, and the
/// growth walk deduplicates vertices by exact coordinate identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub x: RadicalRational,
    pub y: RadicalRational,
    pub z: RadicalRational,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl Point {
    pub fn new(x: RadicalRational, y: RadicalRational, z: RadicalRational) -> Self {
        Self { x, y, z }
    }

    /// Exact check of the sheet equation `(x² + y²)·√2 = z² − 1`.
    pub fn on_sheet(&self) -> bool {
        let lhs = (&self.x * &self.x + &self.y * &self.y) * sqrt2();
        let rhs = &self.z * &self.z - RadicalRational::one();
        lhs == rhs
    }

    /// Poincaré disk projection `(x, y) · 2^¼ / (1 + z)` — rendering
    /// only.
    pub fn disk(&self) -> (f64, f64) {
        let scale = 2f64.powf(0.25) / (1.0 + self.z.approx());
        (self.x.approx() * scale, self.y.approx() * scale)
    }
}

/// Exact hyperbolic cosine of the distance between two points:
///
/// ```text
/// cosh d(p, q) = p.z·q.z − (p.x·q.x + p.y·q.y)·√2
/// ```
///
/// Equals 1 for identical points; equals `√2 + 1` across every edge of
/// the tiling.
pub fn cosh_distance(p: &Point, q: &Point) -> RadicalRational {
    &p.z * &q.z - (&p.x * &q.x + &p.y * &q.y) * sqrt2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{apex, seed_triangle};
    use escher_exact::{RadicalInteger, RadicalRational};

    #[test]
    fn apex_sits_on_the_sheet() {
        assert!(apex().on_sheet());
    }

    #[test]
    fn seed_vertices_sit_on_the_sheet() {
        for (i, v) in seed_triangle().iter().enumerate() {
            assert!(v.on_sheet(), "seed vertex {i} off the sheet");
        }
    }

    #[test]
    fn identity_ignores_z() {
        let [v1, _, _] = seed_triangle();
        let mut twisted = v1.clone();
        twisted.z = RadicalRational::from(99);
        assert_eq!(v1, twisted);
    }

    #[test]
    fn self_distance_is_one() {
        for v in seed_triangle() {
            assert_eq!(cosh_distance(&v, &v), RadicalRational::one());
        }
    }

    #[test]
    fn seed_edges_have_unit_tiling_length() {
        // cosh of the edge length is √2 + 1 for every edge of the tiling
        let expected = RadicalRational::from(RadicalInteger::sqrt_u(2) + RadicalInteger::one());
        let [v1, v2, v3] = seed_triangle();
        for (a, b) in [(&v1, &v2), (&v2, &v3), (&v3, &v1)] {
            assert_eq!(cosh_distance(a, b), expected);
        }
    }

    #[test]
    fn disk_projection_stays_inside_the_unit_circle() {
        for v in seed_triangle() {
            let (x, y) = v.disk();
            assert!(x * x + y * y < 1.0, "({x}, {y}) escaped the disk");
        }
    }
}
