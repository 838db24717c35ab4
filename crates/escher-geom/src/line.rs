//! Exact hyperbolic lines and reflection across them.

use serde::{Deserialize, Serialize};

use escher_exact::RadicalRational;

use crate::error::GeomError;
use crate::point::Point;
use crate::sqrt2;

/// A hyperbolic line, stored as the normal vector of a plane through the
/// hyperboloid. Same component layout as [`Point`], but not a point of
/// the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub x: RadicalRational,
    pub y: RadicalRational,
    pub z: RadicalRational,
}

impl Line {
    /// The line through two points: a cross product with the z component
    /// scaled by √2, so [`Line::product`] vanishes on both inputs.
    pub fn from_points(p: &Point, q: &Point) -> Self {
        Self {
            x: &p.y * &q.z - &p.z * &q.y,
            y: &p.z * &q.x - &p.x * &q.z,
            z: (&p.y * &q.x - &p.x * &q.y) * sqrt2(),
        }
    }

    /// `(x² + y²)·√2 − z²`. Zero exactly when the plane misses the sheet
    /// and reflection is undefined.
    pub fn norm(&self) -> RadicalRational {
        (&self.x * &self.x + &self.y * &self.y) * sqrt2() - &self.z * &self.z
    }

    /// Bilinear pairing of the line with a point:
    /// `z·p.z − (x·p.x + y·p.y)·√2`. Zero iff the point lies on the line.
    pub fn product(&self, p: &Point) -> RadicalRational {
        &self.z * &p.z - (&self.x * &p.x + &self.y * &p.y) * sqrt2()
    }

    /// Whether `p` lies on the line, exactly.
    pub fn contains(&self, p: &Point) -> bool {
        self.product(p).is_zero()
    }

    /// Reflect `p` across this line: `p + 2·(product/norm)·l`
    /// component-wise. An involution that fixes the line pointwise; fails
    /// with [`GeomError::DegenerateLine`] when the norm is zero.
    pub fn reflect(&self, p: &Point) -> Result<Point, GeomError> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(GeomError::DegenerateLine);
        }
        let factor = self.product(p).div(&norm)?;
        let scale = RadicalRational::from(2) * factor;
        Ok(Point::new(
            &p.x + &self.x * &scale,
            &p.y + &self.y * &scale,
            &p.z + &self.z * &scale,
        ))
    }

    /// Euclidean radius of this geodesic's arc in the Poincaré disk, or
    /// `None` when the geodesic is a straight diameter (z exactly zero).
    /// Rendering only.
    pub fn disk_radius(&self) -> Option<f64> {
        if self.z.is_zero() {
            return None;
        }
        let zf = self.z.approx();
        let xz = self.x.approx() / zf;
        let yz = self.y.approx() / zf;
        Some(((xz * xz + yz * yz) * std::f64::consts::SQRT_2 - 1.0).sqrt())
    }
}
