//! # escher-geom
//!
//! Exact geometry on the hyperboloid model of the hyperbolic plane.
//!
//! Points live on the upper sheet of
//!
//! ```text
//! (x² + y²)·√2 = z² − 1
//! ```
//!
//! and lines are normal vectors of planes through the origin, sharing the
//! same component layout. All construction-path operations — the bilinear
//! pairing, reflection, distance — run on [`RadicalRational`] coordinates
//! and are exact; floating point appears only in the Poincaré-disk
//! conversions the renderer consumes.
//!
//! | operation                      | result                          |
//! |--------------------------------|---------------------------------|
//! | [`Line::from_points`]          | geodesic through two points     |
//! | [`Line::reflect`]              | mirror image across a geodesic  |
//! | [`cosh_distance`]              | exact cosh of the distance      |
//! | [`Point::disk`]                | disk coordinates (`f64`)        |
//!
//! [`RadicalRational`]: escher_exact::RadicalRational

use std::sync::OnceLock;

use escher_exact::{RadicalInteger, RadicalRational};

mod error;
mod line;
mod point;

pub use error::GeomError;
pub use line::Line;
pub use point::{cosh_distance, Point};

static SQRT2: OnceLock<RadicalRational> = OnceLock::new();

/// Shared exact √2 — the curvature constant of the model's bilinear form.
pub(crate) fn sqrt2() -> &'static RadicalRational {
    SQRT2.get_or_init(|| RadicalInteger::sqrt_u(2).into())
}

#[cfg(test)]
pub(crate) mod tests {
    use escher_exact::{RadicalInteger, RadicalRational};

    use crate::Point;

    fn ratio(n: RadicalInteger, d: RadicalInteger) -> RadicalRational {
        RadicalRational::new(n, d).unwrap()
    }

    /// The fundamental triangle of the tiling, centred on the disk origin.
    pub fn seed_triangle() -> [Point; 3] {
        let sqrt2 = RadicalInteger::sqrt_u(2);
        let int = RadicalInteger::from_int;
        let z = ratio(&sqrt2 + &int(1), RadicalInteger::sqrt_u(3));
        let x = ratio(sqrt2.clone(), int(2));
        let y_top = ratio(sqrt2, RadicalInteger::sqrt_u(3));
        let y_bot = ratio(int(-1), RadicalInteger::sqrt_u(6));
        [
            Point::new(RadicalRational::zero(), y_top, z.clone()),
            Point::new(-&x, y_bot.clone(), z.clone()),
            Point::new(x, y_bot, z),
        ]
    }

    /// The sheet's apex `(0, 0, 1)` — on the sheet, not a tiling vertex.
    pub fn apex() -> Point {
        Point::new(
            RadicalRational::zero(),
            RadicalRational::zero(),
            RadicalRational::one(),
        )
    }
}
