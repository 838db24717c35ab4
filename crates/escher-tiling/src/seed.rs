//! The fundamental triangle that seeds every tiling.

use escher_exact::{ExactError, RadicalInteger, RadicalRational};
use escher_geom::Point;

/// The equilateral seed triangle, centred under the apex of the sheet:
///
/// ```text
/// v1 = (0,      √6/3,  (√6 + √3)/3)
/// v2 = (−√2/2, −√6/6,  (√6 + √3)/3)
/// v3 = ( √2/2, −√6/6,  (√6 + √3)/3)
/// ```
///
/// All three lie on the sheet and every side has hyperbolic cosine of
/// length exactly `√2 + 1`, the edge length shared by every tile in the
/// tiling.
pub fn fundamental_triangle() -> Result<[Point; 3], ExactError> {
    let sqrt2 = RadicalInteger::sqrt_u(2);
    let sqrt3 = RadicalInteger::sqrt_u(3);
    let one = RadicalInteger::one();

    let z = RadicalRational::new(&sqrt2 + &one, sqrt3.clone())?;
    let x_side = RadicalRational::new(sqrt2.clone(), RadicalInteger::from_int(2))?;
    let y_top = RadicalRational::new(sqrt2, sqrt3)?;
    let y_side = RadicalRational::new(-one, RadicalInteger::sqrt_u(6))?;

    let v1 = Point::new(RadicalRational::zero(), y_top, z.clone());
    let v2 = Point::new(-x_side.clone(), y_side.clone(), z.clone());
    let v3 = Point::new(x_side, y_side, z);
    Ok([v1, v2, v3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use escher_geom::cosh_distance;

    #[test]
    fn seed_vertices_lie_on_the_sheet() {
        let seed = fundamental_triangle().unwrap();
        for (i, v) in seed.iter().enumerate() {
            assert!(v.on_sheet(), "v{}", i + 1);
        }
    }

    #[test]
    fn seed_edges_have_the_tiling_edge_length() {
        let [v1, v2, v3] = fundamental_triangle().unwrap();
        let unit = RadicalRational::from(RadicalInteger::sqrt_u(2) + RadicalInteger::one());
        for (p, q) in [(&v1, &v2), (&v2, &v3), (&v3, &v1)] {
            assert_eq!(cosh_distance(p, q), unit);
        }
    }

    #[test]
    fn seed_is_centred_on_the_apex() {
        let apex = Point::new(
            RadicalRational::zero(),
            RadicalRational::zero(),
            RadicalRational::one(),
        );
        let [v1, v2, v3] = fundamental_triangle().unwrap();
        let from_v1 = cosh_distance(&v1, &apex);
        assert_eq!(cosh_distance(&v2, &apex), from_v1);
        assert_eq!(cosh_distance(&v3, &apex), from_v1);
    }
}
