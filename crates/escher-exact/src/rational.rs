//! Exact rationals: a radical integer over a positive plain denominator.
//!
//! Construction clears radicals out of the denominator by conjugate
//! multiplication — one Galois conjugate per surviving generator — then
//! normalizes sign and divides through by the gcd of every numerator
//! coefficient and the denominator. Equal values therefore share one
//! representation and `Eq`/`Hash` derive structurally.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::ExactError;
use crate::integer::{forward_binop, RadicalInteger};

/// An element of the fraction field of `ℤ[√n₁, …, √n_k]`, kept in lowest
/// terms with a positive integer denominator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RadicalRational {
    numer: RadicalInteger,
    denom: BigInt,
}

impl RadicalRational {
    /// `numer / denom`, rationalizing a radical denominator. Fails with
    /// [`ExactError::DivisionByZero`] when `denom` is zero.
    pub fn new(numer: RadicalInteger, denom: RadicalInteger) -> Result<Self, ExactError> {
        if denom.is_zero() {
            return Err(ExactError::DivisionByZero);
        }
        let mut numer = numer;
        let mut denom = denom;
        // Each conjugate pass eliminates at least the highest generator
        // from the denominator, so this terminates.
        while !denom.basis().is_empty() {
            let conj = denom.conjugate(denom.basis().len() - 1);
            numer = &numer * &conj;
            denom = &denom * &conj;
        }
        let denom = denom.as_int()?.clone();
        Ok(Self::from_ratio(numer, denom))
    }

    /// Fraction over a plain nonzero integer: sign and gcd normalization
    /// only.
    fn from_ratio(mut numer: RadicalInteger, mut denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero(), "zero denominator");
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let mut g = denom.clone();
        for c in numer.coeffs() {
            g = g.gcd(c);
        }
        if !g.is_one() {
            numer = numer.div_exact(&g);
            denom /= &g;
        }
        Self { numer, denom }
    }

    pub fn zero() -> Self {
        Self { numer: RadicalInteger::zero(), denom: BigInt::one() }
    }

    pub fn one() -> Self {
        Self { numer: RadicalInteger::one(), denom: BigInt::one() }
    }

    pub fn numer(&self) -> &RadicalInteger {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// `self / rhs`; fails with [`ExactError::DivisionByZero`] when `rhs`
    /// is zero.
    pub fn div(&self, rhs: &RadicalRational) -> Result<RadicalRational, ExactError> {
        RadicalRational::new(&self.numer * &rhs.denom, &rhs.numer * &self.denom)
    }

    /// `self^exp` with `0⁰ = 1`; negative exponents invert first and fail
    /// with [`ExactError::DivisionByZero`] on a zero base.
    pub fn pow(&self, exp: i64) -> Result<RadicalRational, ExactError> {
        let (base, mut e) = if exp < 0 {
            (RadicalRational::one().div(self)?, exp.unsigned_abs())
        } else {
            (self.clone(), exp as u64)
        };
        let mut result = RadicalRational::one();
        let mut base = base;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        Ok(result)
    }

    /// Floating-point approximation — rendering and diagnostics only.
    pub fn approx(&self) -> f64 {
        self.numer.approx() / self.denom.to_f64().unwrap_or(f64::NAN)
    }
}

impl From<RadicalInteger> for RadicalRational {
    fn from(numer: RadicalInteger) -> Self {
        Self { numer, denom: BigInt::one() }
    }
}

impl From<i64> for RadicalRational {
    fn from(v: i64) -> Self {
        RadicalInteger::from_int(v).into()
    }
}

// ─────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────

impl Add for &RadicalRational {
    type Output = RadicalRational;

    fn add(self, rhs: &RadicalRational) -> RadicalRational {
        let numer = &self.numer * &rhs.denom + &rhs.numer * &self.denom;
        RadicalRational::from_ratio(numer, &self.denom * &rhs.denom)
    }
}

impl Sub for &RadicalRational {
    type Output = RadicalRational;

    fn sub(self, rhs: &RadicalRational) -> RadicalRational {
        self + &(-rhs)
    }
}

impl Mul for &RadicalRational {
    type Output = RadicalRational;

    fn mul(self, rhs: &RadicalRational) -> RadicalRational {
        RadicalRational::from_ratio(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Neg for &RadicalRational {
    type Output = RadicalRational;

    fn neg(self) -> RadicalRational {
        RadicalRational { numer: -&self.numer, denom: self.denom.clone() }
    }
}

impl Neg for RadicalRational {
    type Output = RadicalRational;

    fn neg(self) -> RadicalRational {
        -&self
    }
}

forward_binop!(RadicalRational, Add, add);
forward_binop!(RadicalRational, Sub, sub);
forward_binop!(RadicalRational, Mul, mul);

impl fmt::Display for RadicalRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else if self.numer.term_count() > 1 {
            write!(f, "({})/{}", self.numer, self.denom)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> RadicalInteger {
        RadicalInteger::from_int(v)
    }

    fn sqrt(n: i64) -> RadicalInteger {
        RadicalInteger::sqrt(n).unwrap()
    }

    fn ratio(n: RadicalInteger, d: RadicalInteger) -> RadicalRational {
        RadicalRational::new(n, d).unwrap()
    }

    // ── rationalization ──

    #[test]
    fn single_radical_denominator_rationalizes() {
        // 1/√2 = √2/2
        assert_eq!(ratio(int(1), sqrt(2)), ratio(sqrt(2), int(2)));
    }

    #[test]
    fn compound_radical_denominator_rationalizes() {
        // 1/(√6 + √3) = (√6 − √3)/3
        let lhs = ratio(int(1), sqrt(6) + sqrt(3));
        let rhs = ratio(sqrt(6) - sqrt(3), int(3));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn sign_lives_in_the_numerator() {
        let x = ratio(int(1), int(-2));
        assert_eq!(x, ratio(int(-1), int(2)));
        assert!(!x.denom().is_negative());
    }

    #[test]
    fn fractions_reduce_to_lowest_terms() {
        assert_eq!(ratio(int(4) * sqrt(2), int(6)), ratio(int(2) * sqrt(2), int(3)));
        assert_eq!(ratio(int(0), int(17)), RadicalRational::zero());
        assert_eq!(*ratio(int(0), int(17)).denom(), BigInt::one());
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert!(matches!(
            RadicalRational::new(int(1), RadicalInteger::zero()),
            Err(ExactError::DivisionByZero)
        ));
    }

    // ── field laws ──

    #[test]
    fn division_undoes_multiplication() {
        let a = ratio(sqrt(2) + int(1), int(3));
        for b in [ratio(sqrt(3), int(2)), RadicalRational::from(7), ratio(int(1), sqrt(6))] {
            let product = &a * &b;
            assert_eq!(product.div(&b).unwrap(), a, "(a·b)/b should be a for b = {b}");
        }
    }

    #[test]
    fn division_by_zero_is_rejected() {
        let a = RadicalRational::from(1);
        assert!(matches!(
            a.div(&RadicalRational::zero()),
            Err(ExactError::DivisionByZero)
        ));
    }

    #[test]
    fn addition_finds_common_denominators() {
        // √2/2 + √2/2 = √2
        let half = ratio(sqrt(2), int(2));
        assert_eq!(&half + &half, RadicalRational::from(sqrt(2)));
    }

    // ── pow ──

    #[test]
    fn pow_handles_zero_and_negative_exponents() {
        let base = RadicalRational::from(sqrt(2) + int(1));
        assert_eq!(base.pow(0).unwrap(), RadicalRational::one());
        assert_eq!(RadicalRational::zero().pow(0).unwrap(), RadicalRational::one());
        // (1 + √2)⁻¹ = √2 − 1, so (1 + √2)⁻² = 3 − 2√2
        assert_eq!(base.pow(-1).unwrap(), RadicalRational::from(sqrt(2) - int(1)));
        assert_eq!(base.pow(-2).unwrap(), RadicalRational::from(int(3) - int(2) * sqrt(2)));
        assert!(matches!(
            RadicalRational::zero().pow(-1),
            Err(ExactError::DivisionByZero)
        ));
    }

    #[test]
    fn pow_matches_repeated_multiplication() {
        let base = ratio(int(2) + sqrt(3), int(5));
        let mut acc = RadicalRational::one();
        for e in 0..6 {
            assert_eq!(base.pow(e).unwrap(), acc, "mismatch at exponent {e}");
            acc = &acc * &base;
        }
    }

    // ── identity and round-trips ──

    #[test]
    fn equal_values_from_different_routes_collide_in_a_set() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ratio(int(1), sqrt(2)));
        set.insert(ratio(sqrt(2), int(2)));
        set.insert(ratio(int(2), int(2) * sqrt(2)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serde_round_trip_is_exact() {
        let x = ratio(sqrt(6) + sqrt(3), int(3));
        let json = serde_json::to_string(&x).unwrap();
        let back: RadicalRational = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(ratio(sqrt(2), int(2)).to_string(), "√2/2");
        assert_eq!(ratio(sqrt(3) + sqrt(6), int(3)).to_string(), "(√3 + √6)/3");
        assert_eq!(RadicalRational::from(5).to_string(), "5");
    }

    #[test]
    fn approx_tracks_the_exact_value() {
        let x = ratio(sqrt(2) + int(1), int(1));
        assert!((x.approx() - (1.0 + 2f64.sqrt())).abs() < 1e-12);
    }
}
