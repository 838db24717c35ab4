//! Radical integers: canonical elements of `ℤ[√n₁, …, √n_k]`.
//!
//! The basis holds pairwise-coprime square-free generators in ascending
//! order; coefficients live in a flat tensor with one `BigInt` per
//! generator subset, indexed by bitmask. With coprime generators the
//! product rule collapses to pure bit arithmetic:
//!
//! ```text
//! √(Π a) · √(Π b) = (Π a∩b) · √(Π a⊕b)
//! ```
//!
//! so multiplying two terms XORs their masks and scales by the shared
//! generators. Every public constructor and operation returns the minimal
//! (canonical) form, which is what makes derived equality and hashing
//! exact value identity.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::ExactError;

// ─────────────────────────────────────────────
// Basis construction
// ─────────────────────────────────────────────

/// Strip the largest perfect square out of `n`, returning `(k, r)` with
/// `n = k²·r` and `r` square-free.
fn strip_square(mut n: u64) -> (u64, u64) {
    let mut k = 1u64;
    let mut f = 2u64;
    while (f as u128) * (f as u128) <= n as u128 {
        while n % (f * f) == 0 {
            n /= f * f;
            k *= f;
        }
        f += 1;
    }
    (k, n)
}

/// Fold a square-free radicand into a pairwise-coprime square-free
/// generator set. Generators sharing only part of the radicand are split
/// by the gcd; a radicand that is already a subset product strips to 1 and
/// adds nothing.
fn insert_radicand(gens: &mut Vec<u64>, mut c: u64) {
    if c <= 1 {
        return;
    }
    let mut i = 0;
    while i < gens.len() && c > 1 {
        let g = gens[i];
        let d = c.gcd(&g);
        if d == 1 {
            i += 1;
        } else if d == g {
            c /= g;
            i += 1;
        } else {
            // partial overlap: g = d · (g/d), both square-free and coprime
            gens[i] = d;
            gens.push(g / d);
            c /= d;
            i += 1;
        }
    }
    if c > 1 {
        gens.push(c);
    }
}

/// Minimal pairwise-coprime square-free basis spanning every radicand in
/// the input. Deterministic: candidates are folded in ascending order.
fn minimal_basis(radicands: impl IntoIterator<Item = u64>) -> Vec<u64> {
    let mut rs: Vec<u64> = radicands.into_iter().filter(|&r| r > 1).collect();
    rs.sort_unstable();
    rs.dedup();
    let mut gens = Vec::new();
    for r in rs {
        insert_radicand(&mut gens, r);
    }
    gens.sort_unstable();
    gens
}

/// Product of the generators selected by `mask`.
fn subset_radicand(basis: &[u64], mask: usize) -> u64 {
    let mut r = 1u64;
    for (j, &g) in basis.iter().enumerate() {
        if mask & (1 << j) != 0 {
            r *= g;
        }
    }
    r
}

/// Mask of generators whose product is exactly `r`, or `None` when the
/// basis does not span `r`.
fn subset_mask(basis: &[u64], r: u64) -> Option<usize> {
    let mut rest = r;
    let mut mask = 0usize;
    for (j, &g) in basis.iter().enumerate() {
        if rest % g == 0 {
            rest /= g;
            mask |= 1 << j;
        }
    }
    (rest == 1).then_some(mask)
}

// ─────────────────────────────────────────────
// RadicalInteger
// ─────────────────────────────────────────────

/// An element of the ring `ℤ[√n₁, …, √n_k]`.
///
/// `basis` lists the generators (ascending, pairwise coprime, square-free,
/// each > 1); `coeffs` has length `2^k`, and the coefficient at index `m`
/// multiplies `√(Π_{bit j of m set} basis[j])` — index 0 is the rational
/// part. All constructors and operations return the canonical minimal
/// form, so derived `Eq`/`Hash` compare values, not representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RadicalInteger {
    basis:  Vec<u64>,
    coeffs: Vec<BigInt>,
}

impl RadicalInteger {
    pub fn zero() -> Self {
        Self { basis: Vec::new(), coeffs: vec![BigInt::zero()] }
    }

    pub fn one() -> Self {
        Self { basis: Vec::new(), coeffs: vec![BigInt::one()] }
    }

    pub fn from_int(v: i64) -> Self {
        Self::from_bigint(BigInt::from(v))
    }

    pub fn from_bigint(v: BigInt) -> Self {
        Self { basis: Vec::new(), coeffs: vec![v] }
    }

    /// `√n` with the largest perfect square factored out:
    /// `sqrt_u(12) = 2√3`, `sqrt_u(9) = 3`, `sqrt_u(0) = 0`.
    pub fn sqrt_u(n: u64) -> Self {
        if n == 0 {
            return Self::zero();
        }
        let (k, r) = strip_square(n);
        if r == 1 {
            return Self::from_bigint(BigInt::from(k));
        }
        Self { basis: vec![r], coeffs: vec![BigInt::zero(), BigInt::from(k)] }
    }

    /// Checked `√n`; fails with [`ExactError::NegativeRadicand`] for
    /// negative input.
    pub fn sqrt(n: i64) -> Result<Self, ExactError> {
        if n < 0 {
            return Err(ExactError::NegativeRadicand { n });
        }
        Ok(Self::sqrt_u(n as u64))
    }

    /// Generators of the current (canonical) basis.
    pub fn basis(&self) -> &[u64] {
        &self.basis
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// The plain integer value of a rational element; fails with
    /// [`ExactError::NotRational`] while radical terms survive.
    pub fn as_int(&self) -> Result<&BigInt, ExactError> {
        if self.basis.is_empty() {
            Ok(&self.coeffs[0])
        } else {
            Err(ExactError::NotRational { value: self.to_string() })
        }
    }

    /// Re-express over the minimal basis spanning `target` plus this
    /// element's own generators. The result is *not* reduced — it is the
    /// alignment step before element-wise combination; arithmetic
    /// canonicalizes afterwards.
    pub fn rebase(&self, target: &[u64]) -> Self {
        let basis = minimal_basis(self.basis.iter().chain(target).copied());
        self.rebase_onto(&basis)
    }

    /// Re-express over `basis`, which must span every term of this
    /// element.
    fn rebase_onto(&self, basis: &[u64]) -> Self {
        if self.basis.as_slice() == basis {
            return self.clone();
        }
        let mut coeffs = vec![BigInt::zero(); 1 << basis.len()];
        for (m, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            let r = subset_radicand(&self.basis, m);
            let mask = subset_mask(basis, r);
            debug_assert!(mask.is_some(), "basis {basis:?} does not span √{r}");
            if let Some(mask) = mask {
                coeffs[mask] += c;
            }
        }
        Self { basis: basis.to_vec(), coeffs }
    }

    /// Canonicalize: rebuild the minimal basis from the nonzero terms'
    /// radicands and remap. Zero collapses to the empty basis.
    fn reduce(self) -> Self {
        let used: Vec<u64> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(m, _)| subset_radicand(&self.basis, m))
            .collect();
        let basis = minimal_basis(used);
        if basis.as_slice() == self.basis.as_slice() {
            return self;
        }
        self.rebase_onto(&basis)
    }

    /// `self^exp` by iterative binary exponentiation.
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Galois conjugate negating `√basis[j]`: flip the sign of every
    /// coefficient whose subset includes generator `j`.
    pub(crate) fn conjugate(&self, j: usize) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(m, c)| if m & (1 << j) != 0 { -c } else { c.clone() })
            .collect();
        Self { basis: self.basis.clone(), coeffs }
    }

    /// Divide every coefficient by `g`, which must divide them exactly.
    pub(crate) fn div_exact(&self, g: &BigInt) -> Self {
        let coeffs = self.coeffs.iter().map(|c| c / g).collect();
        Self { basis: self.basis.clone(), coeffs }
    }

    pub(crate) fn coeffs(&self) -> &[BigInt] {
        &self.coeffs
    }

    /// Number of nonzero terms.
    pub(crate) fn term_count(&self) -> usize {
        self.coeffs.iter().filter(|c| !c.is_zero()).count()
    }

    /// Floating-point approximation — rendering and diagnostics only.
    pub fn approx(&self) -> f64 {
        self.coeffs
            .iter()
            .enumerate()
            .map(|(m, c)| {
                let c = c.to_f64().unwrap_or(f64::NAN);
                c * (subset_radicand(&self.basis, m) as f64).sqrt()
            })
            .sum()
    }
}

impl From<i64> for RadicalInteger {
    fn from(v: i64) -> Self {
        Self::from_int(v)
    }
}

// ─────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────

impl Add for &RadicalInteger {
    type Output = RadicalInteger;

    fn add(self, rhs: &RadicalInteger) -> RadicalInteger {
        let basis = minimal_basis(self.basis.iter().chain(&rhs.basis).copied());
        let a = self.rebase_onto(&basis);
        let b = rhs.rebase_onto(&basis);
        let coeffs = a.coeffs.into_iter().zip(b.coeffs).map(|(x, y)| x + y).collect();
        RadicalInteger { basis, coeffs }.reduce()
    }
}

impl Sub for &RadicalInteger {
    type Output = RadicalInteger;

    fn sub(self, rhs: &RadicalInteger) -> RadicalInteger {
        self + &(-rhs)
    }
}

impl Mul for &RadicalInteger {
    type Output = RadicalInteger;

    fn mul(self, rhs: &RadicalInteger) -> RadicalInteger {
        let basis = minimal_basis(self.basis.iter().chain(&rhs.basis).copied());
        let a = self.rebase_onto(&basis);
        let b = rhs.rebase_onto(&basis);
        let mut coeffs = vec![BigInt::zero(); 1 << basis.len()];
        for (ma, ca) in a.coeffs.iter().enumerate() {
            if ca.is_zero() {
                continue;
            }
            for (mb, cb) in b.coeffs.iter().enumerate() {
                if cb.is_zero() {
                    continue;
                }
                let shared = subset_radicand(&basis, ma & mb);
                coeffs[ma ^ mb] += ca * cb * shared;
            }
        }
        RadicalInteger { basis, coeffs }.reduce()
    }
}

impl Neg for &RadicalInteger {
    type Output = RadicalInteger;

    fn neg(self) -> RadicalInteger {
        let coeffs = self.coeffs.iter().map(|c| -c).collect();
        RadicalInteger { basis: self.basis.clone(), coeffs }
    }
}

impl Neg for RadicalInteger {
    type Output = RadicalInteger;

    fn neg(self) -> RadicalInteger {
        -&self
    }
}

/// Scale by a plain integer. Zero collapses to the canonical zero.
impl Mul<&BigInt> for &RadicalInteger {
    type Output = RadicalInteger;

    fn mul(self, rhs: &BigInt) -> RadicalInteger {
        if rhs.is_zero() {
            return RadicalInteger::zero();
        }
        let coeffs = self.coeffs.iter().map(|c| c * rhs).collect();
        RadicalInteger { basis: self.basis.clone(), coeffs }
    }
}

macro_rules! forward_binop {
    ($t:ty, $imp:ident, $method:ident) => {
        impl $imp for $t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: $t) -> $t {
                $imp::$method(&self, &rhs)
            }
        }
        impl $imp<&$t> for $t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: &$t) -> $t {
                $imp::$method(&self, rhs)
            }
        }
        impl $imp<$t> for &$t {
            type Output = $t;
            #[inline]
            fn $method(self, rhs: $t) -> $t {
                $imp::$method(self, &rhs)
            }
        }
    };
}
pub(crate) use forward_binop;

forward_binop!(RadicalInteger, Add, add);
forward_binop!(RadicalInteger, Sub, sub);
forward_binop!(RadicalInteger, Mul, mul);

// ─────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────

impl fmt::Display for RadicalInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (m, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
                first = false;
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let mag = c.abs();
            let r = subset_radicand(&self.basis, m);
            if r == 1 {
                write!(f, "{mag}")?;
            } else if mag.is_one() {
                write!(f, "√{r}")?;
            } else {
                write!(f, "{mag}√{r}")?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
