//! # escher-exact
//!
//! Exact arithmetic over real radical extensions of ℤ.
//!
//! Every value on the tiling engine's construction path is either a
//! [`RadicalInteger`] — an element of `ℤ[√n₁, …, √n_k]` stored as one
//! coefficient per generator subset — or a [`RadicalRational`], a radical
//! integer over a positive plain-integer denominator. There is no floating
//! point here: equality, hashing and zero tests are exact, so geometric
//! deduplication can never drift, no matter how deep the tiling grows.
//!
//! ```text
//! √a · √b = gcd(a,b) · √(a·b / gcd(a,b)²)          product rule
//! 1/(x + y√g) = (x − y√g) / (x² − g·y²)            conjugate rationalization
//! ```
//!
//! | type                | role                                         |
//! |---------------------|----------------------------------------------|
//! | [`RadicalInteger`]  | canonical element of `ℤ[√n₁ … √n_k]`         |
//! | [`RadicalRational`] | fraction field element, always lowest terms  |
//! | [`ExactError`]      | negative radicand, ÷0, non-rational read     |

mod error;
mod integer;
mod rational;

pub use error::ExactError;
pub use integer::RadicalInteger;
pub use rational::RadicalRational;
