//! Error types for exact arithmetic.

/// Errors from radical-integer and exact-rational operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExactError {
    /// `sqrt` of a negative integer: the ring is real.
    #[error("cannot take the square root of {n}: radicands must be ≥ 0")]
    NegativeRadicand { n: i64 },

    /// A value with surviving radical terms was read as a plain integer.
    #[error("not a rational integer: {value}")]
    NotRational { value: String },

    /// Division by an exactly-zero value.
    #[error("division by zero")]
    DivisionByZero,
}
