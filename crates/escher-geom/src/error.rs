//! Error types for hyperboloid-model operations.

use escher_exact::ExactError;

/// Errors from exact geometric construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeomError {
    /// Reflection across a line whose quadratic form vanishes,
    /// e.g. the "line" through two copies of one point.
    #[error("degenerate line: (x² + y²)·√2 − z² = 0")]
    DegenerateLine,

    /// Exact-arithmetic failure inside coordinate algebra.
    #[error(transparent)]
    Exact(#[from] ExactError),
}
