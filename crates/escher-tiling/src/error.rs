//! Error types for tiling construction and persistence.

use std::path::PathBuf;

use escher_geom::GeomError;

use crate::graph::VertexId;

/// Errors from graph construction, the boundary walk, snapshots and
/// rendering.
///
/// Everything here is fatal except [`TilingError::MalformedSnapshot`]:
/// a snapshot that cannot be read is discarded and its depth recomputed.
#[derive(Debug, thiserror::Error)]
pub enum TilingError {
    /// A tile was requested across a pair with no registered edge.
    #[error("no edge between {a} and {b}")]
    EdgeNotFound { a: VertexId, b: VertexId },

    /// The edge already borders two tiles.
    #[error("edge between {a} and {b} already borders two tiles")]
    EdgeSaturated { a: VertexId, b: VertexId },

    /// The boundary walk consumed the whole old rim without closing.
    #[error("boundary walk overran the rim: index {index} of {len}")]
    BoundaryOverrun { index: usize, len: usize },

    /// Seed vertices were not pairwise distinct.
    #[error("seed vertices must be pairwise distinct")]
    DegenerateSeed,

    /// Geometry failure while reflecting across an edge.
    #[error(transparent)]
    Geometry(#[from] GeomError),

    /// A snapshot file could not be read or parsed.
    #[error("unusable snapshot {}: {reason}", path.display())]
    MalformedSnapshot { path: PathBuf, reason: String },

    /// Filesystem failure outside snapshot parsing.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
