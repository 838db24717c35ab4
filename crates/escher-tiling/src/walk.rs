//! Layer growth: walk the rim, reflecting one tile at a time.
//!
//! The tiling grows in concentric layers. One call to [`grow_layer`]
//! wraps the current rim in a complete ring of tiles:
//!
//! 1. build the first tile across the edge between the rim's first and
//!    last vertices; its apex opens the new rim,
//! 2. repeatedly build across the edge from the newest rim vertex back
//!    to the current anchor on the old rim. An apex that lands on the
//!    old rim means the fan around the anchor is complete, so the
//!    anchor advances; an apex equal to the first new vertex closes the
//!    ring; anything else extends the new rim,
//! 3. swap the finished ring in as the boundary.
//!
//! Exact vertex deduplication makes step 2 robust: a reflected image
//! either *is* a known vertex or it is a fresh one, with no tolerance
//! tuning. Layer sizes follow a Chebyshev-style recurrence; see
//! [`expected_layer_tiles`].

use std::collections::HashSet;

use num_traits::ToPrimitive;

use escher_exact::RadicalInteger;

use crate::error::TilingError;
use crate::graph::{Tiling, VertexId};

/// What one layer of growth did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerReport {
    /// Depth of the layer that was just completed.
    pub depth: u32,
    /// Tiles added by this layer.
    pub tiles_created: usize,
    /// Vertices added by this layer.
    pub vertices_created: usize,
    /// Length of the rim after the layer closed.
    pub boundary_len: usize,
    /// Closed-form tile count for this depth, when it fits in a `u64`.
    pub expected_tiles: Option<u64>,
}

/// Grow the tiling out to `depth` completed layers, one layer per
/// report. A tiling already at or beyond `depth` is left untouched.
pub fn grow(tiling: &mut Tiling, depth: u32) -> Result<Vec<LayerReport>, TilingError> {
    let mut reports = Vec::new();
    while tiling.depth() < depth {
        reports.push(grow_layer(tiling)?);
    }
    Ok(reports)
}

/// Wrap the current rim in one complete ring of tiles.
pub fn grow_layer(tiling: &mut Tiling) -> Result<LayerReport, TilingError> {
    let level = tiling.depth() + 1;
    let old: Vec<VertexId> = tiling.boundary().to_vec();
    let old_set: HashSet<VertexId> = old.iter().copied().collect();
    let tiles_before = tiling.tile_count();
    let vertices_before = tiling.vertex_count();

    // The edge between the rim's ends always has a free side.
    let first_apex = tiling.build_new_tile(old[0], old[old.len() - 1])?;
    let mut rim: Vec<VertexId> = vec![first_apex];
    let mut index = 0usize;
    loop {
        let Some(&anchor) = old.get(index) else {
            return Err(TilingError::BoundaryOverrun { index, len: old.len() });
        };
        let apex = tiling.build_new_tile(rim[rim.len() - 1], anchor)?;
        if old_set.contains(&apex) {
            // fan around the anchor is complete
            index += 1;
        } else if apex == rim[0] {
            break;
        } else {
            rim.push(apex);
        }
    }

    let report = LayerReport {
        depth: level,
        tiles_created: tiling.tile_count() - tiles_before,
        vertices_created: tiling.vertex_count() - vertices_before,
        boundary_len: rim.len(),
        expected_tiles: expected_layer_tiles(level),
    };
    tracing::info!(
        depth = level,
        tiles = report.tiles_created,
        vertices = report.vertices_created,
        rim = report.boundary_len,
        "layer complete"
    );
    tiling.advance_rim(rim, level);
    Ok(report)
}

/// Closed-form tile count for layer `depth`:
///
/// ```text
/// T(d) = 3·√3 · ((2 + √3)^d − (2 − √3)^d)
/// ```
///
/// evaluated exactly, so `T(1..) = 18, 72, 270, 1008, 3762, …` with no
/// rounding. Returns `None` once the count no longer fits in a `u64`.
pub fn expected_layer_tiles(depth: u32) -> Option<u64> {
    let sqrt3 = RadicalInteger::sqrt_u(3);
    let two = RadicalInteger::from_int(2);
    let delta = (&two + &sqrt3).pow(depth) - (&two - &sqrt3).pow(depth);
    let total = (RadicalInteger::from_int(3) * &sqrt3) * delta;
    total.as_int().ok()?.to_u64()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
