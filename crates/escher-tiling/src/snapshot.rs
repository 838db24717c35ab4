//! Snapshot persistence: exact tiles on disk as JSON.
//!
//! A snapshot stores every tile as its three exact corner points plus
//! its colour, in creation order, which is all the renderer needs. It
//! is not enough to resume growth (the arenas and rim are rebuilt from
//! the seed instead), so a snapshot that fails to load is never fatal:
//! callers fall back to rebuilding.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use escher_geom::Point;

use crate::error::TilingError;
use crate::graph::Tiling;

/// Canonical file name for the snapshot of a given depth.
pub fn snapshot_file(depth: u32) -> String {
    format!("tiling-depth-{depth}.json")
}

/// One tile: exact corner coordinates in winding order, plus colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotTile {
    pub vertices: [Point; 3],
    pub colour:   u8,
}

/// A complete tiling at a given depth, ready to render or re-save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilingSnapshot {
    pub depth: u32,
    pub tiles: Vec<SnapshotTile>,
}

impl TilingSnapshot {
    /// Capture the current state of a tiling, tiles in creation order.
    pub fn capture(tiling: &Tiling) -> Self {
        let tiles = tiling
            .tiles()
            .map(|(_, [a, b, c], colour)| SnapshotTile {
                vertices: [
                    tiling.point(a).clone(),
                    tiling.point(b).clone(),
                    tiling.point(c).clone(),
                ],
                colour: colour.0,
            })
            .collect();
        Self { depth: tiling.depth(), tiles }
    }

    /// Write the snapshot under `dir`, creating the directory as
    /// needed. Returns the path written.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, TilingError> {
        let path = dir.join(snapshot_file(self.depth));
        fs::create_dir_all(dir)?;
        let raw = serde_json::to_string(self).map_err(io::Error::from)?;
        fs::write(&path, raw)?;
        Ok(path)
    }

    /// Load the snapshot for `depth` from `dir`.
    ///
    /// Anything that makes the file unusable, a missing or unreadable
    /// file, bad JSON, or a depth that does not match the file name,
    /// comes back as [`TilingError::MalformedSnapshot`] so callers can
    /// rebuild instead.
    pub fn load(dir: &Path, depth: u32) -> Result<Self, TilingError> {
        let path = dir.join(snapshot_file(depth));
        let raw = fs::read_to_string(&path).map_err(|err| TilingError::MalformedSnapshot {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        let snapshot: TilingSnapshot =
            serde_json::from_str(&raw).map_err(|err| TilingError::MalformedSnapshot {
                path: path.clone(),
                reason: err.to_string(),
            })?;
        if snapshot.depth != depth {
            return Err(TilingError::MalformedSnapshot {
                path,
                reason: format!("contains depth {} where {depth} was requested", snapshot.depth),
            });
        }
        Ok(snapshot)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
