//! `escher`: build exact hyperbolic tilings and draw them.
//!
//! Two subcommands cover the pipeline:
//!
//! ```text
//! escher build --depth 4 --out out          # grow + snapshot per layer
//! escher draw  --depth 4 --out out          # snapshot (or rebuild) → SVG
//! ```
//!
//! Log verbosity follows the `ESCHER_LOG` environment variable, with
//! `info` as the default.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use escher_tiling::{
    fundamental_triangle, grow_layer, live_tiles, render_to_file, snapshot_tiles, Tiling,
    TilingSnapshot,
};

#[derive(Parser)]
#[command(name = "escher", version, about = "Exact order-8 hyperbolic tilings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Grow a tiling layer by layer, persisting a snapshot per depth.
    Build {
        /// Layers to grow beyond the seed tile.
        #[arg(long, default_value_t = 4)]
        depth: u32,
        /// Directory for snapshots and drawings.
        #[arg(long, default_value = "out")]
        out: PathBuf,
        /// Rebuild even when a snapshot for this depth already exists.
        #[arg(long)]
        force: bool,
    },
    /// Render the tiling at a depth to an SVG in the Poincaré disk.
    Draw {
        /// Depth to draw; falls back to a fresh build when no usable
        /// snapshot exists.
        #[arg(long, default_value_t = 4)]
        depth: u32,
        /// Directory holding snapshots; the SVG lands there too.
        #[arg(long, default_value = "out")]
        out: PathBuf,
        /// Image width and height in pixels.
        #[arg(long, default_value_t = 2048)]
        size: u32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ESCHER_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    match Cli::parse().command {
        Command::Build { depth, out, force } => build(depth, &out, force),
        Command::Draw { depth, out, size } => draw(depth, &out, size),
    }
}

fn build(depth: u32, out: &Path, force: bool) -> anyhow::Result<()> {
    if !force {
        if let Ok(snapshot) = TilingSnapshot::load(out, depth) {
            tracing::info!(depth, tiles = snapshot.tiles.len(), "snapshot already present");
            return Ok(());
        }
    }
    let started = Instant::now();
    let tiling = build_tiling(depth, Some(out))?;
    tracing::info!(
        depth,
        tiles = tiling.tile_count(),
        vertices = tiling.vertex_count(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "build complete"
    );
    Ok(())
}

fn draw(depth: u32, out: &Path, size: u32) -> anyhow::Result<()> {
    let svg_path = out.join(format!("tiling-depth-{depth}.svg"));
    match TilingSnapshot::load(out, depth) {
        Ok(snapshot) => {
            render_to_file(&svg_path, snapshot_tiles(&snapshot), size)
                .with_context(|| format!("writing {}", svg_path.display()))?;
            tracing::info!(
                path = %svg_path.display(),
                tiles = snapshot.tiles.len(),
                "drawn from snapshot"
            );
        }
        Err(err) => {
            tracing::warn!(%err, "no usable snapshot, rebuilding");
            let tiling = build_tiling(depth, Some(out))?;
            render_to_file(&svg_path, live_tiles(&tiling), size)
                .with_context(|| format!("writing {}", svg_path.display()))?;
            tracing::info!(
                path = %svg_path.display(),
                tiles = tiling.tile_count(),
                "drawn from a fresh build"
            );
        }
    }
    Ok(())
}

/// Grow from the seed to `depth`, snapshotting every layer when an
/// output directory is given.
fn build_tiling(depth: u32, out: Option<&Path>) -> anyhow::Result<Tiling> {
    let [v1, v2, v3] = fundamental_triangle().context("constructing the seed triangle")?;
    let mut tiling = Tiling::new(v1, v2, v3).context("seeding the tiling")?;
    save_snapshot(&tiling, out)?;
    for level in 1..=depth {
        grow_layer(&mut tiling).with_context(|| format!("growing layer {level}"))?;
        save_snapshot(&tiling, out)?;
    }
    Ok(tiling)
}

fn save_snapshot(tiling: &Tiling, out: Option<&Path>) -> anyhow::Result<()> {
    let Some(dir) = out else { return Ok(()) };
    let path = TilingSnapshot::capture(tiling)
        .save(dir)
        .with_context(|| format!("saving the depth-{} snapshot", tiling.depth()))?;
    tracing::debug!(path = %path.display(), "snapshot written");
    Ok(())
}
