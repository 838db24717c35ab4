//! SVG rendering of the tiling in the Poincaré disk.
//!
//! Tile corners project to the open unit disk and edges become either
//! circular arcs (the generic geodesic) or straight chords (a geodesic
//! through the disk centre). Arc radii come from the exact supporting
//! line of each edge, so edges shared by two tiles are drawn from the
//! same data and the tiles meet without gaps.

use std::path::Path as FsPath;

use svg::node::element::path::Data;
use svg::node::element::{Group, Path};
use svg::Document;

use escher_geom::{Line, Point};

use crate::error::TilingError;
use crate::graph::{Colour, Tiling};
use crate::snapshot::TilingSnapshot;

/// Render tiles into an SVG document of `size` × `size` pixels.
///
/// The viewport is the square circumscribing the unit disk; a
/// `scale(1,-1)` group flips the y-axis so the disk keeps its
/// mathematical orientation on screen.
pub fn render<'a, I>(tiles: I, size: u32) -> Document
where
    I: IntoIterator<Item = ([&'a Point; 3], Colour)>,
{
    let mut group = Group::new().set("transform", "scale(1,-1)");
    for (corners, colour) in tiles {
        group = group.add(tile_path(corners, colour));
    }
    Document::new()
        .set("viewBox", (-1.0, -1.0, 2.0, 2.0))
        .set("width", size)
        .set("height", size)
        .add(group)
}

/// Render tiles and write the document to `path`.
pub fn render_to_file<'a, I>(path: &FsPath, tiles: I, size: u32) -> Result<(), TilingError>
where
    I: IntoIterator<Item = ([&'a Point; 3], Colour)>,
{
    let document = render(tiles, size);
    svg::save(path, &document)?;
    Ok(())
}

/// Adapt a live tiling to the renderer's input shape.
pub fn live_tiles(tiling: &Tiling) -> impl Iterator<Item = ([&Point; 3], Colour)> + '_ {
    tiling.tiles().map(move |(_, [a, b, c], colour)| {
        ([tiling.point(a), tiling.point(b), tiling.point(c)], colour)
    })
}

/// Adapt a loaded snapshot to the renderer's input shape.
pub fn snapshot_tiles(
    snapshot: &TilingSnapshot,
) -> impl Iterator<Item = ([&Point; 3], Colour)> + '_ {
    snapshot
        .tiles
        .iter()
        .map(|tile| ([&tile.vertices[0], &tile.vertices[1], &tile.vertices[2]], Colour(tile.colour)))
}

/// One tile as a filled path: three geodesic edges in winding order.
fn tile_path(corners: [&Point; 3], colour: Colour) -> Path {
    let disk = [corners[0].disk(), corners[1].disk(), corners[2].disk()];
    let mut data = Data::new().move_to(disk[0]);
    for i in 0..3 {
        let (sx, sy) = disk[i];
        let (ex, ey) = disk[(i + 1) % 3];
        let geodesic = Line::from_points(corners[i], corners[(i + 1) % 3]);
        match geodesic.disk_radius() {
            Some(radius) => {
                // the arc bows toward the disk centre, which sits left
                // of the chord exactly when start × end is positive
                let sweep = if sx * ey > sy * ex { 0.0 } else { 1.0 };
                data = data.elliptical_arc_to((radius, radius, 0.0, 0.0, sweep, ex, ey));
            }
            None => {
                data = data.line_to((ex, ey));
            }
        }
    }
    Path::new().set("fill", colour.hex()).set("d", data.close())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::fundamental_triangle;
    use crate::walk::grow;

    fn grown(depth: u32) -> Tiling {
        let [v1, v2, v3] = fundamental_triangle().unwrap();
        let mut tiling = Tiling::new(v1, v2, v3).unwrap();
        grow(&mut tiling, depth).unwrap();
        tiling
    }

    #[test]
    fn one_path_per_tile() {
        let tiling = grown(1);
        let doc = render(live_tiles(&tiling), 512).to_string();
        assert!(doc.contains("<svg"));
        assert!(doc.contains("viewBox"));
        assert!(doc.contains("scale(1,-1)"));
        assert_eq!(doc.matches("<path").count(), 19);
    }

    #[test]
    fn all_four_palette_colours_appear() {
        let tiling = grown(1);
        let doc = render(live_tiles(&tiling), 512).to_string();
        for hex in ["#ffffff", "#000000", "#cc6600", "#66cc00"] {
            assert!(doc.contains(hex), "missing {hex}");
        }
    }

    #[test]
    fn snapshots_render_like_the_live_tiling() {
        let tiling = grown(1);
        let snapshot = TilingSnapshot::capture(&tiling);
        let live = render(live_tiles(&tiling), 256).to_string();
        let restored = render(snapshot_tiles(&snapshot), 256).to_string();
        assert_eq!(live, restored);
    }

    #[test]
    fn render_to_file_writes_a_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiling.svg");
        let tiling = grown(1);
        render_to_file(&path, live_tiles(&tiling), 128).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("<svg"));
        assert!(raw.trim_end().ends_with("</svg>"));
    }
}
