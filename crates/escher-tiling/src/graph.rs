//! Tiling graph model: vertex, edge and tile arenas with exact
//! deduplication, plus single-tile construction.
//!
//! Vertices, edges and tiles live in append-only arenas addressed by
//! `u32` newtype ids; ids are monotonic and never reused. Identity is
//! structural everywhere: vertices deduplicate on exact `(x, y)`
//! coordinates, edges on the sorted id pair, tiles on the sorted id
//! triple. A tile additionally keeps its registration order
//! `(rim, apex, rim)` so the renderer walks a consistent winding.
//!
//! Colours follow the reflection structure: the seed vertices take 1, 2,
//! 3 and the base tile 0; a new vertex inherits the colour of the vertex
//! it mirrors, and a new tile takes `colour(inner vertex) XOR
//! colour(inner tile)`.

use std::collections::HashMap;
use std::fmt;
use std::ops::BitXor;

use serde::{Deserialize, Serialize};

use escher_geom::{Line, Point};

use crate::error::TilingError;

// ─────────────────────────────────────────────
// Ids and colours
// ─────────────────────────────────────────────

/// Index into the vertex arena. Monotonic; never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u32);

/// Index into the edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u32);

/// Index into the tile arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// One of the four tile/vertex colours. Tiles combine by XOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Colour(pub u8);

impl Colour {
    /// Colour of the seed tile.
    pub const BASE: Colour = Colour(0);

    /// Fill colour used by the SVG renderer.
    pub fn hex(self) -> &'static str {
        match self.0 & 3 {
            0 => "#ffffff",
            1 => "#000000",
            2 => "#cc6600",
            _ => "#66cc00",
        }
    }
}

impl BitXor for Colour {
    type Output = Colour;

    fn bitxor(self, rhs: Colour) -> Colour {
        Colour(self.0 ^ rhs.0)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────

/// An edge between two vertices, keyed by the sorted id pair. The tile
/// slots fill as the tiling grows; an interior edge has both.
#[derive(Debug, Clone)]
pub struct EdgeRecord {
    pub vertices: [VertexId; 2],
    pub tiles:    [Option<TileId>; 2],
}

impl EdgeRecord {
    /// Record an incident tile; a third is a structural violation.
    fn attach(&mut self, tile: TileId) -> Result<(), TilingError> {
        if self.tiles[0].is_none() {
            self.tiles[0] = Some(tile);
        } else if self.tiles[1].is_none() {
            self.tiles[1] = Some(tile);
        } else {
            return Err(TilingError::EdgeSaturated {
                a: self.vertices[0],
                b: self.vertices[1],
            });
        }
        Ok(())
    }

    /// Number of incident tiles (1 on the rim, 2 in the interior).
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }
}

/// A triangle. `vertices` keeps registration order `(rim, apex, rim)`.
#[derive(Debug, Clone)]
pub struct TileRecord {
    pub vertices: [VertexId; 3],
}

// ─────────────────────────────────────────────
// Tiling
// ─────────────────────────────────────────────

/// The growing tiling: arenas, dedup indexes, colour tables and the
/// current rim.
#[derive(Debug, Clone)]
pub struct Tiling {
    points:         Vec<Point>,
    vertex_colours: Vec<Colour>,
    vertex_index:   HashMap<Point, VertexId>,
    edges:          Vec<EdgeRecord>,
    edge_index:     HashMap<[VertexId; 2], EdgeId>,
    tiles:          Vec<TileRecord>,
    tile_colours:   Vec<Colour>,
    tile_index:     HashMap<[VertexId; 3], TileId>,
    boundary:       Vec<VertexId>,
    depth:          u32,
}

impl Tiling {
    /// Seed the tiling with the base triangle. Vertices take colours
    /// 1, 2, 3 in argument order; the base tile takes colour 0; the
    /// boundary starts as the seed cycle.
    pub fn new(v1: Point, v2: Point, v3: Point) -> Result<Self, TilingError> {
        if v1 == v2 || v2 == v3 || v1 == v3 {
            return Err(TilingError::DegenerateSeed);
        }
        let mut tiling = Self {
            points:         Vec::new(),
            vertex_colours: Vec::new(),
            vertex_index:   HashMap::new(),
            edges:          Vec::new(),
            edge_index:     HashMap::new(),
            tiles:          Vec::new(),
            tile_colours:   Vec::new(),
            tile_index:     HashMap::new(),
            boundary:       Vec::new(),
            depth:          0,
        };
        let a = tiling.intern_vertex(v1, Colour(1));
        let b = tiling.intern_vertex(v2, Colour(2));
        let c = tiling.intern_vertex(v3, Colour(3));
        tiling.register_tile([a, b, c], Colour::BASE)?;
        tiling.boundary = vec![a, b, c];
        Ok(tiling)
    }

    /// Build the one missing tile across edge `(a, b)`.
    ///
    /// The edge must exist with exactly one incident tile. The third
    /// vertex of that tile reflects across the edge's supporting line;
    /// the image deduplicates against the vertex table on exact `(x, y)`
    /// before the tile `(a, apex, b)` is registered. Returns the apex id.
    pub fn build_new_tile(&mut self, a: VertexId, b: VertexId) -> Result<VertexId, TilingError> {
        let eid = self
            .edge_between(a, b)
            .ok_or(TilingError::EdgeNotFound { a, b })?;
        let inner_tile = match self.edges[eid.0 as usize].tiles {
            [Some(t), None] => t,
            [Some(_), Some(_)] => return Err(TilingError::EdgeSaturated { a, b }),
            _ => return Err(TilingError::EdgeNotFound { a, b }),
        };
        let inner = self.tiles[inner_tile.0 as usize]
            .vertices
            .iter()
            .copied()
            .find(|&v| v != a && v != b)
            .ok_or(TilingError::EdgeNotFound { a, b })?;

        let mirror = Line::from_points(self.point(a), self.point(b));
        let image = mirror.reflect(self.point(inner))?;

        let inner_colour = self.vertex_colours[inner.0 as usize];
        let apex = self.intern_vertex(image, inner_colour);
        let tile_colour = inner_colour ^ self.tile_colours[inner_tile.0 as usize];
        self.register_tile([a, apex, b], tile_colour)?;
        Ok(apex)
    }

    // ── internal mutation ──

    /// Fetch-or-create a vertex by exact `(x, y)`. The colour applies
    /// only on first creation; an existing vertex keeps its colour.
    fn intern_vertex(&mut self, p: Point, colour: Colour) -> VertexId {
        if let Some(&id) = self.vertex_index.get(&p) {
            return id;
        }
        let id = VertexId(self.points.len() as u32);
        self.vertex_index.insert(p.clone(), id);
        self.points.push(p);
        self.vertex_colours.push(colour);
        id
    }

    /// Fetch-or-create the edge on the sorted pair.
    fn intern_edge(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let key = if a <= b { [a, b] } else { [b, a] };
        if let Some(&id) = self.edge_index.get(&key) {
            return id;
        }
        let id = EdgeId(self.edges.len() as u32);
        self.edge_index.insert(key, id);
        self.edges.push(EdgeRecord { vertices: key, tiles: [None, None] });
        id
    }

    /// Register a tile in the given winding order and attach it to its
    /// three edges, creating them as needed.
    fn register_tile(
        &mut self,
        vertices: [VertexId; 3],
        colour: Colour,
    ) -> Result<TileId, TilingError> {
        let id = TileId(self.tiles.len() as u32);
        let mut key = vertices;
        key.sort_unstable();
        debug_assert!(
            !self.tile_index.contains_key(&key),
            "tile {key:?} registered twice"
        );
        self.tile_index.insert(key, id);
        self.tiles.push(TileRecord { vertices });
        self.tile_colours.push(colour);
        for (a, b) in [
            (vertices[0], vertices[1]),
            (vertices[1], vertices[2]),
            (vertices[2], vertices[0]),
        ] {
            let eid = self.intern_edge(a, b);
            self.edges[eid.0 as usize].attach(id)?;
        }
        Ok(id)
    }

    /// Swap in the next rim after a completed layer.
    pub(crate) fn advance_rim(&mut self, rim: Vec<VertexId>, depth: u32) {
        self.boundary = rim;
        self.depth = depth;
    }

    // ── queries ──

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of completed layers beyond the seed.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn point(&self, v: VertexId) -> &Point {
        &self.points[v.0 as usize]
    }

    pub fn vertex_colour(&self, v: VertexId) -> Colour {
        self.vertex_colours[v.0 as usize]
    }

    pub fn tile_colour(&self, t: TileId) -> Colour {
        self.tile_colours[t.0 as usize]
    }

    /// Tile corners in registration (winding) order.
    pub fn tile_vertices(&self, t: TileId) -> [VertexId; 3] {
        self.tiles[t.0 as usize].vertices
    }

    /// The id an exact point already maps to, if any.
    pub fn vertex_id_of(&self, p: &Point) -> Option<VertexId> {
        self.vertex_index.get(p).copied()
    }

    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let key = if a <= b { [a, b] } else { [b, a] };
        self.edge_index.get(&key).copied()
    }

    pub fn edge(&self, e: EdgeId) -> &EdgeRecord {
        &self.edges[e.0 as usize]
    }

    /// All edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.edges.iter()
    }

    /// All tiles in creation order: `(id, winding triple, colour)`.
    pub fn tiles(&self) -> impl Iterator<Item = (TileId, [VertexId; 3], Colour)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, t)| (TileId(i as u32), t.vertices, self.tile_colours[i]))
    }

    /// The current rim, in cyclic order.
    pub fn boundary(&self) -> &[VertexId] {
        &self.boundary
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
