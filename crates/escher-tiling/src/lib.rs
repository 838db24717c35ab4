//! # escher-tiling
//!
//! The order-8 triangular tiling of the hyperbolic plane, grown by
//! exact reflection in the style of Escher's *Circle Limit* prints.
//!
//! Starting from one equilateral triangle, each layer reflects tiles
//! across the current rim until the rim is wrapped, deduplicating
//! vertices on their exact coordinates. Tile counts grow geometrically
//! and match a closed form evaluated in the same exact arithmetic:
//!
//! ```text
//! depth    tiles    vertices
//!   0          1           3
//!   1         19          18
//!   2         91          75
//!   3        361         288
//!   4       1369        1083
//! ```
//!
//! | Module     | Responsibility                                      |
//! |------------|-----------------------------------------------------|
//! | `graph`    | Vertex/edge/tile arenas, dedup, single-tile builds  |
//! | `walk`     | Layer-by-layer rim walk and the closed-form counts  |
//! | `seed`     | The fundamental triangle                            |
//! | `snapshot` | Exact tiles as JSON on disk                         |
//! | `render`   | Poincaré-disk SVG output                            |

pub mod error;
pub mod graph;
pub mod render;
pub mod seed;
pub mod snapshot;
pub mod walk;

pub use error::TilingError;
pub use graph::{Colour, EdgeId, EdgeRecord, TileId, TileRecord, Tiling, VertexId};
pub use render::{live_tiles, render, render_to_file, snapshot_tiles};
pub use seed::fundamental_triangle;
pub use snapshot::{snapshot_file, SnapshotTile, TilingSnapshot};
pub use walk::{expected_layer_tiles, grow, grow_layer, LayerReport};
