use tilenav_core::{Point, Vec2};

use crate::graph::{NavGraph, VertexId};
use crate::source::MapSource;

/// Conversions between world coordinates, tile coordinates, and vertex ids.
///
/// World positions are continuous [`Vec2`]s; tiles are discrete cells of
/// `tile_size_px * map_scale` world units on a side; vertex ids flatten tile
/// coordinates row-major (`y * width + x`).
#[derive(Copy, Clone, Debug)]
pub struct GridMapper {
    width: usize,
    height: usize,
    tile_size_px: f32,
    map_scale: f32,
}

impl GridMapper {
    /// Create a mapper for a `width` x `height` tile grid.
    pub const fn new(width: usize, height: usize, tile_size_px: f32, map_scale: f32) -> Self {
        Self {
            width,
            height,
            tile_size_px,
            map_scale,
        }
    }

    /// Create a mapper with the dimensions and scale of a map.
    pub fn from_map(map: &impl MapSource) -> Self {
        Self::new(
            map.width(),
            map.height(),
            map.tile_size_px(),
            map.map_scale(),
        )
    }

    /// Grid width in tiles.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// World units covered by one tile.
    #[inline]
    pub fn tile_world_units(&self) -> f32 {
        self.tile_size_px * self.map_scale
    }

    /// Convert a world position to fractional tile coordinates.
    #[inline]
    pub fn world_to_tile(&self, world: Vec2) -> Vec2 {
        world / self.tile_world_units()
    }

    /// Convert fractional tile coordinates to a vertex id.
    ///
    /// Coordinates are clamped into grid bounds first, so positions slightly
    /// outside the map resolve to the nearest border cell instead of
    /// wrapping or panicking.
    #[inline]
    pub fn tile_to_vertex(&self, tile: Vec2) -> VertexId {
        if self.width == 0 || self.height == 0 {
            return 0;
        }
        let x = (tile.x.floor() as i64).clamp(0, self.width as i64 - 1) as usize;
        let y = (tile.y.floor() as i64).clamp(0, self.height as i64 - 1) as usize;
        y * self.width + x
    }

    /// Convert a world position to a vertex id.
    #[inline]
    pub fn world_to_vertex(&self, world: Vec2) -> VertexId {
        self.tile_to_vertex(self.world_to_tile(world))
    }

    /// The tile coordinates of a vertex.
    #[inline]
    pub fn vertex_to_tile(&self, v: VertexId) -> Point {
        Point::new((v % self.width) as i32, (v / self.width) as i32)
    }

    /// The world position of a vertex's cell centre.
    #[inline]
    pub fn vertex_to_world(&self, v: VertexId) -> Vec2 {
        let t = self.vertex_to_tile(v);
        let half = self.tile_size_px / 2.0;
        Vec2::new(
            (t.x as f32 * self.tile_size_px + half) * self.map_scale,
            (t.y as f32 * self.tile_size_px + half) * self.map_scale,
        )
    }

    /// Euclidean distance between two vertices, in tile units.
    #[inline]
    pub fn grid_distance(&self, a: VertexId, b: VertexId) -> f32 {
        self.vertex_to_tile(a).distance(self.vertex_to_tile(b))
    }

    /// Euclidean distance between two vertices' cell centres, in world units.
    #[inline]
    pub fn world_distance(&self, a: VertexId, b: VertexId) -> f32 {
        self.vertex_to_world(a).distance(self.vertex_to_world(b))
    }

    /// Resolve `v` to a vertex present in `graph`.
    ///
    /// Returns `v` itself when it is already a graph vertex. Otherwise scans
    /// every vertex and picks the one with the smallest grid Euclidean
    /// distance, first wins on ties. `None` when the graph is empty.
    pub fn closest_vertex(&self, v: VertexId, graph: &NavGraph) -> Option<VertexId> {
        if graph.contains(v) {
            return Some(v);
        }
        let mut best: Option<(VertexId, f32)> = None;
        for u in graph.vertices() {
            let d = self.grid_distance(v, u);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((u, d)),
            }
        }
        best.map(|(u, _)| u)
    }
}
