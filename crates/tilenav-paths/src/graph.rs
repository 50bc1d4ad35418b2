use tilenav_core::Point;

use crate::mask::OccupancyMask;

/// Identifier of a navigation vertex: `y * width + x` over the tile grid.
pub type VertexId = usize;

/// A directed edge between two adjacent navigation vertices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavEdge {
    pub source: VertexId,
    pub target: VertexId,
}

impl NavEdge {
    /// Create a new edge.
    #[inline]
    pub const fn new(source: VertexId, target: VertexId) -> Self {
        Self { source, target }
    }
}

// ---------------------------------------------------------------------------
// NavGraph
// ---------------------------------------------------------------------------

/// Navigation graph over the free cells of an [`OccupancyMask`].
///
/// Every free cell is a vertex; every ordered pair of 8-adjacent free cells
/// is a directed edge. Diagonal edges are kept even when both flanking
/// cardinal cells are blocked, so agents may cut corners.
///
/// Edges carry no weights. Costs are derived from world-space cell centres
/// at search time.
#[derive(Clone, Debug)]
pub struct NavGraph {
    width: usize,
    height: usize,
    present: Vec<bool>,
    adjacency: Vec<Vec<VertexId>>,
    vertex_count: usize,
    edge_count: usize,
}

impl NavGraph {
    /// Build the graph for a mask.
    ///
    /// Deterministic: vertices in row-major order, per-vertex adjacency in
    /// the fixed 8-neighbour enumeration order. Runs in `O(W·H)`.
    pub fn build(mask: &OccupancyMask) -> Self {
        let (w, h) = (mask.width(), mask.height());
        let len = w * h;
        let mut present = vec![false; len];
        let mut adjacency = vec![Vec::new(); len];
        let mut vertex_count = 0;
        let mut edge_count = 0;

        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let p = Point::new(x, y);
                if mask.is_blocked(p) {
                    continue;
                }
                let v = y as usize * w + x as usize;
                present[v] = true;
                vertex_count += 1;

                let targets = &mut adjacency[v];
                for n in p.neighbors_8() {
                    // is_blocked covers the out-of-bounds case too.
                    if !mask.is_blocked(n) {
                        targets.push(n.y as usize * w + n.x as usize);
                    }
                }
                edge_count += targets.len();
            }
        }

        log::debug!(
            "nav graph built: {w}x{h} tiles, {vertex_count} vertices, {edge_count} edges"
        );

        Self {
            width: w,
            height: h,
            present,
            adjacency,
            vertex_count,
            edge_count,
        }
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

    /// Whether `v` is a vertex of the graph (a free in-bounds cell).
    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.present.get(v).copied().unwrap_or(false)
    }

    /// Outgoing neighbours of `v`. Empty for non-vertices.
    #[inline]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of directed edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Iterator over all vertices, in row-major order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.present
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p)
            .map(|(v, _)| v)
    }

    /// Iterator over all directed edges, grouped by source vertex in
    /// row-major order.
    pub fn edges(&self) -> impl Iterator<Item = NavEdge> + '_ {
        self.vertices().flat_map(move |v| {
            self.neighbors(v)
                .iter()
                .map(move |&t| NavEdge::new(v, t))
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn nav_edge_round_trip() {
        let e = NavEdge::new(3, 17);
        let json = serde_json::to_string(&e).unwrap();
        let back: NavEdge = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
