use tilenav_core::Vec2;

use crate::graph::{NavEdge, VertexId};
use crate::mapper::GridMapper;

/// Immutable result of one path search.
///
/// `edges` runs from the search source to the destination; an empty sequence
/// means the destination was unreachable (a legitimate outcome, not an
/// error). `examined` records every edge the search looked at, for overlay
/// rendering only.
///
/// Agents hold on to a path across ticks and replace it wholesale when
/// [`NavigationPath::matches`] stops holding.
#[derive(Clone, Debug)]
pub struct NavigationPath {
    source: VertexId,
    dest: VertexId,
    edges: Vec<NavEdge>,
    examined: Vec<NavEdge>,
}

impl NavigationPath {
    pub(crate) fn new(
        source: VertexId,
        dest: VertexId,
        edges: Vec<NavEdge>,
        examined: Vec<NavEdge>,
    ) -> Self {
        Self {
            source,
            dest,
            edges,
            examined,
        }
    }

    /// The vertex the search started from.
    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// The vertex the search was asked to reach (before any nearest-vertex
    /// substitution).
    #[inline]
    pub fn dest(&self) -> VertexId {
        self.dest
    }

    /// The path's edges, ordered source to destination.
    #[inline]
    pub fn edges(&self) -> &[NavEdge] {
        &self.edges
    }

    /// Every edge examined during the search, in visitation order.
    #[inline]
    pub fn examined_edges(&self) -> &[NavEdge] {
        &self.examined
    }

    /// Whether the path has no edges (destination unreachable, or source and
    /// destination coincide).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether this path still answers a query for the given endpoints.
    ///
    /// True when the queried vertices equal the original endpoints, or when
    /// the path is non-empty and both queried vertices occur as an endpoint
    /// of some path edge (a deliberately loose "still roughly on this
    /// route" check). An empty path only matches its exact original
    /// endpoints, so unreachable destinations get re-queried every tick.
    pub fn matches(&self, mapper: &GridMapper, source_world: Vec2, dest_world: Vec2) -> bool {
        let s = mapper.world_to_vertex(source_world);
        let d = mapper.world_to_vertex(dest_world);
        if s == self.source && d == self.dest {
            return true;
        }
        if self.edges.is_empty() {
            return false;
        }
        self.covers(s) && self.covers(d)
    }

    /// The next waypoint for an agent at `current_world`, stepping one edge
    /// toward the search source. `None` on an empty path.
    ///
    /// Picks the edge whose target is the agent's current vertex; when the
    /// agent sits on no edge target, falls back to the edge whose source
    /// cell is nearest the agent's cell.
    pub fn next_position(&self, mapper: &GridMapper, current_world: Vec2) -> Option<Vec2> {
        if self.edges.is_empty() {
            return None;
        }
        let cur = mapper.world_to_vertex(current_world);
        if let Some(e) = self.edges.iter().find(|e| e.target == cur) {
            return Some(mapper.vertex_to_world(e.source));
        }
        let mut best: Option<(VertexId, f32)> = None;
        for e in &self.edges {
            let d = mapper.grid_distance(e.source, cur);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((e.source, d)),
            }
        }
        best.map(|(v, _)| mapper.vertex_to_world(v))
    }

    fn covers(&self, v: VertexId) -> bool {
        self.edges.iter().any(|e| e.source == v || e.target == v)
    }
}
