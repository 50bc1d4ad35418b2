use tilenav_core::Vec2;

use crate::graph::NavGraph;
use crate::mapper::GridMapper;
use crate::mask::OccupancyMask;
use crate::source::MapSource;

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f32,
    pub(crate) f: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            f: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f32,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f).is_eq() && self.idx == other.idx
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Central coordinator for navigation queries.
///
/// Owns the [`GridMapper`], the [`NavGraph`] once built, and the search's
/// internal node pool, which is generation-stamped so that repeated
/// [`find_path`](Pathfinder::find_path) calls reuse it without clearing.
///
/// Until [`load`](Pathfinder::load) (or
/// [`load_mask`](Pathfinder::load_mask)) has run there is no graph and
/// `find_path` answers `None`.
pub struct Pathfinder {
    pub(crate) mapper: GridMapper,
    pub(crate) graph: Option<NavGraph>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
}

impl Pathfinder {
    /// Create a pathfinder with no graph yet.
    pub fn new(mapper: GridMapper) -> Self {
        Self {
            mapper,
            graph: None,
            nodes: Vec::new(),
            generation: 0,
        }
    }

    /// Create a pathfinder sized for a map, graph still unbuilt.
    pub fn from_map(map: &impl MapSource) -> Self {
        Self::new(GridMapper::from_map(map))
    }

    /// Snapshot occupancy from the map and build the navigation graph.
    pub fn load(&mut self, map: &impl MapSource) {
        self.load_mask(&OccupancyMask::from_map(map));
    }

    /// Build the navigation graph from an occupancy mask.
    ///
    /// Resizes the node pool to the mask's area and resets the search
    /// generation, invalidating any state from a previous graph.
    pub fn load_mask(&mut self, mask: &OccupancyMask) {
        let graph = NavGraph::build(mask);
        let len = graph.width() * graph.height();
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.generation = 0;
        self.graph = Some(graph);
    }

    /// Whether the graph has been built and queries can be answered.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.graph.is_some()
    }

    /// The coordinate mapper, shared with path consumers.
    #[inline]
    pub fn mapper(&self) -> &GridMapper {
        &self.mapper
    }

    /// The navigation graph, if built.
    #[inline]
    pub fn graph(&self) -> Option<&NavGraph> {
        self.graph.as_ref()
    }

    // -----------------------------------------------------------------------
    // Debug overlay data
    // -----------------------------------------------------------------------

    /// World-space centres of all graph vertices, for overlay rendering.
    pub fn vertex_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.graph
            .iter()
            .flat_map(|g| g.vertices())
            .map(|v| self.mapper.vertex_to_world(v))
    }

    /// World-space segments of all graph edges, for overlay rendering.
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.graph.iter().flat_map(|g| g.edges()).map(|e| {
            (
                self.mapper.vertex_to_world(e.source),
                self.mapper.vertex_to_world(e.target),
            )
        })
    }
}
