use std::collections::BinaryHeap;

use tilenav_core::Vec2;

use crate::graph::NavEdge;
use crate::navpath::NavigationPath;
use crate::pathfinder::{NodeRef, Pathfinder};

/// Multiplier applied to the Euclidean grid-distance heuristic.
///
/// Deliberately larger than 1, which makes the heuristic non-admissible:
/// the search narrows aggressively and may return paths above the true
/// shortest cost. Chosen empirically for speed over optimality; tune here,
/// do not "fix" to an admissible form.
pub const HEURISTIC_WEIGHT: f32 = 4.0;

impl Pathfinder {
    /// Compute a route from `source_world` to `dest_world` using weighted A*.
    ///
    /// Returns `None` while no graph is loaded or the graph has no vertices
    /// ("not ready, try again next tick"). Otherwise always returns a
    /// [`NavigationPath`]; an empty edge sequence means the destination was
    /// unreachable.
    ///
    /// A destination vertex absent from the graph is silently substituted
    /// with the closest graph vertex. A source vertex absent from the graph
    /// is used as-is; it has no outgoing edges, so the search exhausts and
    /// reports unreachable.
    pub fn find_path(
        &mut self,
        source_world: Vec2,
        dest_world: Vec2,
    ) -> Option<NavigationPath> {
        let graph = self.graph.as_ref()?;

        let source = self.mapper.world_to_vertex(source_world);
        let queried_dest = self.mapper.world_to_vertex(dest_world);
        let goal = self.mapper.closest_vertex(queried_dest, graph)?;
        if source >= self.nodes.len() {
            return None;
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the source node.
        {
            let h = self.mapper.grid_distance(source, goal) * HEURISTIC_WEIGHT;
            let node = &mut self.nodes[source];
            node.g = 0.0;
            node.f = h;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: source,
            f: self.nodes[source].f,
        });

        let mut examined: Vec<NavEdge> = Vec::new();

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            // Early termination: stop as soon as the goal is finalised.
            if ci == goal {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;

            for &ni in graph.neighbors(ci) {
                examined.push(NavEdge::new(ci, ni));

                let tentative_g = current_g + self.mapper.world_distance(ci, ni);
                let h = self.mapper.grid_distance(ni, goal) * HEURISTIC_WEIGHT;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already visited this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + h;
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        // Backtrack predecessors into a source-to-destination edge sequence.
        let mut edges = Vec::new();
        if found {
            let mut ci = goal;
            while self.nodes[ci].parent != usize::MAX {
                let parent = self.nodes[ci].parent;
                edges.push(NavEdge::new(parent, ci));
                ci = parent;
            }
            edges.reverse();
        }

        log::trace!(
            "path search {source}->{queried_dest}: {} edges, {} examined",
            edges.len(),
            examined.len()
        );

        Some(NavigationPath::new(source, queried_dest, edges, examined))
    }
}
