//! Navigation graphs and weighted A* search for tile-based 2D games.
//!
//! This crate turns a tile map into a navigation graph and answers "how do I
//! get from here to there" queries in world coordinates:
//!
//! - [`MapSource`] — read-only seam to the map collaborator
//! - [`OccupancyMask`] — per-cell blocked/free snapshot of the map
//! - [`NavGraph`] — free cells as vertices, 8-way directed adjacency
//! - [`GridMapper`] — world ⇄ tile ⇄ vertex conversions
//! - [`Pathfinder`] — cache-owning coordinator running the A* search
//!   ([`Pathfinder::find_path`])
//! - [`NavigationPath`] — immutable search result with cache-validity
//!   ([`NavigationPath::matches`]) and step extraction
//!   ([`NavigationPath::next_position`])
//!
//! The search trades optimality for speed: its heuristic is weighted by
//! [`HEURISTIC_WEIGHT`] and therefore not admissible. Paths are good, not
//! shortest.
//!
//! | Outcome | Representation |
//! |---|---|
//! | graph not built yet | `find_path` returns `None` |
//! | destination unreachable | path with an empty edge list |
//! | destination off-graph | silently resolved to the closest graph vertex |

mod astar;
mod graph;
mod mapper;
mod mask;
mod navpath;
mod pathfinder;
mod source;

pub use astar::HEURISTIC_WEIGHT;
pub use graph::{NavEdge, NavGraph, VertexId};
pub use mapper::GridMapper;
pub use mask::OccupancyMask;
pub use navpath::NavigationPath;
pub use pathfinder::Pathfinder;
pub use source::MapSource;
