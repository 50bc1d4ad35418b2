use tilenav_core::Vec2;
use tilenav_paths::{NavigationPath, Pathfinder};

/// Which diagnostic layers the overlay renders.
///
/// All layers default to off; the plain map with the agents on it is
/// always drawn.
#[derive(Copy, Clone, Debug, Default)]
pub struct DebugOptions {
    /// Mark every navigation vertex.
    pub draw_nav_graph: bool,
    /// Mark every cell touched by a search's examined edges.
    pub draw_search: bool,
    /// Mark the cells of each followed path.
    pub draw_path: bool,
}

/// Glyphs, later layers overwrite earlier ones.
///
/// | glyph | meaning            |
/// |-------|--------------------|
/// | `#`   | obstacle           |
/// | `.`   | navigation vertex  |
/// | `x`   | examined by search |
/// | `*`   | path cell          |
/// | `E`   | enemy              |
/// | `T`   | tank               |
pub fn render(
    pathfinder: &Pathfinder,
    tank: Vec2,
    enemies: &[(Vec2, Option<&NavigationPath>)],
    options: DebugOptions,
) -> String {
    let mapper = pathfinder.mapper();
    let (w, h) = (mapper.width(), mapper.height());
    let mut grid = vec![b'#'; w * h];

    if let Some(graph) = pathfinder.graph() {
        for v in graph.vertices() {
            grid[v] = b' ';
        }
        if options.draw_nav_graph {
            for v in graph.vertices() {
                grid[v] = b'.';
            }
        }
    }

    for (_, path) in enemies {
        let Some(path) = path else { continue };
        if options.draw_search {
            for e in path.examined_edges() {
                grid[e.source] = b'x';
                grid[e.target] = b'x';
            }
        }
        if options.draw_path {
            for e in path.edges() {
                grid[e.source] = b'*';
                grid[e.target] = b'*';
            }
        }
    }

    for (position, _) in enemies {
        grid[mapper.world_to_vertex(*position)] = b'E';
    }
    grid[mapper.world_to_vertex(tank)] = b'T';

    let mut out = String::with_capacity((w + 1) * h);
    for row in grid.chunks(w) {
        out.extend(row.iter().map(|&b| b as char));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilenav_paths::{GridMapper, OccupancyMask};

    const PX: f32 = 64.0;
    const SCALE: f32 = 3.0 / 64.0;

    fn corridor(len: usize) -> Pathfinder {
        let mut pf = Pathfinder::new(GridMapper::new(len, 1, PX, SCALE));
        pf.load_mask(&OccupancyMask::new(len, 1));
        pf
    }

    fn centre(pf: &Pathfinder, v: usize) -> Vec2 {
        pf.mapper().vertex_to_world(v)
    }

    #[test]
    fn plain_render_shows_only_agents() {
        let mut pf = corridor(5);
        let enemy_pos = centre(&pf, 4);
        let path = pf.find_path(centre(&pf, 0), enemy_pos).unwrap();
        let out = render(
            &pf,
            centre(&pf, 0),
            &[(enemy_pos, Some(&path))],
            DebugOptions::default(),
        );
        assert_eq!(out, "T   E\n");
    }

    #[test]
    fn nav_graph_layer_marks_vertices() {
        let pf = corridor(5);
        let out = render(
            &pf,
            centre(&pf, 0),
            &[],
            DebugOptions {
                draw_nav_graph: true,
                ..Default::default()
            },
        );
        assert_eq!(out, "T....\n");
    }

    #[test]
    fn path_layer_marks_route_cells() {
        let mut pf = corridor(5);
        let enemy_pos = centre(&pf, 4);
        let path = pf.find_path(centre(&pf, 0), enemy_pos).unwrap();
        let out = render(
            &pf,
            centre(&pf, 0),
            &[(enemy_pos, Some(&path))],
            DebugOptions {
                draw_path: true,
                ..Default::default()
            },
        );
        assert_eq!(out, "T***E\n");
    }

    #[test]
    fn search_layer_marks_examined_cells() {
        let mut pf = corridor(5);
        let enemy_pos = centre(&pf, 2);
        let path = pf.find_path(centre(&pf, 0), enemy_pos).unwrap();
        let out = render(
            &pf,
            centre(&pf, 4),
            &[(enemy_pos, Some(&path))],
            DebugOptions {
                draw_search: true,
                ..Default::default()
            },
        );
        // The search from vertex 0 to 2 examined cells 0, 1, 2 only.
        assert!(out.starts_with("xxE"));
        assert!(!out.contains('*'));
    }

    #[test]
    fn obstacles_render_as_walls() {
        use tilenav_core::Point;
        let mut mask = OccupancyMask::new(3, 1);
        mask.set_blocked(Point::new(1, 0), true);
        let mut pf = Pathfinder::new(GridMapper::new(3, 1, PX, SCALE));
        pf.load_mask(&mask);
        let out = render(&pf, centre(&pf, 0), &[], DebugOptions::default());
        assert_eq!(out, "T# \n");
    }

    #[test]
    fn unloaded_pathfinder_renders_all_walls_except_agents() {
        let pf = Pathfinder::new(GridMapper::new(3, 1, PX, SCALE));
        let out = render(&pf, Vec2::new(1.5, 1.5), &[], DebugOptions::default());
        assert_eq!(out, "T##\n");
    }
}
