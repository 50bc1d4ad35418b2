use tilenav_core::Point;
use tilenav_paths::MapSource;

/// Edge length of one tile in texture pixels.
pub const TILE_SIZE_PX: f32 = 64.0;

/// World units covered by one tile after map scaling.
pub const TILE_WORLD_UNITS: f32 = 3.0;

/// Layout of the skirmish arena. `#` is an obstacle, `.` is open ground.
/// All open cells are mutually reachable.
const LAYOUT: &[&str] = &[
    "####################",
    "#..................#",
    "#...##......###....#",
    "#...##.......#.....#",
    "#............#.....#",
    "#.....#............#",
    "#.....#....##......#",
    "#..........##......#",
    "#..................#",
    "####################",
];

/// The static tile map of the arena.
///
/// Obstacles never change at runtime; the navigation graph is built once
/// from this map and reused for every query.
pub struct Battlefield {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
}

impl Battlefield {
    /// Build the battlefield from the static layout.
    pub fn new() -> Self {
        let height = LAYOUT.len();
        let width = LAYOUT[0].len();
        let mut blocked = Vec::with_capacity(width * height);
        for row in LAYOUT {
            debug_assert_eq!(row.len(), width);
            for c in row.bytes() {
                blocked.push(c == b'#');
            }
        }
        Self {
            width,
            height,
            blocked,
        }
    }

    /// Whether the tile at `p` holds an obstacle. Out-of-bounds counts as
    /// blocked.
    pub fn is_blocked(&self, p: Point) -> bool {
        if p.x < 0 || p.y < 0 {
            return true;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }
        self.blocked[y * self.width + x]
    }
}

impl Default for Battlefield {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSource for Battlefield {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn tile_size_px(&self) -> f32 {
        TILE_SIZE_PX
    }

    fn map_scale(&self) -> f32 {
        TILE_WORLD_UNITS / TILE_SIZE_PX
    }

    fn has_object_at(&self, x: usize, y: usize) -> bool {
        self.is_blocked(Point::new(x as i32, y as i32))
    }
}
