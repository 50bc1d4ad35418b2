use tilenav_core::Vec2;
use tilenav_paths::{NavigationPath, Pathfinder};

use crate::timer::CountdownTimer;

/// Enemy movement speed, in world units per second.
pub const SPEED: f32 = 10.0;

/// A hostile tank that chases the player along the navigation graph.
///
/// The route is searched from the player's position toward the enemy, so
/// following it means stepping edge by edge toward the search source. A
/// held path is reused across ticks until it stops matching the current
/// positions or the periodic refresh timer fires.
pub struct Enemy {
    position: Vec2,
    path: Option<NavigationPath>,
    repath_timer: CountdownTimer,
}

impl Enemy {
    /// Create an enemy at `position` refreshing its route on `repath_timer`.
    pub fn new(position: Vec2, repath_timer: CountdownTimer) -> Self {
        Self {
            position,
            path: None,
            repath_timer,
        }
    }

    /// Current world position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// The route currently being followed, if any.
    #[inline]
    pub fn path(&self) -> Option<&NavigationPath> {
        self.path.as_ref()
    }

    /// Chase `target` for one frame.
    ///
    /// Re-searches the route when the refresh timer fires or the held path
    /// no longer matches the current positions. A failed search (pathfinder
    /// not ready) keeps the previous path.
    pub fn update(
        &mut self,
        dt: f32,
        target: Vec2,
        pathfinder: &mut Pathfinder,
        rng: &mut impl rand::Rng,
    ) {
        let due = self.repath_timer.update(dt, rng);
        let stale = match &self.path {
            Some(path) => !path.matches(pathfinder.mapper(), target, self.position),
            None => true,
        };

        if due || stale {
            if let Some(path) = pathfinder.find_path(target, self.position) {
                self.path = Some(path);
            }
        }

        let Some(path) = &self.path else {
            return;
        };
        let Some(next) = path.next_position(pathfinder.mapper(), self.position) else {
            return;
        };
        let dir = (next - self.position).normalized_or_zero();
        self.position = self.position + dir * SPEED * dt;
    }
}
