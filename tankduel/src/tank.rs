use tilenav_core::Vec2;

use crate::velocity::MovementVelocity;

/// Change in speed per second while the throttle is held.
pub const ACCELERATION: f32 = 10.0;

/// Fastest forward speed, in world units per second.
pub const MAX_VELOCITY: f32 = 10.0;

/// Fastest reverse speed.
pub const MIN_VELOCITY: f32 = -10.0;

/// How close the tank must get to a waypoint before advancing to the next.
const ARRIVE_DISTANCE: f32 = 1.0;

/// The player-controlled tank, patrolling a fixed loop of waypoints.
pub struct Tank {
    position: Vec2,
    velocity: MovementVelocity,
    waypoints: Vec<Vec2>,
    next: usize,
}

impl Tank {
    /// Create a tank at `position` cycling through `waypoints` in order.
    pub fn new(position: Vec2, waypoints: Vec<Vec2>) -> Self {
        Self {
            position,
            velocity: MovementVelocity::new(
                Vec2::ZERO,
                MIN_VELOCITY,
                MAX_VELOCITY,
                ACCELERATION,
            ),
            waypoints,
            next: 0,
        }
    }

    /// Current world position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Steer toward the current waypoint and integrate one frame.
    ///
    /// With no waypoints the throttle is released and the tank coasts to
    /// a stop.
    pub fn update(&mut self, dt: f32) {
        if self.waypoints.is_empty() {
            self.velocity.return_toward_zero(dt);
            self.position = self.position + self.velocity.scaler() * dt;
            return;
        }

        let target = self.waypoints[self.next];
        let to_target = target - self.position;
        if to_target.length() <= ARRIVE_DISTANCE {
            self.next = (self.next + 1) % self.waypoints.len();
        }

        self.velocity.direction = to_target;
        self.velocity.accelerate(dt);
        self.position = self.position + self.velocity.scaler() * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn moves_toward_its_waypoint() {
        let mut tank = Tank::new(Vec2::ZERO, vec![Vec2::new(30.0, 0.0)]);
        let start = tank.position();
        for _ in 0..60 {
            tank.update(DT);
        }
        let end = tank.position();
        assert!(end.x > start.x);
        assert!((end.y - 0.0).abs() < 1e-4);
    }

    #[test]
    fn speed_saturates_at_max() {
        let mut tank = Tank::new(Vec2::ZERO, vec![Vec2::new(1000.0, 0.0)]);
        for _ in 0..120 {
            tank.update(DT);
        }
        // One full frame at top speed.
        let before = tank.position();
        tank.update(DT);
        let step = (tank.position() - before).length();
        assert!((step - MAX_VELOCITY * DT).abs() < 1e-4);
    }

    #[test]
    fn advances_waypoints_in_a_loop() {
        let waypoints = vec![Vec2::new(3.0, 0.0), Vec2::new(3.0, 3.0)];
        let mut tank = Tank::new(Vec2::ZERO, waypoints);
        // Run long enough to arrive at the first corner and turn.
        for _ in 0..600 {
            tank.update(DT);
        }
        assert!(tank.position().y > 0.5);
    }

    #[test]
    fn coasts_to_rest_without_waypoints() {
        let mut tank = Tank::new(Vec2::ZERO, Vec::new());
        for _ in 0..600 {
            tank.update(DT);
        }
        assert!(tank.position().length() < 1e-3);
    }
}
