use rand::Rng;
use rand::RngExt;

/// A countdown that re-arms itself with a random delay when it elapses.
///
/// Updated by polling once per tick; the boolean result tells the caller
/// whether the timer fired this tick.
#[derive(Copy, Clone, Debug)]
pub struct CountdownTimer {
    counter: f32,
    min_delay: f32,
    max_delay: f32,
}

impl CountdownTimer {
    /// Create a timer that first fires after `initial_delay` seconds, then
    /// re-arms with delays drawn uniformly from `[min_delay, max_delay]`.
    pub const fn new(initial_delay: f32, min_delay: f32, max_delay: f32) -> Self {
        Self {
            counter: initial_delay,
            min_delay,
            max_delay,
        }
    }

    /// Seconds left until the next fire.
    #[inline]
    pub fn remaining(&self) -> f32 {
        self.counter
    }

    /// Advance the countdown by `dt` seconds.
    ///
    /// Returns `true` on the tick the countdown crosses below zero, in
    /// which case the next delay has already been drawn and armed.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) -> bool {
        self.counter -= dt;
        if self.counter < 0.0 {
            self.counter = rng.random_range(self.min_delay..=self.max_delay);
            return true;
        }
        false
    }
}
