//! Tankduel — a top-down tank skirmish built on tilenav.

pub mod battlefield;
pub mod enemy;
pub mod game;
pub mod overlay;
pub mod tank;
pub mod timer;
pub mod velocity;

pub use game::Game;
pub use overlay::DebugOptions;
