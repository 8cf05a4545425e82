//! Game Foundation Module
//!
//! The gameplay core of the play screen: entity state, the collision
//! resolver, combat and economy rules, the spawn manager, input-to-intent
//! mapping, ghost steering, and the per-frame session loop that runs them.
//!
//! Nothing in here talks to macroquad. The play screen feeds the session an
//! `InputSnapshot` and a frame time, then draws whatever the session holds.
//!
//! Key concepts:
//! - Session: owns the player, ghosts, coins and obstacles for one run
//! - Systems: free functions over plain data (collision, combat, intent, chase)
//! - Events: per-tick queues of what happened, drained for logging

pub mod aabb;
pub mod components;
pub mod weapon;
pub mod collision;
pub mod combat;
pub mod spawn;
pub mod intent;
pub mod chase;
pub mod event;
pub mod session;

// Re-export main types
pub use aabb::Aabb;
pub use components::{Coin, Direction, Ghost, Player, PlayerIntent, Velocity};
pub use event::Events;
pub use intent::InputSnapshot;
pub use session::{Session, SessionStatus};
pub use weapon::{SwingProgress, SWING_FRAMES};
