//! Input handling with gamepad support
//!
//! Provides an action-based input system that works with both the keyboard
//! and a gamepad, producing one `InputSnapshot` per frame.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard only

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{Gamepad, button};
pub use state::*;
