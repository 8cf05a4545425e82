//! Immediate-mode UI for the menu screens and the HUD
//!
//! Design principles:
//! - Immediate mode (no retained state, rebuilt each frame)
//! - Simple rectangle-based layout
//! - Macroquad integration for rendering

mod rect;
mod widgets;
mod input;
mod theme;

pub use rect::*;
pub use widgets::*;
pub use input::*;
pub use theme::*;
