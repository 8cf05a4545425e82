//! World module - play-field maps
//!
//! A map supplies the static obstacle rectangles the collision resolver scans
//! every frame. Maps are loaded from RON files or built in.

mod map;
mod loader;

pub use map::*;
pub use loader::*;
