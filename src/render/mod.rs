//! Presentation
//!
//! Turns session state into macroquad draw calls: sprite sheets and their
//! animations, the field camera, the HUD and the end-of-run summary.

mod animation;
mod assets;
mod camera;
mod draw;

pub use animation::*;
pub use assets::{AssetError, Assets, SpriteSheet};
pub use camera::{flip_y, DrawScope};
pub use draw::{draw_hud, draw_summary, draw_world};
