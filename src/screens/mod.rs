//! Screens
//!
//! Each screen runs for one frame at a time and answers with a `Transition`
//! telling the app where to go next.

mod menu;
mod instructions;
mod play;

pub use menu::{draw_menu, menu_layout};
pub use instructions::draw_instructions;
pub use play::PlayScreen;

/// Where to go after this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Stay on the current screen
    #[default]
    None,
    MainMenu,
    Instructions,
    /// Start a new play session
    Play,
    /// Quit the game
    Exit,
}
