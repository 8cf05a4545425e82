//! Application state and screen management
//!
//! One screen is active at a time. Screens report a `Transition`; the app
//! swaps screens and starts a fresh session whenever play begins.

use macroquad::prelude::*;
use crate::config::GameConfig;
use crate::input::{Action, InputState};
use crate::render::Assets;
use crate::screens::{draw_instructions, draw_menu, PlayScreen, Transition};
use crate::ui::{MouseState, UiContext};
use crate::world::Map;

/// The available screens
pub enum Screen {
    MainMenu,
    Instructions,
    Play(Box<PlayScreen>),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::MainMenu => "main menu",
            Screen::Instructions => "instructions",
            Screen::Play(_) => "play",
        }
    }
}

/// What the app does with a screen's transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stay,
    MainMenu,
    Instructions,
    Play,
    Quit,
}

impl From<Transition> for Target {
    fn from(t: Transition) -> Self {
        match t {
            Transition::None => Target::Stay,
            Transition::MainMenu => Target::MainMenu,
            Transition::Instructions => Target::Instructions,
            Transition::Play => Target::Play,
            Transition::Exit => Target::Quit,
        }
    }
}

/// Main application state
pub struct AppState {
    pub screen: Screen,
    pub config: GameConfig,
    /// Map every session is played on
    pub map: Map,
    pub assets: Option<Assets>,
    /// Unified input state (keyboard + gamepad)
    pub input: InputState,
    pub ui: UiContext,
}

impl AppState {
    pub fn new(config: GameConfig, map: Map, assets: Option<Assets>) -> Self {
        Self {
            screen: Screen::MainMenu,
            config,
            map,
            assets,
            input: InputState::new(),
            ui: UiContext::new(),
        }
    }

    /// Run one frame of the active screen. Returns false once the game should quit.
    pub fn frame(&mut self, dt: f32) -> bool {
        self.input.poll();
        self.ui.begin_frame(MouseState::poll());
        let escape = self.input.action_pressed(Action::Escape);

        let transition = match &mut self.screen {
            Screen::MainMenu => draw_menu(&mut self.ui, escape),
            Screen::Instructions => draw_instructions(&mut self.ui, escape),
            Screen::Play(play) => {
                let snapshot = self.input.snapshot();
                let t = play.update(&snapshot, dt);
                play.draw(self.assets.as_ref());
                t
            }
        };

        self.apply(transition)
    }

    /// Switch screens. Returns false on quit.
    pub fn apply(&mut self, transition: Transition) -> bool {
        let next = match Target::from(transition) {
            Target::Stay => return true,
            Target::Quit => {
                log::info!("exit requested from {}", self.screen.name());
                return false;
            }
            Target::MainMenu => Screen::MainMenu,
            Target::Instructions => Screen::Instructions,
            Target::Play => Screen::Play(Box::new(PlayScreen::new(
                &self.config,
                self.map.collision_rects(),
            ))),
        };
        log::info!("screen: {} -> {}", self.screen.name(), next.name());
        self.screen = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_targets() {
        assert_eq!(Target::from(Transition::None), Target::Stay);
        assert_eq!(Target::from(Transition::Exit), Target::Quit);
        assert_eq!(Target::from(Transition::Play), Target::Play);
        assert_eq!(Target::from(Transition::MainMenu), Target::MainMenu);
        assert_eq!(Target::from(Transition::Instructions), Target::Instructions);
    }
}
