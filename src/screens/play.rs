//! Play screen
//!
//! Runs one session: tick, log the tick's events, draw. Once the death
//! summary has been up long enough it asks for the main menu.

use macroquad::prelude::*;
use crate::config::GameConfig;
use crate::game::{Aabb, InputSnapshot, Session, SessionStatus};
use crate::render::{draw_hud, draw_summary, draw_world, Assets, DrawScope};
use super::Transition;

pub struct PlayScreen {
    pub session: Session,
    status: SessionStatus,
}

impl PlayScreen {
    pub fn new(config: &GameConfig, obstacles: Vec<Aabb>) -> Self {
        Self::from_session(Session::new(config, obstacles))
    }

    pub fn from_session(session: Session) -> Self {
        Self { session, status: SessionStatus::Running }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Advance the session one frame
    pub fn update(&mut self, input: &InputSnapshot, dt: f32) -> Transition {
        self.status = self.session.tick(input, dt);
        self.session.events.flush_to_log();

        match self.status {
            SessionStatus::Finished => Transition::MainMenu,
            SessionStatus::Running | SessionStatus::Dead => Transition::None,
        }
    }

    pub fn draw(&self, assets: Option<&Assets>) {
        clear_background(BLACK);
        let (w, h) = self.session.field_size();
        let scope = DrawScope::begin(w, h);

        if self.session.player.alive {
            draw_world(&scope, &self.session, assets);
            draw_hud(&self.session, assets);
        } else {
            draw_summary(&self.session, assets);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::spawn::Spawner;

    fn screen() -> PlayScreen {
        let config = GameConfig::default();
        let spawner = Spawner::seeded(
            1,
            config.window.width,
            config.window.height,
            config.ghosts.clone(),
            config.coins.clone(),
        );
        PlayScreen::from_session(Session::with_spawner(&config, Vec::new(), spawner))
    }

    #[test]
    fn test_quit_returns_to_menu_after_summary() {
        let mut play = screen();
        let quit = InputSnapshot { escape: true, ..Default::default() };
        assert_eq!(play.update(&quit, 1.0 / 60.0), Transition::None);
        assert_eq!(play.status(), SessionStatus::Dead);
        // Tick events were drained into the log
        assert!(play.session.events.death.is_empty());

        let idle = InputSnapshot::default();
        let mut frames = 0;
        while play.update(&idle, 1.0 / 60.0) == Transition::None {
            frames += 1;
            assert!(frames < 1000);
        }
        assert_eq!(frames, 299);
        assert_eq!(play.status(), SessionStatus::Finished);
    }
}
