//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad (gilrs) input once per frame and
//! folds both into the plain `InputSnapshot` the session consumes.

use macroquad::prelude::*;
use crate::game::InputSnapshot;
use super::gamepad::{button, Gamepad};
use super::Action;

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
    /// Stick magnitude needed to count as a direction press
    pub stick_threshold: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            stick_threshold: 0.5,
        }
    }

    /// Call once per frame before reading actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    /// Action is held this frame
    pub fn action_down(&self, action: Action) -> bool {
        is_key_down(action.key()) || self.gamepad_down(action)
    }

    /// Action went down this frame
    pub fn action_pressed(&self, action: Action) -> bool {
        is_key_pressed(action.key()) || self.gamepad_pressed(action)
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let gp = &self.gamepad;
        let (left, right, up, down) = stick_directions(gp.left_stick(), self.stick_threshold);
        match action {
            Action::MoveLeft => left || gp.is_button_down(button::DPAD_LEFT),
            Action::MoveRight => right || gp.is_button_down(button::DPAD_RIGHT),
            Action::MoveUp => up || gp.is_button_down(button::DPAD_UP),
            Action::MoveDown => down || gp.is_button_down(button::DPAD_DOWN),
            Action::Sprint => gp.is_button_down(button::B),
            Action::Attack => gp.is_button_down(button::RB) || gp.is_button_down(button::X),
            Action::Escape => gp.is_button_down(button::START),
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        let gp = &self.gamepad;
        match action {
            Action::Attack => gp.is_button_pressed(button::RB) || gp.is_button_pressed(button::X),
            Action::Escape => gp.is_button_pressed(button::START),
            _ => false,
        }
    }

    /// This frame's key state for the session
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.action_down(Action::MoveLeft),
            right: self.action_down(Action::MoveRight),
            up: self.action_down(Action::MoveUp),
            down: self.action_down(Action::MoveDown),
            sprint: self.action_down(Action::Sprint),
            attack_pressed: self.action_pressed(Action::Attack),
            escape: self.action_pressed(Action::Escape),
        }
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Digital (left, right, up, down) from an analog stick (y-up)
pub fn stick_directions(stick: Vec2, threshold: f32) -> (bool, bool, bool, bool) {
    (
        stick.x <= -threshold,
        stick.x >= threshold,
        stick.y >= threshold,
        stick.y <= -threshold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stick_directions() {
        assert_eq!(stick_directions(Vec2::ZERO, 0.5), (false, false, false, false));
        assert_eq!(stick_directions(vec2(-0.9, 0.1), 0.5), (true, false, false, false));
        assert_eq!(stick_directions(vec2(0.6, 0.7), 0.5), (false, true, true, false));
        assert_eq!(stick_directions(vec2(0.0, -0.5), 0.5), (false, false, false, true));
    }
}
