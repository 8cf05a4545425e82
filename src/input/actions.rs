//! Game action definitions
//!
//! Keyboard layout: WASD to move, Space to sprint, J to attack, Escape to
//! quit. Gamepad: D-pad or left stick to move, B/East to sprint, RB or
//! X/West to attack, Start to quit.

use macroquad::prelude::KeyCode;

/// Everything the player can ask for during play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    /// Double speed while held (costs stamina)
    Sprint,
    /// Melee swing (edge-triggered)
    Attack,
    /// Leave the current screen
    Escape,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
        Action::Sprint,
        Action::Attack,
        Action::Escape,
    ];

    /// Keyboard binding
    pub fn key(self) -> KeyCode {
        match self {
            Action::MoveLeft => KeyCode::A,
            Action::MoveRight => KeyCode::D,
            Action::MoveUp => KeyCode::W,
            Action::MoveDown => KeyCode::S,
            Action::Sprint => KeyCode::Space,
            Action::Attack => KeyCode::J,
            Action::Escape => KeyCode::Escape,
        }
    }

    /// Label for the instructions screen
    pub fn label(self) -> &'static str {
        match self {
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::Sprint => "Sprint (hold, uses stamina)",
            Action::Attack => "Attack",
            Action::Escape => "Quit",
        }
    }

    /// Key name for the instructions screen
    pub fn key_name(self) -> &'static str {
        match self {
            Action::MoveLeft => "A",
            Action::MoveRight => "D",
            Action::MoveUp => "W",
            Action::MoveDown => "S",
            Action::Sprint => "Space",
            Action::Attack => "J",
            Action::Escape => "Esc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bindings_are_unique() {
        let keys: HashSet<_> = Action::ALL.iter().map(|a| format!("{:?}", a.key())).collect();
        assert_eq!(keys.len(), Action::ALL.len());
    }
}
