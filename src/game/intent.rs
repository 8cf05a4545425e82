//! Input-to-intent mapping
//!
//! Converts one frame of discrete key state into the player's velocity,
//! facing and intent. First match wins: left, right, up, down, attack,
//! idle. There is no diagonal movement.

use super::components::{Direction, Player, PlayerIntent, Velocity};

/// Key state for one frame, as read from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Sprint modifier held
    pub sprint: bool,
    /// Attack key went down this frame (edge-triggered)
    pub attack_pressed: bool,
    /// Quit the session
    pub escape: bool,
}

impl InputSnapshot {
    /// First held movement direction, in precedence order
    pub fn movement(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Movement tuning handed in by the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveParams {
    pub base_speed: f32,
    pub sprint_multiplier: f32,
}

/// What the mapper did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntentOutcome {
    /// A sprint frame consumed stamina
    pub sprinted: bool,
    /// The player died or quit this frame
    pub ended: bool,
}

/// Unit vector for a facing direction (y-up)
pub fn direction_vector(direction: Direction) -> (f32, f32) {
    match direction {
        Direction::Left => (-1.0, 0.0),
        Direction::Right => (1.0, 0.0),
        Direction::Up => (0.0, 1.0),
        Direction::Down => (0.0, -1.0),
    }
}

/// Update the player's intent from this frame's input.
///
/// Must run after the obstacle scan: while the player overlaps an obstacle
/// every intent is suppressed.
pub fn apply_intent(player: &mut Player, input: &InputSnapshot, params: MoveParams) -> IntentOutcome {
    let mut outcome = IntentOutcome::default();

    if player.overlaps_obstacles {
        player.intent = PlayerIntent::Idle;
        player.velocity = Velocity::ZERO;
    } else if let Some(direction) = input.movement() {
        player.direction = direction;
        let fast = input.sprint && player.stamina > 0;
        let speed = if fast {
            player.set_stamina(player.stamina - 1);
            outcome.sprinted = true;
            params.base_speed * params.sprint_multiplier
        } else {
            params.base_speed
        };
        let (dx, dy) = direction_vector(direction);
        player.velocity = Velocity::new(dx * speed, dy * speed);
        player.intent = PlayerIntent::Moving { fast };
    } else if input.attack_pressed {
        player.intent = PlayerIntent::Attacking;
        player.weapon.reset();
        player.velocity = Velocity::ZERO;
    } else {
        // An unfinished swing carries on
        if !player.is_attacking() {
            player.intent = PlayerIntent::Idle;
        }
        player.velocity = Velocity::ZERO;
    }

    if player.health == 0 || input.escape {
        player.alive = false;
        outcome.ended = true;
    }

    outcome
}
