//! Player weapon
//!
//! Only the bare-handed melee swing (`WeaponType::None`) exists. The weapon
//! owns the swing timing: it runs the six-frame attack animation and tells
//! the caller when the last frame has been reached, which ends the attack.

use serde::{Serialize, Deserialize};
use super::components::{Player, PlayerIntent};

/// Frames in the melee swing animation
pub const SWING_FRAMES: usize = 6;

/// Seconds per swing frame
pub const SWING_FRAME_DURATION: f32 = 1.0 / 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponType {
    /// Melee swing
    #[default]
    None,
    Fireball,
    Slash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwingProgress {
    /// Not swinging (or a weapon type without a swing)
    Idle,
    /// Showing this frame of the swing
    Frame(usize),
    /// The last frame was reached this update
    Finished,
}

#[derive(Debug, Clone)]
pub struct Weapon {
    pub weapon_type: WeaponType,
    /// Seconds into the current swing
    elapsed: f32,
}

impl Weapon {
    pub fn new(weapon_type: WeaponType) -> Self {
        Self { weapon_type, elapsed: 0.0 }
    }

    /// Current swing frame (non-looping, holds on the last frame)
    pub fn frame(&self) -> usize {
        ((self.elapsed / SWING_FRAME_DURATION) as usize).min(SWING_FRAMES - 1)
    }

    /// Restart the swing timer
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Advance the swing by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> SwingProgress {
        if self.weapon_type != WeaponType::None {
            return SwingProgress::Idle;
        }
        self.elapsed += dt;
        let frame = self.frame();
        if frame == SWING_FRAMES - 1 {
            self.elapsed = 0.0;
            SwingProgress::Finished
        } else {
            SwingProgress::Frame(frame)
        }
    }

    /// Run the swing for the player holding this weapon.
    ///
    /// Does nothing unless the player is attacking; ends the attack when the
    /// swing completes.
    pub fn update(player: &mut Player, dt: f32) -> SwingProgress {
        if !player.is_attacking() {
            player.weapon.reset();
            return SwingProgress::Idle;
        }
        let progress = player.weapon.advance(dt);
        if progress == SwingProgress::Finished {
            player.intent = PlayerIntent::Idle;
        }
        progress
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Self::new(WeaponType::None)
    }
}
