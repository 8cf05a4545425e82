//! Gamepad support
//!
//! Native: gilrs. WASM: no gamepad (keyboard only).
//!
//! Buttons are folded into a bitmask once per `poll()`; edge detection
//! compares against the previous poll's mask.

use macroquad::prelude::Vec2;

/// Button bits (Xbox naming)
pub mod button {
    pub const A: u32 = 0;           // South
    pub const B: u32 = 1;           // East
    pub const X: u32 = 2;           // West
    pub const Y: u32 = 3;           // North
    pub const LB: u32 = 4;
    pub const RB: u32 = 5;
    pub const SELECT: u32 = 8;
    pub const START: u32 = 9;
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

/// Button state across two polls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonMask {
    current: u32,
    previous: u32,
}

impl ButtonMask {
    /// Record this frame's buttons
    pub fn update(&mut self, current: u32) {
        self.previous = self.current;
        self.current = current;
    }

    pub fn is_down(&self, button: u32) -> bool {
        self.current & (1 << button) != 0
    }

    /// Went down since the previous poll
    pub fn is_pressed(&self, button: u32) -> bool {
        self.is_down(button) && self.previous & (1 << button) == 0
    }
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        /// None when the platform backend failed to start
        gilrs: Option<Gilrs>,
        deadzone: f32,
        buttons: ButtonMask,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(g) => Some(g),
                Err(e) => {
                    log::warn!("gamepad support disabled: {}", e);
                    None
                }
            };
            Self { gilrs, deadzone: 0.15, buttons: ButtonMask::default() }
        }

        pub fn poll(&mut self) {
            let mask = match self.gilrs.as_mut() {
                Some(gilrs) => {
                    // Drain events so gilrs updates its cached state
                    while let Some(event) = gilrs.next_event() {
                        if let gilrs::EventType::Connected = event.event {
                            log::info!("gamepad connected: {}", gilrs.gamepad(event.id).name());
                        }
                    }
                    Self::button_mask(gilrs)
                }
                None => 0,
            };
            self.buttons.update(mask);
        }

        fn active(gilrs: &Gilrs) -> Option<gilrs::Gamepad<'_>> {
            gilrs.gamepads().next().map(|(_, gp)| gp)
        }

        fn button_mask(gilrs: &Gilrs) -> u32 {
            let Some(gp) = Self::active(gilrs) else { return 0 };
            let mut mask = 0u32;

            for (gilrs_button, bit) in [
                (GilrsButton::South, button::A),
                (GilrsButton::East, button::B),
                (GilrsButton::West, button::X),
                (GilrsButton::North, button::Y),
                (GilrsButton::LeftTrigger, button::LB),
                (GilrsButton::RightTrigger, button::RB),
                (GilrsButton::Select, button::SELECT),
                (GilrsButton::Start, button::START),
                (GilrsButton::DPadUp, button::DPAD_UP),
                (GilrsButton::DPadDown, button::DPAD_DOWN),
                (GilrsButton::DPadLeft, button::DPAD_LEFT),
                (GilrsButton::DPadRight, button::DPAD_RIGHT),
            ] {
                if gp.is_pressed(gilrs_button) {
                    mask |= 1 << bit;
                }
            }
            mask
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs.as_ref().is_some_and(|g| g.gamepads().next().is_some())
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            self.buttons.is_down(button)
        }

        pub fn is_button_pressed(&self, button: u32) -> bool {
            self.buttons.is_pressed(button)
        }

        /// Left stick, y-up
        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.gilrs.as_ref().and_then(Self::active) else { return Vec2::ZERO };
            apply_deadzone(gp.value(Axis::LeftStickX), gp.value(Axis::LeftStickY), self.deadzone)
        }
    }
}

// ============================================================================
// WASM Implementation (no gamepad)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Gamepad
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Apply radial deadzone with linear rescaling
pub fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

pub use platform::Gamepad;
