//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Base Colors
// =============================================================================

/// Menu and summary background
pub const BG_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Dungeon floor behind the play field
pub const FLOOR_COLOR: Color = Color::new(0.16, 0.14, 0.13, 1.0);

/// Obstacles when no tile art is loaded
pub const OBSTACLE_COLOR: Color = Color::new(0.33, 0.31, 0.3, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.92, 0.92, 0.95, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.55, 0.55, 0.6, 1.0);

/// Title text
pub const TITLE_COLOR: Color = Color::new(0.85, 0.2, 0.15, 1.0);

// =============================================================================
// Buttons
// =============================================================================

pub const BUTTON_BG: Color = Color::new(0.18, 0.16, 0.16, 1.0);

/// Button under the mouse
pub const BUTTON_HOVER: Color = Color::new(0.45, 0.12, 0.1, 1.0);

pub const BUTTON_BORDER: Color = Color::new(0.6, 0.55, 0.5, 1.0);

// =============================================================================
// HUD
// =============================================================================

pub const HEALTH_COLOR: Color = Color::new(0.85, 0.1, 0.1, 1.0);

pub const STAMINA_COLOR: Color = Color::new(0.15, 0.3, 0.9, 1.0);

pub const BAR_OUTLINE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

// Sprite stand-ins (no assets configured)
pub const PLAYER_COLOR: Color = Color::new(0.3, 0.75, 0.35, 1.0);
pub const GHOST_COLOR: Color = Color::new(0.85, 0.85, 0.95, 0.9);
pub const GHOST_LIGHT_COLOR: Color = Color::new(0.85, 0.85, 0.95, 0.35);
pub const COIN_COLOR: Color = Color::new(1.0, 0.82, 0.1, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_TITLE: f32 = 72.0;

pub const FONT_SIZE_BUTTON: f32 = 40.0;

pub const FONT_SIZE_CONTENT: f32 = 28.0;

pub const FONT_SIZE_HUD: f32 = 24.0;
