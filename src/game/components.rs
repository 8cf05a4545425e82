//! Game Components
//!
//! Plain data for the player, ghosts and coins. Behavior lives in the
//! systems (collision, combat, intent, chase) that the session runs.

use serde::{Serialize, Deserialize};
use super::aabb::Aabb;
use super::weapon::{Weapon, WeaponType};

// =============================================================================
// Shared
// =============================================================================

/// Facing direction for the player and for ghosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Velocity in world units per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

// =============================================================================
// Player
// =============================================================================

/// What the player is doing this frame.
///
/// Exactly one state drives both movement and animation. A swing can only be
/// left through a movement key, an obstacle hit, or the weapon finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerIntent {
    #[default]
    Idle,
    Moving { fast: bool },
    Attacking,
}

impl PlayerIntent {
    pub fn is_attacking(&self) -> bool {
        matches!(self, PlayerIntent::Attacking)
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, PlayerIntent::Moving { .. })
    }

    pub fn is_moving_fast(&self) -> bool {
        matches!(self, PlayerIntent::Moving { fast: true })
    }
}

/// The main character
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: Velocity,
    pub direction: Direction,
    pub intent: PlayerIntent,
    pub weapon: Weapon,

    pub health: i32,
    pub max_health: i32,
    pub stamina: i32,
    pub max_stamina: i32,
    pub kills: u32,
    pub coins: u32,
    pub alive: bool,

    /// Overlap flags, recomputed every frame
    pub overlaps_enemies: bool,
    pub overlaps_obstacles: bool,
    pub overlaps_coins: bool,

    /// Seconds since the last contact hit
    pub time_since_attacked: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, width: f32, height: f32, max_health: i32, max_stamina: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            velocity: Velocity::ZERO,
            direction: Direction::Down,
            intent: PlayerIntent::Idle,
            weapon: Weapon::new(WeaponType::None),
            health: max_health,
            max_health,
            stamina: max_stamina,
            max_stamina,
            kills: 0,
            coins: 0,
            alive: true,
            overlaps_enemies: false,
            overlaps_obstacles: false,
            overlaps_coins: false,
            time_since_attacked: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_attacking(&self) -> bool {
        self.intent.is_attacking()
    }

    /// Set health, clamped to [0, max]
    pub fn set_health(&mut self, health: i32) {
        self.health = health.clamp(0, self.max_health);
    }

    /// Set stamina, clamped to [0, max]
    pub fn set_stamina(&mut self, stamina: i32) {
        self.stamina = stamina.clamp(0, self.max_stamina);
    }

    /// Health as a 0.0-1.0 fraction (for the HUD bar)
    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health.max(1) as f32
    }

    /// Stamina as a 0.0-1.0 fraction (for the HUD bar)
    pub fn stamina_fraction(&self) -> f32 {
        self.stamina as f32 / self.max_stamina.max(1) as f32
    }

    /// Advance position by velocity
    pub fn integrate(&mut self, dt: f32) {
        self.x += self.velocity.x * dt;
        self.y += self.velocity.y * dt;
    }
}

// =============================================================================
// Enemies
// =============================================================================

/// A ghost: chases the player, hurts on contact
#[derive(Debug, Clone)]
pub struct Ghost {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: Velocity,
    pub direction: Direction,
    pub damage: i32,
    pub base_speed: f32,
    pub alive: bool,
    pub overlaps_obstacles: bool,
}

impl Ghost {
    pub fn new(x: f32, y: f32, width: f32, height: f32, base_speed: f32, damage: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            velocity: Velocity::ZERO,
            direction: Direction::Down,
            damage,
            base_speed,
            alive: true,
            overlaps_obstacles: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    pub fn integrate(&mut self, dt: f32) {
        self.x += self.velocity.x * dt;
        self.y += self.velocity.y * dt;
    }
}

// =============================================================================
// Pickups
// =============================================================================

/// A coin lying on the ground
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_defaults() {
        let p = Player::new(10.0, 20.0, 64.0, 64.0, 100, 400);
        assert_eq!(p.health, 100);
        assert_eq!(p.stamina, 400);
        assert_eq!(p.direction, Direction::Down);
        assert_eq!(p.intent, PlayerIntent::Idle);
        assert!(p.alive);
        assert_eq!(p.bounds(), Aabb::new(10.0, 20.0, 64.0, 64.0));
    }

    #[test]
    fn test_health_and_stamina_clamp() {
        let mut p = Player::new(0.0, 0.0, 1.0, 1.0, 100, 400);
        p.set_health(150);
        assert_eq!(p.health, 100);
        p.set_health(-5);
        assert_eq!(p.health, 0);
        p.set_stamina(1000);
        assert_eq!(p.stamina, 400);
        p.set_stamina(-1);
        assert_eq!(p.stamina, 0);
    }

    #[test]
    fn test_intent_queries() {
        assert!(PlayerIntent::Attacking.is_attacking());
        assert!(PlayerIntent::Moving { fast: false }.is_moving());
        assert!(!PlayerIntent::Moving { fast: false }.is_moving_fast());
        assert!(PlayerIntent::Moving { fast: true }.is_moving_fast());
        assert!(!PlayerIntent::Idle.is_moving());
    }

    #[test]
    fn test_integrate() {
        let mut g = Ghost::new(0.0, 0.0, 10.0, 10.0, 70.0, 10);
        g.velocity = Velocity::new(70.0, 0.0);
        g.integrate(0.5);
        assert!((g.x - 35.0).abs() < 0.001);
        assert_eq!(g.y, 0.0);
    }
}
