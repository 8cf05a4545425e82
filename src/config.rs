//! Game configuration
//!
//! Tunables live in a RON file so balancing does not need a rebuild.
//! Every section has `#[serde(default)]`, so a config file only has to name
//! the values it changes:
//!
//! ```ron
//! (
//!     ghosts: (initial_count: 9),
//!     rules: (death_screen_frames: 180),
//! )
//! ```
//!
//! Lookup order: `$DUNGEON_DOOM_CONFIG`, then `<config dir>/dungeon-doom/config.ron`,
//! then the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "DUNGEON_DOOM_CONFIG";

/// Upper bound for initial entity counts (keeps the brute-force scans small)
pub const MAX_INITIAL_COUNT: usize = 64;

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    fn is_positive(&self) -> bool {
        self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Play field width (world units, one per pixel at 1:1 scale)
    pub width: f32,
    /// Play field height
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Dungeon Doom".to_string(),
            width: 1280.0,
            height: 960.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Units per second along the active axis
    pub base_speed: f32,
    /// Applied to base speed while sprinting
    pub sprint_multiplier: f32,
    pub max_health: i32,
    pub max_stamina: i32,
    /// Bounding box (one walk frame)
    pub size: Size,
    /// Spawn offset from the play field center
    pub spawn_offset: (f32, f32),
    /// Clamp insets: left, bottom, right, top
    pub bounds_inset: (f32, f32, f32, f32),
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            base_speed: 100.0,
            sprint_multiplier: 2.0,
            max_health: 100,
            max_stamina: 400,
            size: Size::new(64.0, 64.0),
            spawn_offset: (-14.0, -90.0),
            bounds_inset: (20.0, 30.0, 80.0, 60.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostConfig {
    pub initial_count: usize,
    pub initial_speed: f32,
    /// Replacement ghosts never exceed this speed
    pub speed_cap: f32,
    pub damage: i32,
    pub size: Size,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            initial_count: 7,
            initial_speed: 70.0,
            speed_cap: 100.0,
            damage: 10,
            size: Size::new(48.0, 48.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinConfig {
    pub initial_count: usize,
    /// Frames between periodic coin spawns
    pub spawn_interval_frames: u32,
    /// Inset from the play field edges for initial coins
    pub initial_margin: f32,
    /// Inset for periodically spawned coins
    pub spawn_margin: f32,
    pub size: Size,
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            initial_count: 10,
            spawn_interval_frames: 300,
            initial_margin: 30.0,
            spawn_margin: 15.0,
            size: Size::new(32.0, 32.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum seconds between two contact hits
    pub damage_interval_secs: f32,
    /// Seconds without a hit before health regenerates
    pub regen_delay_secs: f32,
    /// Regen tick modulus is `max(1, regen_base - floor(time_since_attacked))`
    pub regen_base: i32,
    /// Frames after the last sprint before stamina refills
    pub stamina_regen_delay_frames: u32,
    /// Frames the end-of-session summary stays up
    pub death_screen_frames: u32,
    /// Units a blocked player is pushed back per frame
    pub obstacle_pushback: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            damage_interval_secs: 1.0,
            regen_delay_secs: 3.0,
            regen_base: 20,
            stamina_regen_delay_frames: 100,
            death_screen_frames: 300,
            obstacle_pushback: 1.0,
        }
    }
}

/// Optional art and music. When absent the game draws flat shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Walk cycle, 9 columns x 4 rows (up, left, down, right)
    pub player_sheet: PathBuf,
    /// Melee swing, 6 columns x 4 rows (up, left, down, right)
    pub attack_sheet: PathBuf,
    /// Ghost walk, 12 columns x 8 rows (down, left, right, up in the first 4 rows)
    pub ghost_sheet: PathBuf,
    /// Same layout as `ghost_sheet`, used while the ghost is inside a wall
    pub ghost_light_sheet: Option<PathBuf>,
    pub coin: PathBuf,
    pub music: Option<PathBuf>,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub ghosts: GhostConfig,
    pub coins: CoinConfig,
    pub rules: RulesConfig,
    /// RON map file; the built-in arena is used when unset
    pub map: Option<PathBuf>,
    pub assets: Option<AssetConfig>,
}

impl GameConfig {
    /// Parse and validate a config from a RON string
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Write the config as pretty RON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        let text = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Resolve and load the active config.
    ///
    /// Returns the config plus the file it came from (None = defaults).
    pub fn discover() -> Result<(Self, Option<PathBuf>), ConfigError> {
        match config_path() {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Reject values the game loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if !(w.width.is_finite() && w.height.is_finite() && w.width > 0.0 && w.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "play field must have a positive size, got {}x{}",
                w.width, w.height
            )));
        }

        for (name, size) in [
            ("player.size", self.player.size),
            ("ghosts.size", self.ghosts.size),
            ("coins.size", self.coins.size),
        ] {
            if !size.is_positive() {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}x{}",
                    name, size.w, size.h
                )));
            }
        }

        if self.player.max_health <= 0 || self.player.max_stamina < 0 {
            return Err(ConfigError::Invalid(
                "player.max_health must be positive and max_stamina non-negative".to_string(),
            ));
        }

        if self.ghosts.initial_count > MAX_INITIAL_COUNT || self.coins.initial_count > MAX_INITIAL_COUNT {
            return Err(ConfigError::Invalid(format!(
                "initial counts are limited to {}",
                MAX_INITIAL_COUNT
            )));
        }

        if self.coins.spawn_interval_frames == 0 {
            return Err(ConfigError::Invalid("coins.spawn_interval_frames must be at least 1".to_string()));
        }

        for (name, margin) in [
            ("coins.initial_margin", self.coins.initial_margin),
            ("coins.spawn_margin", self.coins.spawn_margin),
        ] {
            if !(0.0..=w.width.min(w.height) / 2.0).contains(&margin) {
                return Err(ConfigError::Invalid(format!("{} out of range: {}", name, margin)));
            }
        }

        Ok(())
    }
}

/// Locate the config file, if any
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    user_config_path().filter(|p| p.exists())
}

#[cfg(not(target_arch = "wasm32"))]
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dungeon-doom").join("config.ron"))
}

#[cfg(target_arch = "wasm32")]
fn user_config_path() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = GameConfig::from_ron_str("(ghosts: (initial_count: 3))").unwrap();
        assert_eq!(config.ghosts.initial_count, 3);
        assert_eq!(config.ghosts.initial_speed, 70.0);
        assert_eq!(config.coins.spawn_interval_frames, 300);
        assert_eq!(config.window.width, 1280.0);
    }

    #[test]
    fn test_rejects_bad_size() {
        let err = GameConfig::from_ron_str("(player: (size: (w: 0.0, h: 10.0)))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_too_many_ghosts() {
        let err = GameConfig::from_ron_str("(ghosts: (initial_count: 500))").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron_str("(ghosts: oops)").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");

        let mut config = GameConfig::default();
        config.rules.death_screen_frames = 120;
        config.map = Some(PathBuf::from("maps/level1.ron"));
        config.save(&path).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load(dir.path().join("nope.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
