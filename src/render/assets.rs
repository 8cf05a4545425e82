//! Sprite and music loading
//!
//! Assets are optional. Without an `assets` section in the config the game
//! draws flat shapes; with one, every listed file must load or start-up
//! fails with an `AssetError`.

use std::path::Path;
use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};
use macroquad::prelude::*;
use thiserror::Error;
use crate::config::{AssetConfig, GameConfig, Size};
use super::animation::{SheetLayout, GHOST_FLOAT, PLAYER_ATTACK, PLAYER_WALK};

/// Coins are drawn at this fraction of their image size
const COIN_SCALE: f32 = 1.0 / 8.0;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: String,
        #[source]
        source: macroquad::Error,
    },

    #[error("failed to load sound {path}: {source}")]
    Sound {
        path: String,
        #[source]
        source: macroquad::Error,
    },
}

/// A texture cut into a regular grid
pub struct SpriteSheet {
    pub texture: Texture2D,
    pub layout: SheetLayout,
}

impl SpriteSheet {
    /// Size of one frame in pixels
    pub fn frame_size(&self) -> (f32, f32) {
        self.layout.frame_size(self.texture.width(), self.texture.height())
    }

    /// Source rect of a frame within the texture
    pub fn frame_rect(&self, row: usize, col: usize) -> Rect {
        let (w, h) = self.frame_size();
        Rect::new(col as f32 * w, row as f32 * h, w, h)
    }

    /// Draw one frame stretched over `dest`
    pub fn draw_frame(&self, row: usize, col: usize, dest: Rect) {
        draw_texture_ex(
            &self.texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                source: Some(self.frame_rect(row, col)),
                ..Default::default()
            },
        );
    }
}

/// Everything drawn or played during a session
pub struct Assets {
    pub player_walk: SpriteSheet,
    pub player_attack: SpriteSheet,
    pub ghost: SpriteSheet,
    /// Faded ghost shown while passing through walls
    pub ghost_light: Option<SpriteSheet>,
    pub coin: Texture2D,
    pub music: Option<Sound>,
}

async fn texture(path: &Path) -> Result<Texture2D, AssetError> {
    let path = path.to_string_lossy().into_owned();
    let tex = load_texture(&path)
        .await
        .map_err(|source| AssetError::Texture { path: path.clone(), source })?;
    tex.set_filter(FilterMode::Nearest);
    log::debug!("loaded texture {} ({}x{})", path, tex.width(), tex.height());
    Ok(tex)
}

async fn sheet(path: &Path, layout: SheetLayout) -> Result<SpriteSheet, AssetError> {
    Ok(SpriteSheet { texture: texture(path).await?, layout })
}

impl Assets {
    pub async fn load(config: &AssetConfig) -> Result<Self, AssetError> {
        let player_walk = sheet(&config.player_sheet, PLAYER_WALK).await?;
        let player_attack = sheet(&config.attack_sheet, PLAYER_ATTACK).await?;
        let ghost = sheet(&config.ghost_sheet, GHOST_FLOAT).await?;
        let ghost_light = match &config.ghost_light_sheet {
            Some(path) => Some(sheet(path, GHOST_FLOAT).await?),
            None => None,
        };
        let coin = texture(&config.coin).await?;

        let music = match &config.music {
            Some(path) => {
                let path = path.to_string_lossy().into_owned();
                let sound = load_sound(&path)
                    .await
                    .map_err(|source| AssetError::Sound { path: path.clone(), source })?;
                Some(sound)
            }
            None => None,
        };

        log::info!("assets loaded");
        Ok(Self { player_walk, player_attack, ghost, ghost_light, coin, music })
    }

    /// Make entity hitboxes match the art
    pub fn apply_sizes(&self, config: &mut GameConfig) {
        let (w, h) = self.player_walk.frame_size();
        config.player.size = Size::new(w, h);
        let (w, h) = self.ghost.frame_size();
        config.ghosts.size = Size::new(w, h);
        config.coins.size = Size::new(self.coin.width() * COIN_SCALE, self.coin.height() * COIN_SCALE);
    }

    /// Start the background track, looping
    pub fn start_music(&self) {
        if let Some(music) = &self.music {
            play_sound(music, PlaySoundParams { looped: true, volume: 1.0 });
        }
    }
}
