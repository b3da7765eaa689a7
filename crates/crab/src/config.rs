//! Game configuration.
//!
//! [`GameConfig`] holds every tunable of the game: canvas size, the sand band
//! the crab may walk on, movement speed, tick rate, and where the score label
//! sits. The defaults reproduce the classic beach layout. A `crab.json` file in
//! the asset directory may override any subset of the fields:
//!
//! ```json
//! { "crab_step": 3, "crab_start": [100, 500] }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CrabError;
use crate::math::IVec2;

/// File name looked up inside the asset directory.
pub const CONFIG_FILE: &str = "crab.json";

/// Environment variable that overrides the asset directory.
pub const ASSETS_ENV: &str = "CRAB_ASSETS";

/// The background image is half the canvas size and drawn doubled.
const BACKGROUND_SCALE: i32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Logical canvas width in pixels.
    pub screen_width: i32,
    /// Logical canvas height in pixels.
    pub screen_height: i32,
    /// Uniform scale applied to the background image.
    pub background_scale: i32,
    /// Top of the walkable sand band (inclusive).
    pub walkable_min_y: i32,
    /// Bottom of the walkable sand band (exclusive).
    pub walkable_max_y: i32,
    pub crab_start: IVec2,
    /// Pixels moved per tick while a direction is held.
    pub crab_step: i32,
    pub ticks_per_second: u32,
    /// Upper bound on ticks simulated in a single rendered frame.
    pub max_ticks_per_frame: u32,
    /// Top-left of the score label.
    pub score_position: IVec2,
    pub score_font_size: f32,
    /// Directory containing the sprites and font.
    pub assets_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1000,
            screen_height: 800,
            background_scale: BACKGROUND_SCALE,
            walkable_min_y: 180 * BACKGROUND_SCALE,
            walkable_max_y: 320 * BACKGROUND_SCALE,
            crab_start: IVec2::new(450, 450),
            crab_step: 2,
            ticks_per_second: 60,
            max_ticks_per_frame: 5,
            score_position: IVec2::new(10, 740),
            score_font_size: 32.0,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl GameConfig {
    /// Read a config from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, CrabError> {
        let text = std::fs::read_to_string(path).map_err(|e| CrabError::config(path, e))?;
        let config: GameConfig =
            serde_json::from_str(&text).map_err(|e| CrabError::config(path, e))?;
        config.validate().map_err(|reason| CrabError::config(path, reason))?;
        Ok(config)
    }

    /// Resolve the config the way the binary does.
    ///
    /// The asset directory is `$CRAB_ASSETS` if set, otherwise `./assets`.
    /// If that directory holds a `crab.json` it is loaded, otherwise the
    /// defaults are used. The resolved asset directory always wins over the
    /// one written in the file.
    pub fn from_env() -> Result<Self, CrabError> {
        let assets_dir = std::env::var_os(ASSETS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| GameConfig::default().assets_dir);
        Self::from_assets_dir(assets_dir)
    }

    pub fn from_assets_dir(assets_dir: PathBuf) -> Result<Self, CrabError> {
        let path = assets_dir.join(CONFIG_FILE);
        let mut config = if path.is_file() {
            log::info!("Loading config from {}", path.display());
            Self::load(&path)?
        } else {
            GameConfig::default()
        };
        config.assets_dir = assets_dir;
        Ok(config)
    }

    /// Check that the geometry is self-consistent.
    pub fn validate(&self) -> Result<(), String> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(format!(
                "canvas must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.background_scale <= 0 {
            return Err(format!("background_scale must be positive, got {}", self.background_scale));
        }
        if self.walkable_min_y < 0
            || self.walkable_min_y >= self.walkable_max_y
            || self.walkable_max_y > self.screen_height
        {
            return Err(format!(
                "walkable band [{}, {}) must lie inside the canvas height {}",
                self.walkable_min_y, self.walkable_max_y, self.screen_height
            ));
        }
        if self.crab_step <= 0 || self.crab_step > self.screen_width {
            return Err(format!(
                "crab_step must be in 1..={}, got {}",
                self.screen_width, self.crab_step
            ));
        }
        if self.ticks_per_second == 0 {
            return Err("ticks_per_second must be positive".into());
        }
        if self.max_ticks_per_frame == 0 {
            return Err("max_ticks_per_frame must be positive".into());
        }
        if !self.score_font_size.is_finite() || self.score_font_size <= 0.0 {
            return Err(format!(
                "score_font_size must be a positive size, got {}",
                self.score_font_size
            ));
        }
        Ok(())
    }

    pub fn screen_size(&self) -> IVec2 {
        IVec2::new(self.screen_width, self.screen_height)
    }
}
