//! Game settings and tuning
//!
//! Loaded from a JSON file (path in `BLOCK_BREAKER_SETTINGS`), falling back to
//! the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming an optional settings file
pub const SETTINGS_ENV: &str = "BLOCK_BREAKER_SETTINGS";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,
    /// Frame rate of the fixed-rate loop
    pub fps: u32,

    // === Ball / paddle ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub max_lives: u32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,

    // === Blocks ===
    pub block_rows: u32,
    pub block_cols: u32,
    /// Every block is plain (no concrete or iron blocks)
    pub classic_layout: bool,
    /// Seed for block layout and bonus colour cycling
    pub seed: u64,

    // === Collision ===
    pub collision_epsilon: f32,

    // === Bonus ===
    pub bonus_every_n_blocks: u32,
    pub bonus_width_increment: f32,
    pub bonus_duration_secs: f64,

    // === Audio ===
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: FPS,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            max_lives: MAX_LIVES,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            block_rows: BLOCK_ROWS,
            block_cols: BLOCK_COLS,
            classic_layout: false,
            seed: 0x5eed,

            collision_epsilon: COLLISION_EPSILON,

            bonus_every_n_blocks: N_BLOCKS_FOR_GET_INCR_PLATFORM,
            bonus_width_increment: PADDLE_WIDTH_INCREMENT,
            bonus_duration_secs: BONUS_DURATION_SECS,

            muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Load settings from the file named by `BLOCK_BREAKER_SETTINGS`, if set
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Frame duration in seconds
    pub fn frame_secs(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Effective sound effect volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Most block columns that fit across the window
    pub fn max_block_cols(&self) -> u32 {
        let cols = ((self.window_width + BLOCK_GAP) / (BLOCK_WIDTH + BLOCK_GAP)).floor();
        (cols as u32).max(1)
    }

    /// Most block rows that leave room for the ball above the paddle
    pub fn max_block_rows(&self) -> u32 {
        let space = self.window_height * PADDLE_Y_COEFF - BLOCK_TOP_OFFSET - 12.0 * self.ball_radius;
        let rows = ((space + BLOCK_GAP) / (BLOCK_HEIGHT + BLOCK_GAP)).floor();
        (rows.max(0.0) as u32).max(1)
    }

    /// Clamp values that would break the simulation back into range
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !is_positive(self.window_width) || !is_positive(self.window_height) {
            self.window_width = defaults.window_width;
            self.window_height = defaults.window_height;
        }
        if self.fps == 0 {
            self.fps = defaults.fps;
        }
        self.ball_radius = positive_or(self.ball_radius, defaults.ball_radius);
        self.ball_speed = positive_or(self.ball_speed, defaults.ball_speed);
        self.paddle_speed = positive_or(self.paddle_speed, defaults.paddle_speed);
        if !is_positive(self.paddle_width) || self.paddle_width > self.window_width {
            self.paddle_width = defaults.paddle_width.min(self.window_width);
        }
        self.paddle_height = positive_or(self.paddle_height, defaults.paddle_height);
        self.block_rows = self.block_rows.clamp(1, self.max_block_rows());
        self.block_cols = self.block_cols.clamp(1, self.max_block_cols());
        if self.bonus_every_n_blocks == 0 {
            self.bonus_every_n_blocks = defaults.bonus_every_n_blocks;
        }
        self.collision_epsilon = positive_or(self.collision_epsilon, defaults.collision_epsilon);
        // Widened paddle must still fit in the window
        self.bonus_width_increment = self
            .bonus_width_increment
            .clamp(0.0, self.window_width - self.paddle_width);
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }
}

#[inline]
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[inline]
fn positive_or(value: f32, default: f32) -> f32 {
    if is_positive(value) { value } else { default }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = Settings::default();
        assert_eq!(s.bonus_every_n_blocks, 20);
        assert_eq!(s.block_rows * s.block_cols, 180);
        assert_eq!(s.frame_secs(), 1.0 / 60.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "max_lives": 5, "muted": true }"#).unwrap();
        assert_eq!(s.max_lives, 5);
        assert!(s.muted);
        assert_eq!(s.paddle_width, PADDLE_WIDTH);
        assert_eq!(s.effective_volume(), 0.0);
    }

    #[test]
    fn test_invalid_values_are_sanitized() {
        let s = Settings::from_json(r#"{ "fps": 0, "master_volume": 4.0, "bonus_every_n_blocks": 0 }"#)
            .unwrap();
        assert_eq!(s.fps, FPS);
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.bonus_every_n_blocks, N_BLOCKS_FOR_GET_INCR_PLATFORM);
    }

    #[test]
    fn test_oversized_grid_is_clamped_to_window() {
        let s = Settings::from_json(r#"{ "block_rows": 100000, "block_cols": 100000 }"#).unwrap();
        assert_eq!(s.block_cols, s.max_block_cols());
        assert_eq!(s.block_rows, s.max_block_rows());
        assert_eq!(s.block_cols, 15);

        let blocks = crate::sim::generate_blocks(&s);
        assert_eq!(blocks.len(), (s.block_rows * s.block_cols) as usize);
        let paddle_top = s.window_height * PADDLE_Y_COEFF;
        assert!(blocks.iter().all(|b| b.rect.right() <= s.window_width));
        assert!(blocks.iter().all(|b| b.rect.bottom() < paddle_top));
    }

    #[test]
    fn test_default_grid_is_within_bounds() {
        let s = Settings::default();
        assert!(s.block_rows <= s.max_block_rows());
        assert!(s.block_cols <= s.max_block_cols());
    }

    #[test]
    fn test_non_positive_speeds_fall_back() {
        let s = Settings::from_json(
            r#"{ "ball_speed": -5.0, "paddle_speed": 0.0, "block_rows": 0, "bonus_width_increment": 5000.0 }"#,
        )
        .unwrap();
        assert_eq!(s.ball_speed, BALL_SPEED);
        assert_eq!(s.paddle_speed, PADDLE_SPEED);
        assert_eq!(s.block_rows, 1);
        assert_eq!(s.bonus_width_increment, s.window_width - s.paddle_width);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_from_missing_file_falls_back() {
        let s = Settings::load_from(Path::new("/nonexistent/block-breaker.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            seed: 42,
            ..Settings::default()
        };
        let json = s.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }
}
