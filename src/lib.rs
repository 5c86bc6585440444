//! Block Breaker - a classic paddle-and-blocks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, bonus, game session)
//! - `renderer`: Frame snapshots handed to a drawing backend
//! - `platform`: Input folding, clocks and frame pacing
//! - `audio`: Sound effect triggers
//! - `settings`: Data-driven game tuning

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Frame rate of the fixed-rate loop
    pub const FPS: u32 = 60;

    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 1000.0;
    pub const WINDOW_HEIGHT: f32 = 700.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 5.0;
    pub const MAX_LIVES: u32 = 3;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 90.0;
    pub const PADDLE_HEIGHT: f32 = 7.0;
    pub const PADDLE_SPEED: f32 = 10.0;
    /// Paddle top edge as a fraction of window height
    pub const PADDLE_Y_COEFF: f32 = 0.9;

    /// Block grid
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_GAP: f32 = 6.0;
    pub const BLOCK_TOP_OFFSET: f32 = 10.0;
    pub const BLOCK_ROWS: u32 = 12;
    pub const BLOCK_COLS: u32 = 15;

    /// Overlap difference (pixels) under which a hit counts as a corner hit
    pub const COLLISION_EPSILON: f32 = 10.0;

    /// Blocks destroyed between paddle bonuses
    pub const N_BLOCKS_FOR_GET_INCR_PLATFORM: u32 = 20;
    /// Paddle widening while the bonus runs
    pub const PADDLE_WIDTH_INCREMENT: f32 = 60.0;
    /// Bonus duration (seconds)
    pub const BONUS_DURATION_SECS: f64 = 5.0;
    /// Colour changes per second while the bonus runs
    pub const BONUS_COLOR_STEPS_PER_SEC: f64 = 8.0;
}

/// Normalize a direction component to -1 or +1 (zero counts as positive)
#[inline]
pub fn sign_of(value: i32) -> i32 {
    if value < 0 { -1 } else { 1 }
}

/// RGB colour used by entities and draw instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const RED: Color = Color(255, 0, 0);
    pub const GREEN: Color = Color(0, 255, 0);
    pub const STEEL: Color = Color(90, 90, 110);

    /// Normalized RGBA for GPU upload
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            1.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_of() {
        assert_eq!(sign_of(-3), -1);
        assert_eq!(sign_of(0), 1);
        assert_eq!(sign_of(7), 1);
    }

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(Color::RED.to_rgba_f32(), [1.0, 0.0, 0.0, 1.0]);
    }
}
