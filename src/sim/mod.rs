//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, time passed in explicitly
//! - Seeded RNG only
//! - Stable block iteration order
//! - No rendering or platform dependencies

pub mod bonus;
pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use bonus::{Bonus, BonusState, cycle_color};
pub use collision::{Wall, ball_fell, hits_paddle, reflect_walls, resolve};
pub use level::generate_blocks;
pub use rect::Rect;
pub use state::{
    Ball, Block, BlockHit, BlockKind, GameEvent, GamePhase, GameSession, Outcome, Paddle,
};
pub use tick::{TickInput, tick};
