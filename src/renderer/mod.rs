//! Rendering interface
//!
//! The simulation is captured into a [`Frame`] each tick and handed to a
//! [`Renderer`]. Drawing itself is up to the backend.

pub mod instance;

pub use instance::{RectInstance, SHAPE_ELLIPSE, SHAPE_RECT};

use crate::sim::{GamePhase, GameSession};

/// Everything a backend needs to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub bonus_active: bool,
    /// Blocks first, then paddle, then ball
    pub instances: Vec<RectInstance>,
}

impl Frame {
    pub fn capture(session: &GameSession) -> Self {
        let mut instances = Vec::new();
        if !matches!(session.phase, GamePhase::Menu) {
            instances.reserve(session.blocks.len() + 2);
            instances.extend(
                session
                    .blocks
                    .iter()
                    .map(|b| RectInstance::new(&b.rect, b.color(), SHAPE_RECT)),
            );
            instances.push(RectInstance::new(
                &session.paddle.rect,
                session.paddle.color,
                SHAPE_RECT,
            ));
            instances.push(RectInstance::new(
                &session.ball.rect,
                session.ball.color,
                SHAPE_ELLIPSE,
            ));
        }

        Self {
            phase: session.phase,
            score: session.score,
            lives: session.ball.lives,
            bonus_active: session.bonus.is_active(),
            instances,
        }
    }
}

/// Drawing backend
pub trait Renderer {
    fn present(&mut self, frame: &Frame);
}

/// Renderer without a window: counts frames and logs phase changes
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    last_phase: Option<GamePhase>,
}

impl Renderer for HeadlessRenderer {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.last_phase != Some(frame.phase) {
            log::info!(
                "Screen: {:?} (score {}, lives {})",
                frame.phase,
                frame.score,
                frame.lives
            );
            self.last_phase = Some(frame.phase);
        }
    }
}
