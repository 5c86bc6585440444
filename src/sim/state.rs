//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameSession`], which is passed
//! by reference to the collision handlers and the bonus state machine.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::bonus::Bonus;
use super::level::generate_blocks;
use super::rect::Rect;
use crate::settings::Settings;
use crate::{Color, sign_of};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Main menu, waiting for start
    Menu,
    /// Active gameplay (ball may still be resting on the paddle)
    Playing,
    /// Game is paused
    Paused,
    /// Game ended, waiting for a click to return to the menu
    GameOver(Outcome),
}

/// Things that happened during a tick, drained by audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Launched,
    PaddleHit,
    WallHit,
    /// Block was hit but survived (or cannot be destroyed)
    BlockHit { kind: BlockKind },
    BlockDestroyed { kind: BlockKind },
    BallLost { lives_left: u32 },
    BonusStarted,
    BonusEnded,
    Won,
    Lost,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub radius: f32,
    pub speed: f32,
    /// Direction signs, each component is -1 or +1
    pub dir: IVec2,
    pub lives: u32,
    pub max_lives: u32,
    /// Resting on the paddle before launch
    pub is_static: bool,
    pub color: Color,
}

impl Ball {
    pub const DEFAULT_COLOR: Color = Color::RED;

    pub fn new(settings: &Settings) -> Self {
        let size = settings.ball_radius * 2.0;
        Self {
            rect: Rect::new(0.0, 0.0, size, size),
            radius: settings.ball_radius,
            speed: settings.ball_speed,
            dir: IVec2::new(1, -1),
            lives: settings.max_lives,
            max_lives: settings.max_lives,
            is_static: true,
            color: Self::DEFAULT_COLOR,
        }
    }

    /// Move one frame along the current direction (no-op while static)
    pub fn advance(&mut self) {
        if !self.is_static {
            self.rect.translate(self.dir.as_vec2() * self.speed);
        }
    }

    /// Place the ball centred on top of the paddle
    pub fn rest_on(&mut self, paddle: &Paddle) {
        let x = paddle.rect.center().x - self.radius;
        let y = paddle.rect.top() - self.rect.height;
        self.rect.set_pos(Vec2::new(x, y));
    }

    /// Leave static mode, heading up and toward `x_dir`
    pub fn launch(&mut self, x_dir: i32) {
        self.is_static = false;
        self.dir = IVec2::new(sign_of(x_dir), -1);
    }

    pub fn at_full_health(&self) -> bool {
        self.lives == self.max_lives
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub speed: f32,
    /// Last movement direction, -1 or +1
    pub direction: i32,
    pub default_width: f32,
    pub color: Color,
}

impl Paddle {
    pub const DEFAULT_COLOR: Color = Color::RED;

    pub fn new(settings: &Settings) -> Self {
        let x = (settings.window_width - settings.paddle_width) / 2.0;
        let y = settings.window_height * crate::consts::PADDLE_Y_COEFF;
        Self {
            rect: Rect::new(x, y, settings.paddle_width, settings.paddle_height),
            speed: settings.paddle_speed,
            direction: 1,
            default_width: settings.paddle_width,
            color: Self::DEFAULT_COLOR,
        }
    }

    pub fn width(&self) -> f32 {
        self.rect.width
    }

    /// Move one step, staying inside the window
    pub fn move_in(&mut self, direction: i32, window_width: f32) {
        self.direction = sign_of(direction);
        let max_x = (window_width - self.rect.width).max(0.0);
        self.rect.x = (self.rect.x + self.direction as f32 * self.speed).clamp(0.0, max_x);
    }

    /// Resize; the paddle is pushed left if it would cross the right wall
    pub fn set_width(&mut self, width: f32, window_width: f32) {
        self.rect.width = width;
        if self.rect.x + width > window_width {
            self.rect.x = window_width - width;
        }
    }

    /// Horizontally centre the paddle, keeping its width
    pub fn recenter(&mut self, window_width: f32) {
        self.rect.x = (window_width - self.rect.width) / 2.0;
    }
}

/// Block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlockKind {
    /// Destroyed by a single hit
    #[default]
    Plain,
    /// Absorbs `hardness` hits, destroyed by the next one
    Concrete { hardness: u32 },
    /// Cannot be destroyed, doesn't count for clearing the level
    Iron,
}

/// Result of hitting a block once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockHit {
    Destroyed,
    Damaged { remaining: u32 },
    Deflected,
}

/// A block entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rect,
    pub kind: BlockKind,
}

impl Block {
    pub fn new(rect: Rect, kind: BlockKind) -> Self {
        Self { rect, kind }
    }

    /// Apply one ball hit
    pub fn hit(&mut self) -> BlockHit {
        match &mut self.kind {
            BlockKind::Plain => BlockHit::Destroyed,
            BlockKind::Concrete { hardness: 0 } => BlockHit::Destroyed,
            BlockKind::Concrete { hardness } => {
                *hardness -= 1;
                BlockHit::Damaged {
                    remaining: *hardness,
                }
            }
            BlockKind::Iron => BlockHit::Deflected,
        }
    }

    /// Returns true if this block must be destroyed to win
    pub fn counts_for_clear(&self) -> bool {
        self.kind != BlockKind::Iron
    }

    pub fn color(&self) -> Color {
        match self.kind {
            BlockKind::Plain => Color::RED,
            BlockKind::Concrete { hardness } => {
                let shade = 170u8.saturating_sub((hardness.min(4) * 25) as u8);
                Color(shade, shade, shade + 10)
            }
            BlockKind::Iron => Color::STEEL,
        }
    }
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameSession {
    pub settings: Settings,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live blocks, in hit-test order
    pub blocks: Vec<Block>,
    pub bonus: Bonus,
    /// One point per destroyed block
    pub score: u64,
    pub blocks_destroyed: u32,
    /// Destructible blocks at level start
    pub total_blocks: u32,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Frames simulated while playing
    pub frame: u64,
}

impl GameSession {
    /// Create a session sitting in the main menu
    pub fn new(settings: Settings) -> Self {
        let paddle = Paddle::new(&settings);
        let mut ball = Ball::new(&settings);
        ball.rest_on(&paddle);
        Self {
            phase: GamePhase::Menu,
            ball,
            paddle,
            blocks: Vec::new(),
            bonus: Bonus::default(),
            score: 0,
            blocks_destroyed: 0,
            total_blocks: 0,
            events: Vec::new(),
            frame: 0,
            settings,
        }
    }

    /// Start a fresh game: new level, full lives, ball resting on the paddle
    pub fn start(&mut self) {
        let blocks = generate_blocks(&self.settings);
        self.start_with_blocks(blocks);
    }

    /// Start a fresh game on a given block layout
    pub fn start_with_blocks(&mut self, blocks: Vec<Block>) {
        self.total_blocks = blocks.iter().filter(|b| b.counts_for_clear()).count() as u32;
        self.blocks = blocks;
        self.paddle = Paddle::new(&self.settings);
        self.ball = Ball::new(&self.settings);
        self.ball.rest_on(&self.paddle);
        self.bonus = Bonus::default();
        self.score = 0;
        self.blocks_destroyed = 0;
        self.frame = 0;
        self.events.clear();
        self.phase = GamePhase::Playing;
        log::info!(
            "Game started: {} blocks ({} to clear), {} lives",
            self.blocks.len(),
            self.total_blocks,
            self.ball.lives
        );
    }

    /// Put the ball back on a recentred, default-width paddle after it fell
    pub fn respawn(&mut self) {
        let window_width = self.settings.window_width;
        self.paddle.set_width(self.paddle.default_width, window_width);
        self.paddle.recenter(window_width);
        self.ball.is_static = true;
        self.ball.rest_on(&self.paddle);
    }

    /// Blocks destroyed so far (total minus remaining destructible blocks)
    pub fn destroyed_count(&self) -> u32 {
        self.blocks_destroyed
    }

    /// Destructible blocks still standing
    pub fn remaining_to_clear(&self) -> usize {
        self.blocks.iter().filter(|b| b.counts_for_clear()).count()
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
