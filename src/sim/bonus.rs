//! Timed paddle bonus
//!
//! Every `N` destroyed blocks, while the ball still has all its lives, the
//! paddle widens for a few seconds and the ball and paddle cycle colours.
//! The state is re-evaluated every frame from the destroyed-block count, the
//! life count and the current time.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Ball, GameEvent, GameSession, Paddle};
use crate::Color;
use crate::consts::BONUS_COLOR_STEPS_PER_SEC;

/// Bonus phase
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum BonusState {
    #[default]
    Inactive,
    /// Running since `since` (clock seconds)
    Active { since: f64 },
}

/// Bonus tracker held by the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    pub state: BonusState,
    /// Destroyed-block count that last granted a bonus
    pub awarded_at: Option<u32>,
}

impl Bonus {
    pub fn is_active(&self) -> bool {
        matches!(self.state, BonusState::Active { .. })
    }

    pub fn activation_time(&self) -> Option<f64> {
        match self.state {
            BonusState::Active { since } => Some(since),
            BonusState::Inactive => None,
        }
    }
}

/// Whether `destroyed` blocks earn a bonus every `every_n` blocks
#[inline]
pub fn reaches_threshold(destroyed: u32, every_n: u32) -> bool {
    every_n > 0 && destroyed > 0 && destroyed.is_multiple_of(every_n)
}

/// Colour shown `elapsed` seconds into the bonus
///
/// Changes `BONUS_COLOR_STEPS_PER_SEC` times per second. Same inputs, same colour.
pub fn cycle_color(elapsed: f64, seed: u64) -> Color {
    let step = (elapsed.max(0.0) * BONUS_COLOR_STEPS_PER_SEC) as u64;
    let mut rng = Pcg32::seed_from_u64(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ step);
    Color(
        rng.random_range(64..=255),
        rng.random_range(64..=255),
        rng.random_range(64..=255),
    )
}

/// Advance the bonus state machine for this frame
///
/// Besides `activation_time`, [`Bonus::awarded_at`] keeps the destroyed count
/// that last granted a bonus. Without it an expired bonus would restart on the
/// next frame while the count still sits on the same multiple.
pub fn update(session: &mut GameSession, now: f64) {
    let destroyed = session.destroyed_count();
    let full_health = session.ball.at_full_health();
    let every_n = session.settings.bonus_every_n_blocks;

    match session.bonus.state {
        BonusState::Inactive => {
            if full_health
                && reaches_threshold(destroyed, every_n)
                && session.bonus.awarded_at != Some(destroyed)
            {
                session.bonus.state = BonusState::Active { since: now };
                session.bonus.awarded_at = Some(destroyed);
                apply(session, 0.0);
                session.push_event(GameEvent::BonusStarted);
                log::info!(
                    "Bonus started after {} blocks, paddle width {}",
                    destroyed,
                    session.paddle.width()
                );
            }
        }
        BonusState::Active { since } => {
            let elapsed = now - since;
            if full_health && elapsed <= session.settings.bonus_duration_secs {
                apply(session, elapsed);
            } else {
                end(session);
                log::info!(
                    "Bonus ended ({})",
                    if full_health { "expired" } else { "life lost" }
                );
            }
        }
    }
}

/// Widened paddle and cycling colours; idempotent per frame
fn apply(session: &mut GameSession, elapsed: f64) {
    let width = session.paddle.default_width + session.settings.bonus_width_increment;
    session
        .paddle
        .set_width(width, session.settings.window_width);

    let seed = session.settings.seed;
    session.ball.color = cycle_color(elapsed, seed);
    session.paddle.color = cycle_color(elapsed, seed.wrapping_add(1));
}

/// Back to default width and colours
fn end(session: &mut GameSession) {
    session.bonus.state = BonusState::Inactive;
    let width = session.paddle.default_width;
    session
        .paddle
        .set_width(width, session.settings.window_width);
    session.ball.color = Ball::DEFAULT_COLOR;
    session.paddle.color = Paddle::DEFAULT_COLOR;
    session.push_event(GameEvent::BonusEnded);
}
