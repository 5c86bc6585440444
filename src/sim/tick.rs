//! Per-frame simulation step
//!
//! Advances the session by one frame in a fixed order: phase transitions,
//! paddle movement, ball movement, win/loss detection, block collisions,
//! wall/paddle collisions, then the bonus update.

use super::bonus;
use super::collision::{ball_fell, handle_block_collision, handle_wall_and_paddle};
use super::state::{GameEvent, GamePhase, GameSession, Outcome};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held paddle direction (-1 left, +1 right)
    pub direction: Option<i32>,
    /// Pause toggle (Escape)
    pub pause: bool,
    /// Click: start from the menu, resume, leave the game-over screen
    pub confirm: bool,
    /// Window closed
    pub quit: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the session by one frame; `now` is the clock time in seconds
pub fn tick(session: &mut GameSession, input: &TickInput, now: f64) {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot(session, &mut input);
    }
    let input = &input;

    // Handle pause toggle
    if input.pause {
        match session.phase {
            GamePhase::Playing => {
                session.phase = GamePhase::Paused;
                log::debug!("Paused");
                return;
            }
            GamePhase::Paused => session.phase = GamePhase::Playing,
            _ => {}
        }
    } else if input.confirm && session.phase == GamePhase::Paused {
        session.phase = GamePhase::Playing;
    }

    match session.phase {
        GamePhase::Menu => {
            if input.confirm {
                session.start();
            }
            return;
        }
        GamePhase::GameOver(_) => {
            if input.confirm {
                session.phase = GamePhase::Menu;
            }
            return;
        }
        GamePhase::Paused => return,
        GamePhase::Playing => {}
    }

    session.frame += 1;
    let window_width = session.settings.window_width;

    // Paddle; the first directional press launches a resting ball
    if let Some(direction) = input.direction {
        session.paddle.move_in(direction, window_width);
        if session.ball.is_static {
            session.ball.launch(direction);
            session.push_event(GameEvent::Launched);
        }
    }

    // Ball
    if session.ball.is_static {
        session.ball.rest_on(&session.paddle);
    } else {
        session.ball.advance();
    }

    // Win / loss
    if session.remaining_to_clear() == 0 {
        finish(session, Outcome::Win);
        return;
    }
    if ball_fell(&session.ball.rect, &session.paddle.rect) {
        if session.ball.lives == 0 {
            finish(session, Outcome::Lose);
            return;
        }
        session.ball.lives -= 1;
        session.push_event(GameEvent::BallLost {
            lives_left: session.ball.lives,
        });
        log::info!("Ball lost, {} lives left", session.ball.lives);
        session.respawn();
    }

    handle_block_collision(session);
    handle_wall_and_paddle(session);

    bonus::update(session, now);
}

fn finish(session: &mut GameSession, outcome: Outcome) {
    session.phase = GamePhase::GameOver(outcome);
    session.push_event(match outcome {
        Outcome::Win => GameEvent::Won,
        Outcome::Lose => GameEvent::Lost,
    });
    log::info!(
        "Game over ({:?}) with score {} after {} frames",
        outcome,
        session.score,
        session.frame
    );
}

/// Demo-mode input: keep the paddle under the ball and click through menus
fn autopilot(session: &GameSession, input: &mut TickInput) {
    match session.phase {
        GamePhase::Menu | GamePhase::GameOver(_) => input.confirm = true,
        GamePhase::Paused => {}
        GamePhase::Playing => {
            if session.ball.is_static {
                input.direction = Some(1);
                return;
            }
            let offset = session.ball.rect.center().x - session.paddle.rect.center().x;
            input.direction = if offset.abs() <= session.paddle.speed {
                None
            } else {
                Some(if offset < 0.0 { -1 } else { 1 })
            };
        }
    }
}
