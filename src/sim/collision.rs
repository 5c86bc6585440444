//! Collision detection and response for axis-aligned rectangles
//!
//! The ball bounces using a penetration-depth heuristic: the overlap measured
//! from the leading edge on each axis decides which direction sign flips.
//! Falling past the paddle is detected separately and never reflects.

use glam::IVec2;

use super::rect::Rect;
use super::state::{BlockHit, GameEvent, GameSession};

/// Screen walls the ball can bounce off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Compute the ball's direction after hitting `rect`
///
/// Penetration is measured from the leading edge in the direction of travel.
/// When both axes penetrate about equally (within `epsilon`) the hit is a
/// corner hit and both signs flip; otherwise the shallower axis flips.
pub fn resolve(dir: IVec2, ball: &Rect, rect: &Rect, epsilon: f32) -> IVec2 {
    let (dx, dy) = penetration(dir, ball, rect);

    if (dx - dy).abs() < epsilon {
        -dir
    } else if dx > dy {
        IVec2::new(dir.x, -dir.y)
    } else if dx < dy {
        IVec2::new(-dir.x, dir.y)
    } else {
        dir
    }
}

/// Overlap depths `(dx, dy)` used by [`resolve`]
pub fn penetration(dir: IVec2, ball: &Rect, rect: &Rect) -> (f32, f32) {
    let dx = if dir.x < 0 {
        ball.right() - rect.left()
    } else {
        rect.right() - ball.left()
    };
    let dy = if dir.y < 0 {
        ball.bottom() - rect.top()
    } else {
        rect.bottom() - ball.top()
    };
    (dx, dy)
}

/// Bounce off the left, right and top screen edges
///
/// Each check flips the sign unconditionally, so applying it twice at the same
/// position restores the original direction. The bottom edge is left alone.
pub fn reflect_walls(ball: &Rect, dir: IVec2, width: f32) -> (IVec2, Option<Wall>) {
    let mut dir = dir;
    let mut wall = None;

    if ball.right() >= width {
        dir.x = -dir.x;
        wall = Some(Wall::Right);
    } else if ball.left() <= 0.0 {
        dir.x = -dir.x;
        wall = Some(Wall::Left);
    }
    if ball.top() <= 0.0 {
        dir.y = -dir.y;
        wall = Some(Wall::Top);
    }

    (dir, wall)
}

/// Ball dropped below the paddle
pub fn ball_fell(ball: &Rect, paddle: &Rect) -> bool {
    ball.top() > paddle.bottom()
}

/// Paddle bounces only count while the ball is moving down
pub fn hits_paddle(ball: &Rect, dir: IVec2, paddle: &Rect) -> bool {
    dir.y > 0 && ball.intersects(paddle)
}

/// Hit the first block the ball overlaps, if any
///
/// The block takes one hit (and is removed once destroyed) and the ball
/// always bounces off it.
pub fn handle_block_collision(session: &mut GameSession) -> Option<BlockHit> {
    let ball = session.ball.rect;
    let index = ball.first_overlap(session.blocks.iter().map(|b| &b.rect))?;

    let block = &mut session.blocks[index];
    let kind_before = block.kind;
    let block_rect = block.rect;
    let hit = block.hit();

    match hit {
        BlockHit::Destroyed => {
            session.blocks.remove(index);
            session.blocks_destroyed += 1;
            session.score += 1;
            session.push_event(GameEvent::BlockDestroyed { kind: kind_before });
            log::debug!(
                "Block {:?} destroyed ({} so far)",
                kind_before,
                session.blocks_destroyed
            );
        }
        BlockHit::Damaged { remaining } => {
            session.push_event(GameEvent::BlockHit { kind: kind_before });
            log::debug!("Concrete block cracked, {} hits left", remaining + 1);
        }
        BlockHit::Deflected => {
            session.push_event(GameEvent::BlockHit { kind: kind_before });
        }
    }

    session.ball.dir = resolve(
        session.ball.dir,
        &ball,
        &block_rect,
        session.settings.collision_epsilon,
    );

    Some(hit)
}

/// Paddle bounce followed by wall reflection
pub fn handle_wall_and_paddle(session: &mut GameSession) {
    let ball = session.ball.rect;

    if hits_paddle(&ball, session.ball.dir, &session.paddle.rect) {
        session.ball.dir = resolve(
            session.ball.dir,
            &ball,
            &session.paddle.rect,
            session.settings.collision_epsilon,
        );
        session.push_event(GameEvent::PaddleHit);
    }

    let (dir, wall) = reflect_walls(&ball, session.ball.dir, session.settings.window_width);
    session.ball.dir = dir;
    if wall.is_some() {
        session.push_event(GameEvent::WallHit);
    }
}
