use block_breaker::Settings;
use block_breaker::audio::{AudioManager, LogSink};
use block_breaker::platform::{FrameLoop, InputEvent, ManualClock, ScriptedInput};
use block_breaker::renderer::HeadlessRenderer;
use block_breaker::sim::{
    BlockKind, GameEvent, GameSession, Rect, TickInput, tick,
};
use glam::IVec2;

fn classic_session() -> GameSession {
    let settings = Settings {
        classic_layout: true,
        ..Settings::default()
    };
    let mut session = GameSession::new(settings);
    session.start();
    session
}

/// Park the ball inside the last block so the next tick breaks it
fn aim_at_last_block(session: &mut GameSession) {
    let target = session.blocks.last().expect("blocks left").rect;
    session.ball.is_static = false;
    session.ball.dir = IVec2::new(1, -1);
    session.ball.rect = Rect::new(target.x + 10.0, target.y + 5.0, 20.0, 20.0);
}

#[test]
fn test_bonus_after_twenty_blocks_until_ball_falls() {
    let mut session = classic_session();
    assert_eq!(session.blocks.len(), 180);
    let default_width = session.paddle.width();
    let mut now = 0.0;

    for destroyed in 1..=20 {
        aim_at_last_block(&mut session);
        tick(&mut session, &TickInput::default(), now);
        now += 1.0 / 60.0;
        assert_eq!(session.destroyed_count(), destroyed);
        assert_eq!(session.bonus.is_active(), destroyed == 20);
    }
    assert_eq!(session.blocks.len(), 160);
    assert_eq!(session.score, 20);
    assert_eq!(
        session.paddle.width(),
        default_width + session.settings.bonus_width_increment
    );

    // Mid-bonus, the ball drops past the paddle
    session.ball.dir = IVec2::new(1, 1);
    session.ball.rect.y = session.paddle.rect.bottom() + 1.0;
    tick(&mut session, &TickInput::default(), now);

    assert_eq!(session.ball.lives, session.ball.max_lives - 1);
    assert!(!session.bonus.is_active());
    assert_eq!(session.paddle.width(), default_width);

    // Paddle and ball come back centred at the default width
    let centre = session.settings.window_width / 2.0;
    assert_eq!(session.paddle.rect.center().x, centre);
    tick(&mut session, &TickInput::default(), now + 1.0 / 60.0);
    assert_eq!(session.paddle.rect.center().x, centre);
    assert_eq!(session.ball.rect.center().x, centre);

    let events = session.drain_events();
    assert!(events.contains(&GameEvent::BonusStarted));
    assert!(events.contains(&GameEvent::BonusEnded));
    assert!(events.contains(&GameEvent::BallLost { lives_left: 2 }));
}

#[test]
fn test_bonus_never_returns_after_a_life_is_lost() {
    let mut session = classic_session();
    session.ball.lives -= 1;

    for _ in 0..40 {
        aim_at_last_block(&mut session);
        tick(&mut session, &TickInput::default(), 0.0);
        assert!(!session.bonus.is_active());
    }
    assert_eq!(session.destroyed_count(), 40);
}

#[test]
fn test_bonus_expires_after_duration() {
    let mut session = classic_session();
    let default_width = session.paddle.width();

    for _ in 0..20 {
        aim_at_last_block(&mut session);
        tick(&mut session, &TickInput::default(), 1.0);
    }
    assert_eq!(session.bonus.activation_time(), Some(1.0));

    // Keep the ball bouncing harmlessly in open space
    session.ball.rect = Rect::new(500.0, 450.0, 20.0, 20.0);
    session.ball.dir = IVec2::new(1, -1);
    tick(&mut session, &TickInput::default(), 5.9);
    assert!(session.bonus.is_active());
    assert_ne!(session.ball.color, block_breaker::sim::Ball::DEFAULT_COLOR);

    tick(&mut session, &TickInput::default(), 6.1);
    assert!(!session.bonus.is_active());
    assert_eq!(session.paddle.width(), default_width);
}

#[test]
fn test_concrete_block_survives_until_last_hit() {
    let mut session = GameSession::new(Settings::default());
    session.start_with_blocks(vec![
        block_breaker::sim::Block::new(
            Rect::new(0.0, 300.0, 60.0, 20.0),
            BlockKind::Concrete { hardness: 2 },
        ),
        block_breaker::sim::Block::new(Rect::new(900.0, 10.0, 60.0, 20.0), BlockKind::Plain),
    ]);

    for hit in 1..=3 {
        session.ball.is_static = false;
        session.ball.dir = IVec2::new(1, -1);
        session.ball.rect = Rect::new(20.0, 310.0, 20.0, 20.0);
        tick(&mut session, &TickInput::default(), 0.0);
        assert_eq!(session.blocks.len(), if hit < 3 { 2 } else { 1 });
    }
    assert_eq!(session.destroyed_count(), 1);
}

#[test]
fn test_demo_session_runs_through_frame_loop() {
    let mut game = FrameLoop::new(
        GameSession::new(Settings::default()),
        ScriptedInput::new(vec![(3000, InputEvent::Quit)]),
        HeadlessRenderer::default(),
        AudioManager::new(LogSink),
        ManualClock::default(),
    );
    game.input_state.idle_mode = true;

    let frames = game.run(None);
    assert_eq!(frames, 3000);
    assert_eq!(game.renderer().frames, 3000);
    assert!(game.session.score > 0, "autopilot should break some blocks");
    assert!(game.session.frame > 0);
}
