//! Block Breaker entry point
//!
//! Native builds have no window backend; the binary runs the game headless in
//! demo mode (autopilot) at the configured frame rate and logs what happens.
//!
//! Usage: `block-breaker [FRAMES]` (default: one minute of play)

use block_breaker::Settings;
use block_breaker::audio::{AudioManager, LogSink};
use block_breaker::platform::{FrameLoop, ScriptedInput, SystemClock};
use block_breaker::renderer::HeadlessRenderer;
use block_breaker::sim::GameSession;

fn main() {
    env_logger::init();
    log::info!("Block Breaker (headless demo) starting...");

    let settings = Settings::load();
    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| match arg.parse::<u64>() {
            Ok(n) => Some(n),
            Err(e) => {
                log::warn!("Ignoring frame count {arg:?}: {e}");
                None
            }
        })
        .unwrap_or(settings.fps as u64 * 60);

    let audio = AudioManager::from_settings(LogSink, &settings);
    let mut game = FrameLoop::new(
        GameSession::new(settings),
        ScriptedInput::default(),
        HeadlessRenderer::default(),
        audio,
        SystemClock::new(),
    );
    game.input_state.idle_mode = true;

    let ran = game.run(Some(frames));
    log::info!(
        "Demo finished after {} frames: phase {:?}, score {}, {} blocks left",
        ran,
        game.session.phase,
        game.session.score,
        game.session.remaining_to_clear()
    );
}
