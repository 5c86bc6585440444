//! Platform layer
//!
//! Handles the collaborators around the simulation:
//! - Input events folded into tick input
//! - Clocks and fixed-rate frame pacing
//! - The frame loop tying input, simulation, audio and rendering together

pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, InputState, Key, ScriptedInput};
pub use time::{Clock, FramePacer, ManualClock, SystemClock};

use crate::audio::{AudioManager, AudioSink};
use crate::renderer::{Frame, Renderer};
use crate::sim::{GameSession, tick};

/// Single-threaded fixed-rate game loop
pub struct FrameLoop<I, R, S, C>
where
    I: InputSource,
    R: Renderer,
    S: AudioSink,
    C: Clock,
{
    pub session: GameSession,
    pub input_state: InputState,
    input: I,
    renderer: R,
    audio: AudioManager<S>,
    clock: C,
}

impl<I, R, S, C> FrameLoop<I, R, S, C>
where
    I: InputSource,
    R: Renderer,
    S: AudioSink,
    C: Clock,
{
    pub fn new(session: GameSession, input: I, renderer: R, audio: AudioManager<S>, clock: C) -> Self {
        Self {
            session,
            input_state: InputState::default(),
            input,
            renderer,
            audio,
            clock,
        }
    }

    /// Run one frame: input, simulation, audio, present, wait
    ///
    /// Returns false once quit was requested.
    pub fn run_frame(&mut self) -> bool {
        for event in self.input.poll() {
            self.input_state.handle(event);
        }
        let input = self.input_state.take_tick_input();
        if input.quit {
            log::info!("Quit requested");
            return false;
        }

        tick(&mut self.session, &input, self.clock.now());

        let events = self.session.drain_events();
        self.audio.handle_events(&events);

        self.renderer.present(&Frame::capture(&self.session));
        self.clock.wait_next_frame(self.session.settings.frame_secs());
        true
    }

    /// Run until quit or `max_frames`, returning the number of frames run
    pub fn run(&mut self, max_frames: Option<u64>) -> u64 {
        let mut frames = 0;
        while max_frames.is_none_or(|max| frames < max) {
            if !self.run_frame() {
                break;
            }
            frames += 1;
        }
        frames
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &AudioManager<S> {
        &self.audio
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::LogSink;
    use crate::renderer::HeadlessRenderer;
    use crate::settings::Settings;
    use crate::sim::GamePhase;

    fn frame_loop(script: Vec<(u64, InputEvent)>) -> FrameLoop<ScriptedInput, HeadlessRenderer, LogSink, ManualClock> {
        FrameLoop::new(
            GameSession::new(Settings::default()),
            ScriptedInput::new(script),
            HeadlessRenderer::default(),
            AudioManager::new(LogSink),
            ManualClock::default(),
        )
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut fl = frame_loop(vec![(3, InputEvent::Quit)]);
        assert_eq!(fl.run(Some(100)), 3);
        assert_eq!(fl.renderer().frames, 3);
    }

    #[test]
    fn test_clock_advances_one_frame_per_tick() {
        let mut fl = frame_loop(vec![]);
        fl.run(Some(60));
        assert!((fl.clock().now() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_starts_and_escape_pauses() {
        let mut fl = frame_loop(vec![
            (0, InputEvent::Click),
            (1, InputEvent::KeyDown(Key::Right)),
            (3, InputEvent::KeyUp(Key::Right)),
            (5, InputEvent::KeyDown(Key::Escape)),
        ]);
        fl.run(Some(1));
        assert_eq!(fl.session.phase, GamePhase::Playing);
        fl.run(Some(2));
        assert!(!fl.session.ball.is_static);
        fl.run(Some(3));
        assert_eq!(fl.session.phase, GamePhase::Paused);
    }
}
