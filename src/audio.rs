//! Sound effect triggers
//!
//! The simulation raises [`GameEvent`]s; the manager turns them into
//! fire-and-forget effects on an [`AudioSink`], honouring mute and volume.
//! Mixing and playback belong to the sink.

use crate::settings::Settings;
use crate::sim::{BlockKind, GameEvent};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits wall
    WallHit,
    /// Ball hits block (doesn't break)
    BlockHit,
    /// Ball bounces off an iron block
    IronClang,
    /// Block breaks
    BlockBreak,
    /// Ball launched off the paddle
    Launch,
    /// Ball fell past the paddle
    BallLost,
    /// Paddle bonus started
    Bonus,
    /// All blocks cleared
    Win,
    /// Last life lost
    GameOver,
}

impl SoundEffect {
    /// Effect for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        Some(match event {
            GameEvent::Launched => SoundEffect::Launch,
            GameEvent::PaddleHit => SoundEffect::PaddleHit,
            GameEvent::WallHit => SoundEffect::WallHit,
            GameEvent::BlockHit {
                kind: BlockKind::Iron,
            } => SoundEffect::IronClang,
            GameEvent::BlockHit { .. } => SoundEffect::BlockHit,
            GameEvent::BlockDestroyed { .. } => SoundEffect::BlockBreak,
            GameEvent::BallLost { .. } => SoundEffect::BallLost,
            GameEvent::BonusStarted => SoundEffect::Bonus,
            GameEvent::BonusEnded => return None,
            GameEvent::Won => SoundEffect::Win,
            GameEvent::Lost => SoundEffect::GameOver,
        })
    }
}

/// Playback backend
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Sink that only logs what would be played
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("sound {:?} at {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(sink: S, settings: &Settings) -> Self {
        let mut manager = Self::new(sink);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }

    /// Play the effects for a batch of events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_events_map_to_effects() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.handle_events(&[
            GameEvent::PaddleHit,
            GameEvent::BlockHit {
                kind: BlockKind::Iron,
            },
            GameEvent::BlockHit {
                kind: BlockKind::Concrete { hardness: 1 },
            },
            GameEvent::BonusEnded,
            GameEvent::Lost,
        ]);
        let played: Vec<_> = audio.sink().0.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            played,
            vec![
                SoundEffect::PaddleHit,
                SoundEffect::IronClang,
                SoundEffect::BlockHit,
                SoundEffect::GameOver,
            ]
        );
    }

    #[test]
    fn test_mute_silences_everything() {
        let settings = Settings {
            muted: true,
            ..Settings::default()
        };
        let mut audio = AudioManager::from_settings(Recorder::default(), &settings);
        assert!(audio.is_muted());
        audio.handle_events(&[GameEvent::Won, GameEvent::WallHit]);
        assert!(audio.sink().0.is_empty());

        audio.set_muted(false);
        audio.play(SoundEffect::Win);
        assert_eq!(audio.sink().0.len(), 1);
    }

    #[test]
    fn test_volume_is_master_times_sfx() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(2.0);
        audio.play(SoundEffect::WallHit);
        assert_eq!(audio.sink().0[0].1, 0.5);
    }
}
