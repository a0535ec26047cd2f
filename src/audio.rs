//! Audio cues
//!
//! The simulation never plays sound itself. Its events are mapped to cues and handed
//! to whatever sink the platform provides; playback is fire-and-forget.

use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Start (or resume) the background track
    MusicPlay,
    /// Stop the background track
    MusicStop,
    /// An enemy was destroyed
    Kill,
}

impl SoundCue {
    /// Cue for a simulation event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::MusicStarted => Some(SoundCue::MusicPlay),
            GameEvent::MusicStopped => Some(SoundCue::MusicStop),
            GameEvent::EnemyKilled { .. } => Some(SoundCue::Kill),
            _ => None,
        }
    }
}

/// Platform audio backend
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("audio cue: {:?}", cue);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    muted: bool,
    music_playing: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            muted: false,
            music_playing: false,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    /// Forward the cues for a frame's events to the sink
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(SoundCue::for_event) {
            self.play(cue);
        }
    }

    /// Play a sound cue
    pub fn play(&mut self, cue: SoundCue) {
        // Music state is tracked even while muted
        match cue {
            SoundCue::MusicPlay => self.music_playing = true,
            SoundCue::MusicStop => self.music_playing = false,
            SoundCue::Kill => {}
        }
        if self.muted {
            return;
        }
        self.sink.play(cue);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::EnemyId;
    use glam::Vec2;

    #[derive(Default)]
    struct RecordingSink(Vec<SoundCue>);

    impl AudioSink for RecordingSink {
        fn play(&mut self, cue: SoundCue) {
            self.0.push(cue);
        }
    }

    #[test]
    fn test_events_map_to_cues() {
        let mut audio = AudioManager::new(RecordingSink::default());
        audio.handle_events(&[
            GameEvent::MusicStarted,
            GameEvent::EnemyKilled {
                id: EnemyId(1),
                pos: Vec2::ZERO,
            },
            GameEvent::Restarted,
            GameEvent::MusicStopped,
        ]);
        assert_eq!(
            audio.sink().0,
            vec![SoundCue::MusicPlay, SoundCue::Kill, SoundCue::MusicStop]
        );
        assert!(!audio.is_music_playing());
    }

    #[test]
    fn test_muted_tracks_music_without_playing() {
        let mut audio = AudioManager::new(RecordingSink::default());
        audio.set_muted(true);
        audio.play(SoundCue::MusicPlay);
        assert!(audio.sink().0.is_empty());
        assert!(audio.is_music_playing());
    }
}
