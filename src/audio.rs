//! Audio system using rodio
//!
//! One looping music track plus fire-and-forget sound effects. Playback is
//! never awaited: triggering a sound faster than it plays just overlaps.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use std::sync::Arc;

use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::error::AudioError;
use crate::settings::Settings;
use crate::sim::GameEvent;

pub const MUSIC_FILE: &str = "music.mp3";
pub const KICK_FILE: &str = "kick.mp3";
pub const GOAL_FILE: &str = "goal_cheer.mp3";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player touches the ball
    Kick,
    /// Ball crosses a goal line
    GoalCheer,
}

impl SoundEffect {
    /// Per-effect mix level before master/sfx volume
    pub fn base_volume(self) -> f32 {
        match self {
            SoundEffect::Kick => 0.6,
            SoundEffect::GoalCheer => 0.7,
        }
    }

    /// Sound to play for a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Kick { .. } => Some(SoundEffect::Kick),
            GameEvent::Goal { .. } => Some(SoundEffect::GoalCheer),
            GameEvent::PhaseChanged { .. } | GameEvent::MatchWon { .. } => None,
        }
    }
}

/// Decoded clip kept in memory so each trigger is a cheap clone
type Clip = Buffered<Decoder<Cursor<Arc<[u8]>>>>;

/// Audio manager for the game
pub struct AudioManager {
    // Dropping the stream stops all sound
    _stream: OutputStream,
    handle: OutputStreamHandle,
    kick: Clip,
    goal: Clip,
    sfx_volume: f32,
}

impl AudioManager {
    /// Open the default output device, decode the effects and start the music
    pub fn new(asset_dir: &Path, settings: &Settings) -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default().map_err(AudioError::Device)?;

        let kick = load_clip(&asset_dir.join(KICK_FILE))?;
        let goal = load_clip(&asset_dir.join(GOAL_FILE))?;

        let music_path = asset_dir.join(MUSIC_FILE);
        let file = File::open(&music_path).map_err(|source| AudioError::Open {
            path: music_path.clone(),
            source,
        })?;
        let track = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
            path: music_path.clone(),
            source,
        })?;
        let music = Sink::try_new(&handle).map_err(AudioError::Sink)?;
        music.set_volume(settings.effective_music_volume());
        music.append(track.repeat_infinite());
        // Keeps playing for as long as the stream lives
        music.detach();
        log::info!("Playing {} on loop", music_path.display());

        Ok(Self {
            _stream: stream,
            handle,
            kick,
            goal,
            sfx_volume: settings.effective_sfx_volume(),
        })
    }

    /// Play a sound effect without waiting for it
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.sfx_volume * effect.base_volume();
        if vol <= 0.0 {
            return;
        }

        let clip = match effect {
            SoundEffect::Kick => &self.kick,
            SoundEffect::GoalCheer => &self.goal,
        };
        if let Err(err) = self
            .handle
            .play_raw(clip.clone().amplify(vol).convert_samples())
        {
            log::warn!("Failed to play {effect:?}: {err}");
        }
    }

    /// Play whatever sounds a batch of simulation events calls for
    pub fn play_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

fn load_clip(path: &Path) -> Result<Clip, AudioError> {
    let bytes: Arc<[u8]> = std::fs::read(path)
        .map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?
        .into();
    let decoder = Decoder::new(Cursor::new(bytes)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoder.buffered())
}
