//! Sound effects and music
//!
//! All audio is fire-and-forget and optional. A missing file or an
//! unavailable output device downgrades to silence with a warning; nothing
//! here can stop the game from starting.

use std::path::Path;

use kira::manager::backend::DefaultBackend;
use kira::manager::{AudioManager, AudioManagerSettings};
use kira::sound::static_sound::{StaticSoundData, StaticSoundSettings};
use log::warn;

use crate::sim::GameEvent;

const LASER_VOLUME: f64 = 0.5;
const MUSIC_VOLUME: f64 = 0.4;

/// One-shot effects triggered by gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Laser fired
    Laser,
    /// Laser destroyed a meteor
    Impact,
}

/// Owns the output device and the decoded sounds
pub struct Audio {
    manager: Option<AudioManager<DefaultBackend>>,
    laser: Option<StaticSoundData>,
    impact: Option<StaticSoundData>,
}

impl Audio {
    /// Open the default output device and decode the sound files under
    /// `dir/audio`. Every failure is non-fatal.
    pub fn new(dir: &Path) -> Self {
        let manager = match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => Some(manager),
            Err(err) => {
                warn!("audio device unavailable, continuing silent: {err}");
                None
            }
        };

        let audio = dir.join("audio");
        let laser = load_sound(
            &audio.join("laser.wav"),
            StaticSoundSettings::new().volume(LASER_VOLUME),
        );
        let impact = load_sound(&audio.join("damage.ogg"), StaticSoundSettings::new());
        let music = load_sound(
            &audio.join("game_music.wav"),
            StaticSoundSettings::new()
                .volume(MUSIC_VOLUME)
                .loop_region(..),
        );

        let mut this = Self {
            manager,
            laser,
            impact,
        };
        // Music loops for the whole run; the handle is not needed again
        if let Some(music) = music {
            this.start(music);
        }
        this
    }

    /// Silent instance for tests and headless runs
    pub fn disabled() -> Self {
        Self {
            manager: None,
            laser: None,
            impact: None,
        }
    }

    /// Play a one-shot effect; missing sound or device is a no-op
    pub fn play(&mut self, effect: SoundEffect) {
        let sound = match effect {
            SoundEffect::Laser => self.laser.clone(),
            SoundEffect::Impact => self.impact.clone(),
        };
        if let Some(sound) = sound {
            self.start(sound);
        }
    }

    /// Map a tick's events onto effects
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::LaserFired => self.play(SoundEffect::Laser),
            GameEvent::MeteorShattered => self.play(SoundEffect::Impact),
            GameEvent::PlayerHit => {}
        }
    }

    fn start(&mut self, sound: StaticSoundData) {
        if let Some(manager) = &mut self.manager {
            if let Err(err) = manager.play(sound) {
                warn!("sound playback failed: {err}");
            }
        }
    }
}

fn load_sound(path: &Path, settings: StaticSoundSettings) -> Option<StaticSoundData> {
    match StaticSoundData::from_file(path) {
        Ok(sound) => Some(sound.with_settings(settings)),
        Err(err) => {
            warn!("sound {} unavailable, skipping: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_audio_ignores_everything() {
        let mut audio = Audio::disabled();
        audio.play(SoundEffect::Laser);
        audio.handle_event(GameEvent::MeteorShattered);
        audio.handle_event(GameEvent::PlayerHit);
    }
}
