//! Game settings and preferences
//!
//! Read once at startup from a JSON file. Nothing is ever written back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Environment variable overriding the settings file location
pub const SETTINGS_PATH_ENV: &str = "SOCCER_PONG_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding images, sounds and the font
    pub asset_dir: PathBuf,
    pub window_title: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Gameplay ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            window_title: "2-Player Soccer Pong".to_string(),

            master_volume: 1.0,
            music_volume: 0.5,
            sfx_volume: 1.0,
            muted: false,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Self::sanitized)
    }

    /// Clamp volumes and tuning into their valid ranges
    pub fn sanitized(mut self) -> Self {
        self.master_volume = unit_volume(self.master_volume);
        self.music_volume = unit_volume(self.music_volume);
        self.sfx_volume = unit_volume(self.sfx_volume);
        self.tuning = self.tuning.sanitized();
        self
    }

    /// Settings file path: env override, else `settings.json`
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load settings from `path`, falling back to defaults
    ///
    /// A missing file is normal; a malformed one is reported and ignored.
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(err) => {
                log::warn!("Could not read {}: {err}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Malformed settings in {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Effective music volume (respects mute)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Effective sound effect volume (respects mute)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

fn unit_volume(vol: f32) -> f32 {
    if vol.is_nan() { 0.0 } else { vol.clamp(0.0, 1.0) }
}
