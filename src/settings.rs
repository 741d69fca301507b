//! Game settings and preferences
//!
//! Persisted as JSON next to the high scores, separately from any run state.
//! A missing or corrupt file falls back to defaults instead of failing
//! startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Start muted
    pub muted: bool,

    // === HUD ===
    /// Show frame time in the status line
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            show_fps: false,
        }
    }
}

/// Data directory for settings and high scores. `SKYHOP_DATA_DIR` overrides
/// the default of the current directory, mainly for tests.
pub fn data_dir() -> PathBuf {
    std::env::var_os("SKYHOP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Settings {
    const FILE_NAME: &'static str = "skyhop_settings.json";

    fn path() -> PathBuf {
        data_dir().join(Self::FILE_NAME)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::path()) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings; failure is logged, never fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(Self::path(), json) {
                    log::warn!("Failed to save settings: {e}");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }
}
