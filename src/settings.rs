//! Shell settings
//!
//! Loaded from a JSON file. Physics constants are not configurable here; these
//! only control how the shell drives and reports the simulation.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sim::StepOrder;

/// Environment variable naming a settings file
pub const SETTINGS_ENV: &str = "BOUNCE_PIT_SETTINGS";

/// Errors from reading a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Shell settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (None = seed from the clock at startup)
    pub seed: Option<u64>,
    /// Update/collision ordering within a tick
    pub step_order: StepOrder,

    // === Headless run ===
    /// Number of ticks to run before quitting
    pub frames: u32,
    /// Hold the spawn key for this many leading ticks
    pub spawn_frames: u32,
    /// Log a summary every N ticks (0 = never)
    pub log_every: u32,
    /// Print the final state as JSON on stdout
    pub dump_state: bool,

    // === Presentation ===
    /// Triangle segments per disc
    pub circle_segments: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            step_order: StepOrder::Interleaved,

            // 20 seconds at 75 Hz, spawning for the first 10
            frames: 1500,
            spawn_frames: 750,
            log_every: 75,
            dump_state: false,

            circle_segments: 32,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings path from the first CLI argument, else the environment
    pub fn locate(arg: Option<String>) -> Option<PathBuf> {
        arg.or_else(|| std::env::var(SETTINGS_ENV).ok())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                log::warn!("{}; using default settings", e);
                Self::default()
            }),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "step_order": "simultaneous" }"#)
            .expect("valid settings");
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.step_order, StepOrder::Simultaneous);
        assert_eq!(settings.frames, Settings::default().frames);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/bounce-pit/settings.json");
        assert!(matches!(Settings::load(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }

    #[test]
    fn test_locate_prefers_argument() {
        let path = Settings::locate(Some("custom.json".to_string()));
        assert_eq!(path, Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            seed: Some(42),
            dump_state: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        assert_eq!(Settings::from_json(&json).expect("parse"), settings);
    }
}
