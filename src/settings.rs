//! Runtime configuration
//!
//! Small JSON-backed settings file for the bits worth tuning without a
//! rebuild: frame rate, the potentiometer's calibrated range, and an optional
//! fixed seed for reproducible runs. Court and object dimensions are fixed at
//! compile time in [`crate::consts`].
//!
//! Loading never fails: a missing or unreadable file falls back to defaults
//! with a log line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target frames per second
    pub frame_rate: u32,
    /// Lowest reading the analog input actually produces
    pub pot_min: f32,
    /// Highest reading the analog input actually produces
    pub pot_max: f32,
    /// Fixed RNG seed; `None` seeds from entropy each run
    pub seed: Option<u64>,
    /// Dump each frame as ASCII in the demo binary
    pub ascii_render: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            pot_min: POT_MIN,
            pot_max: POT_MAX,
            seed: None,
            ascii_render: true,
        }
    }
}

impl Settings {
    /// Load from a JSON file, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write back as pretty JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = Settings::default();
        assert_eq!(s.frame_rate, FRAME_RATE);
        assert_eq!(s.pot_min, POT_MIN);
        assert_eq!(s.pot_max, POT_MAX);
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let s = Settings::load(Path::new("/nonexistent/pico-pong.json"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("pico-pong-settings-test.json");
        let mut s = Settings::default();
        s.frame_rate = 30;
        s.seed = Some(1234);
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path), s);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = std::env::temp_dir();
        let path = dir.join("pico-pong-settings-partial.json");
        fs::write(&path, r#"{"frame_rate": 30}"#).unwrap();
        let s = Settings::load(&path);
        assert_eq!(s.frame_rate, 30);
        assert_eq!(s.pot_min, POT_MIN);
        let _ = fs::remove_file(&path);
    }
}
