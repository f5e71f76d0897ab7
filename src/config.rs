use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::particles::DEFAULT_PARTICLE_COUNT;

/// Runtime knobs read from an optional `portfolio.json` next to the
/// binary. Anything missing or malformed falls back to the defaults; a
/// broken config is never fatal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub particle_count: usize,
    pub reduced_motion: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            reduced_motion: false,
            window_width: 1100.0,
            window_height: 780.0,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                debug!("no config at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(error) => {
                warn!("ignoring malformed {}: {error}", path.display());
                Self::default()
            }
        }
    }
}
