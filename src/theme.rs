use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::motion::MotionCapability;

/// Key under which the preference is persisted.
pub const THEME_KEY: &str = "portfolio-theme";

const OVERLAY_PEAK_ALPHA: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownTheme;

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("theme must be \"light\" or \"dark\"")
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(UnknownTheme),
        }
    }
}

/// Where the theme preference lives between sessions. The application
/// adapts `eframe::Storage` to this; tests use [`MemoryStore`].
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// In-memory store, also the fallback when the host has no storage.
#[derive(Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_owned());
    }
}

/// Two-valued display mode with persistence and a brief crossfade replayed
/// on every applied change.
pub struct ThemeManager {
    mode: ThemeMode,
    /// True once the user has persisted a choice; environment preference
    /// changes are only honored while this is false.
    explicit: bool,
    fade_started: Option<f64>,
    motion: Arc<dyn MotionCapability>,
}

impl ThemeManager {
    /// Resolve the starting mode: saved preference, else the environment's
    /// reported preference, else dark.
    pub fn restore(
        saved: Option<&str>,
        environment: Option<ThemeMode>,
        motion: Arc<dyn MotionCapability>,
    ) -> Self {
        let (mode, explicit) = match saved.map(ThemeMode::from_str) {
            Some(Ok(mode)) => (mode, true),
            Some(Err(_)) | None => {
                if saved.is_some() {
                    log::warn!("ignoring invalid saved theme preference");
                }
                (environment.unwrap_or(ThemeMode::Dark), false)
            }
        };
        Self {
            mode,
            explicit,
            fade_started: None,
            motion,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Flip the mode and persist the result.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore, now: f64) {
        self.set(self.mode.flipped(), store, now);
    }

    /// Apply and persist a mode. Reapplying the current mode still replays
    /// the crossfade and rewrites the preference.
    pub fn set(&mut self, mode: ThemeMode, store: &mut dyn PreferenceStore, now: f64) {
        self.mode = mode;
        self.explicit = true;
        store.save(mode.as_str());
        self.fade_started = Some(now);
    }

    /// The environment's reported preference changed. Honored only while
    /// no explicit preference has been persisted; never persisted itself,
    /// so later environment changes keep being honored.
    pub fn environment_changed(&mut self, mode: ThemeMode, now: f64) {
        if self.explicit {
            return;
        }
        if self.mode != mode {
            self.mode = mode;
            self.fade_started = Some(now);
        }
    }

    /// Alpha of the crossfade overlay: up to the peak over the first half
    /// of the crossfade, back to zero over the second.
    pub fn overlay_alpha(&self, now: f64) -> f32 {
        let Some(started) = self.fade_started else {
            return 0.0;
        };
        let duration = self.motion.crossfade();
        if duration <= 0.0 {
            return 0.0;
        }
        let t = ((now - started) as f32 / duration).clamp(0.0, 1.0);
        if t >= 1.0 {
            0.0
        } else if t < 0.5 {
            OVERLAY_PEAK_ALPHA * (t / 0.5)
        } else {
            OVERLAY_PEAK_ALPHA * ((1.0 - t) / 0.5)
        }
    }
}
