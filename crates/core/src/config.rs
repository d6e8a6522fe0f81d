// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is valid:
//!
//! ```toml
//! default_sound = "alarm1"
//! sounds = ["alarm1", "chime"]
//! snooze = "9m"
//! ring_timeout = "10m"
//! log_file = "/var/log/alclock.log"
//! ```

use crate::definition::DEFAULT_SOUND;
use crate::sound::SoundCatalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlarmConfig {
    #[serde(default = "default_sound")]
    pub default_sound: String,
    /// Known sound assets; empty accepts any name
    #[serde(default)]
    pub sounds: Vec<String>,
    /// Snooze delay used when the request does not carry one
    #[serde(default = "default_snooze", with = "humantime_serde")]
    pub snooze: Duration,
    /// Longest a single session keeps the device awake and ringing
    #[serde(default = "default_ring_timeout", with = "humantime_serde")]
    pub ring_timeout: Duration,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_sound() -> String {
    DEFAULT_SOUND.to_string()
}

fn default_snooze() -> Duration {
    Duration::from_secs(9 * 60)
}

fn default_ring_timeout() -> Duration {
    Duration::from_secs(10 * 60)
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            default_sound: default_sound(),
            sounds: Vec::new(),
            snooze: default_snooze(),
            ring_timeout: default_ring_timeout(),
            log_file: None,
        }
    }
}

impl AlarmConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AlarmConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load `path` if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn sound_catalog(&self) -> SoundCatalog {
        SoundCatalog::new(self.default_sound.clone(), self.sounds.iter().cloned())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_sound.is_empty() {
            return Err(ConfigError::Invalid("default_sound is empty".to_string()));
        }
        if !self.sounds.is_empty() && !self.sounds.contains(&self.default_sound) {
            return Err(ConfigError::Invalid(format!(
                "default_sound '{}' is not listed in sounds",
                self.default_sound
            )));
        }
        if self.ring_timeout.is_zero() {
            return Err(ConfigError::Invalid("ring_timeout must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
