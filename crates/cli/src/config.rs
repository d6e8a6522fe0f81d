// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery

use crate::error::CliError;
use alclock_core::AlarmConfig;
use std::path::{Path, PathBuf};

/// `<config dir>/alclock/config.toml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("alclock").join("config.toml"))
}

/// Load the config named on the command line, else the default file, else defaults
///
/// An explicit path must exist; the default path is optional.
pub fn load(explicit: Option<&Path>) -> Result<AlarmConfig, CliError> {
    match explicit {
        Some(path) => AlarmConfig::load(path).map_err(|e| CliError::config(path, e)),
        None => match default_config_path() {
            Some(path) => {
                AlarmConfig::load_or_default(&path).map_err(|e| CliError::config(&path, e))
            }
            None => Ok(AlarmConfig::default()),
        },
    }
}
