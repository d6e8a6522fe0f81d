// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sound name resolution with fallback to the default alarm sound

use crate::definition::DEFAULT_SOUND;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The sound a presentation should actually play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSound {
    /// Name the alarm asked for
    pub requested: String,
    /// Name to play
    pub name: String,
    /// True when `requested` was unknown and `name` is the default
    pub fallback: bool,
}

/// Known sound assets
///
/// An empty catalogue accepts any non-empty name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCatalog {
    default: String,
    known: BTreeSet<String>,
}

impl Default for SoundCatalog {
    fn default() -> Self {
        Self::permissive(DEFAULT_SOUND)
    }
}

impl SoundCatalog {
    pub fn new(default: impl Into<String>, known: impl IntoIterator<Item = String>) -> Self {
        Self {
            default: default.into(),
            known: known.into_iter().collect(),
        }
    }

    pub fn permissive(default: impl Into<String>) -> Self {
        Self::new(default, [])
    }

    pub fn default_sound(&self) -> &str {
        &self.default
    }

    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && (self.known.is_empty() || self.known.contains(name))
    }

    pub fn resolve(&self, requested: &str) -> ResolvedSound {
        if self.contains(requested) {
            return ResolvedSound {
                requested: requested.to_string(),
                name: requested.to_string(),
                fallback: false,
            };
        }
        tracing::warn!(requested, default = %self.default, "sound not found, using default");
        ResolvedSound {
            requested: requested.to_string(),
            name: self.default.clone(),
            fallback: true,
        }
    }
}
