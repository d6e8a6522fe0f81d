// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Presenter that reports ringing sessions as lines of text

use super::{PresentError, PresenterAdapter};
use alclock_core::{AlarmId, Presentation};
use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Writes one line per present/dismiss to a shared writer (stdout by default)
#[derive(Clone)]
pub struct ConsolePresenter {
    out: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

impl ConsolePresenter {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
        }
    }

    pub fn stdout() -> Self {
        Self::default()
    }

    fn write_line(&self, line: &str) -> Result<(), PresentError> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{line}")
            .and_then(|()| out.flush())
            .map_err(|e| PresentError::Failed(e.to_string()))
    }
}

#[async_trait]
impl PresenterAdapter for ConsolePresenter {
    async fn present(&self, presentation: &Presentation) -> Result<(), PresentError> {
        let sound = &presentation.sound;
        let line = if sound.fallback {
            format!(
                "ringing: {} ({}) sound={} (fallback from {})",
                presentation.alarm_id, presentation.occurrence_id, sound.name, sound.requested
            )
        } else {
            format!(
                "ringing: {} ({}) sound={}",
                presentation.alarm_id, presentation.occurrence_id, sound.name
            )
        };
        self.write_line(&line)
    }

    async fn dismiss(&self, alarm_id: &AlarmId) -> Result<(), PresentError> {
        self.write_line(&format!("stopped: {alarm_id}"))
    }
}
