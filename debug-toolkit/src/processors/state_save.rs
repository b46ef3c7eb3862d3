use crate::message::DebugMessage;
use cor_core::{CorError, Handler, HandlerResponse, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Persists StateSave payloads to `<state_dir>/<state_name>_state.json`, overwriting any
/// previous file. Other messages pass through untouched.
#[derive(Debug, Clone)]
pub struct StateSaveProcessor {
    state_dir: PathBuf,
}

impl StateSaveProcessor {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    /// Path the given state name is saved to.
    pub fn state_file_path(&self, state_name: &str) -> PathBuf {
        self.state_dir.join(format!("{}_state.json", state_name))
    }

    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    fn save(&self, path: &Path, state_data: &std::result::Result<Value, String>) -> Result<()> {
        let state_data = state_data
            .as_ref()
            .map_err(|e| CorError::Serialization(e.clone()))?;
        let json = serde_json::to_string_pretty(state_data)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Handler<Option<DebugMessage>> for StateSaveProcessor {
    fn handle(&self, message: &Option<DebugMessage>, _context: &mut ()) -> HandlerResponse {
        if let Some(DebugMessage::StateSave {
            state_name,
            state_data,
        }) = message
        {
            let path = self.state_file_path(state_name);
            match self.save(&path, state_data) {
                Ok(()) => info!(
                    "StateSaveProcessor: State '{}' saved to '{}'",
                    state_name,
                    path.display()
                ),
                Err(e) => error!(
                    error = %e,
                    "StateSaveProcessor: Failed to save state '{}'",
                    state_name
                ),
            }
        }
        HandlerResponse::Continue
    }
}
