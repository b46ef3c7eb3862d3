//! Debug pipeline config: log file path and state directory. Loaded from env.

use cor_core::{CorError, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOG_FILE: &str = "debug_log.txt";
pub const DEFAULT_STATE_DIR: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// DEBUG_LOG_FILE: file the FileLogProcessor appends to
    pub log_file_path: PathBuf,
    /// STATE_DIR: directory `<name>_state.json` files are written to
    pub state_dir: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
        }
    }
}

impl DebugConfig {
    /// Load from environment variables. `log_file` overrides DEBUG_LOG_FILE if provided.
    pub fn load(log_file: Option<String>) -> Result<Self> {
        let log_file_path = log_file
            .or_else(|| env::var("DEBUG_LOG_FILE").ok())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let state_dir =
            env::var("STATE_DIR").unwrap_or_else(|_| DEFAULT_STATE_DIR.to_string());

        let config = Self {
            log_file_path: PathBuf::from(log_file_path),
            state_dir: PathBuf::from(state_dir),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_state_dir(mut self, state_dir: impl Into<PathBuf>) -> Self {
        self.state_dir = state_dir.into();
        self
    }

    /// Validate config (log file path must not be empty).
    pub fn validate(&self) -> Result<()> {
        if self.log_file_path.as_os_str().is_empty() {
            return Err(CorError::Config("DEBUG_LOG_FILE must not be empty".to_string()));
        }
        Ok(())
    }
}
