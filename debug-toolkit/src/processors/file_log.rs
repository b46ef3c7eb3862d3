use crate::message::DebugMessage;
use chrono::Local;
use cor_core::{Handler, HandlerResponse};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::error;

/// Appends `<timestamp>: <text>` lines to a log file. Write failures are reported and the message
/// is still forwarded.
#[derive(Debug, Clone)]
pub struct FileLogProcessor {
    log_file_path: PathBuf,
}

impl FileLogProcessor {
    pub fn new(log_file_path: impl Into<PathBuf>) -> Self {
        Self {
            log_file_path: log_file_path.into(),
        }
    }

    pub fn log_file_path(&self) -> &Path {
        &self.log_file_path
    }

    fn append(&self, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)?;
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        file.write_all(format!("{}: {}\n", timestamp, text).as_bytes())
    }
}

impl Handler<Option<DebugMessage>> for FileLogProcessor {
    fn handle(&self, message: &Option<DebugMessage>, _context: &mut ()) -> HandlerResponse {
        if let Some(message) = message {
            if let Err(e) = self.append(&message.text()) {
                error!(
                    path = %self.log_file_path.display(),
                    error = %e,
                    "FileLogProcessor: Failed to write to log file"
                );
            }
        }
        HandlerResponse::Continue
    }
}
