//! Unit test module
//!
//! Debug pipeline unit tests live here, separate from source files.
//! Tests interact with processors and the toolkit via public and pub(crate) APIs.

mod toolkit_test;

use std::io;
use std::sync::{Arc, Mutex};

use crate::ConsoleSink;

/// Console sink that records every line; returns the sink and the shared buffer.
pub(crate) fn capture_console() -> (Arc<dyn ConsoleSink>, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = lines.clone();
    let sink = move |line: &str| -> io::Result<()> {
        sink_lines.lock().unwrap().push(line.to_string());
        Ok(())
    };
    (Arc::new(sink), lines)
}

/// Console sink that always fails.
pub(crate) fn broken_console() -> Arc<dyn ConsoleSink> {
    Arc::new(|_line: &str| -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"))
    })
}

/// Number of `*_state.json` files in `dir`.
pub(crate) fn state_file_count(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.file_name().to_string_lossy().ends_with("_state.json"))
                .count()
        })
        .unwrap_or(0)
}
