//! Console sinks for [`crate::ConsoleLogProcessor`].

use std::io::{self, Write};
use tracing::info;

/// Destination of console log lines.
pub trait ConsoleSink: Send + Sync {
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Emits each line as an info event on target `console`. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl ConsoleSink for TracingConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        info!(target: "console", "{}", line);
        Ok(())
    }
}

/// Writes each line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl ConsoleSink for StdoutConsole {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

impl<F> ConsoleSink for F
where
    F: Fn(&str) -> io::Result<()> + Send + Sync,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        self(line)
    }
}
