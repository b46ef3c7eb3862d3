//! Processors of the debug pipeline, in dispatch order.
//!
//! All of them run over `Option<DebugMessage>` with no context. Only [`NullCheckProcessor`] ever
//! stops the chain; the others perform a best-effort effect and forward.

mod console_log;
mod file_log;
mod null_check;
mod state_save;

pub use console_log::ConsoleLogProcessor;
pub use file_log::FileLogProcessor;
pub use null_check::NullCheckProcessor;
pub use state_save::StateSaveProcessor;
