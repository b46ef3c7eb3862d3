//! # debug-toolkit
//!
//! Debug-message pipeline built on [`handler_chain::HandlerChain`]:
//! null check → console log → file log → state save.
//! [`DebugToolKit::log`] is the entry point; failures inside the pipeline are reported through
//! tracing and never returned to the caller.

pub mod config;
pub mod console;
pub mod message;
pub mod processors;
pub mod toolkit;

#[cfg(test)]
mod test;

pub use config::DebugConfig;
pub use console::{ConsoleSink, StdoutConsole, TracingConsole};
pub use message::DebugMessage;
pub use processors::{
    ConsoleLogProcessor, FileLogProcessor, NullCheckProcessor, StateSaveProcessor,
};
pub use toolkit::DebugToolKit;
