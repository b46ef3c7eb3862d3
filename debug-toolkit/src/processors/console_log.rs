use crate::console::ConsoleSink;
use crate::message::DebugMessage;
use cor_core::{Handler, HandlerResponse};
use std::sync::Arc;
use tracing::error;

/// Writes `ConsoleLogProcessor: <text>` to the console sink; always forwards.
#[derive(Clone)]
pub struct ConsoleLogProcessor {
    console: Arc<dyn ConsoleSink>,
}

impl ConsoleLogProcessor {
    pub fn new(console: Arc<dyn ConsoleSink>) -> Self {
        Self { console }
    }
}

impl Handler<Option<DebugMessage>> for ConsoleLogProcessor {
    fn handle(&self, message: &Option<DebugMessage>, _context: &mut ()) -> HandlerResponse {
        if let Some(message) = message {
            let line = format!("ConsoleLogProcessor: {}", message.text());
            if let Err(e) = self.console.write_line(&line) {
                error!(error = %e, "ConsoleLogProcessor: Failed to write to console");
            }
        }
        HandlerResponse::Continue
    }
}
