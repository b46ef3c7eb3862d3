use crate::message::DebugMessage;
use cor_core::{Handler, HandlerResponse};
use tracing::error;

/// Stops the chain when the message is absent or carries no text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCheckProcessor;

impl Handler<Option<DebugMessage>> for NullCheckProcessor {
    fn handle(&self, message: &Option<DebugMessage>, _context: &mut ()) -> HandlerResponse {
        match message {
            Some(message) if !message.text().is_empty() => HandlerResponse::Continue,
            _ => {
                error!("NullCheckProcessor: Null message detected!");
                HandlerResponse::Stop
            }
        }
    }
}
