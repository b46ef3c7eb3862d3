//! Core types: handler response and the Handler trait.

/// Handler result for the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Message consumed; stop the chain.
    Stop,
}

impl HandlerResponse {
    pub fn is_stop(&self) -> bool {
        matches!(self, HandlerResponse::Stop)
    }
}

/// Single link in a chain. `M` is the message type flowing through the chain, `C` the out-of-band
/// context passed alongside it (unit for chains that need none).
///
/// The default [`Handler::handle`] forwards unconditionally, so pass-through handlers need no body.
pub trait Handler<M: ?Sized, C: ?Sized = ()>: Send + Sync {
    /// Processes the message. Return Stop to consume it; Continue hands it to the next handler.
    fn handle(&self, _message: &M, _context: &mut C) -> HandlerResponse {
        HandlerResponse::Continue
    }

    /// Name used in log fields. Defaults to the concrete type's path.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}
