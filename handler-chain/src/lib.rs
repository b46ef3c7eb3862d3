//! # Handler chain
//!
//! Runs an ordered sequence of handlers for each message. Each handler sees the message and the
//! shared context; the first handler that returns Stop consumes the message and ends the chain.
//! A message no handler claims falls off the end (no-op).

use cor_core::{ChainError, Handler, HandlerResponse};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered chain of handlers over messages `M` with context `C`. Built once, immutable afterwards.
pub struct HandlerChain<M: ?Sized, C: ?Sized = ()> {
    handlers: Vec<Arc<dyn Handler<M, C>>>,
}

impl<M: ?Sized, C: ?Sized> Clone for HandlerChain<M, C> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<M: ?Sized, C: ?Sized> Default for HandlerChain<M, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ?Sized, C: ?Sized> HandlerChain<M, C> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Links a handler after the current tail. Linking an instance that is already in the chain
    /// (including the tail itself) would make forwarding revisit it, so it is rejected.
    pub fn add_handler(mut self, handler: Arc<dyn Handler<M, C>>) -> Result<Self, ChainError> {
        let ptr = Arc::as_ptr(&handler) as *const ();
        if self
            .handlers
            .iter()
            .any(|h| Arc::as_ptr(h) as *const () == ptr)
        {
            return Err(ChainError::DuplicateHandler(handler.name()));
        }
        self.handlers.push(handler);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in dispatch order.
    pub fn names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Hands the message to each handler in order until one returns Stop.
    /// Returns Stop if the message was consumed, Continue if it fell off the end (or the chain is empty).
    #[instrument(skip_all, fields(handlers = self.handlers.len()))]
    pub fn handle(&self, message: &M, context: &mut C) -> HandlerResponse {
        debug!("step: handler_chain started");

        for handler in &self.handlers {
            let name = handler.name();
            debug!(handler = %name, "step: handler processing");
            let response = handler.handle(message, context);
            debug!(handler = %name, response = ?response, "step: handler done");

            if response.is_stop() {
                info!(handler = %name, "step: handler chain stopped by handler");
                return HandlerResponse::Stop;
            }
        }

        debug!("step: handler_chain finished, message unclaimed");
        HandlerResponse::Continue
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
