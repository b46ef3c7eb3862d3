//! Debug dispatcher: owns the fixed processor chain and exposes `log`.

use crate::config::DebugConfig;
use crate::console::{ConsoleSink, TracingConsole};
use crate::message::DebugMessage;
use crate::processors::{
    ConsoleLogProcessor, FileLogProcessor, NullCheckProcessor, StateSaveProcessor,
};
use cor_core::{HandlerResponse, Result};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{info, instrument};

/// Entry point of the debug pipeline: NullCheck → ConsoleLog → FileLog → StateSave.
#[derive(Clone)]
pub struct DebugToolKit {
    chain: HandlerChain<Option<DebugMessage>>,
}

impl DebugToolKit {
    /// Builds the chain with console output routed through tracing.
    pub fn new(config: &DebugConfig) -> Result<Self> {
        Self::with_console(config, Arc::new(TracingConsole))
    }

    pub fn with_console(config: &DebugConfig, console: Arc<dyn ConsoleSink>) -> Result<Self> {
        config.validate()?;

        let chain = HandlerChain::<Option<DebugMessage>>::new()
            .add_handler(Arc::new(NullCheckProcessor))?
            .add_handler(Arc::new(ConsoleLogProcessor::new(console)))?
            .add_handler(Arc::new(FileLogProcessor::new(&config.log_file_path)))?
            .add_handler(Arc::new(StateSaveProcessor::new(&config.state_dir)))?;

        info!(
            log_file = %config.log_file_path.display(),
            state_dir = %config.state_dir.display(),
            handlers = ?chain.names(),
            "DebugToolKit chain built"
        );

        Ok(Self { chain })
    }

    /// Dispatches a message (or `None`) to the head of the chain.
    /// Returns Stop when the null check rejected the message; failures are never returned.
    #[instrument(skip_all)]
    pub fn log(&self, message: impl Into<Option<DebugMessage>>) -> HandlerResponse {
        let message = message.into();
        self.chain.handle(&message, &mut ())
    }
}
