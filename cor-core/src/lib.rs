//! # cor-core
//!
//! Core types and traits shared by the pipelines: [`Handler`], [`HandlerResponse`], error types,
//! and tracing initialization. Pipeline-agnostic; used by handler-chain, debug-toolkit and quest-manager.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{ChainError, CorError, Result};
pub use logger::init_tracing;
pub use types::{Handler, HandlerResponse};
