use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorError {
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Setup-time misuse of a chain. A broken chain is a programming error, so these surface at build time.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChainError {
    #[error("Handler {0} is already linked into this chain")]
    DuplicateHandler(&'static str),
}

pub type Result<T> = std::result::Result<T, CorError>;
