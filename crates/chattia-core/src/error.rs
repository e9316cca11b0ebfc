//! Error types for Chattia.

use thiserror::Error;

/// All errors that can occur in Chattia.
#[derive(Error, Debug)]
pub enum ChattiaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Corpus file not found: {0}")]
    MissingCorpus(String),

    #[error("Responder error: {0}")]
    Responder(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout Chattia.
pub type Result<T> = std::result::Result<T, ChattiaError>;
