//! Error types for the lexigraph library.
//!
//! Absence of data is never an error here: lookups that find nothing return
//! empty collections or `None`. The variants below cover caller misuse
//! ([`LexigraphError::ContractViolation`]) and malformed ontology sources
//! rejected at load time ([`LexigraphError::Load`]).

use std::io;

use thiserror::Error;

/// The main error type for lexigraph operations.
#[derive(Error, Debug)]
pub enum LexigraphError {
    /// I/O errors while reading an ontology source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON deserialization errors for ontology documents.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed ontology source data (duplicate concept keys, dangling
    /// relation endpoints, ...). The load phase fails before anything is
    /// published to readers.
    #[error("Load error: {0}")]
    Load(String),

    /// Caller misuse: an empty concept set where at least one element is
    /// required, or a concept id not present in the graph. Distinct from a
    /// legitimate empty result.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexigraphError.
pub type Result<T> = std::result::Result<T, LexigraphError>;

impl LexigraphError {
    /// Create a new load error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Load(msg.into())
    }

    /// Create a new contract violation error.
    pub fn contract<S: Into<String>>(msg: S) -> Self {
        LexigraphError::ContractViolation(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexigraphError::Other(msg.into())
    }
}
