//! Error types for concept map operations.
//!
//! Extraction, layout and ordering are total. [`ConceptMapError`] covers the
//! stages that read external data or produce output.

use std::io;

use thiserror::Error;

use conceptmap_extract::KnowledgeBaseError;

/// The main error type for concept map operations.
///
/// The `KnowledgeBase` variant keeps the TOML source next to the error so
/// the CLI can point at the offending span.
#[derive(Debug, Error)]
pub enum ConceptMapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{err}")]
    KnowledgeBase { err: KnowledgeBaseError, src: String },

    #[error("Style error: {0}")]
    Style(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl ConceptMapError {
    /// Create a new `KnowledgeBase` error with the TOML source it was read from.
    pub fn new_knowledge_base_error(err: KnowledgeBaseError, src: impl Into<String>) -> Self {
        Self::KnowledgeBase {
            err,
            src: src.into(),
        }
    }
}

impl From<crate::export::Error> for ConceptMapError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
