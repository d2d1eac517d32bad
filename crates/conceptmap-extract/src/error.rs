//! Error types for knowledge-base loading.
//!
//! Extraction itself never fails; only building a [`KnowledgeBase`] from
//! external data can.
//!
//! [`KnowledgeBase`]: crate::KnowledgeBase

use std::ops::Range;

use thiserror::Error;

/// Failure to load or validate a knowledge base.
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    #[error("failed to parse knowledge base: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("subject key must not be empty")]
    EmptyKey,

    #[error("subject key `{0}` must be lowercase and trimmed")]
    KeyNotNormalized(String),

    #[error("subject `{0}` has no topics")]
    NoTopics(String),

    #[error("subject `{subject}` has an edge to unknown topic `{topic}`")]
    UnknownEdgeTopic { subject: String, topic: String },

    #[error("`{0}` cannot be linked to itself")]
    SelfLink(String),
}

impl KnowledgeBaseError {
    /// Byte range of the offending TOML, when the parser reported one.
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            Self::Parse(err) => err.span(),
            _ => None,
        }
    }

    /// Error message without the source excerpt the TOML parser adds.
    pub fn message(&self) -> String {
        match self {
            Self::Parse(err) => err.message().to_string(),
            _ => self.to_string(),
        }
    }

    /// Short help text shown next to the error in the CLI.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::Parse(_) => Some("check the TOML syntax of the knowledge base file"),
            Self::EmptyKey => None,
            Self::KeyNotNormalized(_) => {
                Some("subject keys are matched against lowercased input, write them in lowercase")
            }
            Self::NoTopics(_) => Some("add at least one entry to `topics`"),
            Self::UnknownEdgeTopic { .. } => {
                Some("every edge endpoint must also be listed in the subject's `topics`")
            }
            Self::SelfLink(_) => Some("remove the edge or use two different topics"),
        }
    }
}
