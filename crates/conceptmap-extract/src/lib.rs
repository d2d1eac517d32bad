//! # Concept Map Extract
//!
//! Turns free text into a topic graph. The crate holds the keyword
//! [`KnowledgeBase`] and the [`Extractor`] that matches it against input.
//!
//! ## Usage
//!
//! ```
//! use conceptmap_extract::{Extractor, KnowledgeBase};
//!
//! let kb = KnowledgeBase::builtin();
//! let graph = Extractor::new(&kb).extract("I am studying Database Systems basics");
//!
//! assert!(graph.labels().any(|label| label == "Normalization"));
//! ```
//!
//! Extraction is total: every input, including the empty string, produces a
//! valid graph. Only loading a knowledge base from TOML can fail, with a
//! [`KnowledgeBaseError`].

pub mod error;
pub mod knowledge_base;
pub mod scan;

mod extractor;

pub use error::KnowledgeBaseError;
pub use extractor::{
    DEFAULT_TOPICS, ExtractOptions, Extractor, MAX_FALLBACK_TOPICS, TopicSource,
};
pub use knowledge_base::{KnowledgeBase, Subject};
