//! Error adapter for converting ConceptMapError to miette diagnostics.
//!
//! This module provides the bridge between the library's error type and
//! miette's rich diagnostic formatting used in the CLI. Knowledge-base parse
//! errors carry their TOML source and are shown with the offending span.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use conceptmap::ConceptMapError;

/// Adapter implementing [`MietteDiagnostic`] for [`ConceptMapError`].
pub struct ErrorAdapter<'a>(pub &'a ConceptMapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ConceptMapError::KnowledgeBase { err, .. } => {
                write!(f, "Invalid knowledge base: {}", err.message())
            }
            err => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            // The message already includes the underlying error.
            ConceptMapError::KnowledgeBase { .. } => None,
            err => err.source(),
        }
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            ConceptMapError::Io(_) => "conceptmap::io",
            ConceptMapError::Config(_) => "conceptmap::config",
            ConceptMapError::KnowledgeBase { .. } => "conceptmap::knowledge_base",
            ConceptMapError::Style(_) => "conceptmap::style",
            ConceptMapError::Export(_) => "conceptmap::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            ConceptMapError::KnowledgeBase { err, .. } => err
                .help()
                .map(|h| Box::new(h) as Box<dyn fmt::Display>),
            ConceptMapError::Style(_) => Some(Box::new(
                "use a CSS color such as \"#06b6d4\", \"rgb(6, 182, 212)\" or \"teal\"",
            ) as Box<dyn fmt::Display>),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            ConceptMapError::KnowledgeBase { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let ConceptMapError::KnowledgeBase { err, .. } = self.0 else {
            return None;
        };
        let span = err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            span,
        ))))
    }
}
