//! Export of laid-out concept maps.
//!
//! The [`Exporter`] trait is the last pipeline stage:
//!
//! ```text
//! Text
//!     ↓ extract
//! Graph
//!     ↓ layout
//! Layout
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — in-memory SVG documents via [`svg::SvgBuilder`]

pub mod svg;

use std::{fmt, io};

use crate::layout::Layout;

/// Abstraction for export backends.
pub trait Exporter {
    /// Exports a layout to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted, or
    /// [`Error::Io`] if writing the output fails.
    fn export_layout(&mut self, layout: &Layout) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`ConceptMapError::Export`] at the crate boundary.
///
/// [`ConceptMapError::Export`]: crate::ConceptMapError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
