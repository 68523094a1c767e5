//! Export functionality for Aureole placements.
//!
//! This module provides the [`Exporter`] trait that turns a computed
//! [`Placement`] into an output file. It is the last stage of the pipeline:
//!
//! ```text
//! Roster + container size
//!     ↓ layout
//! Placement (rings or spiral)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: animated SVG preview via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use std::path::Path;

use aureole_core::plan::Placement;

/// Abstraction for placement export backends.
pub trait Exporter {
    /// Exports a placement to `path` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the placement cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_placement(&self, placement: &Placement, path: &Path) -> Result<(), Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`AureoleError::Export`] at the crate boundary.
///
/// [`AureoleError::Export`]: crate::AureoleError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
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
