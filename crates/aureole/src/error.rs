//! Error types for Aureole operations.
//!
//! Placement itself never fails; [`AureoleError`] covers the edges around it:
//! reading rosters, validating configuration and exporting previews.

use std::io;

use thiserror::Error;

/// The main error type for Aureole operations.
///
/// # Diagnostic Variants
///
/// The `Roster` variant keeps the TOML source alongside the parse error so
/// callers can point at the offending span.
#[derive(Debug, Error)]
pub enum AureoleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid roster: {}", .err.message())]
    Roster { err: toml::de::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for AureoleError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl AureoleError {
    /// Create a new `Roster` error with the associated source text.
    pub fn new_roster_error(err: toml::de::Error, src: impl Into<String>) -> Self {
        Self::Roster {
            err,
            src: src.into(),
        }
    }
}
