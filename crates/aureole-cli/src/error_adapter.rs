//! Error adapter for converting AureoleError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Roster errors keep
//! their TOML source, so they are rendered with a labeled snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use aureole::AureoleError;

/// Adapter for a roster parse error with its source text.
pub struct RosterDiagnostic<'a> {
    err: &'a toml::de::Error,
    src: &'a str,
}

impl<'a> RosterDiagnostic<'a> {
    pub fn new(err: &'a toml::de::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for RosterDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosterDiagnostic")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for RosterDiagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid roster: {}", self.err.message())
    }
}

impl std::error::Error for RosterDiagnostic<'_> {}

impl MietteDiagnostic for RosterDiagnostic<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("aureole::roster"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "each [[people]] entry needs an `image`; `name`, `link` and `reaction` are optional",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(self.err.message().to_string()), span),
        )))
    }
}

/// Adapter for non-diagnostic [`AureoleError`] variants.
///
/// This adapter handles errors that don't carry source text, such as I/O
/// errors, configuration errors and export errors.
pub struct ErrorAdapter<'a>(pub &'a AureoleError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            AureoleError::Io(_) => "aureole::io",
            AureoleError::Roster { .. } => "aureole::roster",
            AureoleError::Config(_) => "aureole::config",
            AureoleError::Export(_) => "aureole::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A roster error with source location information.
    Diagnostic(RosterDiagnostic<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert an [`AureoleError`] into a list of reportable errors.
pub fn to_reportables(err: &AureoleError) -> Vec<Reportable<'_>> {
    match err {
        AureoleError::Roster { err, src } => {
            vec![Reportable::Diagnostic(RosterDiagnostic::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use aureole::roster::Roster;

    use super::*;

    #[test]
    fn test_roster_error_is_diagnostic() {
        let src = "[[people]]\nname = \"Nobody\"\n";
        let err = Roster::from_toml_str(src).unwrap_err();

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let Reportable::Diagnostic(d) = &reportables[0] else {
            panic!("Expected Diagnostic");
        };
        assert!(d.to_string().starts_with("Invalid roster"));
        assert_eq!(d.code().unwrap().to_string(), "aureole::roster");
        assert!(d.source_code().is_some());
    }

    #[test]
    fn test_roster_syntax_error_has_label() {
        let src = "[[people]\nimage = \"a.jpg\"\n";
        let err = Roster::from_toml_str(src).unwrap_err();

        let reportables = to_reportables(&err);
        let labels: Vec<_> = reportables[0].labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].offset() < src.len());
    }

    #[test]
    fn test_config_error() {
        let err = AureoleError::Config("bad value".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad value");
                assert_eq!(e.code().unwrap().to_string(), "aureole::config");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_io_error_code() {
        let err = AureoleError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));

        let reportables = to_reportables(&err);
        assert_eq!(reportables[0].code().unwrap().to_string(), "aureole::io");
        assert!(reportables[0].labels().is_none());
    }
}
