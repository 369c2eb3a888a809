//! Error adapter for converting TandemError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tandem::{TandemError, geometry::GeometryError};

/// Adapter giving a [`TandemError`] a diagnostic code and, where a fix is
/// known, a help message.
pub struct ErrorAdapter<'a>(pub &'a TandemError);

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
            TandemError::InvalidGeometry(_) => "tandem::geometry",
            TandemError::OutOfBounds { .. } => "tandem::placement",
            TandemError::UnsupportedShape { .. } => "tandem::unsupported_shape",
            TandemError::Io(_) => "tandem::io",
            TandemError::Config(_) => "tandem::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            TandemError::InvalidGeometry(GeometryError::Degenerate { .. }) => {
                "canvases and rectangles need at least 2x2 cells"
            }
            TandemError::InvalidGeometry(GeometryError::Overflow { .. }) => {
                "use smaller coordinates or a smaller `render.scale`"
            }
            TandemError::OutOfBounds { .. } => {
                "move the shape inside the canvas or set `render.placement = \"unchecked\"`"
            }
            TandemError::UnsupportedShape { .. } => {
                "create the canvas and its shapes with the same factory"
            }
            TandemError::Config(_) => "check the configuration file passed with --config",
            TandemError::Io(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Wrap a [`TandemError`] so it can be rendered by miette.
pub fn to_reportable(err: &TandemError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

/// Renders `err` with miette's graphical handler.
///
/// Falls back to the plain error message if the report cannot be rendered.
pub fn render_report(err: &TandemError) -> String {
    let handler = miette::GraphicalReportHandler::new();
    let mut writer = String::new();
    match handler.render_report(&mut writer, &to_reportable(err)) {
        Ok(()) => writer,
        Err(_) => err.to_string(),
    }
}
