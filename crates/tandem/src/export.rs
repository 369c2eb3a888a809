//! Writing finished canvases to files or streams.
//!
//! A [`Destination::Path`] is opened, written and closed here; the file is
//! released when it goes out of scope, including on write errors. A
//! [`Destination::Stream`] belongs to the caller and is only flushed.

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{debug, error, info};

use crate::{TandemError, backend::Canvas};

/// Where a rendered canvas is written.
pub enum Destination<'a> {
    /// A file path, created or truncated by [`save`].
    Path(&'a Path),
    /// An already-open stream owned by the caller.
    Stream(&'a mut dyn Write),
}

impl<'a> From<&'a Path> for Destination<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl fmt::Debug for Destination<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Stream(_) => f.write_str("Stream"),
        }
    }
}

/// Serializes `canvas` in its backend's native format to `destination`.
///
/// # Errors
///
/// Returns [`TandemError::Io`] if the file cannot be created or any write
/// fails. Nothing is retried.
///
/// # Examples
///
/// ```
/// use tandem::{
///     backend::{DiagramFactory, GridDiagramFactory},
///     export::{Destination, save},
/// };
///
/// let canvas = GridDiagramFactory::new().make_diagram(3, 2).unwrap();
/// let mut buffer = Vec::new();
/// save(canvas.as_ref(), Destination::Stream(&mut buffer)).unwrap();
/// assert_eq!(buffer, b"+-+\n+-+\n");
/// ```
pub fn save(canvas: &dyn Canvas, destination: Destination<'_>) -> Result<(), TandemError> {
    match destination {
        Destination::Path(path) => {
            let file_name = path.display().to_string();
            info!(file_name = file_name, backend = canvas.backend().name(); "Creating output file");

            let file = File::create(path).map_err(|err| {
                error!(file_name = file_name, err:err; "Failed to create output file");
                err
            })?;

            let mut writer = BufWriter::new(file);
            canvas
                .write_to(&mut writer)
                .and_then(|()| writer.flush())
                .map_err(|err| {
                    error!(file_name = file_name, err:err; "Failed to write diagram");
                    err
                })?;
        }
        Destination::Stream(out) => {
            debug!(backend = canvas.backend().name(); "Writing diagram to stream");
            canvas.write_to(out)?;
            out.flush()?;
        }
    }

    Ok(())
}
