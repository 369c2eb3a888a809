//! CLI logic for the Tandem diagram tool.
//!
//! The binary assembles the sample diagram with each selected backend and
//! either prints the results or writes them to their output files.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    io::{self, Write},
    path::Path,
};

use log::info;

use tandem::{
    Backend, DiagramBuilder, TandemError,
    export::{self, Destination},
};

/// Run the Tandem CLI application, reporting progress on stdout.
///
/// # Errors
///
/// Returns `TandemError` for:
/// - Configuration loading errors
/// - Geometry or placement errors while building the diagram
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), TandemError> {
    let stdout = io::stdout();
    run_with_output(args, &mut stdout.lock())
}

/// Run the Tandem CLI application, writing printed diagrams and progress
/// messages to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output(args: &Args, out: &mut dyn Write) -> Result<(), TandemError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config);

    for backend in args.backends() {
        let diagram = builder.build(backend)?;

        if args.print {
            export::save(diagram.as_ref(), Destination::Stream(&mut *out))?;
            continue;
        }

        let path = output_path(args, &builder, backend);
        export::save(diagram.as_ref(), Destination::Path(path))?;
        writeln!(out, "wrote {}", path.display())?;

        info!(backend = backend.name(), output_file = path.display().to_string(); "Diagram exported successfully");
    }

    Ok(())
}

/// Command-line output path for `backend`, falling back to the configuration.
fn output_path<'a>(args: &'a Args, builder: &'a DiagramBuilder, backend: Backend) -> &'a Path {
    args.output_for(backend)
        .map(Path::new)
        .unwrap_or_else(|| builder.config().output().path_for(backend))
}
