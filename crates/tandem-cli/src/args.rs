//! Command-line argument definitions for the Tandem CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control which backends run, where their output
//! goes, configuration file selection, and logging verbosity.

use clap::Parser;

use tandem::Backend;

/// Command-line arguments for the Tandem diagram tool
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print every rendering to stdout instead of writing files
    #[arg(short = 'P', long)]
    pub print: bool,

    /// Render a single backend (grid or svg) instead of both
    #[arg(short, long)]
    pub backend: Option<Backend>,

    /// Path to the character grid output file
    #[arg(long)]
    pub text_output: Option<String>,

    /// Path to the SVG output file
    #[arg(long)]
    pub svg_output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Backends selected on the command line, in render order.
    pub fn backends(&self) -> Vec<Backend> {
        match self.backend {
            Some(backend) => vec![backend],
            None => Backend::ALL.to_vec(),
        }
    }

    /// Output path given on the command line for `backend`, if any.
    pub fn output_for(&self, backend: Backend) -> Option<&str> {
        match backend {
            Backend::Grid => self.text_output.as_deref(),
            Backend::Svg => self.svg_output.as_deref(),
        }
    }
}
