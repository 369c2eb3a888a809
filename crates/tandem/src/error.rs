//! Error types for Tandem operations.
//!
//! This module provides the main error type [`TandemError`] which wraps
//! every error condition that can occur while building or saving a diagram.
//! None of them are transient: each one ends the current build.

use std::io;

use thiserror::Error;

use tandem_core::geometry::{Bounds, GeometryError, Size};

use crate::backend::Backend;

/// The main error type for Tandem operations.
#[derive(Debug, Error)]
pub enum TandemError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    #[error("Shape {bounds} does not fit on a {canvas} canvas")]
    OutOfBounds { bounds: Bounds, canvas: Size },

    #[error("Unsupported shape: a {found} shape cannot be added to a {expected} canvas")]
    UnsupportedShape { expected: Backend, found: Backend },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
