//! Configuration types for Tandem rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and output settings.
//! - [`RenderConfig`] - SVG scale factor and the [`PlacementPolicy`].
//! - [`OutputConfig`] - Default destination paths for each backend.
//!
//! # Example
//!
//! ```
//! # use tandem::config::{AppConfig, PlacementPolicy};
//! let config = AppConfig::default();
//! assert_eq!(config.render().scale(), 20);
//! assert_eq!(config.render().placement(), PlacementPolicy::Unchecked);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::backend::Backend;

/// Vector units per logical unit unless configured otherwise.
pub const DEFAULT_SCALE: usize = 20;

/// Smallest accepted scale; font sizes are multiplied by `scale / 10`.
pub const MIN_SCALE: usize = 10;

/// Returns `scale` if it is at least [`MIN_SCALE`].
///
/// # Errors
///
/// Returns a description of the problem for smaller values.
pub fn check_scale(scale: usize) -> Result<usize, String> {
    if scale < MIN_SCALE {
        return Err(format!("scale must be at least {MIN_SCALE}, got {scale}"));
    }
    Ok(scale)
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    pub fn new(render: RenderConfig, output: OutputConfig) -> Self {
        Self { render, output }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Checks values that deserialize fine but cannot be rendered.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        self.render.validate()
    }
}

/// What to do with a shape that does not fit on its canvas.
///
/// Canvases never grow, whichever policy is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementPolicy {
    /// Accept the shape. The grid backend drops cells past the edge, the SVG
    /// backend emits the fragment as is.
    #[default]
    Unchecked,
    /// Reject the shape with [`TandemError::OutOfBounds`](crate::TandemError::OutOfBounds).
    Strict,
}

/// Rendering settings shared by both backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    scale: usize,
    placement: PlacementPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            placement: PlacementPolicy::default(),
        }
    }
}

impl RenderConfig {
    pub fn new(scale: usize, placement: PlacementPolicy) -> Self {
        Self { scale, placement }
    }

    /// Vector units per logical unit.
    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn placement(&self) -> PlacementPolicy {
        self.placement
    }

    pub fn validate(&self) -> Result<(), String> {
        check_scale(self.scale).map(|_| ())
    }
}

/// Default destinations for rendered diagrams.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    text: PathBuf,
    svg: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            text: PathBuf::from("diagram.txt"),
            svg: PathBuf::from("diagram.svg"),
        }
    }
}

impl OutputConfig {
    pub fn new(text: impl Into<PathBuf>, svg: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            svg: svg.into(),
        }
    }

    /// Returns the output path configured for `backend`.
    pub fn path_for(&self, backend: Backend) -> &Path {
        match backend {
            Backend::Grid => &self.text,
            Backend::Svg => &self.svg,
        }
    }
}
