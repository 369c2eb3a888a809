//! Output backends and the factory abstraction that hides them.
//!
//! A [`DiagramFactory`] produces a matched set of [`Canvas`] and [`Shape`]
//! values for one [`Backend`]. Code written against `&dyn DiagramFactory`
//! builds the same diagram whichever backend ends up rendering it.
//!
//! Canvases are plain owned values: `add` takes `&mut self` and nothing is
//! shared between diagrams, so compositing one canvas from several threads
//! needs external synchronization.

pub mod grid;
pub mod svg;

use std::{fmt, io, str::FromStr};

use log::{debug, trace};

use tandem_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

use crate::{
    TandemError,
    config::{PlacementPolicy, RenderConfig},
};

pub use grid::{GridCanvas, GridDiagramFactory, GridShape};
pub use svg::{SvgCanvas, SvgDiagramFactory, SvgShape};

/// The two output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Monospace character grid.
    Grid,
    /// SVG markup.
    Svg,
}

impl Backend {
    /// All backends, in the order the CLI renders them.
    pub const ALL: [Backend; 2] = [Backend::Grid, Backend::Svg];

    pub fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Svg => "svg",
        }
    }

    /// File extension of the native output format.
    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Grid => "txt",
            Self::Svg => "svg",
        }
    }

    /// Creates the factory for this backend.
    ///
    /// # Errors
    ///
    /// Returns [`TandemError::Config`] if `config` carries an unusable scale.
    pub fn factory(self, config: &RenderConfig) -> Result<Box<dyn DiagramFactory>, TandemError> {
        let factory: Box<dyn DiagramFactory> = match self {
            Self::Grid => Box::new(GridDiagramFactory::new().with_placement(config.placement())),
            Self::Svg => Box::new(
                SvgDiagramFactory::with_scale(config.scale())?
                    .with_placement(config.placement()),
            ),
        };
        debug!(backend = self.name(); "Factory created");
        Ok(factory)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" | "text" | "txt" => Ok(Self::Grid),
            "svg" => Ok(Self::Svg),
            _ => Err(format!("unknown backend `{s}` (expected `grid` or `svg`)")),
        }
    }
}

/// A backend-specific renderable unit, consumed by [`Canvas::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Grid(GridShape),
    Svg(SvgShape),
}

impl Shape {
    /// The backend this shape was rendered for.
    pub fn backend(&self) -> Backend {
        match self {
            Self::Grid(_) => Backend::Grid,
            Self::Svg(_) => Backend::Svg,
        }
    }

    /// The logical area this shape covers.
    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Grid(shape) => shape.bounds(),
            Self::Svg(shape) => shape.bounds(),
        }
    }

    fn unsupported(&self, expected: Backend) -> TandemError {
        TandemError::UnsupportedShape {
            expected,
            found: self.backend(),
        }
    }
}

/// A composition target owned by one backend.
///
/// Canvas dimensions are fixed at construction and never change.
pub trait Canvas: fmt::Debug {
    /// The backend that renders this canvas.
    fn backend(&self) -> Backend;

    /// Logical dimensions.
    fn size(&self) -> Size;

    /// Composites `shape` on top of everything added before it.
    ///
    /// # Errors
    ///
    /// - [`TandemError::UnsupportedShape`] if `shape` belongs to another backend.
    /// - [`TandemError::OutOfBounds`] if the shape crosses the canvas edge
    ///   under [`PlacementPolicy::Strict`].
    fn add(&mut self, shape: Shape) -> Result<(), TandemError>;

    /// Logical bounds of every shape added so far, in insertion order.
    fn placements(&self) -> &[Bounds];

    /// Serializes the canvas in the backend's native text format.
    fn render(&self) -> String;

    /// Writes [`Canvas::render`] output to `out`.
    fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()> {
        out.write_all(self.render().as_bytes())
    }
}

/// Builds canvases and shapes for exactly one backend.
///
/// The trait is object safe so the backend can be chosen at runtime.
pub trait DiagramFactory: fmt::Debug {
    fn backend(&self) -> Backend;

    /// Creates an empty canvas of `width` by `height` logical units.
    ///
    /// # Errors
    ///
    /// Returns [`TandemError::InvalidGeometry`] if either dimension is below 2.
    fn make_diagram(&self, width: usize, height: usize) -> Result<Box<dyn Canvas>, TandemError>;

    /// Creates a bordered rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`TandemError::InvalidGeometry`] if either dimension is below 2.
    fn make_rectangle(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        fill: &Color,
        stroke: &Color,
    ) -> Result<Shape, TandemError>;

    /// Creates a single-line text label.
    fn make_text(&self, x: usize, y: usize, text: &str, font_size: usize) -> Shape;
}

/// Applies `policy` to a shape about to be placed on a canvas of `canvas` size.
fn check_placement(
    policy: PlacementPolicy,
    canvas: Size,
    bounds: Bounds,
) -> Result<(), TandemError> {
    if Point::default().to_bounds(canvas).contains(&bounds) {
        return Ok(());
    }

    match policy {
        PlacementPolicy::Strict => Err(TandemError::OutOfBounds { bounds, canvas }),
        PlacementPolicy::Unchecked => {
            trace!(bounds:% = bounds, canvas:% = canvas; "Shape extends past the canvas edge");
            Ok(())
        }
    }
}
