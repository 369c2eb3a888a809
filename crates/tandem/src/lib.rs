//! Tandem - compose a diagram once, render it as a character grid or SVG.
//!
//! Diagrams are built through a [`DiagramFactory`]: the factory hands out a
//! canvas and shapes for one backend, the caller composites the shapes in
//! order, and the finished canvas is serialized with [`export::save`].
//!
//! ```rust
//! use tandem::{Backend, DiagramBuilder};
//!
//! let builder = DiagramBuilder::default();
//! let text = builder.render(Backend::Grid).unwrap();
//! assert_eq!(text.lines().count(), 7);
//! ```

pub mod backend;
pub mod config;
pub mod export;

mod error;

pub use tandem_core::{color, draw, geometry};

pub use backend::{Backend, Canvas, DiagramFactory, Shape};
pub use error::TandemError;

use log::{debug, info, trace};

use color::Color;
use config::AppConfig;
use export::Destination;

/// Logical width of the diagram built by [`create_diagram`].
pub const DIAGRAM_WIDTH: usize = 30;
/// Logical height of the diagram built by [`create_diagram`].
pub const DIAGRAM_HEIGHT: usize = 7;
/// Label placed inside the rectangle by [`create_diagram`].
pub const DIAGRAM_LABEL: &str = "Abstract Factory";

/// Builds the sample diagram with whatever backend `factory` targets.
///
/// A `30x7` canvas receives a yellow `22x5` rectangle at `(4, 1)` and then a
/// text label at `(7, 3)`. Both backends produce the same placements.
///
/// # Errors
///
/// Propagates any [`TandemError`] raised by the factory or the canvas.
pub fn create_diagram(factory: &dyn DiagramFactory) -> Result<Box<dyn Canvas>, TandemError> {
    let fill = Color::new("yellow").map_err(TandemError::Config)?;

    let mut diagram = factory.make_diagram(DIAGRAM_WIDTH, DIAGRAM_HEIGHT)?;
    let rectangle = factory.make_rectangle(4, 1, 22, 5, &fill, &Color::black())?;
    let text = factory.make_text(7, 3, DIAGRAM_LABEL, draw::DEFAULT_FONT_SIZE);

    diagram.add(rectangle)?;
    diagram.add(text)?;

    trace!(backend = factory.backend().name(), placements = diagram.placements().len(); "Diagram assembled");
    Ok(diagram)
}

/// Builder for assembling and rendering diagrams with a configuration.
///
/// # Examples
///
/// ```rust
/// use tandem::{Backend, DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let svg = builder.render(Backend::Svg).expect("Failed to render");
/// assert!(svg.contains(r#"width="600px" height="140px""#));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a factory for `backend` configured from the render settings.
    ///
    /// # Errors
    ///
    /// Returns [`TandemError::Config`] for an unusable scale.
    pub fn factory(&self, backend: Backend) -> Result<Box<dyn DiagramFactory>, TandemError> {
        backend.factory(self.config.render())
    }

    /// Assembles the diagram for `backend`.
    pub fn build(&self, backend: Backend) -> Result<Box<dyn Canvas>, TandemError> {
        info!(backend = backend.name(); "Building diagram");
        let factory = self.factory(backend)?;
        let diagram = create_diagram(factory.as_ref())?;
        debug!(backend = backend.name(), size:% = diagram.size(); "Diagram built");
        Ok(diagram)
    }

    /// Assembles the diagram for `backend` and renders it to a string.
    pub fn render(&self, backend: Backend) -> Result<String, TandemError> {
        Ok(self.build(backend)?.render())
    }

    /// Assembles the diagram for `backend` and writes it to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`TandemError::Io`] if the destination cannot be written.
    pub fn save(&self, backend: Backend, destination: Destination<'_>) -> Result<(), TandemError> {
        let diagram = self.build(backend)?;
        export::save(diagram.as_ref(), destination)?;
        info!(backend = backend.name(); "Diagram saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{GridCanvas, GridDiagramFactory, SvgDiagramFactory};

    #[test]
    fn test_create_diagram_grid_output() {
        let diagram = create_diagram(&GridDiagramFactory::new()).unwrap();
        let expected = "\
+----------------------------+
|   +--------------------+   |
|   |%%%%%%%%%%%%%%%%%%%%|   |
|   |%%Abstract Factory%%|   |
|   |%%%%%%%%%%%%%%%%%%%%|   |
|   +--------------------+   |
+----------------------------+
";
        assert_eq!(diagram.render(), expected);
    }

    #[test]
    fn test_create_diagram_placements_order() {
        let diagram = create_diagram(&SvgDiagramFactory::new()).unwrap();
        let placements = diagram.placements();
        assert_eq!(placements.len(), 2);
        assert_eq!(placements[0].size(), geometry::Size::new(22, 5));
        assert_eq!(placements[1].origin(), geometry::Point::new(7, 3));
    }

    #[test]
    fn test_create_diagram_fails_for_mismatched_backend() {
        #[derive(Debug)]
        struct MixedFactory;

        impl DiagramFactory for MixedFactory {
            fn backend(&self) -> Backend {
                Backend::Grid
            }

            fn make_diagram(
                &self,
                width: usize,
                height: usize,
            ) -> Result<Box<dyn Canvas>, TandemError> {
                Ok(Box::new(GridCanvas::new(width, height)?))
            }

            fn make_rectangle(
                &self,
                x: usize,
                y: usize,
                width: usize,
                height: usize,
                fill: &Color,
                stroke: &Color,
            ) -> Result<Shape, TandemError> {
                SvgDiagramFactory::new().make_rectangle(x, y, width, height, fill, stroke)
            }

            fn make_text(&self, x: usize, y: usize, text: &str, font_size: usize) -> Shape {
                GridDiagramFactory::new().make_text(x, y, text, font_size)
            }
        }

        let err = create_diagram(&MixedFactory).unwrap_err();
        assert!(matches!(err, TandemError::UnsupportedShape { .. }));
    }

    #[test]
    fn test_builder_rejects_invalid_scale() {
        use config::{OutputConfig, PlacementPolicy, RenderConfig};

        let config = AppConfig::new(
            RenderConfig::new(1, PlacementPolicy::Unchecked),
            OutputConfig::default(),
        );
        let builder = DiagramBuilder::new(config);
        assert!(matches!(
            builder.build(Backend::Svg),
            Err(TandemError::Config(_))
        ));
        assert!(builder.build(Backend::Grid).is_ok());
    }
}
