//! SVG backend.
//!
//! The canvas keeps a fixed header and an ordered list of fragments, one per
//! shape. Nothing is ever overwritten: z-order is insertion order and the
//! viewer paints later fragments over earlier ones. Every canvas starts with
//! a full-size background rectangle.

use log::trace;
use svg::{
    Node,
    node::{self, element as svg_element},
};

use tandem_core::{
    color::Color,
    draw::{RectangleDefinition, TextDefinition},
    geometry::{Bounds, Point, Size},
};

use super::{Backend, Canvas, DiagramFactory, Shape, check_placement};
use crate::{
    TandemError,
    config::{DEFAULT_SCALE, PlacementPolicy, check_scale},
};

/// Font sizes are scaled by `scale / FONT_SCALE_DIVISOR`.
const FONT_SCALE_DIVISOR: usize = 10;

const DEFAULT_FONT_FAMILY: &str = "sans-serif";
const BACKGROUND_FILL: &str = "lightgreen";
const SVG_END: &str = "</svg>\n";

fn svg_header(pixel_size: Size) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 20010904//EN"
    "http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd">
<svg xmlns="http://www.w3.org/2000/svg"
    xmlns:xlink="http://www.w3.org/1999/xlink" xml:space="preserve"
    width="{}px" height="{}px">"#,
        pixel_size.width(),
        pixel_size.height()
    )
}

/// A shape rendered as one SVG fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgShape {
    bounds: Bounds,
    fragment: String,
}

impl SvgShape {
    /// # Errors
    ///
    /// Returns [`TandemError::InvalidGeometry`] if the scaled rectangle does
    /// not fit in `usize`.
    pub fn from_rectangle(rect: &RectangleDefinition, scale: usize) -> Result<Self, TandemError> {
        let scaled = rect.bounds().checked_scale(scale)?;
        let node = svg_element::Rectangle::new()
            .set("x", scaled.min_x())
            .set("y", scaled.min_y())
            .set("width", scaled.size().width())
            .set("height", scaled.size().height())
            .set("fill", rect.fill())
            .set("stroke", rect.stroke());

        Ok(Self {
            bounds: rect.bounds(),
            fragment: node.to_string(),
        })
    }

    /// Renders `text` as a single-line `<text>` element.
    ///
    /// Scaled coordinates and font size saturate at `usize::MAX`.
    pub fn from_text(text: &TextDefinition, scale: usize) -> Self {
        let position = text.origin().scale(scale);
        let font_size = text.font_size().saturating_mul(scale / FONT_SCALE_DIVISOR);

        // `svg_element::Text` breaks its label onto a separate line, which
        // `xml:space="preserve"` would render as extra whitespace.
        let mut element = svg_element::Element::new("text");
        element.assign("x", position.x());
        element.assign("y", position.y());
        element.assign("text-anchor", "left");
        element.assign("font-family", DEFAULT_FONT_FAMILY);
        element.assign("font-size", font_size);
        element.append(node::Text::new(text.content()));

        Self {
            bounds: text.bounds(),
            fragment: element.to_string(),
        }
    }

    /// Logical (unscaled) bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

/// A fixed-size SVG canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgCanvas {
    size: Size,
    scale: usize,
    header: String,
    fragments: Vec<String>,
    placements: Vec<Bounds>,
    placement: PlacementPolicy,
}

impl SvgCanvas {
    /// Creates a canvas holding only the background fragment.
    ///
    /// # Errors
    ///
    /// Returns [`TandemError::InvalidGeometry`] if either dimension is below 2
    /// or the scaled canvas does not fit in `usize`.
    pub fn new(width: usize, height: usize, scale: usize) -> Result<Self, TandemError> {
        let size = Size::new(width, height).require_bordered()?;
        let background = RectangleDefinition::new(Point::default(), size)?
            .with_fill(Color::new(BACKGROUND_FILL).map_err(TandemError::Config)?)
            .with_stroke(Color::black());

        let header = svg_header(size.checked_scale(scale)?);
        let background = SvgShape::from_rectangle(&background, scale)?;

        Ok(Self {
            size,
            scale,
            header,
            fragments: vec![background.fragment],
            placements: Vec::new(),
            placement: PlacementPolicy::default(),
        })
    }

    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Output dimensions in SVG units.
    pub fn pixel_size(&self) -> Size {
        self.size.scale(self.scale)
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// The background fragment followed by one fragment per added shape.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn add_shape(&mut self, shape: SvgShape) -> Result<(), TandemError> {
        check_placement(self.placement, self.size, shape.bounds)?;
        self.placements.push(shape.bounds);
        self.fragments.push(shape.fragment);
        Ok(())
    }
}

impl Canvas for SvgCanvas {
    fn backend(&self) -> Backend {
        Backend::Svg
    }

    fn size(&self) -> Size {
        self.size
    }

    fn add(&mut self, shape: Shape) -> Result<(), TandemError> {
        match shape {
            Shape::Svg(svg_shape) => self.add_shape(svg_shape),
            other => Err(other.unsupported(Backend::Svg)),
        }
    }

    fn placements(&self) -> &[Bounds] {
        &self.placements
    }

    fn render(&self) -> String {
        let mut output = self.header.clone();
        for fragment in &self.fragments {
            output.push('\n');
            output.push_str(fragment);
        }
        output.push('\n');
        output.push_str(SVG_END);
        output
    }
}

/// Factory for [`SvgCanvas`] and [`SvgShape`] values.
#[derive(Debug, Clone, Copy)]
pub struct SvgDiagramFactory {
    scale: usize,
    placement: PlacementPolicy,
}

impl Default for SvgDiagramFactory {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            placement: PlacementPolicy::default(),
        }
    }
}

impl SvgDiagramFactory {
    /// Creates a factory with the default scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory with a custom scale.
    ///
    /// # Errors
    ///
    /// Returns [`TandemError::Config`] if `scale` is below
    /// [`MIN_SCALE`](crate::config::MIN_SCALE),
    /// which would collapse every font size to zero.
    pub fn with_scale(scale: usize) -> Result<Self, TandemError> {
        let scale = check_scale(scale).map_err(TandemError::Config)?;
        Ok(Self {
            scale,
            ..Self::default()
        })
    }

    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }

    pub fn scale(&self) -> usize {
        self.scale
    }
}

impl DiagramFactory for SvgDiagramFactory {
    fn backend(&self) -> Backend {
        Backend::Svg
    }

    fn make_diagram(&self, width: usize, height: usize) -> Result<Box<dyn Canvas>, TandemError> {
        trace!(width = width, height = height, scale = self.scale; "Creating SVG canvas");
        Ok(Box::new(
            SvgCanvas::new(width, height, self.scale)?.with_placement(self.placement),
        ))
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
        let rect = RectangleDefinition::new(Point::new(x, y), Size::new(width, height))?
            .with_fill(*fill)
            .with_stroke(*stroke);
        Ok(Shape::Svg(SvgShape::from_rectangle(&rect, self.scale)?))
    }

    fn make_text(&self, x: usize, y: usize, text: &str, font_size: usize) -> Shape {
        let text = TextDefinition::new(Point::new(x, y), text).with_font_size(font_size);
        Shape::Svg(SvgShape::from_text(&text, self.scale))
    }
}
