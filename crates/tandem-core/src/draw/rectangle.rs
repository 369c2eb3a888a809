use crate::{
    color::{Color, FillStyle},
    geometry::{Bounds, GeometryError, Point, Size},
};

/// A bordered rectangle placed at an explicit logical position.
///
/// The fill defaults to white and the stroke to black.
///
/// # Examples
///
/// ```
/// use tandem_core::{
///     color::{Color, FillStyle},
///     draw::RectangleDefinition,
///     geometry::{Point, Size},
/// };
///
/// let rect = RectangleDefinition::new(Point::new(4, 1), Size::new(22, 5))
///     .unwrap()
///     .with_fill(Color::new("yellow").unwrap());
/// assert_eq!(rect.fill_style(), FillStyle::Filled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectangleDefinition {
    bounds: Bounds,
    fill: Color,
    stroke: Color,
}

impl RectangleDefinition {
    /// Creates a rectangle with the default fill and stroke.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if `size` cannot hold a border.
    pub fn new(origin: Point, size: Size) -> Result<Self, GeometryError> {
        let size = size.require_bordered()?;
        Ok(Self {
            bounds: Bounds::new(origin, size),
            fill: Color::white(),
            stroke: Color::black(),
        })
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn origin(&self) -> Point {
        self.bounds.origin()
    }

    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn fill(&self) -> &Color {
        &self.fill
    }

    pub fn stroke(&self) -> &Color {
        &self.stroke
    }

    /// Shortcut for `self.fill().fill_style()`.
    pub fn fill_style(&self) -> FillStyle {
        self.fill.fill_style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_defaults() {
        let rect = RectangleDefinition::new(Point::new(1, 2), Size::new(3, 4)).unwrap();
        assert_eq!(rect.origin(), Point::new(1, 2));
        assert_eq!(rect.size(), Size::new(3, 4));
        assert_eq!(rect.fill(), &Color::white());
        assert_eq!(rect.stroke(), &Color::black());
        assert_eq!(rect.fill_style(), FillStyle::Plain);
    }

    #[test]
    fn test_rectangle_rejects_degenerate_size() {
        let err = RectangleDefinition::new(Point::default(), Size::new(1, 4)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::Degenerate {
                width: 1,
                height: 4
            }
        );
    }

    #[test]
    fn test_rectangle_with_colors() {
        let rect = RectangleDefinition::new(Point::default(), Size::new(2, 2))
            .unwrap()
            .with_fill(Color::new("yellow").unwrap())
            .with_stroke(Color::new("red").unwrap());
        assert_eq!(rect.fill().to_string(), "yellow");
        assert_eq!(rect.stroke().to_string(), "red");
        assert_eq!(rect.fill_style(), FillStyle::Filled);
    }
}
