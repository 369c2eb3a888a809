//! Character grid backend.
//!
//! The canvas is a mutable buffer of `char` cells with a one-cell border.
//! Shapes are small grids of their own that overwrite canvas cells at their
//! origin; the last shape added wins wherever shapes overlap.
//!
//! ```text
//! +----------------------------+
//! |   +--------------------+   |
//! |   |%%%%%%%%%%%%%%%%%%%%|   |
//! |   |%%Abstract Factory%%|   |
//! |   |%%%%%%%%%%%%%%%%%%%%|   |
//! |   +--------------------+   |
//! +----------------------------+
//! ```

use log::{debug, trace};

use tandem_core::{
    color::{Color, FillStyle},
    draw::{RectangleDefinition, TextDefinition},
    geometry::{Bounds, Point, Size},
};

use super::{Backend, Canvas, DiagramFactory, Shape, check_placement};
use crate::{TandemError, config::PlacementPolicy};

pub const BLANK: char = ' ';
pub const CORNER: char = '+';
pub const HORIZONTAL: char = '-';
pub const VERTICAL: char = '|';
/// Interior glyph of a [`FillStyle::Filled`] rectangle.
pub const SHADE: char = '%';

/// Builds a `size` grid with a one-cell border around `fill` cells.
///
/// `size` must already satisfy [`Size::require_bordered`].
fn bordered_cells(size: Size, fill: char) -> Vec<Vec<char>> {
    let (width, height) = (size.width(), size.height());
    let mut cells = vec![vec![fill; width]; height];

    for x in 1..width - 1 {
        cells[0][x] = HORIZONTAL;
        cells[height - 1][x] = HORIZONTAL;
    }
    for row in cells.iter_mut().take(height - 1).skip(1) {
        row[0] = VERTICAL;
        row[width - 1] = VERTICAL;
    }
    for (x, y) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
        cells[y][x] = CORNER;
    }

    cells
}

fn fill_glyph(style: FillStyle) -> char {
    match style {
        FillStyle::Plain => BLANK,
        FillStyle::Filled => SHADE,
    }
}

/// A shape rendered as a local grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridShape {
    origin: Point,
    cells: Vec<Vec<char>>,
}

impl GridShape {
    pub fn from_rectangle(rect: &RectangleDefinition) -> Self {
        Self {
            origin: rect.origin(),
            cells: bordered_cells(rect.size(), fill_glyph(rect.fill_style())),
        }
    }

    /// One row holding one cell per character. The font size is ignored.
    pub fn from_text(text: &TextDefinition) -> Self {
        Self {
            origin: text.origin(),
            cells: vec![text.content().chars().collect()],
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Local content, row by row.
    pub fn cells(&self) -> &[Vec<char>] {
        &self.cells
    }

    pub fn bounds(&self) -> Bounds {
        let width = self.cells.iter().map(Vec::len).max().unwrap_or_default();
        Bounds::new(self.origin, Size::new(width, self.cells.len()))
    }
}

/// A fixed-size character canvas with a border drawn at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCanvas {
    size: Size,
    cells: Vec<Vec<char>>,
    placements: Vec<Bounds>,
    placement: PlacementPolicy,
}

impl GridCanvas {
    /// Creates a bordered canvas with a blank interior.
    ///
    /// # Errors
    ///
    /// Returns [`TandemError::InvalidGeometry`] if either dimension is below 2.
    pub fn new(width: usize, height: usize) -> Result<Self, TandemError> {
        let size = Size::new(width, height).require_bordered()?;
        Ok(Self {
            size,
            cells: bordered_cells(size, BLANK),
            placements: Vec::new(),
            placement: PlacementPolicy::default(),
        })
    }

    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }

    /// Returns the glyph at column `x`, row `y`.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Iterates over the rows as strings, without line terminators.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }

    /// Composites a grid shape, dropping cells that fall outside the canvas.
    pub fn add_shape(&mut self, shape: &GridShape) -> Result<(), TandemError> {
        let bounds = shape.bounds();
        check_placement(self.placement, self.size, bounds)?;

        let mut dropped = 0usize;
        for (local_y, row) in shape.cells.iter().enumerate() {
            for (local_x, &glyph) in row.iter().enumerate() {
                let target = shape
                    .origin
                    .y()
                    .checked_add(local_y)
                    .zip(shape.origin.x().checked_add(local_x))
                    .and_then(|(y, x)| self.cells.get_mut(y)?.get_mut(x));
                match target {
                    Some(cell) => *cell = glyph,
                    None => dropped += 1,
                }
            }
        }
        if dropped > 0 {
            debug!(dropped = dropped, bounds:% = bounds; "Dropped cells outside the grid canvas");
        }

        self.placements.push(bounds);
        Ok(())
    }
}

impl Canvas for GridCanvas {
    fn backend(&self) -> Backend {
        Backend::Grid
    }

    fn size(&self) -> Size {
        self.size
    }

    fn add(&mut self, shape: Shape) -> Result<(), TandemError> {
        match shape {
            Shape::Grid(grid_shape) => self.add_shape(&grid_shape),
            other => Err(other.unsupported(Backend::Grid)),
        }
    }

    fn placements(&self) -> &[Bounds] {
        &self.placements
    }

    fn render(&self) -> String {
        let mut output = String::with_capacity((self.size.width() + 1) * self.size.height());
        for row in self.rows() {
            output.push_str(&row);
            output.push('\n');
        }
        output
    }
}

/// Factory for [`GridCanvas`] and [`GridShape`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridDiagramFactory {
    placement: PlacementPolicy,
}

impl GridDiagramFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }
}

impl DiagramFactory for GridDiagramFactory {
    fn backend(&self) -> Backend {
        Backend::Grid
    }

    fn make_diagram(&self, width: usize, height: usize) -> Result<Box<dyn Canvas>, TandemError> {
        trace!(width = width, height = height; "Creating grid canvas");
        Ok(Box::new(
            GridCanvas::new(width, height)?.with_placement(self.placement),
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
        Ok(Shape::Grid(GridShape::from_rectangle(&rect)))
    }

    fn make_text(&self, x: usize, y: usize, text: &str, font_size: usize) -> Shape {
        let text = TextDefinition::new(Point::new(x, y), text).with_font_size(font_size);
        Shape::Grid(GridShape::from_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn yellow() -> Color {
        Color::new("yellow").unwrap()
    }

    #[test]
    fn test_new_canvas_border() {
        let canvas = GridCanvas::new(5, 3).unwrap();
        assert_eq!(canvas.render(), "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn test_smallest_canvas_is_all_corners() {
        let canvas = GridCanvas::new(2, 2).unwrap();
        assert_eq!(canvas.render(), "++\n++\n");
    }

    #[test]
    fn test_degenerate_canvas_is_rejected() {
        assert!(matches!(
            GridCanvas::new(1, 7),
            Err(TandemError::InvalidGeometry(_))
        ));
        assert!(matches!(
            GridCanvas::new(30, 0),
            Err(TandemError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_rectangle_shape_fill_glyphs() {
        let plain = RectangleDefinition::new(Point::default(), Size::new(4, 3)).unwrap();
        let filled = plain.clone().with_fill(yellow());

        let plain = GridShape::from_rectangle(&plain);
        let filled = GridShape::from_rectangle(&filled);

        assert_eq!(plain.cells()[1], vec!['|', ' ', ' ', '|']);
        assert_eq!(filled.cells()[1], vec!['|', '%', '%', '|']);
        assert_eq!(filled.cells()[0], vec!['+', '-', '-', '+']);
    }

    #[test]
    fn test_text_shape_is_single_row() {
        let text = TextDefinition::new(Point::new(2, 1), "hi!").with_font_size(40);
        let shape = GridShape::from_text(&text);
        assert_eq!(shape.cells(), &[vec!['h', 'i', '!']]);
        assert_eq!(shape.bounds(), Bounds::new(Point::new(2, 1), Size::new(3, 1)));
    }

    #[test]
    fn test_add_overwrites_cells_at_offset() {
        let factory = GridDiagramFactory::new();
        let mut canvas = GridCanvas::new(8, 4).unwrap();
        let Shape::Grid(text) = factory.make_text(2, 1, "abc", 12) else {
            panic!("grid factory must produce grid shapes");
        };
        canvas.add_shape(&text).unwrap();

        assert_eq!(canvas.cell(1, 1), Some(' '));
        assert_eq!(canvas.cell(2, 1), Some('a'));
        assert_eq!(canvas.cell(4, 1), Some('c'));
        assert_eq!(canvas.cell(5, 1), Some(' '));
        assert_eq!(canvas.placements().len(), 1);
    }

    #[test]
    fn test_unchecked_overflow_drops_cells() {
        let factory = GridDiagramFactory::new();
        let mut canvas = factory.make_diagram(6, 3).unwrap();
        canvas
            .add(factory.make_text(3, 1, "overflow", 12))
            .unwrap();

        assert_eq!(canvas.render(), "+----+\n|  ove\n+----+\n");
        assert_eq!(canvas.size(), Size::new(6, 3));
    }

    #[test]
    fn test_strict_overflow_is_rejected() {
        let factory = GridDiagramFactory::new().with_placement(PlacementPolicy::Strict);
        let mut canvas = factory.make_diagram(6, 3).unwrap();
        let before = canvas.render();

        let err = canvas
            .add(factory.make_text(3, 1, "overflow", 12))
            .unwrap_err();

        assert!(matches!(err, TandemError::OutOfBounds { .. }));
        assert_eq!(canvas.render(), before);
        assert!(canvas.placements().is_empty());
    }

    #[test]
    fn test_svg_shape_is_unsupported() {
        let mut canvas = GridDiagramFactory::new().make_diagram(10, 5).unwrap();
        let svg_shape = crate::backend::SvgDiagramFactory::new().make_text(1, 1, "x", 12);

        let err = canvas.add(svg_shape).unwrap_err();
        assert!(matches!(
            err,
            TandemError::UnsupportedShape {
                expected: Backend::Grid,
                found: Backend::Svg
            }
        ));
    }

    #[test]
    fn test_far_origin_is_dropped_not_wrapped() {
        let factory = GridDiagramFactory::new();
        let mut canvas = factory.make_diagram(6, 3).unwrap();
        let before = canvas.render();

        canvas.add(factory.make_text(usize::MAX, 1, "ab", 12)).unwrap();
        canvas.add(factory.make_text(1, usize::MAX, "ab", 12)).unwrap();
        assert_eq!(canvas.render(), before);
        assert_eq!(canvas.placements().len(), 2);

        let strict = factory.with_placement(PlacementPolicy::Strict);
        let mut canvas = strict.make_diagram(6, 3).unwrap();
        assert!(matches!(
            canvas.add(strict.make_text(usize::MAX, 1, "ab", 12)),
            Err(TandemError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_last_write_wins() {
        let factory = GridDiagramFactory::new();
        let first = || factory.make_text(1, 1, "AAAA", 12);
        let second = || factory.make_text(3, 1, "BB", 12);

        let mut a_then_b = factory.make_diagram(8, 3).unwrap();
        a_then_b.add(first()).unwrap();
        a_then_b.add(second()).unwrap();

        let mut b_then_a = factory.make_diagram(8, 3).unwrap();
        b_then_a.add(second()).unwrap();
        b_then_a.add(first()).unwrap();

        assert_eq!(a_then_b.render().lines().nth(1), Some("|AABB  |"));
        assert_eq!(b_then_a.render().lines().nth(1), Some("|AAAA  |"));
    }

    proptest! {
        #[test]
        fn prop_border_is_exactly_the_perimeter(width in 2usize..40, height in 2usize..20) {
            let canvas = GridCanvas::new(width, height).unwrap();
            for y in 0..height {
                for x in 0..width {
                    let on_x_edge = x == 0 || x == width - 1;
                    let on_y_edge = y == 0 || y == height - 1;
                    let expected = match (on_x_edge, on_y_edge) {
                        (true, true) => CORNER,
                        (false, true) => HORIZONTAL,
                        (true, false) => VERTICAL,
                        (false, false) => BLANK,
                    };
                    prop_assert_eq!(canvas.cell(x, y), Some(expected));
                }
            }
            prop_assert_eq!(canvas.cell(width, 0), None);
            prop_assert_eq!(canvas.cell(0, height), None);
        }

        #[test]
        fn prop_render_has_fixed_line_width(width in 2usize..40, height in 2usize..20) {
            let canvas = GridCanvas::new(width, height).unwrap();
            let output = canvas.render();
            prop_assert_eq!(output.lines().count(), height);
            prop_assert!(output.lines().all(|line| line.chars().count() == width));
        }
    }
}
