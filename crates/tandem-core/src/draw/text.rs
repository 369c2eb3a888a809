use crate::geometry::{Bounds, Point, Size};

/// Font size used when a caller does not pick one.
pub const DEFAULT_FONT_SIZE: usize = 12;

/// A single-line text label.
///
/// In logical units a label is one row tall and one column per character.
/// The font size only affects backends that can render fonts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDefinition {
    origin: Point,
    content: String,
    font_size: usize,
}

impl TextDefinition {
    pub fn new(origin: Point, content: impl Into<String>) -> Self {
        Self {
            origin,
            content: content.into(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn with_font_size(mut self, font_size: usize) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn font_size(&self) -> usize {
        self.font_size
    }

    /// Logical size: character count by one row.
    pub fn size(&self) -> Size {
        Size::new(self.content.chars().count(), 1)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.origin, self.size())
    }
}
