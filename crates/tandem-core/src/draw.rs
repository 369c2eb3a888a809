//! Backend-independent shape definitions.
//!
//! A definition describes *what* to draw in logical units. Backends turn a
//! definition into their own renderable content: a character grid or an SVG
//! fragment.

mod rectangle;
mod text;

pub use rectangle::RectangleDefinition;
pub use text::{DEFAULT_FONT_SIZE, TextDefinition};
