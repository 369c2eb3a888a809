//! Color handling for Tandem diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the [`FillStyle`] classification that the grid
//! backend uses in place of real colors.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};

/// How a fill color is rendered by backends that cannot show colors.
///
/// Only two classes exist: a plain (white) interior and a shaded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillStyle {
    /// White fill, drawn as blank cells.
    Plain,
    /// Any other fill, drawn as shaded cells.
    Filled,
}

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let yellow = Color::new("yellow").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Opaque white, the default rectangle fill.
    pub fn white() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }

    /// Opaque black, the default stroke.
    pub fn black() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }

    /// Classifies this color as a fill.
    ///
    /// Opaque white in any notation is [`FillStyle::Plain`], everything else
    /// is [`FillStyle::Filled`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tandem_core::color::{Color, FillStyle};
    ///
    /// assert_eq!(Color::new("#fff").unwrap().fill_style(), FillStyle::Plain);
    /// assert_eq!(Color::new("yellow").unwrap().fill_style(), FillStyle::Filled);
    /// ```
    pub fn fill_style(&self) -> FillStyle {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if (rgba.r, rgba.g, rgba.b, rgba.a) == (255, 255, 255, 255) {
            FillStyle::Plain
        } else {
            FillStyle::Filled
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}
