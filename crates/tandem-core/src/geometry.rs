//! Geometric primitives for diagram composition.
//!
//! All geometry in Tandem is expressed in integer *logical units*. The grid
//! backend maps one logical unit to one character cell, the SVG backend
//! multiplies logical units by its scale factor.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in logical space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box defined by a top-left point and a size
//!
//! # Coordinate System
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! The origin is the top-left corner, X grows rightward and Y grows
//! downward, matching both terminal rows and SVG.

use std::fmt;

use thiserror::Error;

/// Smallest width or height that can still hold a one-cell border.
pub const MIN_BORDERED_EXTENT: usize = 2;

/// Errors produced while validating geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A bordered shape needs at least two cells in each direction.
    #[error("cannot draw a border around a {width}x{height} area (minimum is 2x2)")]
    Degenerate { width: usize, height: usize },

    /// Scaling pushed a coordinate or dimension past `usize::MAX`.
    #[error("{bounds} cannot be scaled by {factor} without overflowing")]
    Overflow { bounds: Bounds, factor: usize },
}

/// A 2D point in logical coordinate space.
///
/// # Examples
///
/// ```
/// # use tandem_core::geometry::Point;
/// let origin = Point::new(7, 3);
/// assert_eq!(origin.scale(20), Point::new(140, 60));
/// assert_eq!(Point::new(usize::MAX, 1).scale(2), Point::new(usize::MAX, 2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: usize,
    y: usize,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> usize {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> usize {
        self.y
    }

    /// Multiplies both coordinates by the given factor, saturating at
    /// `usize::MAX`.
    pub fn scale(self, factor: usize) -> Self {
        Self {
            x: self.x.saturating_mul(factor),
            y: self.y.saturating_mul(factor),
        }
    }

    fn checked_scale(self, factor: usize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_mul(factor)?,
            y: self.y.checked_mul(factor)?,
        })
    }

    /// Creates bounds with this point as the top-left corner.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new(self, size)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height in logical units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: usize,
    height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> usize {
        self.width
    }

    pub fn height(self) -> usize {
        self.height
    }

    /// Multiplies both dimensions by the given factor, saturating at
    /// `usize::MAX`.
    pub fn scale(self, factor: usize) -> Self {
        Self {
            width: self.width.saturating_mul(factor),
            height: self.height.saturating_mul(factor),
        }
    }

    /// Multiplies both dimensions by the given factor.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if either product exceeds `usize::MAX`.
    pub fn checked_scale(self, factor: usize) -> Result<Self, GeometryError> {
        self.checked_scale_inner(factor).ok_or(GeometryError::Overflow {
            bounds: Point::default().to_bounds(self),
            factor,
        })
    }

    fn checked_scale_inner(self, factor: usize) -> Option<Self> {
        Some(Self {
            width: self.width.checked_mul(factor)?,
            height: self.height.checked_mul(factor)?,
        })
    }

    /// Checks that a single-cell border fits into this size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when either dimension is below
    /// [`MIN_BORDERED_EXTENT`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use tandem_core::geometry::Size;
    /// assert!(Size::new(2, 2).require_bordered().is_ok());
    /// assert!(Size::new(1, 5).require_bordered().is_err());
    /// ```
    pub fn require_bordered(self) -> Result<Self, GeometryError> {
        if self.width < MIN_BORDERED_EXTENT || self.height < MIN_BORDERED_EXTENT {
            return Err(GeometryError::Degenerate {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An axis-aligned box anchored at its top-left corner.
///
/// The maximum coordinates are exclusive: a `Bounds` at `(4, 1)` with size
/// `22x5` covers columns `4..26` and rows `1..6`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    origin: Point,
    size: Size,
}

impl Bounds {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn origin(self) -> Point {
        self.origin
    }

    pub fn size(self) -> Size {
        self.size
    }

    pub fn min_x(self) -> usize {
        self.origin.x
    }

    pub fn min_y(self) -> usize {
        self.origin.y
    }

    /// Exclusive right edge, saturating at `usize::MAX`.
    pub fn max_x(self) -> usize {
        self.origin.x.saturating_add(self.size.width)
    }

    /// Exclusive bottom edge, saturating at `usize::MAX`.
    pub fn max_y(self) -> usize {
        self.origin.y.saturating_add(self.size.height)
    }

    /// Returns true if `other` lies entirely inside these bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tandem_core::geometry::{Bounds, Point, Size};
    /// let canvas = Bounds::new(Point::default(), Size::new(30, 7));
    /// assert!(canvas.contains(&Bounds::new(Point::new(4, 1), Size::new(22, 5))));
    /// assert!(!canvas.contains(&Bounds::new(Point::new(20, 1), Size::new(22, 5))));
    /// ```
    pub fn contains(&self, other: &Bounds) -> bool {
        other.min_x() >= self.min_x()
            && other.min_y() >= self.min_y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Scales both origin and size by the given factor.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Overflow`] if any scaled coordinate, or the
    /// scaled far edge, exceeds `usize::MAX`.
    pub fn checked_scale(self, factor: usize) -> Result<Self, GeometryError> {
        let overflow = GeometryError::Overflow {
            bounds: self,
            factor,
        };
        let origin = self.origin.checked_scale(factor).ok_or(overflow)?;
        let size = self.size.checked_scale_inner(factor).ok_or(overflow)?;
        origin.x.checked_add(size.width).ok_or(overflow)?;
        origin.y.checked_add(size.height).ok_or(overflow)?;
        Ok(Self { origin, size })
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.size, self.origin)
    }
}
