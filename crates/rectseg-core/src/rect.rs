//! Rect - Axis-aligned candidate rectangles
//!
//! A [`Rect`] spans the half-open region `[y0, y1) x [x0, x1)` of an image.
//! Coordinates are stored as corners rather than origin plus size because
//! every consumer indexes an integral image by its corners.

use crate::error::{Error, Result};

/// A half-open rectangle region
///
/// Small and `Copy`; the search hands rectangles around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top row (inclusive)
    pub y0: usize,
    /// Left column (inclusive)
    pub x0: usize,
    /// Bottom row (exclusive)
    pub y1: usize,
    /// Right column (exclusive)
    pub x1: usize,
}

impl Rect {
    /// Create a new rectangle from its corners
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRect`] if `y1 < y0` or `x1 < x0`.
    pub fn new(y0: usize, x0: usize, y1: usize, x1: usize) -> Result<Self> {
        if y1 < y0 || x1 < x0 {
            return Err(Error::InvalidRect { y0, x0, y1, x1 });
        }
        Ok(Self { y0, x0, y1, x1 })
    }

    /// Create a rectangle from its top-left corner and shape
    #[inline]
    pub const fn from_shape(y0: usize, x0: usize, height: usize, width: usize) -> Self {
        Self {
            y0,
            x0,
            y1: y0 + height,
            x1: x0 + width,
        }
    }

    /// The rectangle covering a whole `ny x nx` image
    #[inline]
    pub const fn full(ny: usize, nx: usize) -> Self {
        Self::from_shape(0, 0, ny, nx)
    }

    /// Height in rows
    #[inline]
    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }

    /// Width in columns
    #[inline]
    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    /// Number of pixels inside the rectangle
    #[inline]
    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    /// Check if the rectangle covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y0 == self.y1 || self.x0 == self.x1
    }

    /// Check if the rectangle lies within a `ny x nx` image
    #[inline]
    pub fn fits(&self, ny: usize, nx: usize) -> bool {
        self.y0 <= self.y1 && self.x0 <= self.x1 && self.y1 <= ny && self.x1 <= nx
    }

    /// Check if a pixel lies inside the rectangle
    #[inline]
    pub fn contains(&self, y: usize, x: usize) -> bool {
        y >= self.y0 && y < self.y1 && x >= self.x0 && x < self.x1
    }

    /// Position of this rectangle in the exhaustive search order
    ///
    /// Candidates are visited by height, then width, then top row, then
    /// left column. Of two equally scored candidates, the one with the
    /// smaller key is the one reported.
    #[inline]
    pub fn enumeration_key(&self) -> (usize, usize, usize, usize) {
        (self.height(), self.width(), self.y0, self.x0)
    }
}
