//! Segmentation - Result of a rectangle search

use crate::rect::Rect;

/// The best separating rectangle and the mean color on each side of it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segmentation {
    /// Inner rectangle, `[y0, y1) x [x0, x1)`
    pub rect: Rect,
    /// Mean color of every pixel outside `rect`
    pub outer: [f32; 3],
    /// Mean color of every pixel inside `rect`
    pub inner: [f32; 3],
    /// Separation score of `rect`
    pub score: f64,
}

impl Segmentation {
    /// Result reported for an image without pixels
    ///
    /// The rectangle is empty and both means are zero.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Top row of the inner rectangle (inclusive)
    #[inline]
    pub fn y0(&self) -> usize {
        self.rect.y0
    }

    /// Left column of the inner rectangle (inclusive)
    #[inline]
    pub fn x0(&self) -> usize {
        self.rect.x0
    }

    /// Bottom row of the inner rectangle (exclusive)
    #[inline]
    pub fn y1(&self) -> usize {
        self.rect.y1
    }

    /// Right column of the inner rectangle (exclusive)
    #[inline]
    pub fn x1(&self) -> usize {
        self.rect.x1
    }
}
