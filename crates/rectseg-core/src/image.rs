//! ImageView - Borrowed interleaved color image
//!
//! `ImageView` wraps a caller-owned `f32` buffer holding an `ny x nx` grid
//! of pixels, each stored as [`PIXEL_STRIDE`] interleaved channel values.
//! The view never copies or mutates the buffer.
//!
//! # Examples
//!
//! ```
//! use rectseg_core::ImageView;
//!
//! // 2x2 image, three channels per pixel
//! let data: Vec<f32> = vec![
//!     0.1, 0.2, 0.3,   0.4, 0.5, 0.6,
//!     0.7, 0.8, 0.9,   1.0, 1.0, 1.0,
//! ];
//! let image = ImageView::new(2, 2, &data).unwrap();
//! assert_eq!(image.pixel(1, 0), [0.7, 0.8, 0.9]);
//! assert_eq!(image.first_channel(0, 1), 0.4);
//! ```

use crate::error::{Error, Result};

/// Number of interleaved values stored per pixel
///
/// Monochrome images use the same layout and only read the first value.
pub const PIXEL_STRIDE: usize = 3;

/// Read-only view of an interleaved pixel buffer
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. Channel `c` of the
/// pixel at row `y`, column `x` is at index `c + 3 * (x + nx * y)`.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a> {
    /// Number of rows
    ny: usize,
    /// Number of columns
    nx: usize,
    /// Interleaved channel values
    data: &'a [f32],
}

impl<'a> ImageView<'a> {
    /// Create a view over `data`
    ///
    /// Zero rows or columns are allowed and describe an empty image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionOverflow`] if `ny * nx * 3` overflows, and
    /// [`Error::BufferLength`] if `data` does not hold exactly that many
    /// values.
    pub fn new(ny: usize, nx: usize, data: &'a [f32]) -> Result<Self> {
        let expected = ny
            .checked_mul(nx)
            .and_then(|n| n.checked_mul(PIXEL_STRIDE))
            .ok_or(Error::DimensionOverflow { ny, nx })?;

        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { ny, nx, data })
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.ny
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> usize {
        self.nx
    }

    /// Total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.ny * self.nx
    }

    /// Check if the image has no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ny == 0 || self.nx == 0
    }

    /// The underlying interleaved buffer
    #[inline]
    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    /// All channels of the pixel at row `y`, column `x`
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the image.
    #[inline]
    pub fn pixel(&self, y: usize, x: usize) -> [f32; PIXEL_STRIDE] {
        let base = PIXEL_STRIDE * (x + self.nx * y);
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    /// First channel of the pixel at row `y`, column `x`
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the image.
    #[inline]
    pub fn first_channel(&self, y: usize, x: usize) -> f32 {
        self.data[PIXEL_STRIDE * (x + self.nx * y)]
    }

    /// Pixels of row `y` as interleaved channel values
    #[inline]
    pub fn row(&self, y: usize) -> &'a [f32] {
        let start = PIXEL_STRIDE * self.nx * y;
        &self.data[start..start + PIXEL_STRIDE * self.nx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_rejects_wrong_length() {
        let data = vec![0.0f32; 11];
        let err = ImageView::new(2, 2, &data).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferLength {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_view_rejects_overflow() {
        let data: Vec<f32> = Vec::new();
        assert!(matches!(
            ImageView::new(usize::MAX, 2, &data),
            Err(Error::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn test_view_allows_empty() {
        let data: Vec<f32> = Vec::new();
        let view = ImageView::new(0, 5, &data).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.pixel_count(), 0);
    }

    #[test]
    fn test_view_indexing() {
        let data: Vec<f32> = (0..18).map(|v| v as f32).collect();
        let view = ImageView::new(2, 3, &data).unwrap();
        assert_eq!(view.height(), 2);
        assert_eq!(view.width(), 3);
        assert_eq!(view.pixel(0, 0), [0.0, 1.0, 2.0]);
        assert_eq!(view.pixel(1, 2), [15.0, 16.0, 17.0]);
        assert_eq!(view.first_channel(1, 0), 9.0);
        assert_eq!(view.row(1).len(), 9);
        assert_eq!(view.row(1)[0], 9.0);
    }
}
