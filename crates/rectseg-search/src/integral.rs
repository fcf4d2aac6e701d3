//! Integral image (summed area table) over channel vectors
//!
//! Each cell `(y, x)` holds the sum of every pixel in `[0, y) x [0, x)`.
//! The table carries one leading row and column of zeros, so it has
//! `(ny + 1) x (nx + 1)` cells and any rectangle sum is four lookups with
//! no boundary cases:
//!
//! ```text
//! sum[y0..y1, x0..x1] = t(y1, x1) - t(y1, x0) - t(y0, x1) + t(y0, x0)
//! ```
//!
//! # Examples
//!
//! ```
//! use rectseg_core::{ImageView, Rect};
//! use rectseg_search::IntegralImage;
//!
//! let data: Vec<f32> = vec![
//!     1.0, 0.0, 0.0,   2.0, 0.0, 0.0,
//!     3.0, 0.0, 0.0,   4.0, 0.0, 0.0,
//! ];
//! let image = ImageView::new(2, 2, &data).unwrap();
//! let table = IntegralImage::from_first_channel(&image);
//! assert_eq!(table.total(), 10.0);
//! assert_eq!(table.region_sum(&Rect::from_shape(1, 0, 1, 2)), 7.0);
//! ```

use crate::channels::{Channels, ColorSum};
use rectseg_core::{ImageView, Rect};

/// Zero-padded summed area table
#[derive(Debug, Clone)]
pub struct IntegralImage<T> {
    /// Cells in row-major order, `nx + 1` per row
    data: Vec<T>,
    /// Image rows (the table has one more)
    ny: usize,
    /// Image columns (the table has one more)
    nx: usize,
}

impl<T: Channels> IntegralImage<T> {
    /// Build the table from a per-pixel accessor
    ///
    /// The recursion is: `t(y+1,x+1) = v(y,x) + t(y+1,x) + t(y,x+1) - t(y,x)`
    /// and must run in row-major order.
    pub fn from_fn<F>(ny: usize, nx: usize, pixel: F) -> Self
    where
        F: Fn(usize, usize) -> T,
    {
        let stride = nx + 1;
        let mut data = vec![T::default(); (ny + 1) * stride];

        for y in 0..ny {
            let up = y * stride;
            let cur = up + stride;
            for x in 0..nx {
                data[cur + x + 1] = pixel(y, x)
                    .add(data[cur + x])
                    .add(data[up + x + 1])
                    .sub(data[up + x]);
            }
        }

        Self { data, ny, nx }
    }

    /// Number of image rows
    #[inline]
    pub fn height(&self) -> usize {
        self.ny
    }

    /// Number of image columns
    #[inline]
    pub fn width(&self) -> usize {
        self.nx
    }

    /// Number of image pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.ny * self.nx
    }

    /// Number of cells per table row
    #[inline]
    pub fn stride(&self) -> usize {
        self.nx + 1
    }

    /// Table cell `(y, x)` with `y <= ny`, `x <= nx`
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the padded table.
    #[inline(always)]
    pub fn get(&self, y: usize, x: usize) -> T {
        self.data[y * (self.nx + 1) + x]
    }

    /// Table row `y` (`nx + 1` cells)
    #[inline(always)]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * (self.nx + 1);
        &self.data[start..start + self.nx + 1]
    }

    /// Sum of every pixel in the image
    #[inline]
    pub fn total(&self) -> T {
        self.get(self.ny, self.nx)
    }

    /// Sum of the pixels inside `rect` by four-corner lookup
    #[inline(always)]
    pub fn region_sum(&self, rect: &Rect) -> T {
        debug_assert!(rect.fits(self.ny, self.nx));
        self.get(rect.y1, rect.x1)
            .sub(self.get(rect.y1, rect.x0))
            .sub(self.get(rect.y0, rect.x1))
            .add(self.get(rect.y0, rect.x0))
    }
}

impl IntegralImage<ColorSum> {
    /// Build a three-channel table from a color image
    pub fn from_color(image: &ImageView<'_>) -> Self {
        Self::from_fn(image.height(), image.width(), |y, x| {
            ColorSum::from_pixel(image.pixel(y, x))
        })
    }
}

impl IntegralImage<f64> {
    /// Build a single-channel table from the first channel of each pixel
    ///
    /// The buffer is still read with the three-value pixel stride; the
    /// second and third values of each pixel are ignored. Cells are
    /// widened exactly like the lanes of [`IntegralImage::from_color`].
    pub fn from_first_channel(image: &ImageView<'_>) -> Self {
        Self::from_fn(image.height(), image.width(), |y, x| {
            image.first_channel(y, x) as f64
        })
    }
}
