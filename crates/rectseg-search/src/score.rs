//! Candidate scoring in constant time
//!
//! For a candidate rectangle the inner sum comes from four corner lookups in
//! the [`IntegralImage`] and the outer sum is the image total minus the inner
//! sum. The separation score is
//!
//! ```text
//! score = sum_c inner_c^2 / inner_area + outer_c^2 / outer_area
//! ```
//!
//! where a region with zero area contributes nothing. Reciprocal areas only
//! depend on the rectangle's shape, so loops over positions compute them once
//! through [`Scorer::weights`] and call [`Scorer::score_with`].

use crate::channels::Channels;
use crate::integral::IntegralImage;
use rectseg_core::Rect;

/// Region sizes and reciprocal areas for one rectangle shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights<S> {
    /// Pixels inside the rectangle
    pub inner_area: usize,
    /// Pixels outside the rectangle
    pub outer_area: usize,
    /// `1 / inner_area`, or zero for an empty region
    pub inv_inner: S,
    /// `1 / outer_area`, or zero for an empty region
    pub inv_outer: S,
}

/// A scored candidate rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<T: Channels> {
    /// Candidate rectangle
    pub rect: Rect,
    /// Channel sums inside `rect`
    pub inner: T,
    /// Channel sums outside `rect`
    pub outer: T,
    /// Pixels inside `rect`
    pub inner_area: usize,
    /// Pixels outside `rect`
    pub outer_area: usize,
    /// Separation score
    pub score: T::Scalar,
}

/// Scores candidate rectangles against one integral image
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a, T> {
    integral: &'a IntegralImage<T>,
    total: T,
    pixels: usize,
}

impl<'a, T: Channels> Scorer<'a, T> {
    /// Create a scorer for `integral`
    pub fn new(integral: &'a IntegralImage<T>) -> Self {
        Self {
            integral,
            total: integral.total(),
            pixels: integral.pixel_count(),
        }
    }

    /// The integral image being queried
    #[inline]
    pub fn integral(&self) -> &'a IntegralImage<T> {
        self.integral
    }

    /// Sum of every pixel in the image
    #[inline]
    pub fn total(&self) -> T {
        self.total
    }

    /// Region sizes and reciprocal areas for a `height x width` rectangle
    #[inline]
    pub fn weights(&self, height: usize, width: usize) -> Weights<T::Scalar> {
        let inner_area = height * width;
        debug_assert!(inner_area <= self.pixels);
        let outer_area = self.pixels - inner_area;
        Weights {
            inner_area,
            outer_area,
            inv_inner: T::inverse_area(inner_area),
            inv_outer: T::inverse_area(outer_area),
        }
    }

    /// Score `rect` using precomputed weights for its shape
    #[inline(always)]
    pub fn score_with(&self, rect: Rect, weights: &Weights<T::Scalar>) -> Scored<T> {
        let inner = self.integral.region_sum(&rect);
        let outer = self.total.sub(inner);
        Scored {
            rect,
            inner,
            outer,
            inner_area: weights.inner_area,
            outer_area: weights.outer_area,
            score: T::separation(inner, outer, weights.inv_inner, weights.inv_outer),
        }
    }

    /// Score `rect`
    pub fn score(&self, rect: Rect) -> Scored<T> {
        let weights = self.weights(rect.height(), rect.width());
        self.score_with(rect, &weights)
    }
}
