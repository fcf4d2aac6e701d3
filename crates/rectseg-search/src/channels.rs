//! Per-pixel channel vectors stored in an integral image
//!
//! The search is written once against [`Channels`] and instantiated for two
//! cell types:
//!
//! - [`ColorSum`] - three color channels accumulated in `f64`, packed in a
//!   32-byte aligned four-lane vector so every cell update and score
//!   evaluation runs across all channels at once
//! - `f64` - a single channel, which lets the monochrome search pack
//!   neighbouring horizontal offsets into lanes instead
//!
//! Both accumulate in `f64` with the same per-lane arithmetic, so a gray
//! image scores identically per channel in either variant.

use std::fmt::Debug;

/// A channel vector that can be summed, differenced and scored
pub trait Channels: Copy + Default + Debug + Send + Sync {
    /// Precision in which sums and scores are evaluated
    type Scalar: Copy + PartialOrd + Debug + Send + Sync + Into<f64>;

    /// Lane-wise sum
    fn add(self, rhs: Self) -> Self;

    /// Lane-wise difference
    fn sub(self, rhs: Self) -> Self;

    /// Reciprocal of a pixel count, defined as zero for an empty region
    fn inverse_area(area: usize) -> Self::Scalar;

    /// Separation score of an inner/outer split
    ///
    /// Computes `sum_c inner_c^2 * inv_inner + outer_c^2 * inv_outer`.
    fn separation(
        inner: Self,
        outer: Self,
        inv_inner: Self::Scalar,
        inv_outer: Self::Scalar,
    ) -> Self::Scalar;

    /// Mean color of a region given its sum and reciprocal area
    ///
    /// Single-channel sums replicate their mean into all three slots.
    fn mean(self, inv_area: Self::Scalar) -> [f32; 3];

    /// Per-channel sums widened to `f64`
    fn channel_sums(self) -> [f64; 3];
}

/// Color channel sums packed into one aligned four-lane vector
///
/// Lanes 0-2 hold the color channels; lane 3 is padding and stays zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C, align(32))]
pub struct ColorSum(pub [f64; 4]);

impl ColorSum {
    /// Widen a three-channel pixel into a color sum
    #[inline]
    pub fn from_pixel(pixel: [f32; 3]) -> Self {
        Self([pixel[0] as f64, pixel[1] as f64, pixel[2] as f64, 0.0])
    }
}

impl Channels for ColorSum {
    type Scalar = f64;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        let mut out = [0.0; 4];
        for (i, lane) in out.iter_mut().enumerate() {
            *lane = self.0[i] + rhs.0[i];
        }
        Self(out)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        let mut out = [0.0; 4];
        for (i, lane) in out.iter_mut().enumerate() {
            *lane = self.0[i] - rhs.0[i];
        }
        Self(out)
    }

    #[inline]
    fn inverse_area(area: usize) -> f64 {
        if area == 0 { 0.0 } else { 1.0 / area as f64 }
    }

    #[inline(always)]
    fn separation(inner: Self, outer: Self, inv_inner: f64, inv_outer: f64) -> f64 {
        let mut sq = [0.0; 4];
        for (i, lane) in sq.iter_mut().enumerate() {
            *lane = inner.0[i] * inner.0[i] * inv_inner + outer.0[i] * outer.0[i] * inv_outer;
        }
        sq[0] + sq[1] + sq[2]
    }

    #[inline]
    fn mean(self, inv_area: f64) -> [f32; 3] {
        [
            (self.0[0] * inv_area) as f32,
            (self.0[1] * inv_area) as f32,
            (self.0[2] * inv_area) as f32,
        ]
    }

    #[inline]
    fn channel_sums(self) -> [f64; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }
}

impl Channels for f64 {
    type Scalar = f64;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn inverse_area(area: usize) -> f64 {
        if area == 0 { 0.0 } else { 1.0 / area as f64 }
    }

    #[inline(always)]
    fn separation(inner: Self, outer: Self, inv_inner: f64, inv_outer: f64) -> f64 {
        inner * inner * inv_inner + outer * outer * inv_outer
    }

    #[inline]
    fn mean(self, inv_area: f64) -> [f32; 3] {
        let m = (self * inv_area) as f32;
        [m, m, m]
    }

    #[inline]
    fn channel_sums(self) -> [f64; 3] {
        [self, self, self]
    }
}
