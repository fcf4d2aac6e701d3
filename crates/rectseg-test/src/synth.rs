//! Synthetic test images and a brute-force reference search

use crate::error::{TestError, TestResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rectseg_core::{ImageView, PIXEL_STRIDE, Rect};

/// Build an image with one solid rectangle on a solid background
///
/// # Errors
///
/// Returns [`TestError::InvalidImage`] if `rect` does not fit the image.
pub fn block_image(
    ny: usize,
    nx: usize,
    rect: Rect,
    inner: [f32; 3],
    outer: [f32; 3],
) -> TestResult<Vec<f32>> {
    if !rect.fits(ny, nx) {
        return Err(TestError::InvalidImage {
            name: "block".into(),
            message: format!(
                "rect ({}, {})..({}, {}) does not fit {}x{}",
                rect.y0, rect.x0, rect.y1, rect.x1, ny, nx
            ),
        });
    }
    let mut data = Vec::with_capacity(ny * nx * PIXEL_STRIDE);
    for y in 0..ny {
        for x in 0..nx {
            let color = if rect.contains(y, x) { inner } else { outer };
            data.extend_from_slice(&color);
        }
    }
    Ok(data)
}

/// Build an image where every pixel has the same color
pub fn constant_image(ny: usize, nx: usize, color: [f32; 3]) -> Vec<f32> {
    color.repeat(ny * nx)
}

/// Build a reproducible random image with values in `[0, 1)`
pub fn random_image(ny: usize, nx: usize, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..ny * nx * PIXEL_STRIDE)
        .map(|_| rng.random::<f32>())
        .collect()
}

/// Spread single-channel values into a three-value-per-pixel buffer
///
/// Every channel of a pixel receives the same value.
pub fn replicate_mono(values: &[f32]) -> Vec<f32> {
    values.iter().flat_map(|&v| [v; PIXEL_STRIDE]).collect()
}

/// Sum of the first `channels` channels over `rect`, in f64
fn rect_sums(image: &ImageView<'_>, rect: Rect, channels: usize) -> [f64; 3] {
    let mut sums = [0.0f64; 3];
    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            let pixel = image.pixel(y, x);
            for c in 0..channels {
                sums[c] += pixel[c] as f64;
            }
        }
    }
    sums
}

/// Score one candidate by summing pixels directly
///
/// `channels` is 3 for color scoring and 1 for first-channel scoring. A
/// side with zero area contributes nothing.
pub fn brute_force_score(image: &ImageView<'_>, rect: Rect, channels: usize) -> f64 {
    let channels = channels.min(3);
    let full = Rect::full(image.height(), image.width());
    let total = rect_sums(image, full, channels);
    let inner = rect_sums(image, rect, channels);
    let inner_area = rect.area();
    let outer_area = full.area() - inner_area;

    let weight = |area: usize| if area == 0 { 0.0 } else { 1.0 / area as f64 };
    let (wi, wo) = (weight(inner_area), weight(outer_area));
    (0..channels)
        .map(|c| {
            let outer = total[c] - inner[c];
            inner[c] * inner[c] * wi + outer * outer * wo
        })
        .sum()
}

/// Exhaustive reference search
///
/// Enumerates candidates in (height, width, y0, x0) order and keeps the
/// first strictly better one. Returns `None` for an empty image.
pub fn brute_force_best(image: &ImageView<'_>, channels: usize) -> Option<(Rect, f64)> {
    let (ny, nx) = (image.height(), image.width());
    let mut best: Option<(Rect, f64)> = None;
    for h in 1..=ny {
        for w in 1..=nx {
            for y0 in 0..=ny - h {
                for x0 in 0..=nx - w {
                    let rect = Rect::from_shape(y0, x0, h, w);
                    let score = brute_force_score(image, rect, channels);
                    if best.is_none_or(|(_, s)| score > s) {
                        best = Some((rect, score));
                    }
                }
            }
        }
    }
    best
}
