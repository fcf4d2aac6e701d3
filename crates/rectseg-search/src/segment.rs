//! Search entry points
//!
//! Each call builds the integral image, runs the selected strategy on the
//! configured pool, re-scores the winning rectangle and assembles the
//! [`Segmentation`]. Nothing is kept between calls.

use crate::assemble::assemble;
use crate::channels::Channels;
use crate::direct::direct_search;
use crate::error::SearchResult;
use crate::integral::IntegralImage;
use crate::options::{SegmentOptions, Strategy};
use crate::score::{Scored, Scorer};
use crate::shape::shape_then_position_search;
use log::debug;
use rectseg_core::{ImageView, Segmentation};

/// Find the best separating rectangle of `image`
///
/// # Errors
///
/// Returns [`SearchError::InvalidParameters`](crate::SearchError) for
/// invalid options and [`SearchError::ThreadPool`](crate::SearchError) if a
/// dedicated pool cannot be started.
///
/// # Examples
///
/// ```
/// use rectseg_core::{ImageView, Rect};
/// use rectseg_search::{SegmentOptions, Strategy, segment};
///
/// // 3x3 gray image with one bright pixel in the middle
/// let mut data = vec![0.0f32; 3 * 3 * 3];
/// data[3 * 4..3 * 4 + 3].copy_from_slice(&[1.0, 1.0, 1.0]);
/// let image = ImageView::new(3, 3, &data).unwrap();
///
/// let options = SegmentOptions::new().with_strategy(Strategy::ShapeThenPosition);
/// let result = segment(&image, &options).unwrap();
/// assert_eq!(result.rect, Rect::new(1, 1, 2, 2).unwrap());
/// assert_eq!(result.inner, [1.0; 3]);
/// assert_eq!(result.outer, [0.0; 3]);
/// ```
pub fn segment(image: &ImageView<'_>, options: &SegmentOptions) -> SearchResult<Segmentation> {
    options.validate()?;
    debug!(
        "segment {}x{} strategy={:?} workers={} chunk={}",
        image.height(),
        image.width(),
        options.strategy,
        options.worker_count(),
        options.chunk_size
    );

    let result = match options.strategy {
        Strategy::Direct => {
            let integral = IntegralImage::from_color(image);
            let winner = options.install(|| direct_search(&integral, options.chunk_size))?;
            finish(&integral, winner)
        }
        Strategy::ShapeThenPosition => {
            let integral = IntegralImage::from_first_channel(image);
            let winner =
                options.install(|| shape_then_position_search(&integral, options.chunk_size))?;
            finish(&integral, winner)
        }
    };

    debug!(
        "segment result: rect=({}, {})..({}, {}) score={}",
        result.y0(),
        result.x0(),
        result.y1(),
        result.x1(),
        result.score
    );
    Ok(result)
}

/// Find the best separating rectangle of a three-channel color image
///
/// Uses the direct search with default options.
pub fn segment_color(image: &ImageView<'_>) -> SearchResult<Segmentation> {
    segment(image, &SegmentOptions::new().with_strategy(Strategy::Direct))
}

/// Find the best separating rectangle of a single-channel image
///
/// Only the first value of each three-value pixel is read. Uses the
/// shape-then-position search with default options.
pub fn segment_monochrome(image: &ImageView<'_>) -> SearchResult<Segmentation> {
    segment(
        image,
        &SegmentOptions::new().with_strategy(Strategy::ShapeThenPosition),
    )
}

/// Re-score the winner for exact sums and build the result
fn finish<T: Channels>(integral: &IntegralImage<T>, winner: Option<Scored<T>>) -> Segmentation {
    match winner {
        Some(best) => assemble(&Scorer::new(integral).score(best.rect)),
        None => Segmentation::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectseg_core::Rect;

    #[test]
    fn test_segment_rejects_invalid_options() {
        let data = vec![0.0f32; 3];
        let image = ImageView::new(1, 1, &data).unwrap();
        assert!(segment(&image, &SegmentOptions::new().with_chunk_size(0)).is_err());
        assert!(segment(&image, &SegmentOptions::new().with_threads(0)).is_err());
    }

    #[test]
    fn test_segment_empty_image() {
        let data: Vec<f32> = Vec::new();
        let image = ImageView::new(0, 0, &data).unwrap();
        assert_eq!(segment_color(&image).unwrap(), Segmentation::empty());
        assert_eq!(segment_monochrome(&image).unwrap(), Segmentation::empty());
    }

    #[test]
    fn test_segment_single_pixel() {
        let data = vec![0.25f32, 0.5, 0.75];
        let image = ImageView::new(1, 1, &data).unwrap();

        let color = segment_color(&image).unwrap();
        assert_eq!(color.rect, Rect::full(1, 1));
        assert_eq!(color.inner, [0.25, 0.5, 0.75]);
        assert_eq!(color.outer, [0.0; 3]);

        let mono = segment_monochrome(&image).unwrap();
        assert_eq!(mono.rect, Rect::full(1, 1));
        assert_eq!(mono.inner, [0.25; 3]);
        assert_eq!(mono.outer, [0.0; 3]);
    }

    #[test]
    fn test_segment_dedicated_pool() {
        let mut data = vec![0.0f32; 4 * 5 * 3];
        for x in 1..4 {
            data[3 * (x + 5 * 2)] = 1.0;
        }
        let image = ImageView::new(4, 5, &data).unwrap();
        let options = SegmentOptions::new().with_threads(2).with_chunk_size(1);
        let result = segment(&image, &options).unwrap();
        assert_eq!(result.rect, Rect::new(2, 1, 3, 4).unwrap());
    }
}
