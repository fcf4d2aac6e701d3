//! Direct search over every rectangle
//!
//! Visits every `(height, width, y0, x0)` and keeps the highest scoring
//! rectangle. Shapes are handed to the worker pool in chunks of
//! `chunk_size`; each worker folds a private best over its shapes and the
//! worker bests are reduced into one winner.
//!
//! The search is generic over the channel type. The color engine runs it on
//! [`ColorSum`](crate::ColorSum) tables, where each candidate is scored
//! across all three channels at once.

use crate::best::better;
use crate::channels::Channels;
use crate::integral::IntegralImage;
use crate::score::{Scored, Scorer};
use rayon::prelude::*;
use rectseg_core::Rect;

/// Find the best scoring rectangle of the image behind `integral`
///
/// Returns `None` only for an image without pixels. Of several rectangles
/// with the same score, the first in search order is returned.
///
/// Runs on the current rayon pool.
pub fn direct_search<T: Channels>(
    integral: &IntegralImage<T>,
    chunk_size: usize,
) -> Option<Scored<T>> {
    let ny = integral.height();
    let nx = integral.width();
    let scorer = Scorer::new(integral);

    (0..ny * nx)
        .into_par_iter()
        .with_min_len(chunk_size.max(1))
        .fold(
            || None,
            |best, shape| {
                let (h, w) = (shape / nx + 1, shape % nx + 1);
                better(best, best_position(&scorer, h, w))
            },
        )
        .reduce(|| None, better)
}

/// Best position for one `height x width` shape, first maximum wins
pub fn best_position<T: Channels>(
    scorer: &Scorer<'_, T>,
    height: usize,
    width: usize,
) -> Option<Scored<T>> {
    let integral = scorer.integral();
    let ny = integral.height();
    let nx = integral.width();
    if height == 0 || width == 0 || height > ny || width > nx {
        return None;
    }

    let weights = scorer.weights(height, width);
    let mut best: Option<Scored<T>> = None;
    for y0 in 0..=ny - height {
        for x0 in 0..=nx - width {
            let scored = scorer.score_with(Rect::from_shape(y0, x0, height, width), &weights);
            if best.is_none_or(|b| scored.score > b.score) {
                best = Some(scored);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::ColorSum;

    fn block_table(ny: usize, nx: usize, block: Rect) -> IntegralImage<ColorSum> {
        IntegralImage::from_fn(ny, nx, |y, x| {
            if block.contains(y, x) {
                ColorSum::from_pixel([1.0, 0.5, 0.25])
            } else {
                ColorSum::default()
            }
        })
    }

    #[test]
    fn test_direct_finds_block() {
        let block = Rect::new(1, 2, 4, 5).unwrap();
        let table = block_table(6, 7, block);
        let best = direct_search(&table, 2).unwrap();
        assert_eq!(best.rect, block);
    }

    #[test]
    fn test_direct_single_pixel() {
        let table = IntegralImage::from_fn(1, 1, |_, _| ColorSum::from_pixel([0.2, 0.4, 0.6]));
        let best = direct_search(&table, 1).unwrap();
        assert_eq!(best.rect, Rect::full(1, 1));
        assert_eq!(best.outer_area, 0);
    }

    #[test]
    fn test_direct_zero_image_returns_first_candidate() {
        let table = IntegralImage::from_fn(3, 4, |_, _| ColorSum::default());
        let best = direct_search(&table, 2).unwrap();
        assert_eq!(best.rect, Rect::new(0, 0, 1, 1).unwrap());
        assert_eq!(best.score, 0.0);
    }

    #[test]
    fn test_direct_empty_image() {
        let table = IntegralImage::from_fn(0, 4, |_, _| ColorSum::default());
        assert!(direct_search(&table, 2).is_none());
        let table = IntegralImage::from_fn(4, 0, |_, _| ColorSum::default());
        assert!(direct_search(&table, 2).is_none());
    }

    #[test]
    fn test_best_position_rejects_oversized_shape() {
        let table = block_table(2, 2, Rect::full(1, 1));
        let scorer = Scorer::new(&table);
        assert!(best_position(&scorer, 3, 1).is_none());
        assert!(best_position(&scorer, 0, 1).is_none());
    }

    #[test]
    fn test_best_position_first_maximum_wins() {
        // Two identical bright pixels; a 1x1 window ties on both
        let table = IntegralImage::from_fn(1, 4, |_, x| if x == 1 || x == 3 { 1.0f64 } else { 0.0 });
        let scorer = Scorer::new(&table);
        let best = best_position(&scorer, 1, 1).unwrap();
        assert_eq!(best.rect, Rect::new(0, 1, 1, 2).unwrap());
    }
}
