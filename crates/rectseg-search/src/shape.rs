//! Shape-then-position search for single-channel images
//!
//! The search runs in two phases:
//!
//! 1. **Shape phase** (parallel): for every `(height, width)` shape, find the
//!    best score over all positions but forget where it was found. Positions
//!    along a row are scored [`LANES`](crate::lanes::LANES) at a time by
//!    [`row_max`]. Workers fold a private best shape and the worker bests are
//!    reduced into one.
//! 2. **Position phase** (single-threaded): re-scan every position of the
//!    winning shape with the scalar [`Scorer`] and keep the first position
//!    reaching the maximum, together with its region sums.
//!
//! Only the shape travels through the parallel reduction; the position is
//! recovered by one extra scan over `O(ny * nx)` positions.

use crate::best::{Ranked, better};
use crate::direct::best_position;
use crate::integral::IntegralImage;
use crate::lanes::row_max;
use crate::score::{Scored, Scorer};
use log::trace;
use rayon::prelude::*;

/// Best score reached by any position of one rectangle shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeScore {
    /// Rectangle height
    pub height: usize,
    /// Rectangle width
    pub width: usize,
    /// Best separation score over all positions
    pub score: f64,
}

impl Ranked for ShapeScore {
    type Score = f64;

    #[inline]
    fn rank_score(&self) -> f64 {
        self.score
    }

    #[inline]
    fn rank_key(&self) -> (usize, usize, usize, usize) {
        (self.height, self.width, 0, 0)
    }
}

/// Best score of one shape over every position
///
/// Returns `None` if the shape is empty or does not fit the image.
pub fn shape_max(scorer: &Scorer<'_, f64>, height: usize, width: usize) -> Option<ShapeScore> {
    let integral = scorer.integral();
    if height == 0 || width == 0 || height > integral.height() || width > integral.width() {
        return None;
    }
    let weights = scorer.weights(height, width);
    let total = scorer.total();

    let mut score = f64::NEG_INFINITY;
    for y0 in 0..=integral.height() - height {
        let row_best = row_max(
            integral.row(y0),
            integral.row(y0 + height),
            width,
            total,
            weights.inv_inner,
            weights.inv_outer,
        );
        score = score.max(row_best);
    }

    Some(ShapeScore {
        height,
        width,
        score,
    })
}

/// Shape phase: the best scoring rectangle shape
///
/// Returns `None` only for an image without pixels. Runs on the current
/// rayon pool.
pub fn best_shape(integral: &IntegralImage<f64>, chunk_size: usize) -> Option<ShapeScore> {
    let ny = integral.height();
    let nx = integral.width();
    let scorer = Scorer::new(integral);

    (0..ny * nx)
        .into_par_iter()
        .with_min_len(chunk_size.max(1))
        .fold(
            || None,
            |best, shape| better(best, shape_max(&scorer, shape / nx + 1, shape % nx + 1)),
        )
        .reduce(|| None, better)
}

/// Position phase: the first best position of `shape`
pub fn locate_shape(integral: &IntegralImage<f64>, shape: &ShapeScore) -> Option<Scored<f64>> {
    best_position(&Scorer::new(integral), shape.height, shape.width)
}

/// Find the best scoring rectangle of the single-channel image behind
/// `integral`
///
/// Returns `None` only for an image without pixels. Of several rectangles
/// with the same score, the first in search order is returned.
pub fn shape_then_position_search(
    integral: &IntegralImage<f64>,
    chunk_size: usize,
) -> Option<Scored<f64>> {
    let shape = best_shape(integral, chunk_size)?;
    trace!(
        "best shape {}x{} score {}",
        shape.height, shape.width, shape.score
    );
    locate_shape(integral, &shape)
}
