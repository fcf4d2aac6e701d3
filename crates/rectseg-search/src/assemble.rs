//! Result assembly: region means from the winning rectangle's sums

use crate::channels::Channels;
use crate::score::Scored;
use rectseg_core::Segmentation;

/// Turn a scored rectangle into a [`Segmentation`]
///
/// Each mean is `sum / area`; a region without pixels gets a zero mean.
/// Single-channel sums are replicated into all three mean slots.
pub fn assemble<T: Channels>(scored: &Scored<T>) -> Segmentation {
    Segmentation {
        rect: scored.rect,
        outer: scored.outer.mean(T::inverse_area(scored.outer_area)),
        inner: scored.inner.mean(T::inverse_area(scored.inner_area)),
        score: scored.score.into(),
    }
}
